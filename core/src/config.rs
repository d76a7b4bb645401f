use cookie::Cookie;
use cookie::time::Duration;
use serde::{Deserialize, Serialize};

pub use cookie::SameSite;

pub const PREFERENCE_COOKIE: &str = "dark-mode-preference";
pub const DARK_MODE_COOKIE: &str = "dark-mode";
pub const TARGET_SELECTOR: &str = "[data-darkmode-target]";
/// Per-element override, `dataset.darkmodeClass` from script.
pub const TARGET_CLASS_NAME_ATTRIBUTE: &str = "data-darkmode-class";
pub const DEFAULT_CLASS_NAME: &str = "dark";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieOptions {
    pub path: Option<String>,
    /// Seconds, session cookie when unset.
    pub max_age: Option<u32>,
    #[serde(with = "same_site")]
    pub same_site: Option<SameSite>,
    pub secure: bool,
}

impl CookieOptions {
    /// The cookie a write should set, attributes included.
    pub fn build<'c>(&self, name: &'c str, value: &'c str) -> Cookie<'c> {
        let mut builder = Cookie::build((name, value));
        if let Some(path) = &self.path {
            builder = builder.path(path.clone());
        }
        if let Some(max_age) = self.max_age {
            builder = builder.max_age(Duration::seconds(i64::from(max_age)));
        }
        if let Some(same_site) = self.same_site {
            builder = builder.same_site(same_site);
        }
        // browsers drop SameSite=None cookies that aren't Secure
        if self.secure || self.same_site == Some(SameSite::None) {
            builder = builder.secure(true);
        }
        builder.build()
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: Some("/".to_string()),
            max_age: None,
            same_site: Some(SameSite::Lax),
            secure: false,
        }
    }
}

/// `SameSite` as its attribute spelling, `"Strict"`, `"Lax"` or `"None"`.
mod same_site {
    use super::SameSite;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<SameSite>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(same_site) => serializer.collect_str(same_site),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SameSite>, D::Error> {
        let Some(value) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(Some(SameSite::Strict)),
            "lax" => Ok(Some(SameSite::Lax)),
            "none" => Ok(Some(SameSite::None)),
            _ => Err(D::Error::unknown_variant(&value, &["Strict", "Lax", "None"])),
        }
    }
}

/// Identifiers shared by the client and the server side.
///
/// The defaults are the public contract; hosts only override them when two
/// independent togglers must coexist on one origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preference_cookie: String,
    pub dark_mode_cookie: String,
    pub target_selector: String,
    pub class_name_attribute: String,
    pub default_class_name: String,
    pub cookie: CookieOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preference_cookie: PREFERENCE_COOKIE.to_string(),
            dark_mode_cookie: DARK_MODE_COOKIE.to_string(),
            target_selector: TARGET_SELECTOR.to_string(),
            class_name_attribute: TARGET_CLASS_NAME_ATTRIBUTE.to_string(),
            default_class_name: DEFAULT_CLASS_NAME.to_string(),
            cookie: CookieOptions::default(),
        }
    }
}
