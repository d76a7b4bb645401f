use std::rc::Rc;

use crate::{
    ColorSchemeSignal, Config, CookieStore, Dom, Preference, TargetElement, TargetNode,
    class_name_for, dark_mode_value, parse_dark_mode,
};

/// Client side dark mode state: the cookie jar, the document and the
/// identifiers tying them together.
///
/// Nothing here fails loudly. Anything that goes wrong is logged as a warning
/// and the operation carries on with what it can still do.
#[derive(Clone, Debug)]
pub struct DarkMode<C, D> {
    pub(crate) cookies: C,
    pub(crate) dom: D,
    pub(crate) config: Rc<Config>,
}

impl<C: CookieStore, D: Dom> DarkMode<C, D> {
    pub fn new(cookies: C, dom: D) -> Self {
        Self::with_config(cookies, dom, Config::default())
    }

    pub fn with_config(cookies: C, dom: D, config: Config) -> Self {
        Self {
            cookies,
            dom,
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dark_mode(&self) -> bool {
        parse_dark_mode(self.cookies.get(&self.config.dark_mode_cookie).as_deref())
    }

    pub fn preference(&self) -> Preference {
        Preference::parse_lenient(self.cookies.get(&self.config.preference_cookie).as_deref())
    }

    /// Stores `preference` and immediately re-applies the resolved state.
    pub fn update_preference<S>(&self, preference: Preference, signal: &S)
    where
        S: ColorSchemeSignal + ?Sized,
    {
        let config = &self.config;
        if let Err(err) =
            self.cookies
                .set(&config.preference_cookie, preference.as_str(), &config.cookie)
        {
            log::warn!("{}", err);
        }
        // read back, so a store that refused the write keeps the UI consistent with it
        let preference = self.preference();
        self.apply(preference.resolve(signal.matches()));
    }

    /// Persists `enabled` and toggles the dark class on every target element.
    pub fn apply(&self, enabled: bool) {
        let config = &self.config;
        if let Err(err) =
            self.cookies
                .set(&config.dark_mode_cookie, dark_mode_value(enabled), &config.cookie)
        {
            log::warn!("{}", err);
        }

        let targets = match self.dom.query_targets(&config.target_selector) {
            Ok(targets) => targets,
            Err(err) => {
                log::warn!("{}", err);
                return;
            }
        };

        if targets.is_empty() {
            log::warn!(
                "No target found for dark mode! Make sure you have a {} attribute on an element.",
                config.target_selector
            );
        }

        for target in targets {
            let element = match target {
                TargetNode::Element(element) => element,
                TargetNode::Other(node) => {
                    log::warn!(
                        "{} should only be applied to HTML elements, skipping {}",
                        config.target_selector,
                        node
                    );
                    continue;
                }
            };
            let class_name = class_name_for(&element, config);
            log::trace!("dark-mode: toggle {:?} to {}", class_name, enabled);
            if let Err(err) = element.toggle_class(&class_name, enabled) {
                log::warn!("{}", err);
            }
        }
    }
}
