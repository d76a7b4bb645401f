use crate::{Config, CookieSource, parse_dark_mode};

/// Reports the dark mode flag the client last persisted.
///
/// There is no OS signal on the server, so nothing is resolved here: a client
/// that never ran the synchronizer reads as light.
pub fn read_server_dark_mode<S: CookieSource + ?Sized>(cookies: &S, config: &Config) -> bool {
    parse_dark_mode(cookies.get(&config.dark_mode_cookie).as_deref())
}

pub fn get_server_dark_mode<S: CookieSource + ?Sized>(cookies: &S) -> bool {
    read_server_dark_mode(cookies, &Config::default())
}

/// Class to pre-render on target elements so markup matches before hydration.
pub fn dark_class_attribute(dark: bool, config: &Config) -> Option<&str> {
    dark.then_some(config.default_class_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CookieHeader;

    #[test]
    fn server_reads_resolved_cookie_only() {
        let header = CookieHeader::new("dark-mode-preference=dark; dark-mode=true");
        assert!(get_server_dark_mode(&header));

        // preference alone is never resolved on the server
        let header = CookieHeader::new("dark-mode-preference=dark");
        assert!(!get_server_dark_mode(&header));
    }

    #[test]
    fn server_treats_garbage_as_light() {
        assert!(!get_server_dark_mode(&CookieHeader::new("dark-mode=yes")));
        assert!(!get_server_dark_mode(&CookieHeader::new("")));
    }

    #[test]
    fn server_honors_configured_cookie_name() {
        let config = Config {
            dark_mode_cookie: "night".into(),
            ..Config::default()
        };
        let header = CookieHeader::new("night=true");
        assert!(read_server_dark_mode(&header, &config));
        assert!(!get_server_dark_mode(&header));
    }

    #[test]
    fn class_attribute_only_when_dark() {
        let config = Config::default();
        assert_eq!(dark_class_attribute(true, &config), Some("dark"));
        assert_eq!(dark_class_attribute(false, &config), None);
    }
}
