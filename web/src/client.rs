use std::cell::RefCell;

use darkmode_core::{Config, DarkMode, Mounted, Preference, Result};

use crate::browser::{DocumentCookies, DocumentDom, MediaQuerySignal};

pub type BrowserDarkMode = DarkMode<DocumentCookies, DocumentDom>;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::default());
}

/// Replaces the identifiers used by every client operation from now on.
///
/// A manager that is already mounted keeps the config it was mounted with,
/// so configure before rendering [`crate::DarkModeManager`] or remount it.
pub fn set_config(config: Config) {
    CONFIG.with_borrow_mut(|current| *current = config);
}

pub fn config() -> Config {
    CONFIG.with_borrow(Clone::clone)
}

pub fn browser_dark_mode(config: Config) -> Result<BrowserDarkMode> {
    Ok(DarkMode::with_config(
        DocumentCookies::new()?,
        DocumentDom::new()?,
        config,
    ))
}

fn client(operation: &str) -> Option<BrowserDarkMode> {
    browser_dark_mode(config())
        .inspect_err(|err| {
            log::warn!("{} should only be called on the client: {}", operation, err);
        })
        .ok()
}

/// Get the client's current dark mode state.
///
/// Outside a browser this logs a warning and reports light mode.
pub fn get_client_dark_mode() -> bool {
    client("get_client_dark_mode").is_some_and(|dark_mode| dark_mode.dark_mode())
}

/// Get the client's current dark mode preference, `System` unless pinned.
pub fn get_client_preference() -> Preference {
    client("get_client_preference")
        .map(|dark_mode| dark_mode.preference())
        .unwrap_or_default()
}

/// Change the user's preference and re-apply dark mode right away.
pub fn update_client_preference(preference: Preference) {
    let Some(dark_mode) = client("update_client_preference") else {
        return;
    };
    match MediaQuerySignal::system() {
        Ok(signal) => dark_mode.update_preference(preference, &signal),
        Err(err) => {
            log::warn!("{}, assuming a light color scheme", err);
            dark_mode.update_preference(preference, &NoSignal);
        }
    }
}

/// Starts following the OS color scheme; stops when the handle is dropped.
pub fn mount(always_update: bool) -> Option<Mounted<MediaQuerySignal>> {
    let dark_mode = client("mount")?;
    let signal = MediaQuerySignal::system()
        .inspect_err(|err| log::warn!("{}", err))
        .ok()?;
    Some(dark_mode.start(signal, always_update))
}

/// Stand-in for browsers without `matchMedia`.
struct NoSignal;

impl darkmode_core::ColorSchemeSignal for NoSignal {
    type Listener = ();

    fn matches(&self) -> bool {
        false
    }

    fn subscribe(&self, _callback: Box<dyn Fn(bool)>) -> Result<()> {
        Ok(())
    }

    fn unsubscribe(&self, _listener: ()) {}
}
