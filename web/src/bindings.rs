//! JavaScript facing API, for pages that don't render with yew.

use darkmode_core::{Config, Mounted, Preference};
use wasm_bindgen::prelude::*;

use crate::browser::MediaQuerySignal;
use crate::client;

#[wasm_bindgen(js_name = getClientDarkMode)]
pub fn get_client_dark_mode() -> bool {
    client::get_client_dark_mode()
}

#[wasm_bindgen(js_name = getClientPreference)]
pub fn get_client_preference() -> String {
    client::get_client_preference().to_string()
}

/// Accepts `"dark"`, `"light"` or `"system"`, anything else is ignored.
#[wasm_bindgen(js_name = updateClientPreference)]
pub fn update_client_preference(preference: &str) {
    match preference.parse::<Preference>() {
        Ok(preference) => client::update_client_preference(preference),
        Err(err) => log::warn!("{}", err),
    }
}

/// Overrides cookie names, selector or classes from a JSON object.
/// Missing fields keep their defaults. Call before `mountDarkModeManager`,
/// running managers keep the config they were mounted with.
#[wasm_bindgen(js_name = configureDarkMode)]
pub fn configure(json: &str) {
    match serde_json::from_str::<Config>(json) {
        Ok(config) => client::set_config(config),
        Err(err) => log::warn!("invalid dark mode config, keeping the current one: {}", err),
    }
}

#[wasm_bindgen]
pub struct DarkModeHandle {
    mounted: Option<Mounted<MediaQuerySignal>>,
}

#[wasm_bindgen]
impl DarkModeHandle {
    #[wasm_bindgen(getter, js_name = isListening)]
    pub fn is_listening(&self) -> bool {
        self.mounted.as_ref().is_some_and(Mounted::is_listening)
    }

    pub fn stop(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.stop();
        }
    }
}

#[wasm_bindgen(js_name = mountDarkModeManager)]
pub fn mount_dark_mode_manager(always_update: Option<bool>) -> DarkModeHandle {
    DarkModeHandle {
        mounted: client::mount(always_update.unwrap_or_default()),
    }
}
