//! Browser side of the dark mode toggle: web-sys adapters, client operations,
//! yew components and a `wasm_bindgen` API.
//!
//! Mark elements with `data-darkmode-target` (optionally
//! `data-darkmode-class="..."`) and render [`DarkModeManager`] once.

use clap::Parser;
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod browser;
mod client;
mod components;

pub use client::*;
pub use components::*;
pub use darkmode_core::{Config, Preference};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
}

/// Sets up console logging, verbosity comes from the location hash (`#-vv`).
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).unwrap_or_else(|_| Args {
        verbose: clap_verbosity_flag::Verbosity::new(0, 0),
    });
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            log::debug!("logger already set: {}", err);
        }
    }
    log::debug!("dark mode logging at {:?}", args.verbose.log_level());
}
