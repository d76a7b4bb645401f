//! Dark mode preference resolution and class synchronization.
//!
//! A tri-state [`Preference`] and the resolved dark mode flag live in two
//! cookies. [`DarkMode`] keeps every `[data-darkmode-target]` element's class
//! in line with them, and [`DarkMode::start`] follows the OS color scheme
//! while the user hasn't pinned a mode. The browser is reached only through
//! the [`CookieStore`], [`Dom`] and [`ColorSchemeSignal`] traits.

pub use config::*;
pub use dom::*;
pub use error::*;
pub use manager::*;
pub use preference::*;
pub use server::*;
pub use signal::*;
pub use store::*;
pub use sync::*;

mod config;
mod dom;
mod error;
mod manager;
mod preference;
mod server;
mod signal;
mod store;
mod sync;

#[cfg(test)]
mod testing;
