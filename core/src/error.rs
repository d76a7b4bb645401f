use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DarkModeError {
    #[error("Failed to write cookie {name}: {reason}")]
    Cookie { name: String, reason: String },
    #[error("DOM access failed: {0}")]
    Dom(String),
    #[error("Could not register color scheme listener: {0}")]
    Listener(String),
    #[error("No browser context available")]
    NoBrowser,
    #[error("Unknown preference {0:?}, expected dark, light or system")]
    UnknownPreference(String),
}

pub type Result<T> = std::result::Result<T, DarkModeError>;
