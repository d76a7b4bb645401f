use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DarkModeError, Result};

/// The theme mode a user asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Dark,
    Light,
    /// Follow the operating system's color scheme.
    #[default]
    System,
}

impl Preference {
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::System];

    pub const fn as_str(self) -> &'static str {
        use Preference::*;
        match self {
            Dark => "dark",
            Light => "light",
            System => "system",
        }
    }

    /// Parses a stored cookie value, anything unrecognized (or absent) is `System`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::System,
        }
    }

    pub const fn resolve(self, os_matches: bool) -> bool {
        resolve(self, os_matches)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = DarkModeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "system" => Ok(Self::System),
            other => Err(DarkModeError::UnknownPreference(other.to_string())),
        }
    }
}

/// Resolves a preference against the OS dark color scheme signal.
pub const fn resolve(preference: Preference, os_matches: bool) -> bool {
    match preference {
        Preference::Dark => true,
        Preference::Light => false,
        Preference::System => os_matches,
    }
}

/// Only the exact string `"true"` means dark mode is on.
pub fn parse_dark_mode(value: Option<&str>) -> bool {
    value == Some("true")
}

pub const fn dark_mode_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}
