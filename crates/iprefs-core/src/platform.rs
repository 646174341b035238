//! Platform flavour used for label casing
//!
//! macOS builds title-case their labels ("External Editor"), everything else
//! uses sentence case ("External editor"). The value is injected at startup
//! from settings or the command line and only falls back to detection when
//! neither provides one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Other,
}

impl Platform {
    /// Platform of the running host
    pub fn detect() -> Self {
        if std::env::consts::OS == "macos" {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    /// Pick the label variant for this platform
    pub fn label(self, mac: &'static str, other: &'static str) -> &'static str {
        match self {
            Platform::Mac => mac,
            Platform::Other => other,
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mac" | "macos" | "darwin" => Ok(Platform::Mac),
            "other" => Ok(Platform::Other),
            _ => Err(Error::unknown_platform(s)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Mac => f.write_str("mac"),
            Platform::Other => f.write_str("other"),
        }
    }
}
