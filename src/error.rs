//! Error types for paren_hl.
//!
//! Scanning never fails: every abnormal scan condition is reported as an
//! unset [`MatchResult`](crate::MatchResult). These errors only come from the
//! configuration surface (loading settings and interpreting their values).

use std::fmt;
use std::io;

/// Result type alias for paren_hl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for paren_hl operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a configuration file.
    Io(io::Error),
    /// Malformed configuration file.
    Config(String),
    /// A setting holds a value of the wrong shape.
    InvalidSetting { name: String, value: String },
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid value for setting '{name}': {value:?}")
            }
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
