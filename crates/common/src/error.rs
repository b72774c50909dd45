//! Error types for the common crate
//!
//! Emission never fails, so these only surface from level parsing and
//! configuration loading.

use thiserror::Error;

/// Result type for taglog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for taglog operations
#[derive(Error, Debug)]
pub enum Error {
    /// Level text that names no known severity
    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Returns true if the error is an invalid level error
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, Error::InvalidLevel(_))
    }
}
