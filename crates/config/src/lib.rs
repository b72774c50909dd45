//! Configuration management for taglog
//!
//! Only the logger threshold is configurable. Sources are consulted in
//! order: the `TAGLOG_LEVEL` environment variable, then TOML text or a TOML
//! file, then defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::error::{Error, Result};
use common::types::Level;

/// Environment variable holding the threshold
pub const LEVEL_ENV_VAR: &str = "TAGLOG_LEVEL";

/// Logger configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Threshold the root logger is built with
    pub level: Level,
}

impl LoggerConfig {
    /// Creates a configuration with the given threshold
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Reads the threshold from `TAGLOG_LEVEL`, falling back to defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(LEVEL_ENV_VAR) {
            Ok(raw) => {
                let level = raw.parse::<Level>()?;
                debug!(level = %level, "Loaded logger level from environment");
                Ok(Self { level })
            }
            Err(std::env::VarError::NotPresent) => {
                debug!("No {} set, using default logger level", LEVEL_ENV_VAR);
                Ok(Self::default())
            }
            Err(e) => Err(Error::Config(format!("{}: {}", LEVEL_ENV_VAR, e))),
        }
    }

    /// Parses a TOML document with an optional `level` key
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LoggerConfig = toml::from_str(content)?;
        debug!(level = %config.level, "Loaded logger level from TOML");
        Ok(config)
    }

    /// Loads a TOML file with an optional `level` key
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "Reading logger configuration");
        Self::from_toml_str(&content)
    }
}
