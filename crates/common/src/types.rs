//! Common types for taglog
//!
//! This module defines the severity ordinal and the dynamic value type
//! carried by tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Dynamically typed tag key or value.
///
/// Only [`Value::String`] is accepted as a tag key.
pub use serde_json::Value;

/// Severity ordinal.
///
/// Lower numbers are less severe. A logger emits a message when its
/// threshold is less than or equal to the message level, so a `DEBUG`
/// threshold passes everything and a `FATAL` threshold passes only fatal
/// messages. Values outside the five defined constants are accepted and
/// compare by their raw number.
///
/// # Examples
///
/// ```
/// use common::Level;
///
/// assert!(Level::DEBUG < Level::TRACE);
/// assert!(Level::WARN <= Level::ERROR);
/// assert_eq!("info".parse::<Level>().unwrap(), Level::DEBUG);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(i32);

impl Level {
    pub const DEBUG: Level = Level(0);
    pub const TRACE: Level = Level(1);
    pub const WARN: Level = Level(2);
    pub const ERROR: Level = Level(3);
    pub const FATAL: Level = Level(4);

    /// Creates a level from a raw ordinal. No range check is performed.
    pub const fn new(ordinal: i32) -> Self {
        Level(ordinal)
    }

    /// Returns the raw ordinal
    pub const fn ordinal(self) -> i32 {
        self.0
    }

    /// Returns the lowercase name of a defined level
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("debug"),
            1 => Some("trace"),
            2 => Some("warn"),
            3 => Some("error"),
            4 => Some("fatal"),
            _ => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEBUG
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            // INFO shares the DEBUG ordinal
            "debug" | "info" => Ok(Level::DEBUG),
            "trace" => Ok(Level::TRACE),
            "warn" | "warning" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            "fatal" => Ok(Level::FATAL),
            other => other
                .parse::<i32>()
                .map(Level)
                .map_err(|_| Error::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}
