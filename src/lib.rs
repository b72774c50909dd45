//! Main integration module for taglog
//!
//! Re-exports the logger, its configuration and the shared types so that
//! callers depend on a single crate.

pub use common::{Error, Level, Result, Value};
pub use config::LoggerConfig;
pub use logging::{
    debug, debugf, error, errorf, fatal, fatalf, info, infof, kv, warn, warnf,
};
pub use logging::{
    parse_pairs, Diagnostic, Exit, LineWriter, LogBridge, Logger, MemoryWriter, Pairs,
    ProcessExit, RecordingExit, StderrWriter, Tag, TracingWriter,
};

/// Builds the root logger from `TAGLOG_LEVEL`
pub fn from_env() -> Result<Logger> {
    let config = LoggerConfig::from_env()?;
    Ok(Logger::from_config(&config))
}
