//! Adapter from the `log` crate facade
//!
//! Records logged through `log` macros are routed into a [`Logger`]. The
//! record target is attached as a `target` tag.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use common::types::Level;
use crate::logger::Logger;

/// `log::Log` implementation backed by a [`Logger`]
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Registers the bridge as the process-wide `log` logger
    pub fn install(self) -> Result<(), SetLoggerError> {
        let threshold = self.logger.threshold();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        tracing::debug!(threshold = %threshold, "Installed log bridge");
        Ok(())
    }
}

/// Gate a `log` level is written through. Info, debug and trace share
/// the lowest gate.
fn gate_for(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Level::DEBUG,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.enabled(gate_for(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let logger = self.logger.with(crate::kv!["target", record.target()]);
        match gate_for(record.level()) {
            Level::ERROR => logger.error(record.args()),
            Level::WARN => logger.warn(record.args()),
            _ => logger.info(record.args()),
        }
    }

    fn flush(&self) {}
}
