//! Variadic call forms
//!
//! ```
//! use std::sync::Arc;
//! use logging::{kv, Level, Logger, MemoryWriter};
//!
//! let writer = Arc::new(MemoryWriter::new());
//! let logger = Logger::new(Level::DEBUG).with_writer(writer.clone());
//!
//! logging::info!(logger, "retry ", 2, 3);
//! logging::warnf!(logger, "{} left", 5);
//! logger.errorw("gave up", kv!["attempts", 3]);
//!
//! assert_eq!(
//!     writer.lines(),
//!     vec!["INFO: retry 2 3", "WARN: 5 left", "ERROR: gave up [{attempts 3}]"]
//! );
//! ```

/// Builds a `Vec<Value>` from heterogeneous arguments
#[macro_export]
macro_rules! kv {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),*]
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug($crate::format::sprint(&$crate::kv![$($arg),+]))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info($crate::format::sprint(&$crate::kv![$($arg),+]))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn($crate::format::sprint(&$crate::kv![$($arg),+]))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error($crate::format::sprint(&$crate::kv![$($arg),+]))
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.fatal($crate::format::sprint(&$crate::kv![$($arg),+]))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
