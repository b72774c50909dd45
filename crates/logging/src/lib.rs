//! Leveled logging with structured tags
//!
//! A [`Logger`] filters messages by severity, carries an ordered list of
//! key-value [`Tag`]s and writes one line per passing message to a
//! [`LineWriter`]. Child loggers are derived with [`Logger::with`] and never
//! share tag storage with their parent.

pub mod bridge;
pub mod exit;
pub mod format;
pub mod logger;
pub mod macros;
pub mod sink;
pub mod tags;

// Re-export commonly used types
pub use bridge::LogBridge;
pub use common::{Level, Value};
pub use exit::{Exit, ProcessExit, RecordingExit};
pub use logger::Logger;
pub use sink::{LineWriter, MemoryWriter, StderrWriter, TracingWriter};
pub use tags::{parse_pairs, Diagnostic, Pairs, Tag};
