//! Line writers
//!
//! A [`LineWriter`] receives one fully rendered line per emitted message.
//! Writers never report failures back to the logger.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use parking_lot::Mutex;

/// Destination for rendered log lines
pub trait LineWriter: Send + Sync {
    /// Writes a single line. `line` carries no trailing newline.
    fn write_line(&self, line: &str);
}

/// Writes timestamped lines to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrWriter;

/// Prefixes `line` with a `YYYY/MM/DD HH:MM:SS` local time stamp
fn stamped(now: DateTime<Local>, line: &str) -> String {
    format!("{} {}", now.format("%Y/%m/%d %H:%M:%S"), line)
}

impl LineWriter for StderrWriter {
    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", stamped(Local::now(), line));
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryWriter {
    lines: Mutex<Vec<String>>,
}

impl MemoryWriter {
    /// Creates an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of lines written so far
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drops all captured lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Forwards lines to the active `tracing` subscriber as info events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWriter;

impl LineWriter for TracingWriter {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "taglog", "{}", line);
    }
}
