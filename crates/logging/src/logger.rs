//! The leveled logger
//!
//! Every emission method funnels through one gate that compares the
//! logger's threshold with the message level and writes at most one line.

use std::fmt;
use std::sync::Arc;

use common::types::{Level, Value};
use config::LoggerConfig;
use crate::exit::{Exit, ProcessExit};
use crate::format::label;
use crate::sink::{LineWriter, StderrWriter};
use crate::tags::{parse_pairs, render_tags, Pairs, Tag};

/// Exit status used by the fatal operations
const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger carrying structured tags.
///
/// The threshold is fixed at construction. Tags are only ever added by
/// deriving a new logger with [`Logger::with`]; each derived logger owns
/// its own copy of the tag list, so siblings and parents never observe
/// each other's additions.
#[derive(Clone)]
pub struct Logger {
    /// Messages below this level are dropped
    threshold: Level,

    /// Attached tags in attachment order
    tags: Vec<Tag>,

    /// Line destination
    writer: Arc<dyn LineWriter>,

    /// Termination effect for the fatal operations
    exit: Arc<dyn Exit>,
}

impl Logger {
    /// Creates a root logger writing to standard error.
    ///
    /// Any threshold is accepted; one above [`Level::FATAL`] silences every
    /// gate and one below [`Level::DEBUG`] passes everything.
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold,
            tags: Vec::new(),
            writer: Arc::new(StderrWriter),
            exit: Arc::new(ProcessExit),
        }
    }

    /// Creates a root logger from configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.level)
    }

    /// Replaces the line destination
    pub fn with_writer(mut self, writer: Arc<dyn LineWriter>) -> Self {
        self.writer = writer;
        self
    }

    /// Replaces the termination effect used by the fatal operations
    pub fn with_exit(mut self, exit: Arc<dyn Exit>) -> Self {
        self.exit = exit;
        self
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether a message at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        self.threshold <= level
    }

    /// Returns a child logger with `kvs` appended to the tags.
    ///
    /// `kvs` is read pairwise as `(key, value)`. Pairs with a non-string key
    /// and a trailing unpaired element are dropped, each reported as a warning
    /// through this logger. `self` is left untouched.
    pub fn with<I>(&self, kvs: I) -> Logger
    where
        I: IntoIterator<Item = Value>,
    {
        let Pairs { tags, diagnostics } = parse_pairs(kvs);
        for diagnostic in &diagnostics {
            self.warn(diagnostic);
        }

        let mut child = self.clone();
        child.tags.extend(tags);
        child
    }

    fn message(&self, msg: &dyn fmt::Display, level: Level) {
        if !self.enabled(level) {
            return;
        }

        let mut line = match label(level) {
            Some(label) => format!("{}: {}", label, msg),
            None => msg.to_string(),
        };
        if !self.tags.is_empty() {
            line.push(' ');
            line.push_str(&render_tags(&self.tags));
        }
        self.writer.write_line(&line);
    }

    pub fn debug(&self, msg: impl fmt::Display) {
        self.message(&msg, Level::DEBUG);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.message(&args, Level::DEBUG);
    }

    pub fn debugw<I>(&self, msg: impl fmt::Display, kvs: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.with(kvs).debug(msg);
    }

    /// Info shares the debug gate and label.
    pub fn info(&self, msg: impl fmt::Display) {
        self.message(&msg, Level::DEBUG);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.message(&args, Level::DEBUG);
    }

    pub fn infow<I>(&self, msg: impl fmt::Display, kvs: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.with(kvs).info(msg);
    }

    pub fn warn(&self, msg: impl fmt::Display) {
        self.message(&msg, Level::WARN);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.message(&args, Level::WARN);
    }

    pub fn warnw<I>(&self, msg: impl fmt::Display, kvs: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.with(kvs).warn(msg);
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.message(&msg, Level::ERROR);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.message(&args, Level::ERROR);
    }

    pub fn errorw<I>(&self, msg: impl fmt::Display, kvs: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.with(kvs).error(msg);
    }

    /// Writes `msg` without a label, then ends the process with status 1.
    ///
    /// Termination happens even when the threshold drops the message.
    pub fn fatal(&self, msg: impl fmt::Display) {
        self.message(&msg, Level::FATAL);
        self.exit.exit(FATAL_EXIT_CODE);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(args);
    }

    pub fn fatalw<I>(&self, msg: impl fmt::Display, kvs: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.with(kvs).fatal(msg);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::exit::RecordingExit;
    use crate::kv;
    use crate::sink::MemoryWriter;

    fn capture(threshold: Level) -> (Logger, Arc<MemoryWriter>, Arc<RecordingExit>) {
        let writer = Arc::new(MemoryWriter::new());
        let exit = Arc::new(RecordingExit::new());
        let logger = Logger::new(threshold)
            .with_writer(writer.clone())
            .with_exit(exit.clone());
        (logger, writer, exit)
    }

    #[test]
    fn test_gate_matches_ordinal_comparison() {
        let defined = [Level::DEBUG, Level::TRACE, Level::WARN, Level::ERROR, Level::FATAL];
        let thresholds = [
            Level::new(-1),
            Level::DEBUG,
            Level::TRACE,
            Level::WARN,
            Level::ERROR,
            Level::FATAL,
            Level::new(5),
        ];

        for threshold in thresholds {
            let (logger, writer, _) = capture(threshold);
            for level in defined {
                writer.clear();
                logger.message(&"sample", level);
                assert_eq!(
                    writer.len(),
                    usize::from(threshold <= level),
                    "threshold {} level {}",
                    threshold,
                    level
                );
            }
        }
    }

    #[test]
    fn test_warn_threshold_end_to_end() {
        let (logger, writer, _) = capture(Level::WARN);

        logger.info("quiet");
        logger.debug("quiet");
        assert!(writer.is_empty());

        logger.error("x");
        assert_eq!(writer.lines(), vec!["ERROR: x"]);
    }

    #[test]
    fn test_labels_per_gate() {
        let (logger, writer, _) = capture(Level::DEBUG);

        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");
        logger.fatal("f");

        assert_eq!(writer.lines(), vec!["INFO: d", "INFO: i", "WARN: w", "ERROR: e", "f"]);
    }

    #[test]
    fn test_formatted_emission() {
        let (logger, writer, _) = capture(Level::DEBUG);

        logger.debugf(format_args!("value {}", "mock"));
        logger.warnf(format_args!("{} of {}", 3, 4));

        assert_eq!(writer.lines(), vec!["INFO: value mock", "WARN: 3 of 4"]);
    }

    #[test]
    fn test_with_appends_in_order() {
        let (logger, _, _) = capture(Level::DEBUG);

        let child = logger.with(kv!["a", 1, "b", 2]);
        assert_eq!(child.tags(), &[Tag::new("a", 1), Tag::new("b", 2)]);

        let grandchild = child.with(kv!["c", 3]);
        assert_eq!(
            grandchild.tags(),
            &[Tag::new("a", 1), Tag::new("b", 2), Tag::new("c", 3)]
        );
        assert_eq!(grandchild.threshold(), Level::DEBUG);
    }

    #[test]
    fn test_with_leaves_parent_untouched() {
        let (logger, _, _) = capture(Level::DEBUG);
        let parent = logger.with(kv!["process", "testing"]);
        let before = parent.tags().to_vec();

        let _child = parent.with(kv!["program", "taglog"]);

        assert_eq!(parent.tags(), before.as_slice());
        assert!(logger.tags().is_empty());
    }

    #[test]
    fn test_siblings_are_independent() {
        let (logger, _, _) = capture(Level::DEBUG);
        let parent = logger.with(kv!["shared", true]);

        let left = parent.with(kv!["side", "left"]);
        let right = parent.with(kv!["side", "right"]);

        assert_eq!(left.tags(), &[Tag::new("shared", true), Tag::new("side", "left")]);
        assert_eq!(right.tags(), &[Tag::new("shared", true), Tag::new("side", "right")]);
        assert_eq!(parent.tags(), &[Tag::new("shared", true)]);
    }

    #[test]
    fn test_concurrent_derivation() {
        let (logger, _, _) = capture(Level::DEBUG);
        let parent = logger.with(kv!["root", 0]);

        let handles: Vec<_> = (0..8i32)
            .map(|i| {
                let parent = parent.clone();
                thread::spawn(move || parent.with(kv!["worker", i]))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let child = handle.join().unwrap();
            assert_eq!(child.tags(), &[Tag::new("root", 0), Tag::new("worker", i as i32)]);
        }
        assert_eq!(parent.tags(), &[Tag::new("root", 0)]);
    }

    #[test]
    fn test_dangling_key_warns() {
        let (logger, writer, _) = capture(Level::DEBUG);

        let child = logger.with(kv!["a", 1, "b"]);

        assert_eq!(child.tags(), &[Tag::new("a", 1)]);
        assert_eq!(writer.lines(), vec!["WARN: ignored key value pairs in tags: b"]);
    }

    #[test]
    fn test_invalid_key_warns_and_drops_pair() {
        let (logger, writer, _) = capture(Level::DEBUG);

        let child = logger.with(kv![42, "x"]);

        assert!(child.tags().is_empty());
        assert_eq!(writer.lines(), vec!["WARN: invalid key type in tags: 42"]);
    }

    #[test]
    fn test_diagnostics_respect_threshold() {
        let (logger, writer, _) = capture(Level::ERROR);

        let child = logger.with(kv![42, "x", "k"]);

        assert!(child.tags().is_empty());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_tag_suffix() {
        let (logger, writer, _) = capture(Level::DEBUG);

        logger.info("bare");
        logger.with(kv!["process", "testing", "attempt", 2]).info("tagged");

        assert_eq!(
            writer.lines(),
            vec!["INFO: bare", "INFO: tagged [{process testing} {attempt 2}]"]
        );
    }

    #[test]
    fn test_keyed_emission_does_not_mutate_receiver() {
        let (logger, writer, _) = capture(Level::DEBUG);
        let child = logger.with(kv!["process", "testing", "program", "taglog"]);
        let expected = vec![Tag::new("process", "testing"), Tag::new("program", "taglog")];

        child.debugw("d", kv!["key", "value"]);
        child.infow("i", kv!["key", "value"]);
        child.warnw("w", kv!["key", "value"]);
        child.errorw("e", kv!["key", "value"]);

        assert_eq!(child.tags(), expected.as_slice());
        assert!(logger.tags().is_empty());
        assert_eq!(writer.len(), 4);
        assert_eq!(
            writer.lines()[2],
            "WARN: w [{process testing} {program taglog} {key value}]"
        );
    }

    #[test]
    fn test_fatal_writes_then_exits() {
        let (logger, writer, exit) = capture(Level::DEBUG);

        logger.fatal("boom");
        logger.fatalf(format_args!("code {}", 7));
        logger.fatalw("tagged", kv!["k", "v"]);

        assert_eq!(writer.lines(), vec!["boom", "code 7", "tagged [{k v}]"]);
        assert_eq!(exit.codes(), vec![1, 1, 1]);
    }

    #[test]
    fn test_fatal_exits_even_when_filtered() {
        let (logger, writer, exit) = capture(Level::new(5));

        logger.fatal("dropped");

        assert!(writer.is_empty());
        assert_eq!(exit.codes(), vec![1]);
    }

    #[test]
    fn test_non_fatal_never_exits() {
        let (logger, _, exit) = capture(Level::DEBUG);

        logger.debug("d");
        logger.warnw("w", kv![1, 2, "dangling"]);
        logger.error("e");

        assert!(exit.codes().is_empty());
    }

    #[test]
    fn test_from_config() {
        let logger = Logger::from_config(&LoggerConfig::new(Level::ERROR));
        assert_eq!(logger.threshold(), Level::ERROR);
        assert!(logger.tags().is_empty());
        assert!(!logger.enabled(Level::WARN));
    }
}
