//! Tags and key-value pair parsing
//!
//! Arguments to [`crate::Logger::with`] are read pairwise as `(key, value)`.
//! Malformed input never fails the call: bad pairs are dropped and reported
//! as [`Diagnostic`]s, and the remaining pairs are still kept.

use std::fmt;

use thiserror::Error;

use common::types::Value;
use crate::format::ValueText;

/// A key-value annotation attached to a logger
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub key: String,
    pub value: Value,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.key, ValueText(&self.value))
    }
}

/// Problem found while pairing arguments
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Last argument of an odd-length list
    #[error("ignored key value pairs in tags: {}", ValueText(.0))]
    DanglingKey(Value),

    /// Pair whose key is not a string
    #[error("invalid key type in tags: {}", ValueText(.0))]
    InvalidKey(Value),
}

/// Result of [`parse_pairs`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pairs {
    /// Valid pairs in input order
    pub tags: Vec<Tag>,
    /// Dropped input in the order it was found
    pub diagnostics: Vec<Diagnostic>,
}

/// Scans `args` left to right as `(key, value)` pairs.
///
/// Pairs with a non-string key are dropped whole and scanning continues.
/// A trailing unpaired element is dropped and ends the scan.
pub fn parse_pairs<I>(args: I) -> Pairs
where
    I: IntoIterator<Item = Value>,
{
    let mut pairs = Pairs::default();
    let mut args = args.into_iter();

    while let Some(key) = args.next() {
        let Some(value) = args.next() else {
            pairs.diagnostics.push(Diagnostic::DanglingKey(key));
            break;
        };
        match key {
            Value::String(key) => pairs.tags.push(Tag { key, value }),
            other => pairs.diagnostics.push(Diagnostic::InvalidKey(other)),
        }
    }

    pairs
}

/// Renders tags as `[{k1 v1} {k2 v2}]`
pub fn render_tags(tags: &[Tag]) -> String {
    let body = tags
        .iter()
        .map(Tag::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", body)
}
