//! Message rendering helpers

use std::fmt;

use common::types::{Level, Value};

/// Renders a value the way it appears in log lines: strings without
/// quotes, everything else as JSON text.
#[derive(Debug, Clone, Copy)]
pub struct ValueText<'a>(pub &'a Value);

impl fmt::Display for ValueText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Concatenates values into one message.
///
/// A space separates two adjacent operands only when neither is a string.
///
/// ```
/// use logging::format::sprint;
/// use logging::kv;
///
/// assert_eq!(sprint(&kv!["took", 3, 4, "ms"]), "took3 4ms");
/// ```
pub fn sprint(parts: &[Value]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 && !part.is_string() && !parts[i - 1].is_string() {
            out.push(' ');
        }
        out.push_str(&ValueText(part).to_string());
    }
    out
}

/// Prefix written before messages of the given gate. Fatal lines carry none.
pub fn label(level: Level) -> Option<&'static str> {
    match level {
        Level::DEBUG => Some("INFO"),
        Level::WARN => Some("WARN"),
        Level::ERROR => Some("ERROR"),
        _ => None,
    }
}
