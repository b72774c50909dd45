//! Common utilities and types for taglog
//!
//! This crate provides the pieces shared across the taglog workspace:
//! the severity ordinal, the dynamic tag value and the error type.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Level, Value};
