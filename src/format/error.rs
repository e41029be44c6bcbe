//! Display parsing errors.

use thiserror::Error;

/// Reasons a display string does not convert back to a number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The string is the error sentinel
    #[error("'{0}' is the error sentinel, not a number")]
    Sentinel(String),

    /// The string is not a numeric literal once separators are normalized
    #[error("'{input}' is not a numeric literal")]
    Malformed { input: String },
}
