//! Build errors for the engine builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid engine configuration ({} violation(s)): {}", .0.len(), list(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

fn list(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
