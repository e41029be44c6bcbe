//! Configuration violations and loading errors.

use thiserror::Error;

/// A single rule broken by an `EngineConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Grouping and decimal separators must differ (both are '{separator}')")]
    SameSeparators { separator: char },

    #[error("'{separator}' cannot be used as the {role} separator")]
    ReservedSeparator { role: &'static str, separator: char },

    #[error("Error sentinel must not be empty")]
    EmptySentinel,

    #[error("Error sentinel '{sentinel}' could be mistaken for a number")]
    NumericSentinel { sentinel: String },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config validation failed: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_lists_every_violation() {
        let err = ConfigError::Invalid(vec![
            ConfigViolation::EmptySentinel,
            ConfigViolation::SameSeparators { separator: ',' },
        ]);
        assert_eq!(
            err.to_string(),
            "Config validation failed: Error sentinel must not be empty; \
             Grouping and decimal separators must differ (both are ',')"
        );
    }
}
