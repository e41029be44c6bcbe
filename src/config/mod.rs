//! Engine configuration.
//!
//! An `EngineConfig` controls how numbers are displayed, what the error
//! display reads, how the engine behaves while that error is shown, and
//! how many evaluations the tape keeps. Hosts can build one in code or load
//! it from JSON; every field is optional and falls back to its default.
//!
//! # Example
//!
//! ```rust
//! use keycalc::config::{EngineConfig, ErrorPolicy};
//!
//! let config = EngineConfig::from_json(r#"{ "error_policy": "reset_on_input" }"#).unwrap();
//! assert_eq!(config.error_policy, ErrorPolicy::ResetOnInput);
//! assert_eq!(config.grouping_separator, ' ');
//! assert_eq!(config.decimal_separator, ',');
//! ```

pub mod rules;
pub mod violations;

pub use rules::ConfigValidation;
pub use violations::{ConfigError, ConfigViolation};

use crate::core::DEFAULT_TAPE_CAPACITY;
use crate::format::{NumberFormat, DEFAULT_DECIMAL, DEFAULT_GROUPING, DEFAULT_SENTINEL};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// How the engine treats input while the error sentinel is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Ignore everything except Clear.
    #[default]
    RequireClear,

    /// Reset to the initial state, then apply the event.
    ResetOnInput,
}

/// Engine settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub error_sentinel: String,
    pub error_policy: ErrorPolicy,
    /// Maximum tape length; 0 disables the tape.
    pub tape_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grouping_separator: DEFAULT_GROUPING,
            decimal_separator: DEFAULT_DECIMAL,
            error_sentinel: DEFAULT_SENTINEL.to_string(),
            error_policy: ErrorPolicy::default(),
            tape_capacity: DEFAULT_TAPE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Run every rule, accumulating all violations.
    pub fn validate(&self) -> ConfigValidation {
        rules::validate(self)
    }

    /// `validate` as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Formatter matching these settings.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(
            self.grouping_separator,
            self.decimal_separator,
            self.error_sentinel.clone(),
        )
    }
}
