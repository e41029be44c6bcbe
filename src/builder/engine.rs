//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::config::{EngineConfig, ErrorPolicy};
use crate::engine::Engine;
use stillwater::validation::Validation;

/// Builder for constructing an [`Engine`] with a fluent API.
///
/// Starts from the default configuration; every setter overrides one field.
/// The whole configuration is validated once, in [`EngineBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grouping_separator(mut self, separator: char) -> Self {
        self.config.grouping_separator = separator;
        self
    }

    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    pub fn error_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.error_sentinel = sentinel.into();
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    /// Set the tape length (0 disables it).
    pub fn tape_capacity(mut self, capacity: usize) -> Self {
        self.config.tape_capacity = capacity;
        self
    }

    /// Build the engine.
    /// Returns every configuration violation if any rule fails.
    pub fn build(self) -> Result<Engine, BuildError> {
        match self.config.validate() {
            Validation::Success(_) => Ok(Engine::from_valid_config(self.config)),
            Validation::Failure(errors) => {
                Err(BuildError::InvalidConfig(errors.iter().cloned().collect()))
            }
        }
    }
}
