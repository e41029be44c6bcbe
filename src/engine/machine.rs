//! Engine that owns the state and applies events to it.

use crate::config::{ConfigError, EngineConfig};
use crate::core::{EngineState, Tape};
use crate::engine::event::Event;
use crate::engine::transition::{transition, Step};
use crate::format::NumberFormat;
use chrono::Utc;

/// Interactive evaluator.
///
/// The engine owns one [`EngineState`] and mutates it one event at a time.
/// It performs no I/O and needs no setup or teardown; hosts forward events
/// and render [`Engine::display`].
///
/// # Example
///
/// ```rust
/// use keycalc::engine::{Engine, Event};
///
/// let mut engine = Engine::new();
/// for key in ["5", "+", "3", "*", "2"] {
///     engine.press(key);
/// }
/// assert_eq!(engine.handle(Event::Evaluate), "16");
/// assert_eq!(engine.tape().results(), vec![8.0, 16.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    state: EngineState,
    config: EngineConfig,
    format: NumberFormat,
    tape: Tape,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }

    /// Create an engine after validating `config`.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::default(),
            format: config.number_format(),
            tape: Tape::new(config.tape_capacity),
            config,
        }
    }

    /// Apply one event and return the new display.
    pub fn handle(&mut self, event: Event) -> &str {
        tracing::trace!(event = %event, display = %self.state.display, "Handling event");

        let Step {
            state,
            evaluation,
            ignored,
        } = transition(&self.state, event, &self.format, self.config.error_policy);

        if ignored {
            tracing::warn!(event = %event, "Input ignored until clear");
        }

        if let Some(evaluation) = evaluation {
            match evaluation.outcome {
                Ok(result) => tracing::debug!(
                    lhs = evaluation.lhs,
                    operator = %evaluation.operator,
                    rhs = evaluation.rhs,
                    result,
                    "Evaluated"
                ),
                Err(fault) => tracing::warn!(
                    lhs = evaluation.lhs,
                    operator = %evaluation.operator,
                    rhs = evaluation.rhs,
                    %fault,
                    "Evaluation failed"
                ),
            }
            self.tape = self.tape.record(evaluation.into_record(Utc::now()));
        }

        self.state = state;
        &self.state.display
    }

    /// Apply events in order and return the final display.
    pub fn handle_all<I>(&mut self, events: I) -> &str
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.handle(event);
        }
        &self.state.display
    }

    /// Route a host key through [`Event::from_key`].
    ///
    /// Returns `None`, leaving the state untouched, for keys with no event.
    pub fn press(&mut self, key: &str) -> Option<&str> {
        let Some(event) = Event::from_key(key) else {
            tracing::trace!(key, "Unmapped key");
            return None;
        };
        Some(self.handle(event))
    }

    /// Current display text (pure)
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Check whether the error sentinel is showing (pure)
    pub fn is_error(&self) -> bool {
        self.format.is_sentinel(&self.state.display)
    }

    /// Numeric value of the display, `None` while the sentinel is showing.
    pub fn value(&self) -> Option<f64> {
        self.format.try_parse(&self.state.display).ok()
    }

    /// Current state (pure)
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Completed evaluations (pure)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorPolicy;
    use crate::core::{Fault, Operator};

    fn press_all(engine: &mut Engine, keys: &[&str]) {
        for key in keys {
            engine.press(key);
        }
    }

    #[test]
    fn new_engine_shows_zero() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert!(!engine.is_error());
        assert_eq!(engine.value(), Some(0.0));
        assert!(engine.state().is_initial());
        assert!(engine.tape().is_empty());
    }

    #[test]
    fn handle_returns_new_display() {
        let mut engine = Engine::new();
        assert_eq!(engine.handle(Event::digit('1').unwrap()), "1");
        assert_eq!(engine.handle(Event::digit('0').unwrap()), "10");
        assert_eq!(engine.handle(Event::SelectOperator(Operator::Multiply)), "10");
        assert_eq!(engine.handle(Event::digit('0').unwrap()), "0");
        assert_eq!(engine.handle(Event::digit('5').unwrap()), "5");
        assert_eq!(engine.handle(Event::Evaluate), "50");
    }

    #[test]
    fn unmapped_key_leaves_state() {
        let mut engine = Engine::new();
        engine.press("4");
        assert_eq!(engine.press("Tab"), None);
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn division_by_zero_records_fault() {
        let mut engine = Engine::new();
        press_all(&mut engine, &["9", "/", "0", "="]);

        assert!(engine.is_error());
        assert_eq!(engine.value(), None);
        assert_eq!(engine.state().previous_value, Some(9.0));
        assert_eq!(engine.state().operator, Some(Operator::Divide));

        let last = engine.tape().last().unwrap();
        assert_eq!(last.outcome, Err(Fault::DivisionByZero));
    }

    #[test]
    fn error_requires_clear_by_default() {
        let mut engine = Engine::new();
        press_all(&mut engine, &["9", "/", "0", "=", "5", "+"]);
        assert_eq!(engine.display(), "Error");

        assert_eq!(engine.press("Escape"), Some("0"));
        assert!(!engine.is_error());
        assert_eq!(engine.press("5"), Some("5"));
    }

    #[test]
    fn error_resets_on_input_when_configured() {
        let config = EngineConfig {
            error_policy: ErrorPolicy::ResetOnInput,
            ..EngineConfig::default()
        };
        let mut engine = Engine::with_config(config).unwrap();
        press_all(&mut engine, &["9", "/", "0", "=", "5"]);
        assert_eq!(engine.display(), "5");
        assert!(engine.state().operator.is_none());
    }

    #[test]
    fn clear_keeps_tape() {
        let mut engine = Engine::new();
        press_all(&mut engine, &["2", "+", "2", "=", "Escape"]);
        assert!(engine.state().is_initial());
        assert_eq!(engine.tape().results(), vec![4.0]);
    }

    #[test]
    fn tape_capacity_comes_from_config() {
        let config = EngineConfig {
            tape_capacity: 0,
            ..EngineConfig::default()
        };
        let mut engine = Engine::with_config(config).unwrap();
        press_all(&mut engine, &["2", "+", "2", "="]);
        assert_eq!(engine.display(), "4");
        assert!(engine.tape().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            error_sentinel: "0".to_string(),
            ..EngineConfig::default()
        };
        assert!(matches!(
            Engine::with_config(config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn custom_format_is_used_for_results() {
        let config = EngineConfig {
            grouping_separator: '\'',
            decimal_separator: '·',
            error_sentinel: "E".to_string(),
            ..EngineConfig::default()
        };
        let mut engine = Engine::with_config(config).unwrap();
        let events = Event::from_keys(["1", "2", "3", "4", ".", "5", "*", "2", "="]);
        assert_eq!(engine.handle_all(events), "2'469");

        press_all(&mut engine, &["/", "0", "="]);
        assert_eq!(engine.display(), "E");
        assert!(engine.is_error());
    }
}
