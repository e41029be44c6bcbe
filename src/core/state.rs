//! The evaluator's single mutable record.
//!
//! `EngineState` is a plain value: every transition takes one state and
//! produces the next, so the state machine can be driven and inspected
//! without any host attached.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Display shown by a fresh or cleared state.
pub const INITIAL_DISPLAY: &str = "0";

/// Arithmetic state of one calculator session.
///
/// # Invariants
///
/// - `display` holds at most one decimal mark.
/// - `previous_value` is only set while `operator` is set, except after a
///   division by zero, which leaves both in place behind the error display.
///
/// # Example
///
/// ```rust
/// use keycalc::core::EngineState;
///
/// let state = EngineState::default();
/// assert_eq!(state.display, "0");
/// assert!(state.previous_value.is_none());
/// assert!(state.operator.is_none());
/// assert!(!state.waiting_for_operand);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Text currently shown: a numeric literal or the error sentinel.
    pub display: String,
    /// Left operand of the pending operation.
    pub previous_value: Option<f64>,
    /// Pending operation.
    pub operator: Option<Operator>,
    /// The next digit starts a fresh operand instead of extending `display`.
    pub waiting_for_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operator: None,
            waiting_for_operand: false,
        }
    }
}

impl EngineState {
    /// Check whether the display currently shows `sentinel`.
    pub fn is_error(&self, sentinel: &str) -> bool {
        self.display == sentinel
    }

    /// Check whether this state equals the initial state.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    /// Number of decimal marks in the display, counting both `.` and
    /// `decimal_separator`.
    pub fn decimal_marks(&self, decimal_separator: char) -> usize {
        self.display
            .chars()
            .filter(|&c| c == '.' || c == decimal_separator)
            .count()
    }
}
