//! Pure event transitions.
//!
//! [`transition`] maps a state and an event to the next state. It never
//! touches the clock or the log; the [`Engine`](super::Engine) shell does
//! that with the [`Step`] it gets back.

use crate::config::ErrorPolicy;
use crate::core::{CalculationRecord, Digit, EngineState, Fault, Operator, INITIAL_DISPLAY};
use crate::engine::event::Event;
use crate::format::NumberFormat;
use chrono::{DateTime, Utc};

/// An evaluation performed while handling an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub outcome: Result<f64, Fault>,
}

impl Evaluation {
    /// Stamp this evaluation for the tape.
    pub fn into_record(self, timestamp: DateTime<Utc>) -> CalculationRecord {
        CalculationRecord {
            lhs: self.lhs,
            operator: self.operator,
            rhs: self.rhs,
            outcome: self.outcome,
            timestamp,
        }
    }
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// State after the event
    pub state: EngineState,
    /// Evaluation the event triggered, if any
    pub evaluation: Option<Evaluation>,
    /// The event was dropped because the error sentinel was showing
    pub ignored: bool,
}

impl Step {
    fn ignored(state: &EngineState) -> Self {
        Self {
            state: state.clone(),
            evaluation: None,
            ignored: true,
        }
    }
}

/// Apply `event` to `state`.
///
/// While `state` shows the error sentinel, every event but Clear is either
/// dropped or applied to a fresh state, depending on `policy`.
///
/// # Example
///
/// ```rust
/// use keycalc::config::ErrorPolicy;
/// use keycalc::core::{EngineState, Operator};
/// use keycalc::engine::{transition, Event};
/// use keycalc::format::NumberFormat;
///
/// let fmt = NumberFormat::default();
/// let policy = ErrorPolicy::RequireClear;
///
/// let mut state = EngineState::default();
/// for event in Event::from_keys(["1", "2", "+", "3", "="]) {
///     state = transition(&state, event, &fmt, policy).state;
/// }
/// assert_eq!(state.display, "15");
/// assert!(state.operator.is_none());
/// ```
pub fn transition(
    state: &EngineState,
    event: Event,
    format: &NumberFormat,
    policy: ErrorPolicy,
) -> Step {
    if format.is_sentinel(&state.display) && event != Event::Clear {
        return match policy {
            ErrorPolicy::RequireClear => Step::ignored(state),
            ErrorPolicy::ResetOnInput => apply(&EngineState::default(), event, format),
        };
    }
    apply(state, event, format)
}

fn apply(state: &EngineState, event: Event, format: &NumberFormat) -> Step {
    let mut next = state.clone();
    let evaluation = match event {
        Event::Digit(digit) => {
            enter_digit(&mut next, digit, format);
            None
        }
        Event::Decimal => {
            enter_decimal(&mut next, format);
            None
        }
        Event::ToggleSign => {
            toggle_sign(&mut next, format);
            None
        }
        Event::SelectOperator(op) => select_operator(&mut next, op, format),
        Event::Evaluate => evaluate(&mut next, format),
        Event::Clear => {
            next = EngineState::default();
            None
        }
    };

    Step {
        state: next,
        evaluation,
        ignored: false,
    }
}

/// Whether typed input may extend `display` in place.
///
/// Exponent and non-finite renderings (`-1e-7`, `Infinity`) are replaced by
/// a fresh operand instead, so digit entry always yields a parseable literal.
fn accepts_entry(display: &str, format: &NumberFormat) -> bool {
    display.chars().all(|c| {
        c.is_ascii_digit()
            || c.is_whitespace()
            || matches!(c, '-' | '.')
            || c == format.decimal()
            || c == format.grouping()
    })
}

fn enter_digit(state: &mut EngineState, digit: Digit, format: &NumberFormat) {
    if state.waiting_for_operand || !accepts_entry(&state.display, format) {
        state.display = digit.to_string();
        state.waiting_for_operand = false;
    } else if state.display == INITIAL_DISPLAY {
        state.display = digit.to_string();
    } else {
        state.display.push(digit.as_char());
    }
}

fn enter_decimal(state: &mut EngineState, format: &NumberFormat) {
    if state.waiting_for_operand || !accepts_entry(&state.display, format) {
        state.display = "0.".to_string();
        state.waiting_for_operand = false;
    } else if state.decimal_marks(format.decimal()) == 0 {
        state.display.push('.');
    }
}

fn toggle_sign(state: &mut EngineState, format: &NumberFormat) {
    let value = format.parse(&state.display);
    state.display = format.format(-value);
}

fn select_operator(
    state: &mut EngineState,
    op: Operator,
    format: &NumberFormat,
) -> Option<Evaluation> {
    let input = format.parse(&state.display);
    let mut evaluation = None;

    match (state.previous_value, state.operator) {
        (None, _) => state.previous_value = Some(input),
        // No operand since the last operator: the new one replaces it.
        (Some(_), Some(_)) if state.waiting_for_operand => {}
        (Some(_), Some(_)) => {
            evaluation = evaluate(state, format);
            if matches!(evaluation, Some(Evaluation { outcome: Err(_), .. })) {
                return evaluation;
            }
            state.previous_value = Some(format.parse(&state.display));
        }
        (Some(_), None) => {}
    }

    state.waiting_for_operand = true;
    state.operator = Some(op);
    evaluation
}

fn evaluate(state: &mut EngineState, format: &NumberFormat) -> Option<Evaluation> {
    let rhs = format.parse(&state.display);
    let operator = state.operator?;
    let lhs = state.previous_value.unwrap_or(0.0);

    let Some(result) = operator.apply(lhs, rhs) else {
        // Only the display changes; the pending operation stays behind it.
        state.display = format.sentinel().to_string();
        return Some(Evaluation {
            lhs,
            operator,
            rhs,
            outcome: Err(Fault::DivisionByZero),
        });
    };

    state.display = format.format(result);
    state.previous_value = None;
    state.operator = None;
    state.waiting_for_operand = true;

    Some(Evaluation {
        lhs,
        operator,
        rhs,
        outcome: Ok(result),
    })
}
