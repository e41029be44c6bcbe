//! Core value types of the evaluator.
//!
//! This module contains the pure data the engine works on:
//! - `EngineState`, the single record every event transforms
//! - `Digit` and `Operator`, the validated payloads of input events
//! - `Tape`, the immutable log of completed evaluations
//!
//! Nothing in here performs I/O or logging.

mod operator;
mod state;
mod tape;

pub use operator::{Digit, InvalidDigit, InvalidOperator, Operator};
pub use state::{EngineState, INITIAL_DISPLAY};
pub use tape::{CalculationRecord, Fault, Tape, DEFAULT_TAPE_CAPACITY};
