//! Event handling for the evaluator.
//!
//! The engine follows a "pure core, imperative shell" split:
//!
//! - **Events**: the closed vocabulary a host sends, plus the key mapping
//! - **Transitions**: a pure function from state and event to the next state
//! - **Engine**: owns the state, stamps evaluations onto the tape and logs
//!
//! Operators are applied strictly left to right with one pending operation
//! at a time, so `2 + 3 * 4` evaluates to `20`.

mod event;
mod machine;
mod transition;

pub use event::Event;
pub use machine::Engine;
pub use transition::{transition, Evaluation, Step};
