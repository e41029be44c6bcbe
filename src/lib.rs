//! Keycalc: an event-driven arithmetic evaluator
//!
//! Keycalc turns discrete calculator inputs (digits, decimal point,
//! operators, sign toggle, equals, clear) into a running result and a
//! display string such as `"1 234,5"`. It is built as a "pure core,
//! imperative shell": state transitions are pure functions over a plain
//! state record, and a thin engine owns that record for the host.
//!
//! # Core Concepts
//!
//! - **State**: one explicit `EngineState` record per session
//! - **Events**: a closed set of six inputs routed through `Engine::handle`
//! - **Formatting**: `NumberFormat` converts between `f64` and display text
//! - **Tape**: immutable log of completed evaluations
//!
//! Presentation (rendering, buttons, theming, listening for keys) belongs
//! to the host.
//!
//! # Example
//!
//! ```rust
//! use keycalc::engine::{Engine, Event};
//! use keycalc::core::Operator;
//!
//! let mut engine = Engine::new();
//! engine.press("1");
//! engine.press("0");
//! engine.press("0");
//! engine.press("0");
//! engine.handle(Event::SelectOperator(Operator::Add));
//! engine.press("1");
//!
//! assert_eq!(engine.handle(Event::Evaluate), "1 001");
//! assert!(!engine.is_error());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod format;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use config::{EngineConfig, ErrorPolicy};
pub use crate::core::{Digit, EngineState, Operator};
pub use engine::{Engine, Event};
pub use format::NumberFormat;
