//! Builder API for ergonomic engine construction.
//!
//! This module provides a fluent builder for configuring an engine and
//! macros for writing event sequences with minimal boilerplate.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::EngineBuilder;
pub use error::BuildError;

use crate::engine::Engine;

/// Build an engine using `,` for decimals and a space for thousands, the
/// default display style, with the tape disabled.
///
/// # Example
///
/// ```
/// use keycalc::builder::untaped_engine;
/// use keycalc::events;
///
/// let mut engine = untaped_engine();
/// engine.handle_all(events![2 * 3 =]);
/// assert!(engine.tape().is_empty());
/// assert_eq!(engine.display(), "6");
/// ```
pub fn untaped_engine() -> Engine {
    EngineBuilder::new()
        .tape_capacity(0)
        .build()
        .expect("default configuration is always valid")
}
