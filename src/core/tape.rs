//! Calculation tape.
//!
//! The tape is an append-only log of completed evaluations, like the paper
//! roll on a desk calculator. Records are immutable values and `record`
//! returns a new tape rather than mutating the old one. Nothing is ever
//! replayed from the tape.

use super::operator::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Capacity used when none is configured.
pub const DEFAULT_TAPE_CAPACITY: usize = 64;

/// Arithmetic failures an evaluation can record.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fault {
    #[error("division by zero")]
    DivisionByZero,
}

/// Record of a single evaluation.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculationRecord, Operator};
/// use chrono::Utc;
///
/// let record = CalculationRecord {
///     lhs: 1000.0,
///     operator: Operator::Add,
///     rhs: 1.0,
///     outcome: Ok(1001.0),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.result(), Some(1001.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Left operand (the pending value, or 0 when none was pending)
    pub lhs: f64,
    pub operator: Operator,
    /// Right operand parsed from the display
    pub rhs: f64,
    pub outcome: Result<f64, Fault>,
    /// When the evaluation happened
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn result(&self) -> Option<f64> {
        self.outcome.ok()
    }

    pub fn is_fault(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Bounded, ordered log of evaluations.
///
/// When full, recording a new entry drops the oldest one. A capacity of
/// zero disables recording entirely.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculationRecord, Operator, Tape};
/// use chrono::Utc;
///
/// let tape = Tape::new(2);
/// let entry = |lhs: f64| CalculationRecord {
///     lhs,
///     operator: Operator::Multiply,
///     rhs: 2.0,
///     outcome: Ok(lhs * 2.0),
///     timestamp: Utc::now(),
/// };
///
/// let tape = tape.record(entry(1.0)).record(entry(2.0)).record(entry(3.0));
/// assert_eq!(tape.results(), vec![4.0, 6.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    capacity: usize,
    records: Vec<CalculationRecord>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_CAPACITY)
    }
}

impl Tape {
    /// Create an empty tape holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    /// Record an evaluation, returning a new tape.
    ///
    /// The receiver is left untouched.
    pub fn record(&self, record: CalculationRecord) -> Self {
        if self.capacity == 0 {
            return self.clone();
        }

        let mut records = self.records.clone();
        records.push(record);
        if records.len() > self.capacity {
            let overflow = records.len() - self.capacity;
            records.drain(..overflow);
        }

        Self {
            capacity: self.capacity,
            records,
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Successful results in order, skipping faults.
    pub fn results(&self) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.result()).collect()
    }

    /// Number of recorded faults.
    pub fn fault_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_fault()).count()
    }

    /// Time between the first and last recorded evaluation.
    ///
    /// Returns `None` when the tape is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
