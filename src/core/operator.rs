//! Operand and operator value types.
//!
//! These are the atoms an input event carries. Both are validated at
//! construction so the engine never has to reject a malformed digit or
//! operator once an event exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A character that is not one of `0`..=`9`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("'{0}' is not a decimal digit")]
pub struct InvalidDigit(pub char);

/// A character or string that does not name one of the four operators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not an operator (expected one of + - * /)")]
pub struct InvalidOperator(pub String);

/// A single decimal digit entered by the host.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value, `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InvalidDigit(c))
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigit(char::from(value)))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the four pending binary operations.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Operator;
///
/// let op: Operator = "*".parse().unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.apply(6.0, 7.0), Some(42.0));
/// assert_eq!(Operator::Divide.apply(1.0, 0.0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The ASCII symbol a host key sends for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with IEEE double semantics.
    ///
    /// Returns `None` only for division by zero (`0.0` or `-0.0`).
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = InvalidOperator;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == c)
            .ok_or_else(|| InvalidOperator(c.to_string()))
    }
}

impl FromStr for Operator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
