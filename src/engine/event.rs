//! Input events and the host key mapping.

use crate::core::{Digit, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete input from the host.
///
/// This is the engine's whole input vocabulary; buttons, keys and scripted
/// tests all reduce to these six events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    Digit(Digit),
    Decimal,
    ToggleSign,
    SelectOperator(Operator),
    Evaluate,
    Clear,
}

impl Event {
    /// Map a host key name to an event.
    ///
    /// Digits `0`-`9`, `.`, `=`/`Enter`, `Escape` and `+ - * /` are
    /// recognized; every other key returns `None`. Sign toggling has no key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::Operator;
    /// use keycalc::engine::Event;
    ///
    /// assert_eq!(Event::from_key("Enter"), Some(Event::Evaluate));
    /// assert_eq!(Event::from_key("/"), Some(Event::SelectOperator(Operator::Divide)));
    /// assert_eq!(Event::from_key("Shift"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => return Some(Self::Decimal),
            "=" | "Enter" => return Some(Self::Evaluate),
            "Escape" => return Some(Self::Clear),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        Digit::try_from(c)
            .map(Self::Digit)
            .or_else(|_| Operator::try_from(c).map(Self::SelectOperator))
            .ok()
    }

    /// Map a sequence of key names, dropping the ones with no event.
    pub fn from_keys<I, K>(keys: I) -> Vec<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|key| Self::from_key(key.as_ref()))
            .collect()
    }

    /// Convenience for building a digit event from a character.
    pub fn digit(c: char) -> Option<Self> {
        Digit::try_from(c).ok().map(Self::Digit)
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Self::SelectOperator(op)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => write!(f, "."),
            Self::ToggleSign => write!(f, "+/-"),
            Self::SelectOperator(op) => write!(f, "{op}"),
            Self::Evaluate => write!(f, "="),
            Self::Clear => write!(f, "AC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_digit_key_maps_to_a_digit() {
        for c in '0'..='9' {
            let event = Event::from_key(&c.to_string()).unwrap();
            assert_eq!(event, Event::Digit(Digit::try_from(c).unwrap()));
        }
    }

    #[test]
    fn named_keys_map_to_control_events() {
        assert_eq!(Event::from_key("."), Some(Event::Decimal));
        assert_eq!(Event::from_key("="), Some(Event::Evaluate));
        assert_eq!(Event::from_key("Enter"), Some(Event::Evaluate));
        assert_eq!(Event::from_key("Escape"), Some(Event::Clear));
    }

    #[test]
    fn operator_keys_map_to_operators() {
        for op in Operator::ALL {
            assert_eq!(
                Event::from_key(&op.symbol().to_string()),
                Some(Event::SelectOperator(op))
            );
        }
    }

    #[test]
    fn unmapped_keys_are_rejected() {
        for key in ["", ",", "x", "12", "Backspace", "enter", "F5", "%"] {
            assert_eq!(Event::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn from_keys_skips_unknown_keys() {
        let events = Event::from_keys(["1", "Shift", "+", "2", "Enter"]);
        assert_eq!(events.len(), 4);
        assert_eq!(events[1], Event::SelectOperator(Operator::Add));
        assert_eq!(events[3], Event::Evaluate);
    }

    #[test]
    fn display_uses_key_labels() {
        assert_eq!(Event::digit('7').unwrap().to_string(), "7");
        assert_eq!(Event::ToggleSign.to_string(), "+/-");
        assert_eq!(Event::from(Operator::Multiply).to_string(), "*");
        assert_eq!(Event::Clear.to_string(), "AC");
    }
}
