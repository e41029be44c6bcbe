//! Conversion between numbers and display strings.
//!
//! Displays use a space to group thousands and a comma as the decimal
//! separator, so `1234.5` is shown as `"1 234,5"`. Both separators and the
//! error sentinel are configurable through [`NumberFormat`].
//!
//! The numeric rendering before grouping is the shortest string that round
//! trips to the same `f64`, switching to exponent notation outside
//! `1e-6 <= |n| < 1e21`. No rounding is applied.
//!
//! # Example
//!
//! ```rust
//! use keycalc::format::NumberFormat;
//!
//! let fmt = NumberFormat::default();
//! assert_eq!(fmt.format(1234567.25), "1 234 567,25");
//! assert_eq!(fmt.parse("1 234 567,25"), 1234567.25);
//! assert!(fmt.parse("Error").is_nan());
//! ```

mod error;

pub use error::ParseError;

/// Default thousands separator.
pub const DEFAULT_GROUPING: char = ' ';
/// Default decimal separator.
pub const DEFAULT_DECIMAL: char = ',';
/// Default error display.
pub const DEFAULT_SENTINEL: &str = "Error";

const GROUP_WIDTH: usize = 3;

/// Bidirectional number/display converter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    grouping: char,
    decimal: char,
    sentinel: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(DEFAULT_GROUPING, DEFAULT_DECIMAL, DEFAULT_SENTINEL)
    }
}

impl NumberFormat {
    /// Create a converter. Separators are not validated here; use
    /// `EngineConfig::validate` for checked construction.
    pub fn new(grouping: char, decimal: char, sentinel: impl Into<String>) -> Self {
        Self {
            grouping,
            decimal,
            sentinel: sentinel.into(),
        }
    }

    pub fn grouping(&self) -> char {
        self.grouping
    }

    pub fn decimal(&self) -> char {
        self.decimal
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Check whether `display` is the error sentinel.
    pub fn is_sentinel(&self, display: &str) -> bool {
        display == self.sentinel
    }

    /// Render `n` for display.
    ///
    /// Integer digits are grouped in threes counting left from the decimal
    /// point; fractional and exponent digits are never grouped. `-0` renders
    /// as `"0"`.
    ///
    /// ```rust
    /// use keycalc::format::NumberFormat;
    ///
    /// let fmt = NumberFormat::default();
    /// assert_eq!(fmt.format(-9876543.0), "-9 876 543");
    /// assert_eq!(fmt.format(0.1 + 0.2), "0,30000000000000004");
    /// assert_eq!(fmt.format(2e21), "2e+21");
    /// assert_eq!(fmt.format(f64::INFINITY), "Infinity");
    /// ```
    pub fn format(&self, n: f64) -> String {
        let repr = shortest_repr(n);
        if !n.is_finite() {
            return repr;
        }

        let (sign, body) = match repr.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", repr.as_str()),
        };
        let int_end = body
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len());
        let (int_digits, tail) = body.split_at(int_end);

        let mut out = String::with_capacity(repr.len() + int_digits.len() / GROUP_WIDTH + 1);
        out.push_str(sign);
        for (i, c) in int_digits.chars().enumerate() {
            if i > 0 && (int_digits.len() - i) % GROUP_WIDTH == 0 {
                out.push(self.grouping);
            }
            out.push(c);
        }
        for c in tail.chars() {
            out.push(if c == '.' { self.decimal } else { c });
        }
        out
    }

    /// Convert a display string back to a number.
    ///
    /// Never fails: anything that is not a numeric literal, including the
    /// sentinel, yields `NaN`. Use [`NumberFormat::try_parse`] to tell the
    /// cases apart.
    pub fn parse(&self, display: &str) -> f64 {
        self.try_parse(display).unwrap_or(f64::NAN)
    }

    /// Convert a display string back to a number, reporting why it failed.
    ///
    /// Whitespace and grouping characters are dropped and the decimal
    /// separator is read as a decimal point. A literal `.` is accepted too,
    /// since that is what digit entry appends.
    ///
    /// ```rust
    /// use keycalc::format::{NumberFormat, ParseError};
    ///
    /// let fmt = NumberFormat::default();
    /// assert_eq!(fmt.try_parse("12."), Ok(12.0));
    /// assert_eq!(fmt.try_parse("-1 000,5"), Ok(-1000.5));
    /// assert_eq!(
    ///     fmt.try_parse("Error"),
    ///     Err(ParseError::Sentinel("Error".to_string()))
    /// );
    /// ```
    pub fn try_parse(&self, display: &str) -> Result<f64, ParseError> {
        if self.is_sentinel(display) {
            return Err(ParseError::Sentinel(display.to_string()));
        }

        let normalized: String = display
            .chars()
            .filter(|&c| !c.is_whitespace() && c != self.grouping)
            .map(|c| if c == self.decimal { '.' } else { c })
            .collect();

        normalized
            .parse::<f64>()
            .map_err(|_| ParseError::Malformed {
                input: display.to_string(),
            })
    }
}

/// Shortest round-trip rendering of `n`, before grouping.
///
/// Plain notation inside `1e-6 <= |n| < 1e21`, exponent notation with an
/// explicit exponent sign outside it.
fn shortest_repr(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return name.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_are_not_grouped() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(0.0), "0");
        assert_eq!(fmt.format(7.0), "7");
        assert_eq!(fmt.format(999.0), "999");
        assert_eq!(fmt.format(-999.0), "-999");
    }

    #[test]
    fn integer_part_is_grouped_in_threes() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(1000.0), "1 000");
        assert_eq!(fmt.format(1001.0), "1 001");
        assert_eq!(fmt.format(12345.0), "12 345");
        assert_eq!(fmt.format(123456.0), "123 456");
        assert_eq!(fmt.format(-1234567.0), "-1 234 567");
    }

    #[test]
    fn fraction_is_never_grouped() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(1234.5678), "1 234,5678");
        assert_eq!(fmt.format(0.123456), "0,123456");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(NumberFormat::default().format(-0.0), "0");
    }

    #[test]
    fn exponent_notation_outside_plain_range() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(1e21), "1e+21");
        assert_eq!(fmt.format(-1.5e22), "-1,5e+22");
        assert_eq!(fmt.format(1e-7), "1e-7");
        assert_eq!(fmt.format(0.000001), "0,000001");
        assert_eq!(fmt.format(1e20), "100 000 000 000 000 000 000");
    }

    #[test]
    fn non_finite_values_render_by_name() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(f64::NAN), "NaN");
        assert_eq!(fmt.format(f64::INFINITY), "Infinity");
        assert_eq!(fmt.format(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn parse_reverses_grouping_and_separator() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.parse("1 000"), 1000.0);
        assert_eq!(fmt.parse("-1 234,5"), -1234.5);
        assert_eq!(fmt.parse("0."), 0.0);
        assert_eq!(fmt.parse("3.25"), 3.25);
        assert_eq!(fmt.parse("1,5e+22"), 1.5e22);
        assert_eq!(fmt.parse("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_yields_nan_for_non_numbers() {
        let fmt = NumberFormat::default();
        assert!(fmt.parse("Error").is_nan());
        assert!(fmt.parse("").is_nan());
        assert!(fmt.parse("12abc").is_nan());
        assert!(fmt.parse(",").is_nan());
    }

    #[test]
    fn try_parse_distinguishes_sentinel_from_garbage() {
        let fmt = NumberFormat::default();
        assert_eq!(
            fmt.try_parse("Error"),
            Err(ParseError::Sentinel("Error".to_string()))
        );
        assert_eq!(
            fmt.try_parse("abc"),
            Err(ParseError::Malformed {
                input: "abc".to_string()
            })
        );
    }

    #[test]
    fn custom_separators_are_honored() {
        let fmt = NumberFormat::new('_', ',', "E");
        assert_eq!(fmt.format(1234567.5), "1_234_567,5");
        assert_eq!(fmt.parse("1_234_567,5"), 1234567.5);

        let fmt = NumberFormat::new('\'', '.', "Err");
        assert_eq!(fmt.format(-9876.25), "-9'876.25");
        assert_eq!(fmt.parse("-9'876.25"), -9876.25);
        assert!(fmt.is_sentinel("Err"));
    }

    #[test]
    fn format_of_parse_reproduces_formatted_strings() {
        let fmt = NumberFormat::default();
        for display in ["0", "1 001", "-12 345,678", "0,5", "1e+21", "-2,5e-8"] {
            assert_eq!(fmt.format(fmt.parse(display)), display);
        }
    }
}
