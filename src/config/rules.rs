//! Validation rules for `EngineConfig`.
//!
//! Every rule runs on every call and all failures are reported together,
//! so a host fixing a bad config sees the complete list at once.

use crate::config::violations::ConfigViolation;
use crate::config::EngineConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a configuration.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Characters that already mean something inside a numeric literal,
/// including the letters of the `NaN` and `Infinity` renderings.
fn is_reserved(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, '.' | '+' | '-')
        || matches!(c.to_ascii_lowercase(), 'e' | 'a' | 'f' | 'i' | 'n' | 't' | 'y')
}

fn check_separator(role: &'static str, separator: char, allow_whitespace: bool) -> ConfigValidation {
    if is_reserved(separator) || (!allow_whitespace && separator.is_whitespace()) {
        Validation::fail(ConfigViolation::ReservedSeparator { role, separator })
    } else {
        Validation::success(())
    }
}

fn check_distinct(config: &EngineConfig) -> ConfigValidation {
    if config.grouping_separator == config.decimal_separator {
        Validation::fail(ConfigViolation::SameSeparators {
            separator: config.grouping_separator,
        })
    } else {
        Validation::success(())
    }
}

fn check_sentinel(sentinel: &str) -> ConfigValidation {
    if sentinel.is_empty() {
        return Validation::fail(ConfigViolation::EmptySentinel);
    }

    let numeric =
        sentinel.chars().any(|c| c.is_ascii_digit()) || sentinel.trim().parse::<f64>().is_ok();
    if numeric {
        Validation::fail(ConfigViolation::NumericSentinel {
            sentinel: sentinel.to_string(),
        })
    } else {
        Validation::success(())
    }
}

/// Run all rules against `config`, accumulating every violation.
pub fn validate(config: &EngineConfig) -> ConfigValidation {
    let checks = vec![
        check_distinct(config),
        check_separator("grouping", config.grouping_separator, true),
        // Parsing strips whitespace before reading the decimal separator.
        check_separator("decimal", config.decimal_separator, false),
        check_sentinel(&config.error_sentinel),
    ];

    Validation::all_vec(checks).map(|_| ())
}
