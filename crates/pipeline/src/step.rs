//! Step constructors
//!
//! Turn a plain predicate or a plain fallible transform into a step function
//! that returns an [`Outcome`]. Neither constructor can fail; all failure is
//! expressed through the returned outcome.
//!
//! # Examples
//!
//! ```rust,ignore
//! use parz_pipeline::{nonempty, parser, start, validator};
//!
//! let length_is_5 = validator(
//!     |s: &String| s.len() == 5,
//!     |s| nonempty![format!("String is not length 5, it is actually of length {}", s.len())],
//! );
//!
//! let string_to_int = parser(
//!     |s: &String| s.parse::<i64>().ok(),
//!     |s| nonempty![format!("{s} cannot be parsed to an integer")],
//! );
//!
//! let verdict = start("12345".to_string())
//!     .then(&length_is_5)
//!     .then(&string_to_int)
//!     .value();
//! assert_eq!(verdict.target(), Some(&12345));
//! ```

use crate::nonempty::NonEmpty;
use crate::outcome::Outcome;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Builds a validation step from a predicate and an error factory.
///
/// The step keeps its input as the target. When `predicate` holds the step
/// yields [`Outcome::ValidationValid`], otherwise
/// [`Outcome::ValidationInvalid`] with the errors from `error_factory`.
/// `error_factory` only runs on the failing path.
///
/// `T: Clone` because the outcome stores the value as both original and target.
pub fn validator<T, E, P, F>(predicate: P, error_factory: F) -> impl Fn(T) -> Outcome<T, T, E>
where
    T: Clone,
    P: Fn(&T) -> bool,
    F: Fn(&T) -> NonEmpty<E>,
{
    move |value: T| {
        if predicate(&value) {
            Outcome::validation_valid(value.clone(), value)
        } else {
            let errors = error_factory(&value);
            Outcome::validation_invalid(value.clone(), value, errors)
        }
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Builds a parse step from a fallible transform and an error factory.
///
/// `Some(target)` from `transform` yields [`Outcome::ParseValid`];
/// `None` yields [`Outcome::ParseInvalid`] with the errors from
/// `error_factory`, which only runs on that path.
pub fn parser<T, U, E, P, F>(transform: P, error_factory: F) -> impl Fn(T) -> Outcome<T, U, E>
where
    P: Fn(&T) -> Option<U>,
    F: Fn(&T) -> NonEmpty<E>,
{
    move |value: T| match transform(&value) {
        Some(target) => Outcome::parse_valid(value, target),
        None => Outcome::parse_invalid(error_factory(&value)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::outcome::OutcomeKind;

    #[test]
    fn test_validator_pass_keeps_value() {
        let positive = validator(|n: &i32| *n > 0, |n| nonempty![format!("{n} <= 0")]);
        let outcome = positive(5);
        assert_eq!(outcome, Outcome::validation_valid(5, 5));
    }

    #[test]
    fn test_validator_fail_flags_value() {
        let positive = validator(|n: &i32| *n > 0, |n| nonempty![format!("{n} <= 0")]);
        let outcome = positive(-1);
        assert_eq!(outcome.kind(), OutcomeKind::ValidationInvalid);
        assert_eq!(outcome.target(), Some(&-1));
        assert_eq!(outcome.errors(), &["-1 <= 0".to_string()]);
    }

    #[test]
    fn test_validator_error_factory_is_lazy() {
        let calls = Cell::new(0);
        let even = validator(
            |n: &u32| n % 2 == 0,
            |_| {
                calls.set(calls.get() + 1);
                nonempty!["odd"]
            },
        );

        let _ = even(2);
        let _ = even(4);
        assert_eq!(calls.get(), 0);

        let _ = even(3);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_parser_success_changes_type() {
        let to_int = parser(
            |s: &String| s.parse::<i64>().ok(),
            |s| nonempty![format!("{s} cannot be parsed to an integer")],
        );
        let outcome = to_int("42".to_string());
        assert_eq!(outcome, Outcome::parse_valid("42".to_string(), 42));
    }

    #[test]
    fn test_parser_failure_has_no_target() {
        let to_int = parser(
            |s: &String| s.parse::<i64>().ok(),
            |s| nonempty![format!("{s} cannot be parsed to an integer")],
        );
        let outcome = to_int("abc".to_string());
        assert!(outcome.is_parse_invalid());
        assert_eq!(
            outcome.errors(),
            &["abc cannot be parsed to an integer".to_string()]
        );
    }

    #[test]
    fn test_parser_error_factory_is_lazy() {
        let calls = Cell::new(0);
        let halve = parser(
            |n: &u32| (n % 2 == 0).then(|| n / 2),
            |_| {
                calls.set(calls.get() + 1);
                nonempty!["odd"]
            },
        );

        assert_eq!(halve(8).target(), Some(&4));
        assert_eq!(calls.get(), 0);
        assert!(halve(7).is_parse_invalid());
        assert_eq!(calls.get(), 1);
    }
}
