//! The outcome of a single pipeline step
//!
//! A step either re-validates its input (the value is unchanged and may be
//! flagged) or parses it into something new (which may fail outright). That
//! gives four shapes:
//!
//! | Variant | Target | Errors | Pipeline continues |
//! |---|---|---|---|
//! | [`Outcome::ParseValid`] | new value | none | yes |
//! | [`Outcome::ParseInvalid`] | none | ≥ 1 | no |
//! | [`Outcome::ValidationValid`] | input | none | yes |
//! | [`Outcome::ValidationInvalid`] | input | ≥ 1 | yes |
//!
//! `ValidationInvalid` is the only shape carrying both a target and errors,
//! which is what lets a pipeline keep going after a soft failure.

use std::fmt;

use crate::nonempty::NonEmpty;

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of applying one step to a value.
///
/// # Type Parameters
///
/// * `S` - The step's input type (the per-step original)
/// * `T` - The step's target type
/// * `E` - The caller's error payload
///
/// # Examples
///
/// ```rust,ignore
/// use parz_pipeline::{Outcome, nonempty};
///
/// let soft: Outcome<i32, i32, &str> = Outcome::validation_invalid(11, 11, nonempty!["too big"]);
/// assert!(soft.is_continuable());
/// assert_eq!(soft.target(), Some(&11));
///
/// let hard: Outcome<&str, i32, &str> = Outcome::parse_invalid(nonempty!["not a number"]);
/// assert!(!hard.is_continuable());
/// assert_eq!(hard.target(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Outcome<S, T, E> {
    /// The transform succeeded; the target may have a new type.
    ParseValid {
        /// The step's input.
        original: S,
        /// The transformed value.
        target: T,
    },

    /// The transform failed; there is no target.
    ParseInvalid {
        /// Why the transform failed.
        errors: NonEmpty<E>,
    },

    /// The predicate held; the target is the input.
    ValidationValid {
        /// The step's input.
        original: S,
        /// The input, unchanged.
        target: T,
    },

    /// The predicate failed; the target is the input, flagged with errors.
    ValidationInvalid {
        /// The step's input.
        original: S,
        /// The input, unchanged.
        target: T,
        /// Why the predicate failed.
        errors: NonEmpty<E>,
    },
}

impl<S, T, E> Outcome<S, T, E> {
    /// Creates a successful parse.
    pub fn parse_valid(original: S, target: T) -> Self {
        Self::ParseValid { original, target }
    }

    /// Creates a failed parse.
    pub fn parse_invalid(errors: NonEmpty<E>) -> Self {
        Self::ParseInvalid { errors }
    }

    /// Creates a passed validation.
    pub fn validation_valid(original: S, target: T) -> Self {
        Self::ValidationValid { original, target }
    }

    /// Creates a failed validation that still carries its target.
    pub fn validation_invalid(original: S, target: T, errors: NonEmpty<E>) -> Self {
        Self::ValidationInvalid {
            original,
            target,
            errors,
        }
    }

    /// Returns the fieldless discriminant.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::ParseValid { .. } => OutcomeKind::ParseValid,
            Self::ParseInvalid { .. } => OutcomeKind::ParseInvalid,
            Self::ValidationValid { .. } => OutcomeKind::ValidationValid,
            Self::ValidationInvalid { .. } => OutcomeKind::ValidationInvalid,
        }
    }

    /// Returns `true` unless this is a [`Outcome::ParseInvalid`].
    ///
    /// This single predicate decides whether the next step runs at all.
    pub fn is_continuable(&self) -> bool {
        !self.is_parse_invalid()
    }

    /// Returns `true` for [`Outcome::ParseValid`].
    pub fn is_parse_valid(&self) -> bool {
        matches!(self, Self::ParseValid { .. })
    }

    /// Returns `true` for [`Outcome::ParseInvalid`].
    pub fn is_parse_invalid(&self) -> bool {
        matches!(self, Self::ParseInvalid { .. })
    }

    /// Returns `true` for [`Outcome::ValidationValid`].
    pub fn is_validation_valid(&self) -> bool {
        matches!(self, Self::ValidationValid { .. })
    }

    /// Returns `true` for [`Outcome::ValidationInvalid`].
    pub fn is_validation_invalid(&self) -> bool {
        matches!(self, Self::ValidationInvalid { .. })
    }

    /// Returns the step's input, if the outcome still carries it.
    pub fn original(&self) -> Option<&S> {
        match self {
            Self::ParseValid { original, .. }
            | Self::ValidationValid { original, .. }
            | Self::ValidationInvalid { original, .. } => Some(original),
            Self::ParseInvalid { .. } => None,
        }
    }

    /// Returns the current value, or `None` after a failed parse.
    pub fn target(&self) -> Option<&T> {
        match self {
            Self::ParseValid { target, .. }
            | Self::ValidationValid { target, .. }
            | Self::ValidationInvalid { target, .. } => Some(target),
            Self::ParseInvalid { .. } => None,
        }
    }

    /// Returns the errors this outcome carries; empty for the valid shapes.
    pub fn errors(&self) -> &[E] {
        match self {
            Self::ParseInvalid { errors } | Self::ValidationInvalid { errors, .. } => {
                errors.as_slice()
            }
            Self::ParseValid { .. } | Self::ValidationValid { .. } => &[],
        }
    }
}

// ============================================================================
// OUTCOME KIND
// ============================================================================

/// Discriminant of an [`Outcome`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// See [`Outcome::ParseValid`].
    ParseValid,
    /// See [`Outcome::ParseInvalid`].
    ParseInvalid,
    /// See [`Outcome::ValidationValid`].
    ValidationValid,
    /// See [`Outcome::ValidationInvalid`].
    ValidationInvalid,
}

impl OutcomeKind {
    /// Returns the tag used in logs and wire formats.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ParseValid => "PARSE_VALID",
            Self::ParseInvalid => "PARSE_INVALID",
            Self::ValidationValid => "VALIDATION_VALID",
            Self::ValidationInvalid => "VALIDATION_INVALID",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
