//! The materialized result of a pipeline
//!
//! A [`Verdict`] is produced once, by [`Pipeline::value`](crate::Pipeline::value),
//! and is binary: either every step passed and the final target is available,
//! or the pipeline failed and every collected error is returned in the order
//! the steps ran. There is no partial success.

use crate::nonempty::NonEmpty;

// ============================================================================
// VERDICT
// ============================================================================

/// Terminal result of a pipeline.
///
/// # Type Parameters
///
/// * `O` - The pipeline's original input
/// * `P` - The final target type
/// * `E` - The caller's error payload
///
/// # Examples
///
/// ```rust,ignore
/// use parz_pipeline::prelude::*;
///
/// let verdict = start("1".to_string()).then(&length_is_5).value();
/// match verdict {
///     Verdict::Success { target, .. } => println!("ok: {target}"),
///     Verdict::Fail { errors, .. } => println!("{} error(s)", errors.len()),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Verdict<O, P, E> {
    /// Every step passed.
    Success {
        /// The input the pipeline was started with.
        original: O,
        /// The final target.
        target: P,
    },

    /// At least one step failed.
    Fail {
        /// The input the pipeline was started with.
        original: O,
        /// Every collected error, in the order the steps ran.
        errors: NonEmpty<E>,
    },
}

impl<O, P, E> Verdict<O, P, E> {
    /// Returns `true` for [`Verdict::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for [`Verdict::Fail`].
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    /// Returns the input the pipeline was started with.
    pub fn original(&self) -> &O {
        match self {
            Self::Success { original, .. } | Self::Fail { original, .. } => original,
        }
    }

    /// Returns the final target on success.
    pub fn target(&self) -> Option<&P> {
        match self {
            Self::Success { target, .. } => Some(target),
            Self::Fail { .. } => None,
        }
    }

    /// Returns the collected errors; empty on success.
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Success { .. } => &[],
            Self::Fail { errors, .. } => errors.as_slice(),
        }
    }

    /// Consumes the verdict and returns the final target on success.
    pub fn into_target(self) -> Option<P> {
        match self {
            Self::Success { target, .. } => Some(target),
            Self::Fail { .. } => None,
        }
    }

    /// Converts into a standard `Result`, dropping the original input.
    pub fn into_result(self) -> Result<P, NonEmpty<E>> {
        match self {
            Self::Success { target, .. } => Ok(target),
            Self::Fail { errors, .. } => Err(errors),
        }
    }

    /// Maps the target of a successful verdict.
    pub fn map_target<Q, F>(self, f: F) -> Verdict<O, Q, E>
    where
        F: FnOnce(P) -> Q,
    {
        match self {
            Self::Success { original, target } => Verdict::Success {
                original,
                target: f(target),
            },
            Self::Fail { original, errors } => Verdict::Fail { original, errors },
        }
    }
}

impl<O, P, E> From<Verdict<O, P, E>> for Result<P, NonEmpty<E>> {
    fn from(verdict: Verdict<O, P, E>) -> Self {
        verdict.into_result()
    }
}

/// Returns `true` when `verdict` is a [`Verdict::Success`].
pub fn is_success<O, P, E>(verdict: &Verdict<O, P, E>) -> bool {
    verdict.is_success()
}

/// Returns `true` when `verdict` is a [`Verdict::Fail`].
pub fn is_fail<O, P, E>(verdict: &Verdict<O, P, E>) -> bool {
    verdict.is_fail()
}

// ============================================================================
// TESTS
// ============================================================================
