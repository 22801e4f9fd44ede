//! The chain engine
//!
//! A [`Pipeline`] holds the original input, the latest [`Outcome`] and every
//! error collected so far. Chaining is a functional update: [`Pipeline::then`]
//! consumes the pipeline and returns a new one, and [`Pipeline::value`]
//! materializes it into a [`Verdict`].
//!
//! # Continuation rule
//!
//! - A soft failure ([`Outcome::ValidationInvalid`]) appends its errors and the
//!   pipeline keeps flowing with the flagged value.
//! - A hard failure ([`Outcome::ParseInvalid`]) appends its errors and halts the
//!   pipeline: every later step is skipped and never invoked.
//!
//! A pipeline succeeds only if its last outcome is valid-shaped **and** nothing
//! was collected along the way.
//!
//! # Examples
//!
//! ```rust,ignore
//! use parz_pipeline::prelude::*;
//!
//! let less_than_ten = validator(
//!     |n: &i64| *n < 10,
//!     |n| nonempty![format!("Expected a number less than 10, but was actually {n}")],
//! );
//! let string_to_int = parser(
//!     |s: &String| s.parse::<i64>().ok(),
//!     |s| nonempty![format!("{s} cannot be parsed to an integer")],
//! );
//!
//! let verdict = start("100".to_string())
//!     .then(&string_to_int)
//!     .then(&less_than_ten)
//!     .then(&less_than_ten)
//!     .value();
//!
//! assert!(verdict.is_fail());
//! assert_eq!(verdict.errors().len(), 2);
//! ```
//!
//! # Branching
//!
//! Pipelines are plain values. Clone one to continue it in two directions;
//! the branches never share state.
//!
//! ```rust,ignore
//! let parsed = start("7".to_string()).then(&string_to_int);
//! let small = parsed.clone().then(&less_than_ten).value();
//! let doubled = parsed.then(&double).value();
//! ```

use tracing::{debug, trace};

use crate::nonempty::NonEmpty;
use crate::outcome::Outcome;
use crate::verdict::Verdict;

// ============================================================================
// PIPELINE
// ============================================================================

/// A chain of validation and parse steps over one input.
///
/// # Type Parameters
///
/// * `I` - The pipeline's original input
/// * `S` - The input type of the latest step
/// * `T` - The current target type
/// * `E` - The caller's error payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline<I, S, T, E> {
    original: I,
    outcome: Outcome<S, T, E>,
    errors: Vec<E>,
    steps: usize,
}

/// Starts a pipeline over `value`.
///
/// The seed outcome is a [`Outcome::ValidationValid`] of the value with itself
/// and the error list is empty, so `start(x).value()` is a success with target `x`.
pub fn start<I, E>(value: I) -> Pipeline<I, I, I, E>
where
    I: Clone,
{
    Pipeline::start(value)
}

impl<I, E> Pipeline<I, I, I, E>
where
    I: Clone,
{
    /// Starts a pipeline over `value`. See [`start`].
    pub fn start(value: I) -> Self {
        Self {
            original: value.clone(),
            outcome: Outcome::validation_valid(value.clone(), value),
            errors: Vec::new(),
            steps: 0,
        }
    }
}

impl<I, S, T, E> Pipeline<I, S, T, E> {
    /// Chains a step onto the pipeline.
    ///
    /// On a halted pipeline `step` is not invoked: the result is halted again,
    /// carrying the same errors. Otherwise `step` receives the current target
    /// and its outcome decides the next state:
    ///
    /// - `ParseValid` / `ValidationValid`: continuable, errors unchanged
    /// - `ValidationInvalid`: continuable, its errors appended
    /// - `ParseInvalid`: halted, its errors appended
    pub fn then<U, F>(self, step: F) -> Pipeline<I, T, U, E>
    where
        F: FnOnce(T) -> Outcome<T, U, E>,
        E: Clone,
    {
        let Self {
            original,
            outcome,
            mut errors,
            steps,
        } = self;
        let position = steps + 1;

        let target = match outcome {
            Outcome::ParseValid { target, .. }
            | Outcome::ValidationValid { target, .. }
            | Outcome::ValidationInvalid { target, .. } => target,
            Outcome::ParseInvalid { errors: halted } => {
                debug!(
                    step = position,
                    errors = halted.len(),
                    "pipeline halted, skipping step"
                );
                return Pipeline {
                    original,
                    outcome: Outcome::ParseInvalid { errors: halted },
                    errors,
                    steps: position,
                };
            }
        };

        let outcome = match step(target) {
            outcome @ (Outcome::ParseValid { .. } | Outcome::ValidationValid { .. }) => {
                trace!(step = position, kind = %outcome.kind(), "step passed");
                outcome
            }
            Outcome::ValidationInvalid {
                original: input,
                target,
                errors: flagged,
            } => {
                debug!(
                    step = position,
                    errors = flagged.len(),
                    "validation failed, continuing"
                );
                errors.extend(flagged.iter().cloned());
                Outcome::ValidationInvalid {
                    original: input,
                    target,
                    errors: flagged,
                }
            }
            Outcome::ParseInvalid { errors: failed } => {
                let accumulated = failed.with_prefix(errors);
                debug!(
                    step = position,
                    errors = accumulated.len(),
                    "parse failed, halting pipeline"
                );
                errors = accumulated.to_vec();
                Outcome::ParseInvalid {
                    errors: accumulated,
                }
            }
        };

        Pipeline {
            original,
            outcome,
            errors,
            steps: position,
        }
    }

    /// Materializes the pipeline into a [`Verdict`].
    ///
    /// Success requires a `ParseValid` or `ValidationValid` last outcome and
    /// an empty error list; anything else fails with every collected error.
    pub fn value(self) -> Verdict<I, T, E> {
        let Self {
            original,
            outcome,
            errors,
            steps,
        } = self;

        let verdict = match (outcome, NonEmpty::from_vec(errors)) {
            (
                Outcome::ParseValid { target, .. } | Outcome::ValidationValid { target, .. },
                None,
            ) => Verdict::Success { original, target },
            (_, Some(errors)) => Verdict::Fail { original, errors },
            // The collected list always contains these, kept total for the type checker.
            (
                Outcome::ValidationInvalid { errors, .. } | Outcome::ParseInvalid { errors },
                None,
            ) => Verdict::Fail { original, errors },
        };

        trace!(steps, success = verdict.is_success(), "pipeline materialized");
        verdict
    }

    /// Returns the input the pipeline was started with.
    pub fn original(&self) -> &I {
        &self.original
    }

    /// Returns the latest outcome.
    pub fn outcome(&self) -> &Outcome<S, T, E> {
        &self.outcome
    }

    /// Returns every error collected so far, in the order the steps ran.
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Returns `true` once a parse step has failed.
    pub fn is_halted(&self) -> bool {
        !self.outcome.is_continuable()
    }

    /// Returns how many steps have been chained, including skipped ones.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

// ============================================================================
// TESTS
// ============================================================================
