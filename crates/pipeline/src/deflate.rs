//! Record aggregation ("deflate")
//!
//! Several independent pipelines are often validated side by side and then
//! combined: three dimensions into a volume, a form's fields into a user. The
//! aggregator collapses a keyed set of [`Verdict`]s into a single parse step:
//!
//! - every entry succeeded: the step yields a record of the unwrapped targets
//! - any entry failed: the step fails with the errors of every failing entry,
//!   concatenated in iteration order
//!
//! The collapsed record is fed back into the chain engine, so the result is an
//! ordinary [`Pipeline`] that can be chained further and materialized.
//!
//! Only ordered records are supported so error lists are deterministic:
//! [`IndexMap`], [`BTreeMap`], association lists (`Vec<(K, Verdict)>`) and
//! keyed tuples for heterogeneous target types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use parz_pipeline::prelude::*;
//!
//! let record = (
//!     ("length", start("10".to_string()).then(&string_to_int).value()),
//!     ("width", start("10".to_string()).then(&string_to_int).value()),
//!     ("height", start("10".to_string()).then(&string_to_int).value()),
//! );
//!
//! let volume = deflate(record)
//!     .map_deflated(|(l, w, h)| l * w * h)
//!     .value();
//! assert_eq!(volume.target(), Some(&1000));
//! ```

use std::collections::BTreeMap;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::nonempty::NonEmpty;
use crate::outcome::Outcome;
use crate::pipeline::{Pipeline, start};
use crate::step::parser;
use crate::verdict::Verdict;

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A keyed collection of verdicts that can be collapsed into one.
///
/// Implement it for your own structs with [`Verdict::into_result`] and
/// [`combine`]:
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct Signup {
///     name: Verdict<String, String, String>,
///     age: Verdict<String, u8, String>,
/// }
///
/// impl Record for Signup {
///     type Error = String;
///     type Targets = (String, u8);
///
///     fn collapse(self) -> Result<Self::Targets, NonEmpty<String>> {
///         combine(self.name.into_result(), self.age.into_result())
///     }
/// }
/// ```
pub trait Record {
    /// The error payload shared by every entry.
    type Error;

    /// The record of unwrapped targets.
    type Targets;

    /// Inspects every entry.
    ///
    /// Returns the unwrapped targets if all entries succeeded, otherwise the
    /// errors of every failing entry in iteration order. Successful entries
    /// contribute nothing to the error list.
    fn collapse(self) -> Result<Self::Targets, NonEmpty<Self::Error>>;
}

/// Merges two partial collapses.
///
/// Both sides are always inspected; when both failed, the left errors come first.
pub fn combine<A, B, E>(
    left: Result<A, NonEmpty<E>>,
    right: Result<B, NonEmpty<E>>,
) -> Result<(A, B), NonEmpty<E>> {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(mut errors), Err(more)) => {
            errors.extend(more);
            Err(errors)
        }
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
    }
}

fn collapse_entries<K, O, P, E, C>(
    entries: impl IntoIterator<Item = (K, Verdict<O, P, E>)>,
) -> Result<C, NonEmpty<E>>
where
    C: FromIterator<(K, P)>,
{
    let mut targets = Vec::new();
    let mut failed: Option<NonEmpty<E>> = None;

    for (key, verdict) in entries {
        match verdict.into_result() {
            Ok(target) => targets.push((key, target)),
            Err(errors) => match failed.as_mut() {
                Some(collected) => collected.extend(errors),
                None => failed = Some(errors),
            },
        }
    }

    match failed {
        Some(errors) => Err(errors),
        None => Ok(targets.into_iter().collect()),
    }
}

// ============================================================================
// RECORD IMPLEMENTATIONS
// ============================================================================

impl<K, O, P, E> Record for IndexMap<K, Verdict<O, P, E>>
where
    K: Hash + Eq,
{
    type Error = E;
    type Targets = IndexMap<K, P>;

    fn collapse(self) -> Result<Self::Targets, NonEmpty<E>> {
        collapse_entries(self)
    }
}

impl<K, O, P, E> Record for BTreeMap<K, Verdict<O, P, E>>
where
    K: Ord,
{
    type Error = E;
    type Targets = BTreeMap<K, P>;

    fn collapse(self) -> Result<Self::Targets, NonEmpty<E>> {
        collapse_entries(self)
    }
}

impl<K, O, P, E> Record for Vec<(K, Verdict<O, P, E>)> {
    type Error = E;
    type Targets = Vec<(K, P)>;

    fn collapse(self) -> Result<Self::Targets, NonEmpty<E>> {
        collapse_entries(self)
    }
}

// Right-nested `combine` calls and the matching pattern, e.g. for three entries
// `combine(a, combine(b, c))` destructured by `(a, (b, c))`.
macro_rules! nest_results {
    ($last:expr) => {
        $last
    };
    ($first:expr, $($rest:expr),+) => {
        combine($first, nest_results!($($rest),+))
    };
}

macro_rules! nest_pattern {
    ($last:ident) => {
        $last
    };
    ($first:ident, $($rest:ident),+) => {
        ($first, nest_pattern!($($rest),+))
    };
}

macro_rules! impl_record_for_tuple {
    ($(($K:ident, $O:ident, $P:ident, $value:ident, $idx:tt)),+) => {
        impl<E, $($K, $O, $P),+> Record for ($(($K, Verdict<$O, $P, E>),)+) {
            type Error = E;
            type Targets = ($($P,)+);

            fn collapse(self) -> Result<Self::Targets, NonEmpty<E>> {
                match nest_results!($((self.$idx).1.into_result()),+) {
                    Ok(nest_pattern!($($value),+)) => Ok(($($value,)+)),
                    Err(errors) => Err(errors),
                }
            }
        }
    };
}

impl_record_for_tuple!((K0, O0, P0, p0, 0));
impl_record_for_tuple!((K0, O0, P0, p0, 0), (K1, O1, P1, p1, 1));
impl_record_for_tuple!(
    (K0, O0, P0, p0, 0),
    (K1, O1, P1, p1, 1),
    (K2, O2, P2, p2, 2)
);
impl_record_for_tuple!(
    (K0, O0, P0, p0, 0),
    (K1, O1, P1, p1, 1),
    (K2, O2, P2, p2, 2),
    (K3, O3, P3, p3, 3)
);
impl_record_for_tuple!(
    (K0, O0, P0, p0, 0),
    (K1, O1, P1, p1, 1),
    (K2, O2, P2, p2, 2),
    (K3, O3, P3, p3, 3),
    (K4, O4, P4, p4, 4)
);
impl_record_for_tuple!(
    (K0, O0, P0, p0, 0),
    (K1, O1, P1, p1, 1),
    (K2, O2, P2, p2, 2),
    (K3, O3, P3, p3, 3),
    (K4, O4, P4, p4, 4),
    (K5, O5, P5, p5, 5)
);
impl_record_for_tuple!(
    (K0, O0, P0, p0, 0),
    (K1, O1, P1, p1, 1),
    (K2, O2, P2, p2, 2),
    (K3, O3, P3, p3, 3),
    (K4, O4, P4, p4, 4),
    (K5, O5, P5, p5, 5),
    (K6, O6, P6, p6, 6)
);
impl_record_for_tuple!(
    (K0, O0, P0, p0, 0),
    (K1, O1, P1, p1, 1),
    (K2, O2, P2, p2, 2),
    (K3, O3, P3, p3, 3),
    (K4, O4, P4, p4, 4),
    (K5, O5, P5, p5, 5),
    (K6, O6, P6, p6, 6),
    (K7, O7, P7, p7, 7)
);

// ============================================================================
// DEFLATED
// ============================================================================

/// A record waiting to be collapsed and mapped.
///
/// Created by [`deflate`].
#[derive(Debug, Clone)]
pub struct Deflated<R> {
    record: R,
}

/// Wraps a record of verdicts for aggregation.
pub fn deflate<R>(record: R) -> Deflated<R>
where
    R: Record,
{
    Deflated { record }
}

/// The aggregation step: a parse from the record to its unwrapped targets.
///
/// Costs one full clone of the record: `collapse` consumes its input, and the
/// record itself must stay behind as the step's original.
fn aggregate<R>(record: R) -> Outcome<R, R::Targets, R::Error>
where
    R: Record + Clone,
{
    match record.clone().collapse() {
        Ok(targets) => Outcome::parse_valid(record, targets),
        Err(errors) => {
            debug!(errors = errors.len(), "record collapsed with failing entries");
            Outcome::parse_invalid(errors)
        }
    }
}

impl<R> Deflated<R>
where
    R: Record + Clone,
    R::Error: Clone,
{
    /// Returns the wrapped record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Starts a pipeline from the record and chains the aggregation step.
    ///
    /// The target is the record of unwrapped values; the pipeline is halted if
    /// any entry failed.
    pub fn into_pipeline(self) -> Pipeline<R, R, R::Targets, R::Error> {
        start(self.record).then(aggregate)
    }

    /// Collapses the record and maps the unwrapped targets with `f`.
    ///
    /// `f` is total: it can not report an error of its own. Validate the
    /// entries before deflating, or use [`Deflated::try_map_deflated`].
    pub fn map_deflated<V, F>(self, f: F) -> Pipeline<R, R::Targets, V, R::Error>
    where
        F: FnOnce(&R::Targets) -> V,
    {
        self.into_pipeline().then(move |targets: R::Targets| {
            let mapped = f(&targets);
            Outcome::parse_valid(targets, mapped)
        })
    }

    /// Collapses the record and maps the unwrapped targets with a fallible
    /// transform, built like any other [`parser`] step.
    pub fn try_map_deflated<V, P, F>(
        self,
        transform: P,
        error_factory: F,
    ) -> Pipeline<R, R::Targets, V, R::Error>
    where
        P: Fn(&R::Targets) -> Option<V>,
        F: Fn(&R::Targets) -> NonEmpty<R::Error>,
    {
        self.into_pipeline().then(parser(transform, error_factory))
    }
}

// ============================================================================
// TESTS
// ============================================================================
