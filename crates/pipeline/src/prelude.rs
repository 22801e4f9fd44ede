//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use parz_pipeline::prelude::*;
//!
//! let positive = validator(|n: &i32| *n > 0, |n| nonempty![format!("{n} is not positive")]);
//! let verdict = start(5).then(&positive).value();
//! assert!(is_success(&verdict));
//! ```

// ============================================================================
// CORE TYPES
// ============================================================================

pub use crate::nonempty::{EmptyError, NonEmpty};
pub use crate::outcome::{Outcome, OutcomeKind};
pub use crate::pipeline::{Pipeline, start};
pub use crate::verdict::{Verdict, is_fail, is_success};

// ============================================================================
// STEPS AND AGGREGATION
// ============================================================================

pub use crate::deflate::{Deflated, Record, combine, deflate};
pub use crate::step::{parser, validator};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{chain, nonempty};
