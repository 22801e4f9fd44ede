//! # parz-pipeline
//!
//! Chainable validation and parsing with error accumulation.
//!
//! A pipeline threads one input value through a sequence of steps. Each step
//! either *validates* the current value (it stays the same and may be flagged
//! with errors) or *parses* it into something new (which may fail outright):
//!
//! - a failed validation is a soft failure: errors are collected and the
//!   pipeline keeps going, so one run reports every problem at once
//! - a failed parse is a hard failure: later steps can not run on a value that
//!   does not exist, so the pipeline halts
//!
//! At the end the pipeline is materialized into a [`Verdict`]: a success with
//! the final value, or a failure with every collected error in order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parz_pipeline::prelude::*;
//!
//! let length_is_5 = validator(
//!     |s: &String| s.len() == 5,
//!     |s| nonempty![format!("String is not length 5, it is actually of length {}", s.len())],
//! );
//! let string_to_int = parser(
//!     |s: &String| s.parse::<i64>().ok(),
//!     |s| nonempty![format!("{s} cannot be parsed to an integer")],
//! );
//!
//! let ok = start("12345".to_string()).then(&length_is_5).then(&string_to_int).value();
//! assert_eq!(ok.target(), Some(&12345));
//!
//! let bad = start("1".to_string()).then(&length_is_5).then(&string_to_int).value();
//! assert_eq!(bad.errors(), ["String is not length 5, it is actually of length 1"]);
//! ```
//!
//! ## Aggregating Records
//!
//! Independent pipelines are combined with [`deflate()`]: every entry of a
//! record of verdicts is inspected and the errors of all failing entries are
//! reported together. See the [`deflate`](mod@deflate) module.
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`NonEmpty`], [`Outcome`]
//!   and [`Verdict`]

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[macro_use]
mod macros;

pub mod deflate;
pub mod nonempty;
pub mod outcome;
pub mod pipeline;
pub mod prelude;
pub mod step;
pub mod verdict;

pub use deflate::{Deflated, Record, combine, deflate};
pub use nonempty::{EmptyError, NonEmpty};
pub use outcome::{Outcome, OutcomeKind};
pub use pipeline::{Pipeline, start};
pub use step::{parser, validator};
pub use verdict::{Verdict, is_fail, is_success};
