//! Tri-state outcome type for service-layer calls.
//!
//! An [`Outcome`] is exactly one of `Success(value)`, `Error(failure)` or
//! `Loading`. Expected failures travel as data instead of being raised, and
//! the combinators ([`Outcome::map`], [`Outcome::and_then`], …) short-circuit
//! on the first non-success value without invoking the supplied closure.
//!
//! ```
//! use outcome::{Outcome, OutcomeSeqExt};
//!
//! let doubled = Outcome::success(vec![1, 2, 3]).map_each(|n| n * 2);
//! assert_eq!(doubled, Outcome::success(vec![2, 4, 6]));
//!
//! let failed: Outcome<i32> = Outcome::error("lookup failed");
//! assert_eq!(failed.map_or(0, |n| n * 2), 0);
//! ```
//!
//! [`Outcome::unwrap`] is the only operation that panics, and only when the
//! value is not a success.

mod collections;
mod error;
mod outcome;
mod result_ext;

pub use collections::{OutcomeMapExt, OutcomeSeqExt};
pub use error::OutcomeError;
pub use crate::outcome::{Failure, Outcome, State};
pub use result_ext::{IntoOutcome, OptionOutcomeExt};

/// Convenience alias for the error cause carried by a [`Failure`].
pub type Cause = dyn std::error::Error + Send + Sync + 'static;
