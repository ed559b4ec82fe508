//! Lockstep - element-wise matching of two sequences.
//!
//! Compares an expected and an actual sequence, possibly of different
//! element types, through a caller-supplied predicate. The first pair the
//! predicate rejects is reported with its index and both values; sequences
//! that agree up to the shorter length but differ in length are reported
//! with both total lengths.
//!
//! # Entry Points
//!
//! - [`assert_iterable_matches`]: no message context
//! - [`assert_iterable_matches_with_message`]: literal message
//! - [`assert_iterable_matches_with_supplier`]: lazily built message
//! - [`assert_iterable_matches!`]: panicking form for `#[test]` functions
//!
//! All functions return `Result<(), MatchError>`. A [`MatchError`] is either
//! a precondition violation (bad usage) or an assertion failure (the
//! sequences did not match), never both.
//!
//! # Example
//!
//! ```text
//! use lockstep::{assert_iterable_matches, equals};
//!
//! assert_iterable_matches(Some(equals), Some(vec!["x"]), Some(vec!["y"]))
//!     .unwrap_err()
//!     .to_string();
//! // "iterable contents do not match at index 0, expected: <x> but was: <y>"
//! ```

mod error;
mod macros;
mod matcher;
mod tracing_setup;

pub use error::{MatchError, MismatchKind};
pub use matcher::{
    assert_iterable_matches, assert_iterable_matches_with_message,
    assert_iterable_matches_with_supplier, equals, predicate_for,
};
pub use tracing_setup::init_tracing;

pub use lockstep_report::{AssertionFailure, MessageContext, PreconditionViolation, ValueWrapper};
