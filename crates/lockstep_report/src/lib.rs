//! Failure reporting for lockstep assertions.
//!
//! This crate provides the two collaborators an assertion routine needs to
//! signal a problem to its caller:
//!
//! - **Failure Reporter**: [`AssertionFailureBuilder`] turns an optional
//!   [`MessageContext`], a reason and an optional expected/actual pair into
//!   an [`AssertionFailure`] with a deterministic message.
//! - **Precondition Checker**: [`preconditions`] rejects invalid usage with a
//!   [`PreconditionViolation`], a distinct error type, so callers can tell
//!   "bad usage" apart from "assertion failed".
//!
//! # Message Format
//!
//! ```text
//! <message> ==> <reason>, expected: <e> but was: <a>
//! ```
//!
//! The `<message> ==> ` prefix only appears when a non-blank message was
//! supplied. The values suffix only appears when a payload was attached.

mod builder;
mod failure;
mod message;
pub mod preconditions;
mod value;

pub use builder::{assertion_failure, AssertionFailureBuilder};
pub use failure::AssertionFailure;
pub use message::MessageContext;
pub use preconditions::PreconditionViolation;
pub use value::ValueWrapper;
