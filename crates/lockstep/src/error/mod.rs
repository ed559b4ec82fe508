//! Match errors.
//!
//! A failing match produces exactly one [`MatchError`]. The factory functions
//! below are the only places the reason strings are spelled out; callers that
//! parse failure messages depend on them byte for byte.

use std::fmt;

use lockstep_report::{assertion_failure, AssertionFailure, MessageContext, PreconditionViolation};
use thiserror::Error;

/// Which way the two sequences failed to match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// The expected sequence was absent, the actual one present.
    ExpectedNull,
    /// The actual sequence was absent, the expected one present.
    ActualNull,
    /// The predicate rejected the pair at `index`.
    Element { index: usize },
    /// The sequences agree pairwise but have different total lengths.
    Length { expected: usize, actual: usize },
}

/// Error returned by the matcher.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The matcher was called incorrectly. No sequence was inspected.
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),
    /// The sequences did not match.
    #[error("{failure}")]
    Assertion {
        kind: MismatchKind,
        failure: AssertionFailure,
    },
}

impl MatchError {
    pub fn is_precondition(&self) -> bool {
        matches!(self, MatchError::Precondition(_))
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, MatchError::Assertion { .. })
    }

    /// The mismatch kind, or `None` for a precondition violation.
    pub fn kind(&self) -> Option<MismatchKind> {
        match self {
            MatchError::Precondition(_) => None,
            MatchError::Assertion { kind, .. } => Some(*kind),
        }
    }

    /// The assertion failure, or `None` for a precondition violation.
    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            MatchError::Precondition(_) => None,
            MatchError::Assertion { failure, .. } => Some(failure),
        }
    }

    /// The final, fully composed message.
    pub fn message(&self) -> &str {
        match self {
            MatchError::Precondition(violation) => violation.message(),
            MatchError::Assertion { failure, .. } => failure.message(),
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::ExpectedNull => write!(f, "expected iterable was <null>"),
            MismatchKind::ActualNull => write!(f, "actual iterable was <null>"),
            MismatchKind::Element { index } => {
                write!(f, "iterable contents do not match at index {index}")
            }
            MismatchKind::Length { .. } => write!(f, "iterable lengths differ"),
        }
    }
}

// Factory functions

/// Message of the violation raised for an absent predicate.
pub(crate) const PREDICATE_MUST_NOT_BE_NULL: &str = "predicate must not be null";

/// Expected sequence absent while the actual one is present.
#[cold]
pub(crate) fn expected_iterable_null(message: MessageContext<'_>) -> MatchError {
    null_iterable(MismatchKind::ExpectedNull, message)
}

/// Actual sequence absent while the expected one is present.
#[cold]
pub(crate) fn actual_iterable_null(message: MessageContext<'_>) -> MatchError {
    null_iterable(MismatchKind::ActualNull, message)
}

fn null_iterable(kind: MismatchKind, message: MessageContext<'_>) -> MatchError {
    let failure = assertion_failure()
        .message(message)
        .reason(kind.to_string())
        .build();
    MatchError::Assertion { kind, failure }
}

/// The predicate rejected the pair at `index`.
#[cold]
pub(crate) fn contents_mismatch<E, A>(
    index: usize,
    expected: &E,
    actual: &A,
    message: MessageContext<'_>,
) -> MatchError
where
    E: fmt::Display + ?Sized,
    A: fmt::Display + ?Sized,
{
    let kind = MismatchKind::Element { index };
    let failure = assertion_failure()
        .message(message)
        .reason(kind.to_string())
        .expected(expected)
        .actual(actual)
        .build();
    MatchError::Assertion { kind, failure }
}

/// The sequences have different total lengths.
#[cold]
pub(crate) fn lengths_differ(
    expected: usize,
    actual: usize,
    message: MessageContext<'_>,
) -> MatchError {
    let kind = MismatchKind::Length { expected, actual };
    let failure = assertion_failure()
        .message(message)
        .reason(kind.to_string())
        .expected(&expected)
        .actual(&actual)
        .build();
    MatchError::Assertion { kind, failure }
}
