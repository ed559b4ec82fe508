//! Precondition checks for assertion entry points.
//!
//! A failed precondition means the caller used the API incorrectly. It is
//! reported as a [`PreconditionViolation`], never as an
//! [`AssertionFailure`](crate::AssertionFailure).

use thiserror::Error;

/// Invalid usage detected before any assertion work was done.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct PreconditionViolation {
    message: String,
}

impl PreconditionViolation {
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        PreconditionViolation {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Require that `value` is present.
///
/// Returns the unwrapped value, or a violation carrying `message`.
pub fn not_null<T>(value: Option<T>, message: &str) -> Result<T, PreconditionViolation> {
    not_null_with(value, || message.to_string())
}

/// Require that `value` is present, building the message only on failure.
pub fn not_null_with<T>(
    value: Option<T>,
    message: impl FnOnce() -> String,
) -> Result<T, PreconditionViolation> {
    match value {
        Some(value) => Ok(value),
        None => {
            let violation = PreconditionViolation::new(message());
            tracing::debug!(reason = violation.message(), "precondition violated");
            Err(violation)
        }
    }
}
