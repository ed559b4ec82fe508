//! The assertion failure produced by [`AssertionFailureBuilder`].
//!
//! [`AssertionFailureBuilder`]: crate::AssertionFailureBuilder

use thiserror::Error;

use crate::ValueWrapper;

/// A failed assertion.
///
/// `Display` yields the fully composed message, including the caller's
/// message prefix and the formatted expected/actual values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
    expected: Option<ValueWrapper>,
    actual: Option<ValueWrapper>,
}

impl AssertionFailure {
    pub(crate) fn new(
        message: String,
        expected: Option<ValueWrapper>,
        actual: Option<ValueWrapper>,
    ) -> Self {
        AssertionFailure {
            message,
            expected,
            actual,
        }
    }

    /// The composed failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The expected value, if the failure carries one.
    pub fn expected(&self) -> Option<&ValueWrapper> {
        self.expected.as_ref()
    }

    /// The actual value, if the failure carries one.
    pub fn actual(&self) -> Option<&ValueWrapper> {
        self.actual.as_ref()
    }

    pub fn is_expected_defined(&self) -> bool {
        self.expected.is_some()
    }

    pub fn is_actual_defined(&self) -> bool {
        self.actual.is_some()
    }
}
