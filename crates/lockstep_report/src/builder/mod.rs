//! Builder for [`AssertionFailure`].
//!
//! # Usage
//!
//! ```text
//! let failure = assertion_failure()
//!     .message(context)
//!     .reason("iterable lengths differ")
//!     .expected(&3)
//!     .actual(&2)
//!     .build();
//! ```

use std::fmt;

use crate::{AssertionFailure, MessageContext, ValueWrapper};

/// Separator between the caller's message and the failure reason.
const MESSAGE_SEPARATOR: &str = " ==> ";

/// Rendering of a side that was never supplied.
const NULL_VALUE: &str = "<null>";

/// Start building an assertion failure.
#[cold]
pub fn assertion_failure<'a>() -> AssertionFailureBuilder<'a> {
    AssertionFailureBuilder::new()
}

/// Collects the parts of a failure and composes its message.
#[must_use = "a failure builder does nothing until `build` is called"]
pub struct AssertionFailureBuilder<'a> {
    message: MessageContext<'a>,
    reason: Option<String>,
    expected: Option<ValueWrapper>,
    actual: Option<ValueWrapper>,
    include_values_in_message: bool,
}

impl<'a> AssertionFailureBuilder<'a> {
    /// Create an empty builder. Values are included in the message by default.
    pub fn new() -> Self {
        AssertionFailureBuilder {
            message: MessageContext::Absent,
            reason: None,
            expected: None,
            actual: None,
            include_values_in_message: true,
        }
    }

    /// Set the caller's message context.
    pub fn message(mut self, message: impl Into<MessageContext<'a>>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the reason the assertion failed.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach the expected value.
    pub fn expected<T: fmt::Display + ?Sized>(mut self, expected: &T) -> Self {
        self.expected = Some(ValueWrapper::create(expected));
        self
    }

    /// Attach the actual value.
    pub fn actual<T: fmt::Display + ?Sized>(mut self, actual: &T) -> Self {
        self.actual = Some(ValueWrapper::create(actual));
        self
    }

    /// Control whether attached values are appended to the message.
    ///
    /// The values stay available on the failure either way.
    pub fn include_values_in_message(mut self, include: bool) -> Self {
        self.include_values_in_message = include;
        self
    }

    /// Compose the message and produce the failure.
    ///
    /// A supplier message context is invoked here, exactly once.
    pub fn build(self) -> AssertionFailure {
        let mismatch = self.expected.is_some() || self.actual.is_some();

        let mut reason = self.reason;
        if mismatch && self.include_values_in_message {
            let values = format_values(self.expected.as_ref(), self.actual.as_ref());
            reason = Some(match reason {
                Some(reason) => format!("{reason}, {values}"),
                None => values,
            });
        }

        let context = self.message.resolve();
        let message = match reason {
            Some(reason) => format!("{}{reason}", build_prefix(context.as_deref())),
            None => context.unwrap_or_default(),
        };

        tracing::trace!(failure = %message, mismatch, "built assertion failure");
        AssertionFailure::new(message, self.expected, self.actual)
    }
}

impl Default for AssertionFailureBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_prefix(message: Option<&str>) -> String {
    match message {
        Some(message) if !message.trim().is_empty() => format!("{message}{MESSAGE_SEPARATOR}"),
        _ => String::new(),
    }
}

/// `expected: <e> but was: <a>`, falling back to type-qualified renderings
/// when both sides render identically.
fn format_values(expected: Option<&ValueWrapper>, actual: Option<&ValueWrapper>) -> String {
    match (expected, actual) {
        (Some(expected), Some(actual)) if expected.rendered() == actual.rendered() => format!(
            "expected: {} but was: {}",
            expected.with_type_name(),
            actual.with_type_name()
        ),
        _ => format!(
            "expected: {} but was: {}",
            render_or_null(expected),
            render_or_null(actual)
        ),
    }
}

fn render_or_null(value: Option<&ValueWrapper>) -> String {
    value.map_or_else(|| NULL_VALUE.to_string(), ToString::to_string)
}
