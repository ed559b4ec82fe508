//! User-supplied message context.
//!
//! A [`MessageContext`] is carried opaquely from the assertion entry point to
//! the failure builder. Only the builder resolves it, and only when a failure
//! is actually being built, so lazy suppliers cost nothing on success.

use std::borrow::Cow;
use std::fmt;

/// Optional label attached to an assertion.
///
/// Either a literal string, a deferred string-producing closure, or nothing.
#[derive(Default)]
pub enum MessageContext<'a> {
    /// No message was supplied.
    #[default]
    Absent,
    /// A message known up front.
    Literal(Cow<'a, str>),
    /// A message produced on demand, at most once.
    Supplier(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> MessageContext<'a> {
    /// Create a literal message context.
    pub fn literal(message: impl Into<Cow<'a, str>>) -> Self {
        MessageContext::Literal(message.into())
    }

    /// Create a lazily evaluated message context.
    pub fn supplier(supplier: impl FnOnce() -> String + 'a) -> Self {
        MessageContext::Supplier(Box::new(supplier))
    }

    /// Check if no message was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, MessageContext::Absent)
    }

    /// Consume the context and produce the message, invoking a supplier if
    /// one is held.
    pub fn resolve(self) -> Option<String> {
        match self {
            MessageContext::Absent => None,
            MessageContext::Literal(message) => Some(message.into_owned()),
            MessageContext::Supplier(supplier) => Some(supplier()),
        }
    }
}

impl<'a> From<&'a str> for MessageContext<'a> {
    fn from(message: &'a str) -> Self {
        MessageContext::literal(message)
    }
}

impl From<String> for MessageContext<'_> {
    fn from(message: String) -> Self {
        MessageContext::literal(message)
    }
}

impl<'a> From<Option<&'a str>> for MessageContext<'a> {
    fn from(message: Option<&'a str>) -> Self {
        message.map_or(MessageContext::Absent, MessageContext::literal)
    }
}

impl fmt::Debug for MessageContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageContext::Absent => write!(f, "Absent"),
            MessageContext::Literal(message) => f.debug_tuple("Literal").field(message).finish(),
            MessageContext::Supplier(_) => write!(f, "Supplier(..)"),
        }
    }
}
