//! Rendered snapshots of expected and actual values.

use std::fmt;

/// A value captured for a failure report.
///
/// Holds the `Display` rendering of the value together with its type name.
/// The type name is only shown when the renderings of both sides coincide,
/// so that `1_i32` and `1_i64` are still told apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueWrapper {
    rendered: String,
    type_name: &'static str,
}

impl ValueWrapper {
    /// Capture a value.
    pub fn create<T: fmt::Display + ?Sized>(value: &T) -> Self {
        ValueWrapper {
            rendered: value.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The `Display` rendering of the value.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// The fully qualified type name of the value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Render as `TypeName<value>`.
    pub fn with_type_name(&self) -> String {
        format!("{}<{}>", self.type_name, self.rendered)
    }
}

/// Renders as `<value>`.
impl fmt::Display for ValueWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.rendered)
    }
}
