//! Property descriptors.

use crate::value::Value;

/// A value slot with its enumerability and writability flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub value: Value,
    /// Visible to own-enumerable iteration.
    pub enumerable: bool,
    /// Accepts plain assignment.
    pub writable: bool,
}

impl Property {
    /// An ordinary enumerable, writable property.
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            enumerable: true,
            writable: true,
        }
    }

    /// A writable property hidden from enumeration.
    pub fn hidden(value: impl Into<Value>) -> Self {
        Self {
            enumerable: false,
            ..Self::data(value)
        }
    }

    /// An enumerable property that rejects assignment.
    pub fn read_only(value: impl Into<Value>) -> Self {
        Self {
            writable: false,
            ..Self::data(value)
        }
    }
}
