//! Dynamic property values.
//!
//! [`Value::Undefined`] is the absent sentinel: a key can exist and still
//! hold `Undefined`, which is different from the key not existing at all.
//! Containers and callables are held behind `Arc` and shared by reference.

use std::sync::Arc;

use crate::callable::Callable;
use crate::container::Container;

/// A dynamically typed property value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent sentinel.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    /// Any double, including NaN and the infinities.
    Number(f64),
    String(String),
    /// Opaque function, shared by reference.
    Function(Callable),
    /// Nested object, array or date, shared by reference.
    Container(Arc<Container>),
}

impl Value {
    /// Returns `true` for the absent sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for anything but the absent sentinel.
    pub fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Container(_) => "object",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Arc<Container>> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Containers and callables are the same only if they share an
    /// allocation; primitives compare by value with NaN equal to itself.
    pub fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Container(a), Self::Container(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Container(_), _) | (_, Self::Container(_)) => false,
            _ => self == other,
        }
    }
}

/// Structural equality.
///
/// NaN equals NaN, callables compare by identity, containers compare their
/// kind, length and enumerable own properties.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Container(a), Self::Container(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Function(f)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Self::Container(Arc::new(c))
    }
}

impl From<Arc<Container>> for Value {
    fn from(c: Arc<Container>) -> Self {
        Self::Container(c)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to the absent sentinel.
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}
