//! Opaque callable values.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type CallFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared, opaque function value.
///
/// Cloning a `Callable` clones the handle, not the function: two clones
/// compare equal and [`ptr_eq`](Callable::ptr_eq) returns `true`.
#[derive(Clone)]
pub struct Callable(Arc<CallFn>);

impl Callable {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the function with the given arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Returns `true` if both handles point at the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[function {:p}]", Arc::as_ptr(&self.0).cast::<()>())
    }
}
