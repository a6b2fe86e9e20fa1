//! Anything that can act as a merge source.
//!
//! A source exposes its own enumerable entries. Null-like and primitive
//! sources expose none, which makes them no-ops rather than errors.

use std::sync::Arc;

use assign_types::{Container, Key, Value};

/// A merge source: exposes its own enumerable key-value entries.
pub trait AssignSource {
    /// Own enumerable entries in iteration order, undefined values included.
    fn own_entries(&self) -> Vec<(Key, Value)>;
}

impl AssignSource for Container {
    fn own_entries(&self) -> Vec<(Key, Value)> {
        self.own_enumerable()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl AssignSource for Arc<Container> {
    fn own_entries(&self) -> Vec<(Key, Value)> {
        self.as_ref().own_entries()
    }
}

/// Containers expose their properties and strings expose one entry per
/// character. Every other value, `Null` and `Undefined` included, exposes
/// nothing.
impl AssignSource for Value {
    fn own_entries(&self) -> Vec<(Key, Value)> {
        match self {
            Value::Container(c) => c.own_entries(),
            Value::String(s) => s
                .chars()
                .enumerate()
                .map(|(i, ch)| (Key::Index(i), Value::String(ch.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// `None` is a null source.
impl<S: AssignSource> AssignSource for Option<S> {
    fn own_entries(&self) -> Vec<(Key, Value)> {
        self.as_ref().map(S::own_entries).unwrap_or_default()
    }
}

impl<S: AssignSource + ?Sized> AssignSource for &S {
    fn own_entries(&self) -> Vec<(Key, Value)> {
        (**self).own_entries()
    }
}
