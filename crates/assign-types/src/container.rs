//! Key-value containers: plain objects, arrays and dates.
//!
//! A [`Container`] owns its [`Property`] slots plus an optional shared
//! prototype. Only own properties are ever enumerated; the prototype is
//! consulted by [`Container::get`] and by assignment checks, nothing else.
//!
//! # Invariants
//!
//! - Own index keys never exceed [`MAX_INDEX`](crate::key::MAX_INDEX).
//! - For arrays, `length` is greater than every own index key.
//! - A frozen container rejects every assignment and definition.
//! - Own-enumerable iteration yields indices ascending, then names in
//!   insertion order.

use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{TypeError, TypeResult};
use crate::key::Key;
use crate::property::Property;
use crate::value::Value;

/// Name of the array length pseudo-property.
const LENGTH: &str = "length";

/// What kind of container this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    /// Index-keyed sequence with a tracked length.
    Array,
    /// Date with its time value in epoch milliseconds. The time value is
    /// internal state, not a property.
    Date(i64),
}

/// A mutable key-value container.
#[derive(Clone, Debug)]
pub struct Container {
    kind: ContainerKind,
    /// `Key::Index` slots, ascending.
    indices: BTreeMap<Key, Property>,
    /// `Key::Name` slots, in insertion order.
    names: IndexMap<Key, Property>,
    prototype: Option<Arc<Container>>,
    length: usize,
    frozen: bool,
}

impl Container {
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            indices: BTreeMap::new(),
            names: IndexMap::new(),
            prototype: None,
            length: 0,
            frozen: false,
        }
    }

    /// An empty plain object.
    pub fn object() -> Self {
        Self::new(ContainerKind::Object)
    }

    /// An empty array.
    pub fn array() -> Self {
        Self::new(ContainerKind::Array)
    }

    /// A date at `millis` since the Unix epoch.
    pub fn date(millis: i64) -> Self {
        Self::new(ContainerKind::Date(millis))
    }

    /// A plain object holding the given entries, in order.
    ///
    /// Later duplicates overwrite earlier ones. `Undefined` values are
    /// stored, so the key is present but absent-valued.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut obj = Self::object();
        for (k, v) in entries {
            obj.insert(k.into().normalize(), Property::data(v));
        }
        obj
    }

    /// An array holding the given elements at indices `0..n`.
    pub fn array_of<V, I>(elements: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let mut arr = Self::array();
        for (i, v) in elements.into_iter().enumerate() {
            arr.insert(Key::from(i), Property::data(v));
        }
        arr
    }

    /// Attach a prototype whose properties are inherited, not owned.
    pub fn with_prototype(mut self, prototype: Arc<Container>) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn is_array(&self) -> bool {
        self.kind == ContainerKind::Array
    }

    /// The array length, or `None` for non-arrays.
    pub fn array_length(&self) -> Option<usize> {
        self.is_array().then_some(self.length)
    }

    /// The time value of a date container.
    pub fn date_millis(&self) -> Option<i64> {
        match self.kind {
            ContainerKind::Date(ms) => Some(ms),
            _ => None,
        }
    }

    pub fn prototype(&self) -> Option<&Arc<Container>> {
        self.prototype.as_ref()
    }

    /// Number of own properties, enumerable or not.
    pub fn len(&self) -> usize {
        self.indices.len() + self.names.len()
    }

    /// Returns `true` if there are no own properties.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.names.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Reject all further assignments and definitions.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    // ---------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------

    /// The own property descriptor at `key`.
    pub fn property(&self, key: impl Into<Key>) -> Option<&Property> {
        self.slot(&key.into().normalize())
    }

    /// Returns `true` if `key` is an own property, even one holding
    /// `Undefined`.
    pub fn has_own(&self, key: impl Into<Key>) -> bool {
        self.property(key).is_some()
    }

    /// The own value at `key`, ignoring the prototype chain.
    pub fn get_own(&self, key: impl Into<Key>) -> Option<&Value> {
        self.property(key).map(|p| &p.value)
    }

    /// The value at `key`, walking the prototype chain.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.lookup(&key.into().normalize()).map(|p| &p.value)
    }

    fn slot(&self, key: &Key) -> Option<&Property> {
        match key {
            Key::Index(_) => self.indices.get(key),
            Key::Name(_) => self.names.get(key),
        }
    }

    fn slot_mut(&mut self, key: &Key) -> Option<&mut Property> {
        match key {
            Key::Index(_) => self.indices.get_mut(key),
            Key::Name(_) => self.names.get_mut(key),
        }
    }

    fn lookup(&self, key: &Key) -> Option<&Property> {
        let mut current = Some(self);
        while let Some(c) = current {
            if let Some(p) = c.slot(key) {
                return Some(p);
            }
            current = c.prototype.as_deref();
        }
        None
    }

    /// Own enumerable keys, in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.own_enumerable().map(|(k, _)| k)
    }

    /// Own enumerable key-value pairs, in iteration order.
    ///
    /// Inherited and hidden properties are skipped.
    pub fn own_enumerable(&self) -> impl Iterator<Item = (&Key, &Value)> + '_ {
        self.indices
            .iter()
            .chain(self.names.iter())
            .filter(|(_, p)| p.enumerable)
            .map(|(k, p)| (k, &p.value))
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Assign `value` at `key`.
    ///
    /// An existing own property keeps its flags; a new key becomes an
    /// ordinary enumerable property. Fails on a frozen container or when the
    /// key resolves, own or inherited, to a read-only property.
    ///
    /// On arrays, `length` is not a property: assigning it truncates or
    /// extends the array and fails unless the value is an integer in
    /// `0..=2^32 - 1`.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> TypeResult<()> {
        let key = key.into().normalize();
        if self.frozen {
            return Err(TypeError::Frozen { key });
        }
        let value = value.into();
        if self.is_length(&key) {
            return self.set_length(&value);
        }
        if self.lookup(&key).is_some_and(|p| !p.writable) {
            return Err(TypeError::ReadOnly { key });
        }
        match self.slot_mut(&key) {
            Some(existing) => existing.value = value,
            None => self.insert(key, Property::data(value)),
        }
        Ok(())
    }

    /// Define an own property with explicit flags, replacing any existing
    /// one. Only a frozen container refuses. Defining `length` on an array
    /// behaves like assigning it.
    pub fn define(&mut self, key: impl Into<Key>, property: Property) -> TypeResult<()> {
        let key = key.into().normalize();
        if self.frozen {
            return Err(TypeError::Frozen { key });
        }
        if self.is_length(&key) {
            return self.set_length(&property.value);
        }
        self.insert(key, property);
        Ok(())
    }

    fn is_length(&self, key: &Key) -> bool {
        self.is_array() && matches!(key, Key::Name(name) if name == LENGTH)
    }

    fn set_length(&mut self, value: &Value) -> TypeResult<()> {
        let new_len = match value {
            Value::Number(n) if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(n) => {
                *n as usize
            }
            Value::Number(n) => return Err(TypeError::InvalidLength(n.to_string())),
            other => return Err(TypeError::InvalidLength(other.type_name().to_string())),
        };
        // Everything at or past the new length is dropped.
        let _ = self.indices.split_off(&Key::Index(new_len));
        self.length = new_len;
        Ok(())
    }

    /// `key` must already be normalised.
    fn insert(&mut self, key: Key, property: Property) {
        match key.as_index() {
            Some(i) => {
                if self.is_array() {
                    self.length = self.length.max(i + 1);
                }
                self.indices.insert(key, property);
            }
            None => {
                self.names.insert(key, property);
            }
        }
    }
}

/// Deep structural equality over kind, array length and own enumerable
/// properties, regardless of key order. Prototypes, hidden properties and
/// the frozen flag are not compared.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.array_length() == other.array_length()
            && self.own_enumerable().count() == other.own_enumerable().count()
            && self.own_enumerable().all(|(k, v)| {
                other
                    .slot(k)
                    .is_some_and(|p| p.enumerable && p.value == *v)
            })
    }
}
