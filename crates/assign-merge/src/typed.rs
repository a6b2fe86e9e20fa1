//! Statically typed selective merge.
//!
//! [`AssignDefined`] applies the same rule as
//! [`assign_defined`](crate::assign_defined) to ordinary Rust types, with
//! `None` standing in for the undefined sentinel: a `None` in the source is
//! skipped, a `None` already in the destination is kept unless a later
//! source supplies `Some`.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Shallow "assign unless undefined" for typed values.
pub trait AssignDefined {
    /// Merge a single source into `self`.
    fn assign_defined_from(&mut self, source: &Self);

    /// Merge sources left to right. `None` sources are skipped.
    fn assign_defined_all<'a, I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<&'a Self>>,
        Self: 'a,
    {
        for source in sources.into_iter().flatten() {
            self.assign_defined_from(source);
        }
        self
    }
}

impl<T: Clone> AssignDefined for Option<T> {
    fn assign_defined_from(&mut self, source: &Self) {
        if let Some(value) = source {
            *self = Some(value.clone());
        }
    }
}

impl<K: Ord + Clone, V: Clone> AssignDefined for BTreeMap<K, Option<V>> {
    fn assign_defined_from(&mut self, source: &Self) {
        for (key, value) in source.iter().filter_map(|(k, v)| v.as_ref().map(|v| (k, v))) {
            self.insert(key.clone(), Some(value.clone()));
        }
    }
}

impl<K, V, S> AssignDefined for HashMap<K, Option<V>, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn assign_defined_from(&mut self, source: &Self) {
        for (key, value) in source.iter().filter_map(|(k, v)| v.as_ref().map(|v| (k, v))) {
            self.insert(key.clone(), Some(value.clone()));
        }
    }
}

/// Index-keyed: writing past the end pads the gap with `None`.
impl<T: Clone> AssignDefined for Vec<Option<T>> {
    fn assign_defined_from(&mut self, source: &Self) {
        for (index, value) in source.iter().enumerate() {
            let Some(value) = value else { continue };
            if index >= self.len() {
                self.resize(index + 1, None);
            }
            self[index] = Some(value.clone());
        }
    }
}

/// Implement [`AssignDefined`] for a struct, field by field.
///
/// Every listed field must itself implement `AssignDefined`, usually by
/// being an `Option`.
///
/// ```
/// use assign_merge::{assign_defined_record, AssignDefined};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Settings {
///     host: Option<String>,
///     port: Option<u16>,
/// }
///
/// assign_defined_record!(Settings { host, port });
///
/// let mut base = Settings { host: Some("localhost".into()), port: Some(80) };
/// base.assign_defined_from(&Settings { host: None, port: Some(8080) });
/// assert_eq!(base, Settings { host: Some("localhost".into()), port: Some(8080) });
/// ```
#[macro_export]
macro_rules! assign_defined_record {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::AssignDefined for $ty {
            fn assign_defined_from(&mut self, source: &Self) {
                $(
                    $crate::AssignDefined::assign_defined_from(&mut self.$field, &source.$field);
                )+
            }
        }
    };
}
