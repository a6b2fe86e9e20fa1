//! Property keys.
//!
//! A key is either an array index or a name. Canonical integer strings are
//! normalised to [`Key::Index`] so that `"3"` and `3` address the same slot,
//! which lets arrays and plain objects share one keyspace.

use std::fmt;

/// Largest integer treated as an array index (`2^32 - 2`). Larger integers
/// are ordinary names.
pub const MAX_INDEX: usize = u32::MAX as usize - 1;

/// A property key: an integer index or a string name.
///
/// Ordering puts every index before every name, indices ascending.
/// Construct keys through the `From` impls or [`Key::parse`]; they keep
/// `Index` values within [`MAX_INDEX`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Integer index (array element or numeric-looking object key).
    Index(usize),
    /// Any other string key.
    Name(String),
}

impl Key {
    /// Parse a key from its string form, normalising canonical integers.
    ///
    /// `"0"` and `"17"` become indices; `"01"`, `"-1"`, `"1.5"`, `""` and
    /// anything above [`MAX_INDEX`] stay names.
    pub fn parse(s: &str) -> Self {
        match canonical_index(s) {
            Some(i) => Self::Index(i),
            None => Self::Name(s.to_string()),
        }
    }

    /// Returns the index if this is an index key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// Demote an index above [`MAX_INDEX`] to the equivalent name.
    pub fn normalize(self) -> Self {
        match self {
            Self::Index(i) if i > MAX_INDEX => Self::Name(i.to_string()),
            key => key,
        }
    }
}

fn canonical_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok().filter(|i| *i <= MAX_INDEX)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Self::Index(i).normalize()
    }
}

/// Negative integers are names, as their string form is not an index.
impl From<i32> for Key {
    fn from(i: i32) -> Self {
        match usize::try_from(i) {
            Ok(i) => Self::from(i),
            Err(_) => Self::Name(i.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(i) => Self::Index(i),
            None => Self::Name(s),
        }
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
