use thiserror::Error;

use crate::key::Key;

/// Errors produced when writing into a [`Container`](crate::Container).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("cannot assign to property {key} of a frozen container")]
    Frozen { key: Key },

    #[error("cannot assign to read-only property {key}")]
    ReadOnly { key: Key },

    #[error("invalid array length: {0}")]
    InvalidLength(String),

    #[error("expected an object or array, got {0}")]
    NotAContainer(&'static str),
}

/// Convenience alias for value model results.
pub type TypeResult<T> = Result<T, TypeError>;
