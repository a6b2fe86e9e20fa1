//! Error types for the merge crate.

use assign_types::TypeError;

/// Errors that can occur while assigning into a destination.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The destination refused an assignment (frozen container or
    /// read-only property). Assignments made before the refusal remain.
    #[error("destination rejected assignment: {0}")]
    Type(#[from] TypeError),
}

/// Convenience alias for merge results.
pub type AssignResult<T> = Result<T, AssignError>;
