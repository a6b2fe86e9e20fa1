//! Selective shallow merge for assign-defined.
//!
//! Copies the own enumerable properties of any number of sources onto a
//! destination, in order, skipping every property whose value is undefined.
//! Undefined values already on the destination stay where they are.
//!
//! # Key Types
//!
//! - [`assign_defined`] / [`assign_defined_with_report`] -- Merge over [`Container`](assign_types::Container)
//! - [`AssignSource`] -- Anything usable as a source (containers, values, `Option`s)
//! - [`AssignReport`] -- Per-call counters
//! - [`AssignDefined`] -- Typed form for `Option`, maps, vectors and records

pub mod assign;
pub mod error;
pub mod source;
pub mod typed;

pub use assign::{assign_defined, assign_defined_with_report, AssignReport};
pub use error::{AssignError, AssignResult};
pub use source::AssignSource;
pub use typed::AssignDefined;
