//! Dynamic value model for assign-defined.
//!
//! Rust has no reflection over arbitrary object shapes, so the selective
//! merge operates on this small model of keyed containers instead. Every
//! other crate in the workspace depends on `assign-types`.
//!
//! # Key Types
//!
//! - [`Key`] — Index or name; canonical integer strings normalise to indices
//! - [`Value`] — Dynamic value with an explicit [`Value::Undefined`] sentinel
//! - [`Callable`] — Opaque shared function value
//! - [`Property`] — Value slot with enumerable / writable flags
//! - [`Container`] — Object, array or date with own properties and a prototype

pub mod callable;
pub mod container;
pub mod error;
pub mod json;
pub mod key;
pub mod property;
pub mod value;

pub use callable::Callable;
pub use container::{Container, ContainerKind};
pub use error::{TypeError, TypeResult};
pub use key::Key;
pub use property::Property;
pub use value::Value;
