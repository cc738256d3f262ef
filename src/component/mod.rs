//! Data components and their hashers.
//!
//! - [`kind`]: the component types and the tagged value enum
//! - [`text`]: text component hashing
//! - [`hashers`]: hashers for every composite component value
//! - [`catalog`]: the type to hasher table and stack hashing

pub mod catalog;
pub mod hashers;
pub mod kind;
pub mod text;

pub use catalog::{CatalogBuilder, CatalogError, ComponentCatalog, StackHashError};
pub use kind::{ComponentKind, DataComponent};
