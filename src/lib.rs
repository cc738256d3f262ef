//! # stack-hash
//!
//! Structural hashing of Minecraft item data components.
//!
//! Since 1.21.5 the Java client reports inventory changes as *hashed*
//! stacks: every data component on an item is replaced by a 32-bit hash of
//! its value. A server-side collaborator that tracks inventories has to
//! compute the very same hashes to tell which item the client means.
//!
//! ## Core Contract
//!
//! 1. Every component value hashes to the `i32` the vanilla client computes
//! 2. Hashing is a pure function of the value and the session registries
//! 3. A stack hashes to a [`HashedStack`]: added component hashes plus removed types
//!
//! ## Architecture
//!
//! ```text
//! DataComponent → ComponentCatalog → Hasher<T> → MapHasher → HashEncoder → CRC-32C
//!                       ↓                  ↓
//!                HashingConfig      RegistryLookup (network id → key)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Map entries are sorted by key hash, then value hash
//! - Fields equal to their codec default are omitted
//! - The catalog is immutable after build and shared between threads

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod component;
pub mod config;
pub mod encoder;
pub mod hasher;
pub mod map_hasher;
pub mod registry;
pub mod types;
pub mod vectors;

// Re-exports
pub use component::{CatalogBuilder, CatalogError, ComponentCatalog, ComponentKind, DataComponent, StackHashError};
pub use config::{ConfigError, HashingConfig};
pub use encoder::{HashCode, HashEncoder, Tag};
pub use hasher::{HashError, Hasher};
pub use map_hasher::{MapBuilder, MapHasher};
pub use registry::{InMemoryRegistries, NoRegistries, Registry, RegistryLookup};
pub use types::{DataComponents, HashedStack, Identifier, ItemStack};
pub use vectors::{verify_known_vectors, SelfTestReport};

/// Version of the hashing scheme. Bump when any hash output changes.
pub const HASH_SCHEMA_VERSION: &str = "1.21.11";
