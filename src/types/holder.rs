//! References into registries.

use super::identifier::Identifier;

/// A registry entry given either by network id or inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Holder<T> {
    /// A registered entry, by network id.
    Reference(i32),
    /// An unregistered value sent inline.
    Direct(T),
}

/// A holder, or a bare registry key that the client resolves itself.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryRef<T> {
    /// Sent as a holder.
    Holder(Holder<T>),
    /// Sent as a key.
    Key(Identifier),
}

/// A set of registry entries: a tag, or explicit network ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolderSet {
    /// `#namespace:path`.
    Tag(Identifier),
    /// Explicit entries.
    Ids(Vec<i32>),
}
