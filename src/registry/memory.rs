//! In-memory registry snapshot for tests and simple collaborators.

use std::collections::BTreeMap;

use crate::types::Identifier;
use super::{Registry, RegistryLookup};

/// In-memory registry snapshot.
///
/// The network id of an entry is its index in the registry's entry list.
/// Uses BTreeMap for deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistries {
    entries: BTreeMap<Registry, Vec<Identifier>>,
}

impl InMemoryRegistries {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its network id.
    pub fn register(&mut self, registry: Registry, key: Identifier) -> i32 {
        let list = self.entries.entry(registry).or_default();
        list.push(key);
        (list.len() - 1) as i32
    }

    /// Builder-style: append several entries in order.
    pub fn with_entries<I>(mut self, registry: Registry, keys: I) -> Self
    where
        I: IntoIterator<Item = Identifier>,
    {
        for key in keys {
            self.register(registry, key);
        }
        self
    }

    /// Reverse lookup: the network id of `key`.
    pub fn network_id(&self, registry: Registry, key: &Identifier) -> Option<i32> {
        self.entries
            .get(&registry)?
            .iter()
            .position(|entry| entry == key)
            .map(|index| index as i32)
    }

    /// Number of entries in a registry.
    pub fn len(&self, registry: Registry) -> usize {
        self.entries.get(&registry).map_or(0, Vec::len)
    }

    /// Whether every registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

impl RegistryLookup for InMemoryRegistries {
    fn key_from_network_id(&self, registry: Registry, id: i32) -> Option<Identifier> {
        let index = usize::try_from(id).ok()?;
        self.entries.get(&registry)?.get(index).cloned()
    }
}
