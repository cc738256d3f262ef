//! Item stacks, component patches, and hashed stacks.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::component::{ComponentKind, DataComponent};

/// A stack of items with an optional component patch.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    /// Item network id.
    pub id: i32,
    /// Stack size.
    pub count: i32,
    /// Changes relative to the item's default components.
    pub components: Option<DataComponents>,
}

impl ItemStack {
    /// A stack without a component patch.
    pub fn new(id: i32, count: i32) -> Self {
        Self {
            id,
            count,
            components: None,
        }
    }

    /// Attach a component patch.
    pub fn with_components(mut self, components: DataComponents) -> Self {
        self.components = Some(components);
        self
    }
}

/// A component patch. Each type is either set to a value or explicitly removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataComponents {
    entries: BTreeMap<ComponentKind, Option<DataComponent>>,
}

impl DataComponents {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a component, replacing any previous entry of the same type.
    pub fn set(&mut self, component: DataComponent) -> &mut Self {
        self.entries.insert(component.kind(), Some(component));
        self
    }

    /// Mark a component type as removed.
    pub fn remove(&mut self, kind: ComponentKind) -> &mut Self {
        self.entries.insert(kind, None);
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, component: DataComponent) -> Self {
        self.set(component);
        self
    }

    /// Builder-style [`remove`](Self::remove).
    pub fn without(mut self, kind: ComponentKind) -> Self {
        self.remove(kind);
        self
    }

    /// The entry for a type: `Some(Some(_))` set, `Some(None)` removed, `None` untouched.
    pub fn get(&self, kind: ComponentKind) -> Option<Option<&DataComponent>> {
        self.entries.get(&kind).map(Option::as_ref)
    }

    /// Iterate entries in component type order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, Option<&DataComponent>)> {
        self.entries.iter().map(|(kind, value)| (*kind, value.as_ref()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the patch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DataComponent> for DataComponents {
    fn from_iter<I: IntoIterator<Item = DataComponent>>(iter: I) -> Self {
        let mut patch = DataComponents::new();
        for component in iter {
            patch.set(component);
        }
        patch
    }
}

/// The hashed form of an item stack, as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedStack {
    /// Item network id.
    pub item_id: i32,
    /// Stack size.
    pub count: i32,
    /// Hash of every set component.
    pub added_components: BTreeMap<ComponentKind, i32>,
    /// Every removed component.
    pub removed_components: BTreeSet<ComponentKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_set_then_remove_replaces() {
        let mut patch = DataComponents::new();
        patch.set(DataComponent::MaxStackSize(16));
        patch.remove(ComponentKind::MaxStackSize);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get(ComponentKind::MaxStackSize), Some(None));
        assert_eq!(patch.get(ComponentKind::Damage), None);
    }

    #[test]
    fn test_patch_iterates_in_key_order() {
        let patch: DataComponents = [DataComponent::MaxDamage(3), DataComponent::CustomData(Default::default())]
            .into_iter()
            .collect();
        let kinds: Vec<_> = patch.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![ComponentKind::CustomData, ComponentKind::MaxDamage]);
    }
}
