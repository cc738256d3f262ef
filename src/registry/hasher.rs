//! Hashers for registry-backed values.
//!
//! ## Holder Sets
//!
//! A [`HolderSet`] hashes in one of three shapes:
//!
//! - a tag hashes as the string `#namespace:path`
//! - a single entry hashes as that entry's key, not as a one-element list
//! - any other number of entries hashes as a list of keys

use crate::hasher::{self, HashError, Hasher};
use crate::types::{Holder, HolderSet, Identifier, RegistryRef};
use super::Registry;

/// Hashes network ids of one registry by their key.
///
/// An id missing from the session snapshot fails with
/// [`HashError::UnknownRegistryId`]; it is never replaced by a fallback key.
#[derive(Debug, Clone)]
pub struct RegistryHasher {
    registry: Registry,
    id: Hasher<i32>,
}

impl RegistryHasher {
    /// A hasher for `registry`.
    pub fn new(registry: Registry) -> Self {
        let id = hasher::key().session_convert(move |registries, id: &i32| {
            registries
                .key_from_network_id(registry, *id)
                .ok_or(HashError::UnknownRegistryId { registry, id: *id })
        });
        Self { registry, id }
    }

    /// The registry this hasher resolves against.
    pub fn registry(&self) -> Registry {
        self.registry
    }

    /// The id hasher.
    pub fn ids(&self) -> &Hasher<i32> {
        &self.id
    }

    /// A hasher for holder sets of this registry.
    pub fn holder_set(&self) -> Hasher<HolderSet> {
        let id = self.id.clone();
        Hasher::new(move |set: &HolderSet, encoder| match set {
            HolderSet::Tag(tag) => hasher::tag().hash(tag, encoder),
            HolderSet::Ids(ids) => match ids.as_slice() {
                [single] => id.hash(single, encoder),
                many => id.hash_all(many, encoder),
            },
        })
    }

    /// A hasher for holders: references hash by key, direct values with `direct`.
    pub fn holder<D: 'static>(&self, direct: &Hasher<D>) -> Hasher<Holder<D>> {
        let id = self.id.clone();
        let direct = direct.clone();
        Hasher::new(move |holder: &Holder<D>, encoder| match holder {
            Holder::Reference(reference) => id.hash(reference, encoder),
            Holder::Direct(value) => direct.hash(value, encoder),
        })
    }

    /// A hasher for holders or bare keys.
    pub fn registry_ref<D: 'static>(&self, direct: &Hasher<D>) -> Hasher<RegistryRef<D>> {
        let holder = self.holder(direct);
        Hasher::new(move |value: &RegistryRef<D>, encoder| match value {
            RegistryRef::Holder(inner) => holder.hash(inner, encoder),
            RegistryRef::Key(key) => hasher::key().hash(key, encoder),
        })
    }

    /// A hasher for holders whose direct form is already a key.
    pub fn either_holder(&self) -> Hasher<Holder<Identifier>> {
        self.holder(hasher::key())
    }
}

impl From<RegistryHasher> for Hasher<i32> {
    fn from(value: RegistryHasher) -> Self {
        value.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::HashEncoder;
    use crate::registry::InMemoryRegistries;

    fn make_registries() -> InMemoryRegistries {
        InMemoryRegistries::new().with_entries(
            Registry::Block,
            ["air", "pumpkin", "jack_o_lantern", "wall_torch"].into_iter().map(Identifier::minecraft),
        )
    }

    #[test]
    fn test_id_hashes_as_key() {
        let registries = make_registries();
        let enc = HashEncoder::new(&registries);
        let blocks = RegistryHasher::new(Registry::Block);
        assert_eq!(blocks.ids().hash(&1, &enc), Ok(enc.string("minecraft:pumpkin")));
    }

    #[test]
    fn test_unknown_id_fails() {
        let registries = make_registries();
        let enc = HashEncoder::new(&registries);
        let blocks = RegistryHasher::new(Registry::Block);
        assert_eq!(
            blocks.ids().hash(&40, &enc),
            Err(HashError::UnknownRegistryId { registry: Registry::Block, id: 40 })
        );
    }

    #[test]
    fn test_holder_set_shapes() {
        let registries = make_registries();
        let enc = HashEncoder::new(&registries);
        let sets = RegistryHasher::new(Registry::Block).holder_set();

        let tag = HolderSet::Tag(Identifier::minecraft("acacia_logs"));
        assert_eq!(sets.hash(&tag, &enc), Ok(enc.string("#minecraft:acacia_logs")));

        let single = HolderSet::Ids(vec![1]);
        assert_eq!(sets.hash(&single, &enc), Ok(enc.string("minecraft:pumpkin")));

        let many = HolderSet::Ids(vec![2, 3]);
        let expected = enc.list([enc.string("minecraft:jack_o_lantern"), enc.string("minecraft:wall_torch")]);
        assert_eq!(sets.hash(&many, &enc), Ok(expected));

        assert_eq!(sets.hash(&HolderSet::Ids(vec![]), &enc), Ok(enc.list([])));
    }

    #[test]
    fn test_either_holder() {
        let registries = make_registries();
        let enc = HashEncoder::new(&registries);
        let holders = RegistryHasher::new(Registry::Block).either_holder();
        assert_eq!(holders.hash(&Holder::Reference(2), &enc), Ok(enc.string("minecraft:jack_o_lantern")));
        assert_eq!(
            holders.hash(&Holder::Direct(Identifier::minecraft("custom")), &enc),
            Ok(enc.string("minecraft:custom"))
        );
    }
}
