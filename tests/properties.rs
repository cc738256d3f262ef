//! Property tests for the hashing invariants.

use proptest::prelude::*;
use stack_hash::hasher;
use stack_hash::registry::RegistryHasher;
use stack_hash::types::{DataComponents, FoodProperties, HolderSet, Identifier, ItemStack};
use stack_hash::{
    ComponentCatalog, ComponentKind, DataComponent, HashEncoder, HashingConfig, InMemoryRegistries, NoRegistries,
    Registry,
};

fn make_registries(size: usize) -> InMemoryRegistries {
    InMemoryRegistries::new().with_entries(
        Registry::Item,
        (0..size).map(|index| Identifier::minecraft(&format!("item_{index}"))),
    )
}

proptest! {
    #[test]
    fn test_map_hash_ignores_entry_order(entries in prop::collection::vec((any::<i32>(), any::<i64>()), 0..32)) {
        let enc = HashEncoder::new(&NoRegistries);
        let hashed: Vec<_> = entries
            .iter()
            .map(|(key, value)| (enc.number(*key), enc.number(*value)))
            .collect();
        let mut reversed = hashed.clone();
        reversed.reverse();
        prop_assert_eq!(enc.map(hashed), enc.map(reversed));
    }

    #[test]
    fn test_list_hash_keeps_order(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let enc = HashEncoder::new(&NoRegistries);
        let forward = enc.list([enc.number(a), enc.number(b)]);
        let backward = enc.list([enc.number(b), enc.number(a)]);
        prop_assert_ne!(forward, backward);
    }

    #[test]
    fn test_string_hash_is_deterministic(value in ".{0,64}") {
        let first = HashEncoder::new(&NoRegistries).string(&value);
        let second = HashEncoder::new(&NoRegistries).string(&value);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_default_fields_are_omitted(nutrition in any::<i32>(), saturation in -100.0f32..100.0) {
        let catalog = ComponentCatalog::vanilla(&HashingConfig::default()).unwrap();
        let food = DataComponent::Food(FoodProperties { nutrition, saturation, can_always_eat: false });
        let hash = catalog.hash(&food, &NoRegistries).unwrap();

        let enc = HashEncoder::new(&NoRegistries);
        let expected = enc.map([
            (enc.string("nutrition"), enc.number(nutrition)),
            (enc.string("saturation"), enc.number(saturation)),
        ]);
        prop_assert_eq!(hash, expected);
    }

    #[test]
    fn test_single_id_holder_set_collapses(id in 0i32..16) {
        let registries = make_registries(16);
        let enc = HashEncoder::new(&registries);
        let items = RegistryHasher::new(Registry::Item).holder_set();

        let single = items.hash(&HolderSet::Ids(vec![id]), &enc).unwrap();
        let key = hasher::key().hash(&Identifier::minecraft(&format!("item_{id}")), &enc).unwrap();
        prop_assert_eq!(single, key);

        let pair = items.hash(&HolderSet::Ids(vec![id, id]), &enc).unwrap();
        prop_assert_eq!(pair, enc.list([key, key]));
    }

    #[test]
    fn test_stack_hash_matches_component_hashes(max_stack_size in 1i32..100, damage in 0i32..2048) {
        let catalog = ComponentCatalog::vanilla(&HashingConfig::default()).unwrap();
        let patch = DataComponents::new()
            .with(DataComponent::MaxStackSize(max_stack_size))
            .with(DataComponent::Damage(damage))
            .without(ComponentKind::Glider);
        let stack = ItemStack::new(0, 1).with_components(patch);
        let hashed = catalog.hash_stack(&stack, &NoRegistries).unwrap();

        let expected = catalog.hash(&DataComponent::Damage(damage), &NoRegistries).unwrap();
        prop_assert_eq!(hashed.added_components[&ComponentKind::Damage], expected.as_int());
        prop_assert_eq!(hashed.added_components.len(), 2);
        prop_assert!(hashed.removed_components.contains(&ComponentKind::Glider));
    }
}
