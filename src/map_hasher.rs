//! Field-by-field map hashing for struct-shaped values.
//!
//! A [`MapBuilder<T>`] declares which fields of a `T` go into its map and
//! how each is hashed. A [`MapHasher`] is the accumulator the builder writes
//! into while one value is hashed.
//!
//! ## Field Rules
//!
//! | Method | Included when |
//! |--------|---------------|
//! | `accept` | always |
//! | `optional_nullable` | the value is `Some` |
//! | `optional` | the value differs from the default |
//! | `optional_float` | the value's bits differ from the default's |
//! | `accept_list` | always |
//! | `optional_list` | the list is non-empty |
//!
//! Declaration order never affects the hash: entries are sorted at `build()`.
//!
//! ## Errors
//!
//! The first hashing error is kept and every later field is skipped, so
//! builder closures can chain calls without checking results. `build()`
//! returns the error.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::encoder::{HashCode, HashEncoder};
use crate::hasher::{HashError, Hasher};
use crate::types::NbtCompound;

/// Accumulates the hashed entries of one map.
pub struct MapHasher<'a> {
    encoder: &'a HashEncoder<'a>,
    entries: BTreeMap<HashCode, HashCode>,
    error: Option<HashError>,
}

impl<'a> MapHasher<'a> {
    /// Start an empty map.
    pub fn new(encoder: &'a HashEncoder<'a>) -> Self {
        Self {
            encoder,
            entries: BTreeMap::new(),
            error: None,
        }
    }

    /// The encoder this map hashes with.
    pub fn encoder(&self) -> &'a HashEncoder<'a> {
        self.encoder
    }

    fn put(&mut self, key: &str, value: Result<HashCode, HashError>) -> &mut Self {
        match value {
            Ok(hash) => {
                if self.encoder.trace_fields() {
                    tracing::trace!(field = key, hash = %hash, "hashed map field");
                }
                self.entries.insert(self.encoder.string(key), hash);
            }
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
        self
    }

    /// Always include `key`.
    pub fn accept<V: ?Sized + 'static>(&mut self, key: &str, hasher: &Hasher<V>, value: &V) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let hash = hasher.hash(value, self.encoder);
        self.put(key, hash)
    }

    /// Include `key` only when the value is present.
    pub fn optional_nullable<V: ?Sized + 'static>(&mut self, key: &str, hasher: &Hasher<V>, value: Option<&V>) -> &mut Self {
        match value {
            Some(value) => self.accept(key, hasher, value),
            None => self,
        }
    }

    /// Include `key` only when the value differs from `default`.
    pub fn optional<V: ?Sized + PartialEq + 'static>(&mut self, key: &str, hasher: &Hasher<V>, value: &V, default: &V) -> &mut Self {
        if value == default {
            return self;
        }
        self.accept(key, hasher, value)
    }

    /// Include a float field only when its bits differ from `default`'s.
    ///
    /// `-0.0` is written even when the default is `0.0`.
    pub fn optional_float(&mut self, key: &str, hasher: &Hasher<f32>, value: f32, default: f32) -> &mut Self {
        if value.to_bits() == default.to_bits() {
            return self;
        }
        self.accept(key, hasher, &value)
    }

    /// Always include a list field.
    pub fn accept_list<V, O>(&mut self, key: &str, element: &Hasher<V>, values: &[O]) -> &mut Self
    where
        V: ?Sized + 'static,
        O: Borrow<V>,
    {
        if self.error.is_some() {
            return self;
        }
        let hash = element.hash_all(values, self.encoder);
        self.put(key, hash)
    }

    /// Include a list field only when it is non-empty.
    pub fn optional_list<V, O>(&mut self, key: &str, element: &Hasher<V>, values: &[O]) -> &mut Self
    where
        V: ?Sized + 'static,
        O: Borrow<V>,
    {
        if values.is_empty() {
            return self;
        }
        self.accept_list(key, element, values)
    }

    /// Inline the fields of another builder into this map.
    pub fn accept_builder<V: ?Sized + 'static>(&mut self, builder: &MapBuilder<V>, value: &V) -> &mut Self {
        builder.apply(self, value);
        self
    }

    /// Inline every entry of an NBT compound as a field.
    pub fn inline_nbt(&mut self, compound: &NbtCompound) -> &mut Self {
        for (key, value) in compound.iter() {
            let hash = self.encoder.nbt(value);
            self.put(key, Ok(hash));
        }
        self
    }

    /// Hash the accumulated entries as a map.
    pub fn build(self) -> Result<HashCode, HashError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.encoder.map(self.entries)),
        }
    }
}

type BuildFn<T> = dyn Fn(&mut MapHasher<'_>, &T) + Send + Sync;

/// Declares how a `T` becomes map entries.
pub struct MapBuilder<T: ?Sized> {
    build_fn: Arc<BuildFn<T>>,
}

impl<T: ?Sized> Clone for MapBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            build_fn: Arc::clone(&self.build_fn),
        }
    }
}

impl<T: ?Sized + 'static> MapBuilder<T> {
    /// Wrap a builder function.
    pub fn new<F>(build_fn: F) -> Self
    where
        F: Fn(&mut MapHasher<'_>, &T) + Send + Sync + 'static,
    {
        Self {
            build_fn: Arc::new(build_fn),
        }
    }

    /// A builder that contributes no fields.
    pub fn unit() -> Self {
        Self::new(|_, _| {})
    }

    /// Write this builder's fields for `value` into `map`.
    pub fn apply(&self, map: &mut MapHasher<'_>, value: &T) {
        (self.build_fn)(map, value)
    }
}

impl MapBuilder<NbtCompound> {
    /// A builder that inlines every key of an NBT compound.
    pub fn inline_nbt() -> Self {
        Self::new(|map, compound: &NbtCompound| {
            map.inline_nbt(compound);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::{self, map_builder};
    use crate::registry::{NoRegistries, Registry};
    use crate::types::Nbt;

    fn encoder() -> HashEncoder<'static> {
        HashEncoder::new(&NoRegistries)
    }

    struct Food {
        nutrition: i32,
        saturation: f32,
        can_always_eat: bool,
    }

    fn food_hasher() -> Hasher<Food> {
        map_builder(MapBuilder::new(|b, food: &Food| {
            b.accept("nutrition", hasher::int(), &food.nutrition)
                .accept("saturation", hasher::float(), &food.saturation)
                .optional("can_always_eat", hasher::bool(), &food.can_always_eat, &false);
        }))
    }

    #[test]
    fn test_food_vectors() {
        let enc = encoder();
        let hasher = food_hasher();
        let cases = [
            (Food { nutrition: 5, saturation: 1.4, can_always_eat: false }, 445786378),
            (Food { nutrition: 3, saturation: 5.7, can_always_eat: true }, 1917653498),
            (Food { nutrition: 7, saturation: 0.15, can_always_eat: false }, -184166204),
        ];
        for (food, expected) in cases {
            assert_eq!(hasher.hash(&food, &enc).unwrap().as_int(), expected);
        }
    }

    #[test]
    fn test_default_is_elided() {
        let enc = encoder();
        let hasher = food_hasher();
        let with_default = hasher
            .hash(&Food { nutrition: 1, saturation: 0.5, can_always_eat: false }, &enc)
            .unwrap();
        let expected = enc.map([
            (enc.string("nutrition"), enc.number(1i32)),
            (enc.string("saturation"), enc.number(0.5f32)),
        ]);
        assert_eq!(with_default, expected);
    }

    #[test]
    fn test_declaration_order_is_irrelevant() {
        let enc = encoder();
        let reversed = map_builder(MapBuilder::new(|b, food: &Food| {
            b.optional("can_always_eat", hasher::bool(), &food.can_always_eat, &false)
                .accept("saturation", hasher::float(), &food.saturation)
                .accept("nutrition", hasher::int(), &food.nutrition);
        }));
        let food = Food { nutrition: 3, saturation: 5.7, can_always_eat: true };
        assert_eq!(reversed.hash(&food, &enc), food_hasher().hash(&food, &enc));
    }

    #[test]
    fn test_optional_float_compares_bits() {
        let enc = encoder();
        let mut zero = MapHasher::new(&enc);
        zero.optional_float("x", hasher::float(), 0.0, 0.0);
        assert_eq!(zero.build().unwrap(), enc.empty_map());

        let mut negative_zero = MapHasher::new(&enc);
        negative_zero.optional_float("x", hasher::float(), -0.0, 0.0);
        assert_ne!(negative_zero.build().unwrap(), enc.empty_map());
    }

    #[test]
    fn test_optional_list_skips_empty() {
        let enc = encoder();
        let mut map = MapHasher::new(&enc);
        map.optional_list::<str, String>("strings", hasher::string(), &[])
            .accept_list::<i32, i32>("colors", hasher::int(), &[]);
        let expected = enc.map([(enc.string("colors"), enc.list([]))]);
        assert_eq!(map.build().unwrap(), expected);
    }

    #[test]
    fn test_first_error_wins() {
        let enc = encoder();
        let failing: Hasher<i32> = Hasher::new(|id: &i32, _| {
            Err(HashError::UnknownRegistryId { registry: Registry::Item, id: *id })
        });
        let mut map = MapHasher::new(&enc);
        map.accept("a", &failing, &1).accept("b", &failing, &2).accept("c", hasher::int(), &3);
        assert_eq!(
            map.build(),
            Err(HashError::UnknownRegistryId { registry: Registry::Item, id: 1 })
        );
    }

    #[test]
    fn test_inline_nbt_merges_with_fields() {
        let enc = encoder();
        let compound = NbtCompound::new().with("Age", Nbt::Int(3));
        let builder = MapBuilder::inline_nbt();
        let mut map = MapHasher::new(&enc);
        map.accept("id", hasher::string(), "minecraft:bee").accept_builder(&builder, &compound);
        let expected = enc.map([
            (enc.string("id"), enc.string("minecraft:bee")),
            (enc.string("Age"), enc.number(3i32)),
        ]);
        assert_eq!(map.build().unwrap(), expected);
    }
}
