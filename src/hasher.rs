//! Composable hashers.
//!
//! A [`Hasher<T>`] turns a `&T` into a [`HashCode`] using a [`HashEncoder`].
//! Hashers are immutable and cheap to clone (one `Arc`), so they are built
//! once and shared freely between threads.
//!
//! ## Building Blocks
//!
//! - Base hashers, one per encoder primitive: [`unit`], [`int`], [`string`], ...
//! - Adapters: [`Hasher::convert`], [`Hasher::project`], [`Hasher::session_convert`]
//! - Containers: [`Hasher::list`], [`map`]
//! - Structs: [`map_builder`] with a [`MapBuilder`]
//! - Tagged unions: [`Hasher::dispatch`]
//!
//! ## Example
//!
//! ```
//! use stack_hash::hasher::{self, map_builder};
//! use stack_hash::map_hasher::MapBuilder;
//! use stack_hash::{HashEncoder, NoRegistries};
//!
//! struct Food { nutrition: i32, can_always_eat: bool }
//!
//! let food = map_builder(MapBuilder::new(|b, food: &Food| {
//!     b.accept("nutrition", hasher::int(), &food.nutrition)
//!         .optional("can_always_eat", hasher::bool(), &food.can_always_eat, &false);
//! }));
//!
//! let encoder = HashEncoder::new(&NoRegistries);
//! let hash = food.hash(&Food { nutrition: 4, can_always_eat: false }, &encoder).unwrap();
//! assert_ne!(hash, encoder.empty_map());
//! ```

use std::any::type_name;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::component::ComponentKind;
use crate::encoder::{HashCode, HashEncoder};
use crate::map_hasher::MapBuilder;
use crate::registry::{Registry, RegistryLookup};
use crate::types::{BlockPos, Filterable, Identifier, Nbt, NbtCompound};

/// Errors raised while hashing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// A network id has no entry in the session's registry snapshot.
    #[error("registry {registry} has no entry for network id {id}")]
    UnknownRegistryId {
        /// Registry that was searched.
        registry: Registry,
        /// Id that was not found.
        id: i32,
    },

    /// A network id is out of range for a fixed enumeration.
    #[error("{enum_name} has no constant with id {id}")]
    UnknownEnumId {
        /// Enumeration name.
        enum_name: &'static str,
        /// Id that was not found.
        id: i32,
    },

    /// No hasher is registered for a component type.
    #[error("no hasher registered for component {0}")]
    UnregisteredComponent(ComponentKind),

    /// A component value was routed to another type's hasher.
    #[error("hasher for {expected} received a {actual} value")]
    ComponentMismatch {
        /// Type the hasher was registered for.
        expected: ComponentKind,
        /// Type of the value.
        actual: ComponentKind,
    },

    /// A nested item stack was hashed by an encoder without a component catalog.
    #[error("nested item stacks need an encoder with a component catalog")]
    MissingCatalog,
}

type HashFn<T> = dyn Fn(&T, &HashEncoder<'_>) -> Result<HashCode, HashError> + Send + Sync;

/// Hashes values of type `T`.
pub struct Hasher<T: ?Sized> {
    hash_fn: Arc<HashFn<T>>,
}

impl<T: ?Sized> Clone for Hasher<T> {
    fn clone(&self) -> Self {
        Self {
            hash_fn: Arc::clone(&self.hash_fn),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Hasher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hasher<{}>", type_name::<T>())
    }
}

impl<T: ?Sized + 'static> Hasher<T> {
    /// Wrap a hashing function.
    pub fn new<F>(hash_fn: F) -> Self
    where
        F: Fn(&T, &HashEncoder<'_>) -> Result<HashCode, HashError> + Send + Sync + 'static,
    {
        Self {
            hash_fn: Arc::new(hash_fn),
        }
    }

    /// Hash a value.
    pub fn hash(&self, value: &T, encoder: &HashEncoder<'_>) -> Result<HashCode, HashError> {
        (self.hash_fn)(value, encoder)
    }

    /// Hash every element, then the list of element hashes.
    pub(crate) fn hash_all<O: Borrow<T>>(&self, values: &[O], encoder: &HashEncoder<'_>) -> Result<HashCode, HashError> {
        let hashes = values
            .iter()
            .map(|value| self.hash(<O as Borrow<T>>::borrow(value), encoder))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(encoder.list(hashes))
    }

    /// A hasher for lists of `T`, preserving element order.
    pub fn list(&self) -> Hasher<[T]>
    where
        T: Sized,
    {
        let element = self.clone();
        Hasher::new(move |values: &[T], encoder| element.hash_all(values, encoder))
    }

    /// Adapt this hasher to `F` through an owned conversion.
    pub fn convert<F, U, C>(&self, converter: C) -> Hasher<F>
    where
        F: ?Sized + 'static,
        U: Borrow<T>,
        C: Fn(&F) -> U + Send + Sync + 'static,
    {
        let inner = self.clone();
        Hasher::new(move |value: &F, encoder| {
            let converted = converter(value);
            inner.hash(<U as Borrow<T>>::borrow(&converted), encoder)
        })
    }

    /// Adapt this hasher to `F` through a borrowing accessor.
    pub fn project<F, P>(&self, accessor: P) -> Hasher<F>
    where
        F: ?Sized + 'static,
        P: for<'x> Fn(&'x F) -> &'x T + Send + Sync + 'static,
    {
        let inner = self.clone();
        Hasher::new(move |value: &F, encoder| inner.hash(accessor(value), encoder))
    }

    /// Like [`convert`](Self::convert), but the conversion sees the session
    /// registries and may fail.
    pub fn session_convert<F, U, C>(&self, converter: C) -> Hasher<F>
    where
        F: ?Sized + 'static,
        U: Borrow<T>,
        C: Fn(&dyn RegistryLookup, &F) -> Result<U, HashError> + Send + Sync + 'static,
    {
        let inner = self.clone();
        Hasher::new(move |value: &F, encoder| {
            let converted = converter(encoder.registries(), value)?;
            inner.hash(<U as Borrow<T>>::borrow(&converted), encoder)
        })
    }

    /// A tagged-union hasher.
    ///
    /// The discriminant is hashed with this hasher under `type_key`. The
    /// builder registered for that discriminant in `cases` adds the remaining
    /// fields to the same map; a discriminant without a case adds none.
    pub fn dispatch<V, U, D>(
        &self,
        type_key: &'static str,
        discriminant: D,
        cases: impl IntoIterator<Item = (U, MapBuilder<V>)>,
    ) -> Hasher<V>
    where
        V: ?Sized + 'static,
        U: Borrow<T> + PartialEq + Send + Sync + 'static,
        D: Fn(&V) -> U + Send + Sync + 'static,
    {
        let type_hasher = self.clone();
        let cases: Vec<(U, MapBuilder<V>)> = cases.into_iter().collect();
        map_builder(MapBuilder::new(move |builder, value: &V| {
            let kind = discriminant(value);
            builder.accept(type_key, &type_hasher, <U as Borrow<T>>::borrow(&kind));
            if let Some((_, case)) = cases.iter().find(|(case_kind, _)| *case_kind == kind) {
                case.apply(builder, value);
            }
        }))
    }

    /// A hasher for [`Filterable`] values: `{raw, filtered?}`.
    pub fn filterable<O>(&self) -> Hasher<Filterable<O>>
    where
        O: Borrow<T> + 'static,
    {
        let inner = self.clone();
        map_builder(MapBuilder::new(move |builder, value: &Filterable<O>| {
            builder
                .accept("raw", &inner, <O as Borrow<T>>::borrow(&value.raw))
                .optional_nullable(
                    "filtered",
                    &inner,
                    value.filtered.as_ref().map(|filtered| <O as Borrow<T>>::borrow(filtered)),
                );
        }))
    }
}

/// A hasher that hashes a value as the map its builder produces.
pub fn map_builder<T: ?Sized + 'static>(builder: MapBuilder<T>) -> Hasher<T> {
    Hasher::new(move |value: &T, encoder| {
        let mut map = crate::map_hasher::MapHasher::new(encoder);
        builder.apply(&mut map, value);
        map.build()
    })
}

/// A hasher for maps: each key and value is hashed on its own.
pub fn map<K, V>(key_hasher: &Hasher<K>, value_hasher: &Hasher<V>) -> Hasher<BTreeMap<K, V>>
where
    K: Ord + 'static,
    V: 'static,
{
    let key_hasher = key_hasher.clone();
    let value_hasher = value_hasher.clone();
    Hasher::new(move |entries: &BTreeMap<K, V>, encoder| {
        let hashed = entries
            .iter()
            .map(|(key, value)| Ok((key_hasher.hash(key, encoder)?, value_hasher.hash(value, encoder)?)))
            .collect::<Result<Vec<_>, HashError>>()?;
        Ok(encoder.map(hashed))
    })
}

/// A hasher for enum constants, by serialized name.
///
/// The names must match the reference spelling exactly.
pub fn from_enum<E: Copy + 'static>(namer: fn(E) -> &'static str) -> Hasher<E> {
    string().convert(move |constant: &E| namer(*constant))
}

/// A hasher for network ids of a fixed enumeration, by serialized name.
///
/// `values` must be in network id order. An out-of-range id fails with
/// [`HashError::UnknownEnumId`].
pub fn from_id_enum<E: Copy + Send + Sync + 'static>(values: &'static [E], namer: fn(E) -> &'static str) -> Hasher<i32> {
    Hasher::new(move |id: &i32, encoder| {
        let constant = usize::try_from(*id)
            .ok()
            .and_then(|index| values.get(index))
            .ok_or(HashError::UnknownEnumId {
                enum_name: short_type_name::<E>(),
                id: *id,
            })?;
        Ok(encoder.string(namer(*constant)))
    })
}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn uuid_ints(uuid: &Uuid) -> [i32; 4] {
    let (most, least) = uuid.as_u64_pair();
    [(most >> 32) as i32, most as i32, (least >> 32) as i32, least as i32]
}

static_hashers! {
    /// Unit values hash as an empty map.
    pub fn unit() -> () = Hasher::new(|_: &(), encoder| Ok(encoder.empty_map()));

    /// `TAG_BYTE`.
    pub fn byte() -> i8 = Hasher::new(|value: &i8, encoder| Ok(encoder.number(*value)));

    /// `TAG_SHORT`.
    pub fn short() -> i16 = Hasher::new(|value: &i16, encoder| Ok(encoder.number(*value)));

    /// `TAG_INT`.
    pub fn int() -> i32 = Hasher::new(|value: &i32, encoder| Ok(encoder.number(*value)));

    /// `TAG_LONG`.
    pub fn long() -> i64 = Hasher::new(|value: &i64, encoder| Ok(encoder.number(*value)));

    /// `TAG_FLOAT`.
    pub fn float() -> f32 = Hasher::new(|value: &f32, encoder| Ok(encoder.number(*value)));

    /// `TAG_DOUBLE`.
    pub fn double() -> f64 = Hasher::new(|value: &f64, encoder| Ok(encoder.number(*value)));

    /// `TAG_STRING`.
    pub fn string() -> str = Hasher::new(|value: &str, encoder| Ok(encoder.string(value)));

    /// `TAG_STRING`, for owned strings.
    pub fn owned_string() -> String = string().project(String::as_str);

    /// `TAG_BOOLEAN`.
    pub fn bool() -> bool = Hasher::new(|value: &bool, encoder| Ok(encoder.bool(*value)));

    /// Int array.
    pub fn int_array() -> [i32] = Hasher::new(|values: &[i32], encoder| Ok(encoder.int_array(values)));

    /// Any NBT value.
    pub fn nbt() -> Nbt = Hasher::new(|value: &Nbt, encoder| Ok(encoder.nbt(value)));

    /// NBT compound, as a map.
    pub fn nbt_compound() -> NbtCompound = Hasher::new(|value: &NbtCompound, encoder| Ok(encoder.nbt_compound(value)));

    /// NBT list.
    pub fn nbt_list() -> [Nbt] = Hasher::new(|values: &[Nbt], encoder| Ok(encoder.nbt_list(values)));

    /// Block position, as `[x, y, z]`.
    pub fn pos() -> BlockPos = int_array().convert(|pos: &BlockPos| [pos.x, pos.y, pos.z]);

    /// Identifier, as `namespace:path`.
    pub fn key() -> Identifier = string().project(Identifier::as_str);

    /// Tag reference, as `#namespace:path`.
    pub fn tag() -> Identifier = string().convert(|tag: &Identifier| format!("#{}", tag));

    /// Removed component key, as `!namespace:path`.
    pub fn key_removal() -> Identifier = string().convert(|key: &Identifier| format!("!{}", key));

    /// UUID, as four ints: high and low halves of each 64-bit half.
    pub fn uuid() -> Uuid = int_array().convert(uuid_ints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NoRegistries;
    use crate::types::Rarity;

    fn encoder() -> HashEncoder<'static> {
        HashEncoder::new(&NoRegistries)
    }

    #[test]
    fn test_unit_is_empty_map() {
        let enc = encoder();
        assert_eq!(unit().hash(&(), &enc).unwrap().as_int(), -982207288);
    }

    #[test]
    fn test_key_and_tag_prefixes() {
        let enc = encoder();
        let id = Identifier::minecraft("testing");
        assert_eq!(key().hash(&id, &enc).unwrap().as_int(), -689946239);
        assert_eq!(tag().hash(&id, &enc).unwrap(), enc.string("#minecraft:testing"));
        assert_eq!(key_removal().hash(&id, &enc).unwrap(), enc.string("!minecraft:testing"));
    }

    #[test]
    fn test_list_preserves_order() {
        let enc = encoder();
        let ints = int().list();
        let forward = ints.hash(&[1, 2, 3], &enc).unwrap();
        let backward = ints.hash(&[3, 2, 1], &enc).unwrap();
        assert_ne!(forward, backward);
        assert_eq!(ints.hash(&[], &enc).unwrap(), enc.list([]));
    }

    #[test]
    fn test_from_id_enum() {
        let enc = encoder();
        let rarity = from_id_enum(Rarity::VALUES, Rarity::as_str);
        assert_eq!(rarity.hash(&0, &enc).unwrap().as_int(), 75150990);
        assert_eq!(rarity.hash(&2, &enc).unwrap().as_int(), -1420566726);
        assert_eq!(
            rarity.hash(&4, &enc),
            Err(HashError::UnknownEnumId { enum_name: "Rarity", id: 4 })
        );
        assert!(rarity.hash(&-1, &enc).is_err());
    }

    #[test]
    fn test_uuid_split() {
        let value = Uuid::from_u64_pair(0x0000_0001_0000_0002, 0xFFFF_FFFF_0000_0003);
        assert_eq!(uuid_ints(&value), [1, 2, -1, 3]);
        let enc = encoder();
        assert_eq!(uuid().hash(&value, &enc).unwrap(), enc.int_array(&[1, 2, -1, 3]));
    }

    #[test]
    fn test_map_is_key_order_independent() {
        let enc = encoder();
        let hasher = map(key(), owned_string());
        let mut first = BTreeMap::new();
        first.insert(Identifier::minecraft("a"), "x".to_string());
        first.insert(Identifier::minecraft("b"), "y".to_string());
        let hash = hasher.hash(&first, &enc);
        // A BTreeMap already iterates in key order; the encoder sorts by hash instead.
        let expected = enc.map([
            (enc.string("minecraft:b"), enc.string("y")),
            (enc.string("minecraft:a"), enc.string("x")),
        ]);
        assert_eq!(hash, Ok(expected));
    }

    #[test]
    fn test_dispatch_merges_type_key() {
        let enc = encoder();
        let hasher: Hasher<(bool, i32)> = string().dispatch(
            "type",
            |value: &(bool, i32)| if value.0 { "big" } else { "small" },
            [("big", MapBuilder::new(|b, value: &(bool, i32)| {
                b.accept("size", int(), &value.1);
            }))],
        );
        let small = hasher.hash(&(false, 9), &enc).unwrap();
        assert_eq!(small, enc.map([(enc.string("type"), enc.string("small"))]));
        let big = hasher.hash(&(true, 9), &enc).unwrap();
        assert_eq!(
            big,
            enc.map([
                (enc.string("type"), enc.string("big")),
                (enc.string("size"), enc.number(9i32)),
            ])
        );
    }

    #[test]
    fn test_filterable() {
        let enc = encoder();
        let hasher = string().filterable::<String>();
        let plain = hasher.hash(&Filterable::plain("page".to_string()), &enc).unwrap();
        assert_eq!(plain, enc.map([(enc.string("raw"), enc.string("page"))]));
        let filtered = Filterable {
            raw: "page".to_string(),
            filtered: Some("****".to_string()),
        };
        assert_ne!(hasher.hash(&filtered, &enc).unwrap(), plain);
    }

    #[test]
    fn test_hashers_are_shared() {
        assert!(std::ptr::eq(int(), int()));
        assert_eq!(format!("{:?}", int()), "Hasher<i32>");
    }
}
