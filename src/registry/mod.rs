//! Registry descriptors and lookup backends.
//!
//! The protocol sends registry entries as network ids, which depend on the
//! registry snapshot the server sent for the session. Hashes use the stable
//! key instead, so every registry-backed hasher resolves ids through a
//! [`RegistryLookup`].

pub mod hasher;
pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Identifier;

pub use hasher::RegistryHasher;
pub use memory::InMemoryRegistries;

/// A registry the catalog reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Registry {
    Block,
    Item,
    EntityType,
    BlockEntityType,
    Enchantment,
    Attribute,
    MobEffect,
    Potion,
    VillagerType,
    DamageType,
    Instrument,
    TrimMaterial,
    TrimPattern,
    JukeboxSong,
    BannerPattern,
    WolfVariant,
    WolfSoundVariant,
    PigVariant,
    CowVariant,
    ChickenVariant,
    ZombieNautilusVariant,
    FrogVariant,
    PaintingVariant,
    CatVariant,
}

impl Registry {
    /// Path of the registry key, e.g. `trim_material`.
    pub const fn path(self) -> &'static str {
        match self {
            Registry::Block => "block",
            Registry::Item => "item",
            Registry::EntityType => "entity_type",
            Registry::BlockEntityType => "block_entity_type",
            Registry::Enchantment => "enchantment",
            Registry::Attribute => "attribute",
            Registry::MobEffect => "mob_effect",
            Registry::Potion => "potion",
            Registry::VillagerType => "villager_type",
            Registry::DamageType => "damage_type",
            Registry::Instrument => "instrument",
            Registry::TrimMaterial => "trim_material",
            Registry::TrimPattern => "trim_pattern",
            Registry::JukeboxSong => "jukebox_song",
            Registry::BannerPattern => "banner_pattern",
            Registry::WolfVariant => "wolf_variant",
            Registry::WolfSoundVariant => "wolf_sound_variant",
            Registry::PigVariant => "pig_variant",
            Registry::CowVariant => "cow_variant",
            Registry::ChickenVariant => "chicken_variant",
            Registry::ZombieNautilusVariant => "zombie_nautilus_variant",
            Registry::FrogVariant => "frog_variant",
            Registry::PaintingVariant => "painting_variant",
            Registry::CatVariant => "cat_variant",
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.path())
    }
}

/// Resolves network ids to registry keys for one session.
///
/// Implementations must be synchronous and already populated: hashing never
/// waits on a lookup.
pub trait RegistryLookup: Send + Sync {
    /// The key of entry `id` in `registry`, if the snapshot has one.
    fn key_from_network_id(&self, registry: Registry, id: i32) -> Option<Identifier>;
}

/// A lookup with no entries.
///
/// Useful for hashing components that never touch a registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistries;

impl RegistryLookup for NoRegistries {
    fn key_from_network_id(&self, _registry: Registry, _id: i32) -> Option<Identifier> {
        None
    }
}

impl<L: RegistryLookup + ?Sized> RegistryLookup for &L {
    fn key_from_network_id(&self, registry: Registry, id: i32) -> Option<Identifier> {
        (**self).key_from_network_id(registry, id)
    }
}
