//! The component hasher catalog.
//!
//! Maps every data component type to the hasher that reproduces its
//! client-side hash. The catalog is built once, is immutable afterwards,
//! and is shared by reference between threads.
//!
//! ## Type Safety
//!
//! Each hasher is registered for the value type of its component variant.
//! The wrapping projection is checked at registration, so a lookup never
//! casts; a value of the wrong variant fails with
//! [`HashError::ComponentMismatch`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use xxhash_rust::xxh64::xxh64;

use crate::config::HashingConfig;
use crate::encoder::{HashCode, HashEncoder};
use crate::hasher::{self, HashError, Hasher};
use crate::registry::{NoRegistries, RegistryLookup};
use crate::types::{HashedStack, ItemStack};
use crate::vectors;

use super::hashers::*;
use super::kind::{ComponentKind, DataComponent};
use super::text::text_component;

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two hashers were registered for one component type.
    #[error("component {0} is already registered")]
    DuplicateRegistration(ComponentKind),
}

/// A component of a stack failed to hash.
///
/// Results for the stack's other components are discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to hash component {component}: {source}")]
pub struct StackHashError {
    /// The failing component type.
    pub component: ComponentKind,
    /// The underlying failure.
    #[source]
    pub source: HashError,
}

type Projection<V> = for<'x> fn(&'x DataComponent) -> Option<&'x V>;

/// Collects registrations for a [`ComponentCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    hashers: BTreeMap<ComponentKind, Hasher<DataComponent>>,
}

impl CatalogBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hasher that accepts any component value.
    pub fn register(&mut self, kind: ComponentKind, hasher: Hasher<DataComponent>) -> Result<&mut Self, CatalogError> {
        if self.hashers.contains_key(&kind) {
            return Err(CatalogError::DuplicateRegistration(kind));
        }
        self.hashers.insert(kind, hasher);
        Ok(self)
    }

    /// Register a hasher for the payload of one component variant.
    ///
    /// `project` extracts the payload; values of other variants fail with
    /// [`HashError::ComponentMismatch`].
    pub fn register_typed<V: ?Sized + 'static>(
        &mut self,
        kind: ComponentKind,
        hasher: &Hasher<V>,
        project: Projection<V>,
    ) -> Result<&mut Self, CatalogError> {
        let hasher = hasher.clone();
        let wrapped = Hasher::new(move |component: &DataComponent, encoder| match project(component) {
            Some(value) => hasher.hash(value, encoder),
            None => Err(HashError::ComponentMismatch {
                expected: kind,
                actual: component.kind(),
            }),
        });
        self.register(kind, wrapped)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.hashers.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.hashers.is_empty()
    }

    /// Freeze the registrations.
    pub fn build(self, config: &HashingConfig) -> ComponentCatalog {
        let fingerprint = fingerprint(&self.hashers, &config.not_hashed);
        tracing::info!(
            components = self.hashers.len(),
            not_hashed = config.not_hashed.len(),
            fingerprint = %fingerprint,
            "built component catalog"
        );
        let catalog = ComponentCatalog {
            hashers: self.hashers,
            not_hashed: config.not_hashed.clone(),
            trace_fields: config.trace_fields,
            fingerprint,
        };
        if config.self_test_on_build {
            let report = vectors::verify_known_vectors(&catalog, &NoRegistries);
            if report.is_ok() {
                tracing::info!(passed = report.passed.len(), "catalog self test passed");
            } else {
                tracing::error!(
                    passed = report.passed.len(),
                    failed = report.failures.len(),
                    "catalog self test failed"
                );
            }
        }
        catalog
    }
}

fn fingerprint(hashers: &BTreeMap<ComponentKind, Hasher<DataComponent>>, not_hashed: &BTreeSet<ComponentKind>) -> String {
    let mut registered: Vec<&str> = hashers.keys().map(|kind| kind.key()).collect();
    registered.sort_unstable();
    let mut skipped: Vec<&str> = not_hashed.iter().map(|kind| kind.key()).collect();
    skipped.sort_unstable();
    let data = format!("{}|{}", registered.join(","), skipped.join(","));
    format!("{:016x}", xxh64(data.as_bytes(), 0))
}

/// Register each component variant with its payload hasher.
macro_rules! register_all {
    ($builder:ident; $($kind:ident => $hasher:expr,)+) => {
        $(
            $builder.register_typed(ComponentKind::$kind, $hasher, |component| match component {
                DataComponent::$kind(value) => Some(value),
                _ => None,
            })?;
        )+
    };
}

/// The immutable component type to hasher table.
#[derive(Debug)]
pub struct ComponentCatalog {
    hashers: BTreeMap<ComponentKind, Hasher<DataComponent>>,
    not_hashed: BTreeSet<ComponentKind>,
    trace_fields: bool,
    fingerprint: String,
}

impl ComponentCatalog {
    /// A builder for a custom catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The catalog of every vanilla component type.
    pub fn vanilla(config: &HashingConfig) -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::new();
        register_all! { builder;
            CustomData => hasher::nbt_compound(),
            MaxStackSize => hasher::int(),
            MaxDamage => hasher::int(),
            Damage => hasher::int(),
            Unbreakable => hasher::unit(),
            UseEffects => use_effects(),
            CustomName => text_component(),
            MinimumAttackCharge => hasher::float(),
            DamageType => damage_type(),
            ItemName => text_component(),
            ItemModel => hasher::key(),
            Lore => &text_component().list(),
            Rarity => rarity(),
            Enchantments => enchantments(),
            CanPlaceOn => adventure_predicate(),
            CanBreak => adventure_predicate(),
            AttributeModifiers => attribute_modifiers(),
            CustomModelData => custom_model_data(),
            TooltipDisplay => tooltip_display(),
            RepairCost => hasher::int(),
            EnchantmentGlintOverride => hasher::bool(),
            IntangibleProjectile => hasher::unit(),
            Food => food(),
            Consumable => consumable(),
            UseRemainder => item_stack(),
            UseCooldown => use_cooldown(),
            DamageResistant => damage_resistant(),
            Tool => tool(),
            Weapon => weapon(),
            PiercingWeapon => piercing_weapon(),
            AttackRange => attack_range(),
            SwingAnimation => swing_animation(),
            Enchantable => enchantable(),
            Equippable => equippable(),
            Repairable => repairable(),
            Glider => hasher::unit(),
            TooltipStyle => hasher::key(),
            DeathProtection => death_protection(),
            BlocksAttacks => blocks_attacks(),
            KineticWeapon => kinetic_weapon(),
            StoredEnchantments => enchantments(),
            DyedColor => hasher::int(),
            MapColor => hasher::int(),
            MapId => hasher::int(),
            MapDecorations => hasher::nbt_compound(),
            ChargedProjectiles => &item_stack().list(),
            BundleContents => &item_stack().list(),
            PotionContents => potion_contents(),
            PotionDurationScale => hasher::float(),
            SuspiciousStewEffects => suspicious_stew_effects(),
            WritableBookContent => writable_book(),
            WrittenBookContent => written_book(),
            Trim => armor_trim(),
            DebugStickState => hasher::nbt_compound(),
            EntityData => entity_data(),
            BucketEntityData => hasher::nbt_compound(),
            BlockEntityData => block_entity_data(),
            Instrument => instrument(),
            ProvidesTrimMaterial => provides_trim_material(),
            OminousBottleAmplifier => hasher::int(),
            JukeboxPlayable => jukebox_playable(),
            ProvidesBannerPatterns => hasher::tag(),
            Recipes => hasher::nbt_list(),
            LodestoneTracker => lodestone_tracker(),
            FireworkExplosion => firework_explosion(),
            Fireworks => fireworks(),
            Profile => resolvable_profile(),
            NoteBlockSound => hasher::key(),
            BannerPatterns => banner_layers(),
            BaseColor => dye_color(),
            PotDecorations => &item().list(),
            Container => container(),
            BlockState => block_state(),
            Bees => bees(),
            Lock => hasher::nbt_compound(),
            ContainerLoot => hasher::nbt_compound(),
            BreakSound => sound(),
            VillagerVariant => villager_variant(),
            WolfVariant => wolf_variant(),
            WolfSoundVariant => wolf_sound_variant(),
            WolfCollar => dye_color(),
            FoxVariant => fox_variant(),
            SalmonSize => salmon_size(),
            ParrotVariant => parrot_variant(),
            TropicalFishPattern => tropical_fish_pattern(),
            TropicalFishBaseColor => dye_color(),
            TropicalFishPatternColor => dye_color(),
            MooshroomVariant => mooshroom_variant(),
            RabbitVariant => rabbit_variant(),
            PigVariant => pig_variant(),
            CowVariant => cow_variant(),
            ChickenVariant => chicken_variant(),
            ZombieNautilusVariant => zombie_nautilus_variant(),
            FrogVariant => frog_variant(),
            HorseVariant => horse_variant(),
            PaintingVariant => painting_variant(),
            LlamaVariant => llama_variant(),
            AxolotlVariant => axolotl_variant(),
            CatVariant => cat_variant(),
            CatCollar => dye_color(),
            SheepColor => dye_color(),
            ShulkerColor => dye_color(),
        }
        Ok(builder.build(config))
    }

    /// The process-wide vanilla catalog, configured from the environment.
    pub fn global() -> Result<&'static ComponentCatalog, CatalogError> {
        static GLOBAL: LazyLock<Result<ComponentCatalog, CatalogError>> =
            LazyLock::new(|| ComponentCatalog::vanilla(&HashingConfig::from_env()));
        GLOBAL.as_ref().map_err(Clone::clone)
    }

    /// The hasher for a component type.
    pub fn hasher(&self, kind: ComponentKind) -> Result<&Hasher<DataComponent>, HashError> {
        self.hashers.get(&kind).ok_or(HashError::UnregisteredComponent(kind))
    }

    /// Whether a hasher is registered for `kind`.
    pub fn is_registered(&self, kind: ComponentKind) -> bool {
        self.hashers.contains_key(&kind)
    }

    /// Whether stack hashing includes `kind`.
    pub fn is_hashed(&self, kind: ComponentKind) -> bool {
        !self.not_hashed.contains(&kind)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.hashers.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.hashers.is_empty()
    }

    /// Registered types in protocol order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.hashers.keys().copied()
    }

    /// xxh64 digest of the registered and skipped component keys, as hex.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// An encoder bound to this catalog, for hashing nested item stacks.
    pub fn encoder<'a>(&'a self, registries: &'a dyn RegistryLookup) -> HashEncoder<'a> {
        HashEncoder::new(registries)
            .with_catalog(self)
            .with_field_tracing(self.trace_fields)
    }

    /// Hash one component value.
    pub fn hash(&self, component: &DataComponent, registries: &dyn RegistryLookup) -> Result<HashCode, HashError> {
        let encoder = self.encoder(registries);
        self.hash_with(component, &encoder).inspect_err(|error| {
            tracing::error!(
                component = %component.kind(),
                value = ?component,
                %error,
                "failed to hash component"
            );
        })
    }

    /// Hash one component value with an existing encoder.
    pub fn hash_with(&self, component: &DataComponent, encoder: &HashEncoder<'_>) -> Result<HashCode, HashError> {
        self.hasher(component.kind())?.hash(component, encoder)
    }

    /// Hash every component of a stack's patch.
    ///
    /// Types in the not-hashed set are skipped. The first failing component
    /// fails the whole stack.
    pub fn hash_stack(&self, stack: &ItemStack, registries: &dyn RegistryLookup) -> Result<HashedStack, StackHashError> {
        let mut hashed = HashedStack {
            item_id: stack.id,
            count: stack.count,
            ..HashedStack::default()
        };
        let Some(patch) = &stack.components else {
            return Ok(hashed);
        };

        let encoder = self.encoder(registries);
        for (kind, value) in patch.iter() {
            if self.not_hashed.contains(&kind) {
                tracing::debug!(component = %kind, "skipping component that is not hashed");
                continue;
            }
            match value {
                None => {
                    hashed.removed_components.insert(kind);
                }
                Some(component) => {
                    let hash = self.hash_with(component, &encoder).map_err(|source| {
                        tracing::error!(
                            component = %kind,
                            value = ?component,
                            item_id = stack.id,
                            error = %source,
                            "failed to hash component"
                        );
                        StackHashError { component: kind, source }
                    })?;
                    hashed.added_components.insert(kind, hash.as_int());
                }
            }
        }
        Ok(hashed)
    }

    /// Hash an inventory slot. An empty slot has no hashed form.
    pub fn hash_slot(&self, stack: Option<&ItemStack>, registries: &dyn RegistryLookup) -> Result<Option<HashedStack>, StackHashError> {
        stack.map(|stack| self.hash_stack(stack, registries)).transpose()
    }
}
