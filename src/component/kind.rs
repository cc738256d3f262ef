//! Data component types and values.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::types::*;

macro_rules! data_components {
    ($($variant:ident($ty:ty) => $path:literal,)+) => {
        /// A data component type, in protocol registration order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ComponentKind {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl ComponentKind {
            /// Every component type.
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$variant),+];

            /// Path of the component key, e.g. `max_stack_size`.
            pub const fn path(self) -> &'static str {
                match self {
                    $(ComponentKind::$variant => $path,)+
                }
            }

            /// Full component key, e.g. `minecraft:max_stack_size`.
            pub const fn key(self) -> &'static str {
                match self {
                    $(ComponentKind::$variant => concat!("minecraft:", $path),)+
                }
            }

            /// Look a type up by key. A bare path is read in the `minecraft` namespace.
            pub fn from_key(key: &str) -> Option<Self> {
                let path = match key.split_once(':') {
                    Some(("minecraft", path)) => path,
                    Some(_) => return None,
                    None => key,
                };
                match path {
                    $($path => Some(ComponentKind::$variant),)+
                    _ => None,
                }
            }
        }

        /// A component value tagged with its type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum DataComponent {
            $(
                #[allow(missing_docs)]
                $variant($ty),
            )+
        }

        impl DataComponent {
            /// The type of this value.
            pub const fn kind(&self) -> ComponentKind {
                match self {
                    $(DataComponent::$variant(_) => ComponentKind::$variant,)+
                }
            }
        }
    };
}

data_components! {
    CustomData(NbtCompound) => "custom_data",
    MaxStackSize(i32) => "max_stack_size",
    MaxDamage(i32) => "max_damage",
    Damage(i32) => "damage",
    Unbreakable(()) => "unbreakable",
    UseEffects(UseEffects) => "use_effects",
    CustomName(TextComponent) => "custom_name",
    MinimumAttackCharge(f32) => "minimum_attack_charge",
    DamageType(Holder<Identifier>) => "damage_type",
    ItemName(TextComponent) => "item_name",
    ItemModel(Identifier) => "item_model",
    Lore(Vec<TextComponent>) => "lore",
    Rarity(Rarity) => "rarity",
    Enchantments(ItemEnchantments) => "enchantments",
    CanPlaceOn(AdventureModePredicate) => "can_place_on",
    CanBreak(AdventureModePredicate) => "can_break",
    AttributeModifiers(ItemAttributeModifiers) => "attribute_modifiers",
    CustomModelData(CustomModelData) => "custom_model_data",
    TooltipDisplay(TooltipDisplay) => "tooltip_display",
    RepairCost(i32) => "repair_cost",
    CreativeSlotLock(()) => "creative_slot_lock",
    EnchantmentGlintOverride(bool) => "enchantment_glint_override",
    IntangibleProjectile(()) => "intangible_projectile",
    Food(FoodProperties) => "food",
    Consumable(Consumable) => "consumable",
    UseRemainder(ItemStack) => "use_remainder",
    UseCooldown(UseCooldown) => "use_cooldown",
    DamageResistant(Identifier) => "damage_resistant",
    Tool(ToolData) => "tool",
    Weapon(Weapon) => "weapon",
    PiercingWeapon(PiercingWeapon) => "piercing_weapon",
    AttackRange(AttackRange) => "attack_range",
    SwingAnimation(SwingAnimation) => "swing_animation",
    Enchantable(i32) => "enchantable",
    Equippable(Equippable) => "equippable",
    Repairable(HolderSet) => "repairable",
    Glider(()) => "glider",
    TooltipStyle(Identifier) => "tooltip_style",
    DeathProtection(Vec<ConsumeEffect>) => "death_protection",
    BlocksAttacks(BlocksAttacks) => "blocks_attacks",
    KineticWeapon(KineticWeapon) => "kinetic_weapon",
    StoredEnchantments(ItemEnchantments) => "stored_enchantments",
    DyedColor(i32) => "dyed_color",
    MapColor(i32) => "map_color",
    MapId(i32) => "map_id",
    MapDecorations(NbtCompound) => "map_decorations",
    MapPostProcessing(i32) => "map_post_processing",
    ChargedProjectiles(Vec<ItemStack>) => "charged_projectiles",
    BundleContents(Vec<ItemStack>) => "bundle_contents",
    PotionContents(PotionContents) => "potion_contents",
    PotionDurationScale(f32) => "potion_duration_scale",
    SuspiciousStewEffects(Vec<SuspiciousStewEffect>) => "suspicious_stew_effects",
    WritableBookContent(WritableBookContent) => "writable_book_content",
    WrittenBookContent(WrittenBookContent) => "written_book_content",
    Trim(ArmorTrim) => "trim",
    DebugStickState(NbtCompound) => "debug_stick_state",
    EntityData(TypedEntityData) => "entity_data",
    BucketEntityData(NbtCompound) => "bucket_entity_data",
    BlockEntityData(TypedEntityData) => "block_entity_data",
    Instrument(InstrumentComponent) => "instrument",
    ProvidesTrimMaterial(ProvidesTrimMaterial) => "provides_trim_material",
    OminousBottleAmplifier(i32) => "ominous_bottle_amplifier",
    JukeboxPlayable(JukeboxPlayable) => "jukebox_playable",
    ProvidesBannerPatterns(Identifier) => "provides_banner_patterns",
    Recipes(Vec<Nbt>) => "recipes",
    LodestoneTracker(LodestoneTracker) => "lodestone_tracker",
    FireworkExplosion(FireworkExplosion) => "firework_explosion",
    Fireworks(Fireworks) => "fireworks",
    Profile(ResolvableProfile) => "profile",
    NoteBlockSound(Identifier) => "note_block_sound",
    BannerPatterns(Vec<BannerPatternLayer>) => "banner_patterns",
    BaseColor(i32) => "base_color",
    PotDecorations(Vec<i32>) => "pot_decorations",
    Container(ContainerContents) => "container",
    BlockState(BlockStateProperties) => "block_state",
    Bees(Vec<BeehiveOccupant>) => "bees",
    Lock(NbtCompound) => "lock",
    ContainerLoot(NbtCompound) => "container_loot",
    BreakSound(Sound) => "break_sound",
    VillagerVariant(i32) => "villager/variant",
    WolfVariant(i32) => "wolf/variant",
    WolfSoundVariant(i32) => "wolf/sound_variant",
    WolfCollar(i32) => "wolf/collar",
    FoxVariant(i32) => "fox/variant",
    SalmonSize(i32) => "salmon/size",
    ParrotVariant(i32) => "parrot/variant",
    TropicalFishPattern(i32) => "tropical_fish/pattern",
    TropicalFishBaseColor(i32) => "tropical_fish/base_color",
    TropicalFishPatternColor(i32) => "tropical_fish/pattern_color",
    MooshroomVariant(i32) => "mooshroom/variant",
    RabbitVariant(i32) => "rabbit/variant",
    PigVariant(i32) => "pig/variant",
    CowVariant(i32) => "cow/variant",
    ChickenVariant(Holder<Identifier>) => "chicken/variant",
    ZombieNautilusVariant(Holder<Identifier>) => "zombie_nautilus/variant",
    FrogVariant(i32) => "frog/variant",
    HorseVariant(i32) => "horse/variant",
    PaintingVariant(i32) => "painting/variant",
    LlamaVariant(i32) => "llama/variant",
    AxolotlVariant(i32) => "axolotl/variant",
    CatVariant(i32) => "cat/variant",
    CatCollar(i32) => "cat/collar",
    SheepColor(i32) => "sheep/color",
    ShulkerColor(i32) => "shulker/color",
}

impl ComponentKind {
    /// The key as an [`Identifier`].
    pub fn identifier(self) -> Identifier {
        Identifier::minecraft(self.path())
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        ComponentKind::from_key(&key).ok_or_else(|| de::Error::custom(format!("unknown component type {key}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let mut keys: Vec<_> = ComponentKind::ALL.iter().map(|kind| kind.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ComponentKind::ALL.len());
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_key(kind.key()), Some(*kind));
        }
    }

    #[test]
    fn test_from_key_namespaces() {
        assert_eq!(ComponentKind::from_key("salmon/size"), Some(ComponentKind::SalmonSize));
        assert_eq!(ComponentKind::from_key("minecraft:food"), Some(ComponentKind::Food));
        assert_eq!(ComponentKind::from_key("custom:food"), None);
        assert_eq!(ComponentKind::from_key("minecraft:no_such_thing"), None);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(DataComponent::Unbreakable(()).kind(), ComponentKind::Unbreakable);
        assert_eq!(DataComponent::CatCollar(3).kind().key(), "minecraft:cat/collar");
        assert_eq!(ComponentKind::Glider.identifier(), Identifier::minecraft("glider"));
    }

    #[test]
    fn test_serde_as_key() {
        let json = serde_json::to_string(&ComponentKind::MaxStackSize).unwrap();
        assert_eq!(json, "\"minecraft:max_stack_size\"");
        let back: ComponentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ComponentKind::MaxStackSize);
        assert!(serde_json::from_str::<ComponentKind>("\"minecraft:bogus\"").is_err());
    }
}
