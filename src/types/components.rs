//! Decoded values of individual data components.
//!
//! Registry-backed fields hold network ids (`i32`); the hashers resolve them
//! to keys through the session registries.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::holder::{Holder, HolderSet, RegistryRef};
use super::identifier::Identifier;
use super::item::ItemStack;
use super::nbt::NbtCompound;
use super::text::TextComponent;
use super::variants::{
    EquipmentSlot, EquipmentSlotGroup, ItemUseAnimation, ModifierOperation, PlayerModelType,
    SwingAnimationType,
};
use crate::component::ComponentKind;

/// A sound event: a builtin key, or a custom sound with an optional range.
#[derive(Debug, Clone, PartialEq)]
pub enum Sound {
    /// A vanilla sound, by key.
    Builtin(Identifier),
    /// A custom sound.
    Custom(CustomSound),
}

impl Sound {
    /// A builtin sound in the `minecraft` namespace.
    pub fn builtin(path: &str) -> Self {
        Sound::Builtin(Identifier::minecraft(path))
    }
}

/// A sound that is not in the builtin registry.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSound {
    /// Sound key.
    pub id: Identifier,
    /// Attenuation range. The serialized default is `16.0`.
    pub range: f32,
}

/// A value that may carry a separately filtered variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Filterable<T> {
    /// Unfiltered value.
    pub raw: T,
    /// Value shown to players with chat filtering enabled.
    pub filtered: Option<T>,
}

impl<T> Filterable<T> {
    /// A value without a filtered variant.
    pub fn plain(raw: T) -> Self {
        Self { raw, filtered: None }
    }
}

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Construct a position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A position in a named dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalPos {
    /// Dimension key.
    pub dimension: Identifier,
    /// Block position.
    pub pos: BlockPos,
}

/// A signed profile property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileProperty {
    /// Property name, e.g. `textures`.
    pub name: String,
    /// Property value.
    pub value: String,
    /// Signature over the value.
    pub signature: Option<String>,
}

/// A player profile, possibly partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameProfile {
    /// Player name.
    pub name: Option<String>,
    /// Player UUID.
    pub id: Option<Uuid>,
    /// Profile properties.
    pub properties: Vec<ProfileProperty>,
}

/// A profile plus an optional skin override, as carried by player heads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvableProfile {
    /// Profile fields.
    pub profile: GameProfile,
    /// Skin texture override.
    pub texture: Option<Identifier>,
    /// Cape texture override.
    pub cape: Option<Identifier>,
    /// Elytra texture override.
    pub elytra: Option<Identifier>,
    /// Arm model override.
    pub model: Option<PlayerModelType>,
}

/// `minecraft:use_effects`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct UseEffects {
    pub can_sprint: bool,
    pub interact_vibrations: bool,
    pub speed_multiplier: f32,
}

/// Enchantment network id to level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEnchantments {
    /// Levels by enchantment id.
    pub enchantments: BTreeMap<i32, i32>,
}

/// One block predicate of an adventure-mode check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockPredicate {
    /// Matching blocks.
    pub blocks: Option<HolderSet>,
    /// Required block entity NBT.
    pub nbt: Option<NbtCompound>,
}

/// `minecraft:can_place_on` / `minecraft:can_break`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdventureModePredicate {
    /// Predicates; any match passes.
    pub predicates: Vec<BlockPredicate>,
}

/// How an attribute modifier shows in the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub enum ModifierDisplay {
    /// Vanilla rendering.
    Default,
    /// Not shown.
    Hidden,
    /// Replaced by a component.
    Override(TextComponent),
}

impl ModifierDisplay {
    /// Serialized type name.
    pub const fn type_name(&self) -> &'static str {
        match self {
            ModifierDisplay::Default => "default",
            ModifierDisplay::Hidden => "hidden",
            ModifierDisplay::Override(_) => "override",
        }
    }
}

/// One attribute modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifierEntry {
    /// Attribute network id.
    pub attribute: i32,
    /// Modifier key.
    pub id: Identifier,
    /// Modifier amount.
    pub amount: f64,
    /// Combination rule.
    pub operation: ModifierOperation,
    /// Slot group.
    pub slot: EquipmentSlotGroup,
    /// Tooltip display.
    pub display: ModifierDisplay,
}

/// `minecraft:attribute_modifiers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemAttributeModifiers {
    /// Modifiers in order.
    pub modifiers: Vec<AttributeModifierEntry>,
}

/// `minecraft:custom_model_data`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct CustomModelData {
    pub floats: Vec<f32>,
    pub flags: Vec<bool>,
    pub strings: Vec<String>,
    pub colors: Vec<i32>,
}

/// `minecraft:tooltip_display`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipDisplay {
    /// Hide the whole tooltip.
    pub hide_tooltip: bool,
    /// Components whose tooltip lines are hidden.
    pub hidden_components: Vec<ComponentKind>,
}

/// `minecraft:food`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct FoodProperties {
    pub nutrition: i32,
    pub saturation: f32,
    pub can_always_eat: bool,
}

/// Details of a mob effect instance.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct MobEffectDetails {
    pub amplifier: i32,
    pub duration: i32,
    pub ambient: bool,
    pub show_particles: bool,
    pub show_icon: bool,
}

impl Default for MobEffectDetails {
    fn default() -> Self {
        Self {
            amplifier: 0,
            duration: 0,
            ambient: false,
            show_particles: true,
            show_icon: true,
        }
    }
}

/// A mob effect with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MobEffectInstance {
    /// Mob effect network id.
    pub effect: i32,
    /// Parameters.
    pub details: MobEffectDetails,
}

/// Something that happens when an item is consumed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumeEffect {
    /// Apply effects with a probability.
    ApplyEffects {
        /// Effects to apply.
        effects: Vec<MobEffectInstance>,
        /// Chance in `[0, 1]`.
        probability: f32,
    },
    /// Remove the given effects.
    RemoveEffects(HolderSet),
    /// Remove all effects.
    ClearAllEffects,
    /// Teleport within a cube.
    TeleportRandomly {
        /// Cube edge length.
        diameter: f32,
    },
    /// Play a sound.
    PlaySound(Sound),
}

impl ConsumeEffect {
    /// Registry key of the effect type.
    pub const fn type_path(&self) -> &'static str {
        match self {
            ConsumeEffect::ApplyEffects { .. } => "apply_effects",
            ConsumeEffect::RemoveEffects(_) => "remove_effects",
            ConsumeEffect::ClearAllEffects => "clear_all_effects",
            ConsumeEffect::TeleportRandomly { .. } => "teleport_randomly",
            ConsumeEffect::PlaySound(_) => "play_sound",
        }
    }
}

/// `minecraft:consumable`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Consumable {
    pub consume_seconds: f32,
    pub animation: ItemUseAnimation,
    pub sound: Sound,
    pub has_consume_particles: bool,
    pub on_consume_effects: Vec<ConsumeEffect>,
}

/// `minecraft:use_cooldown`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct UseCooldown {
    pub seconds: f32,
    pub cooldown_group: Option<Identifier>,
}

/// A mining rule of a tool.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct ToolRule {
    pub blocks: HolderSet,
    pub speed: Option<f32>,
    pub correct_for_drops: Option<bool>,
}

/// `minecraft:tool`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct ToolData {
    pub rules: Vec<ToolRule>,
    pub default_mining_speed: f32,
    pub damage_per_block: i32,
    pub can_destroy_blocks_in_creative: bool,
}

/// `minecraft:weapon`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Weapon {
    pub item_damage_per_attack: i32,
    pub disable_blocking_for_seconds: f32,
}

/// `minecraft:piercing_weapon`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct PiercingWeapon {
    pub deals_knockback: bool,
    pub dismounts: bool,
    pub sound: Option<Sound>,
    pub hit_sound: Option<Sound>,
}

/// `minecraft:attack_range`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct AttackRange {
    pub min_reach: f32,
    pub max_reach: f32,
    pub min_creative_reach: f32,
    pub max_creative_reach: f32,
    pub hitbox_margin: f32,
    pub mob_factor: f32,
}

/// `minecraft:swing_animation`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct SwingAnimation {
    pub animation: SwingAnimationType,
    pub duration: i32,
}

/// `minecraft:equippable`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Equippable {
    pub slot: EquipmentSlot,
    pub equip_sound: Sound,
    pub asset_id: Option<Identifier>,
    pub camera_overlay: Option<Identifier>,
    pub allowed_entities: Option<HolderSet>,
    pub dispensable: bool,
    pub swappable: bool,
    pub damage_on_hurt: bool,
    pub equip_on_interact: bool,
    pub can_be_sheared: bool,
    pub shearing_sound: Sound,
}

impl Equippable {
    /// An equippable with every optional field at its default.
    pub fn new(slot: EquipmentSlot) -> Self {
        Self {
            slot,
            equip_sound: Sound::builtin("item.armor.equip_generic"),
            asset_id: None,
            camera_overlay: None,
            allowed_entities: None,
            dispensable: true,
            swappable: true,
            damage_on_hurt: true,
            equip_on_interact: false,
            can_be_sheared: false,
            shearing_sound: Sound::builtin("item.shears.snip"),
        }
    }
}

/// Damage reduction applied while blocking.
///
/// Equality compares floats by bit pattern, so `-0.0` differs from `0.0`.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct DamageReduction {
    pub horizontal_blocking_angle: f32,
    pub damage_types: Option<HolderSet>,
    pub base: f32,
    pub factor: f32,
}

/// Durability lost when blocking.
///
/// Equality compares floats by bit pattern, like [`DamageReduction`].
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct ItemDamageFunction {
    pub threshold: f32,
    pub base: f32,
    pub factor: f32,
}

fn same_bits(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits()
}

impl PartialEq for DamageReduction {
    fn eq(&self, other: &Self) -> bool {
        same_bits(self.horizontal_blocking_angle, other.horizontal_blocking_angle)
            && self.damage_types == other.damage_types
            && same_bits(self.base, other.base)
            && same_bits(self.factor, other.factor)
    }
}

impl PartialEq for ItemDamageFunction {
    fn eq(&self, other: &Self) -> bool {
        same_bits(self.threshold, other.threshold)
            && same_bits(self.base, other.base)
            && same_bits(self.factor, other.factor)
    }
}

/// `minecraft:blocks_attacks`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct BlocksAttacks {
    pub block_delay_seconds: f32,
    pub disable_cooldown_scale: f32,
    pub damage_reductions: Vec<DamageReduction>,
    pub item_damage: ItemDamageFunction,
    pub bypassed_by: Option<Identifier>,
    pub block_sound: Option<Sound>,
    pub disable_sound: Option<Sound>,
}

impl BlocksAttacks {
    /// The serialized default of `damage_reductions`.
    pub fn default_damage_reductions() -> Vec<DamageReduction> {
        vec![DamageReduction {
            horizontal_blocking_angle: 90.0,
            damage_types: None,
            base: 0.0,
            factor: 1.0,
        }]
    }

    /// The serialized default of `item_damage`.
    pub fn default_item_damage() -> ItemDamageFunction {
        ItemDamageFunction {
            threshold: 1.0,
            base: 0.0,
            factor: 1.0,
        }
    }
}

/// A speed condition of a kinetic weapon.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct KineticCondition {
    pub max_duration_ticks: i32,
    pub min_speed: f32,
    pub min_relative_speed: f32,
}

/// `minecraft:kinetic_weapon`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct KineticWeapon {
    pub contact_cooldown_ticks: i32,
    pub delay_ticks: i32,
    pub dismount_conditions: Option<KineticCondition>,
    pub knockback_conditions: Option<KineticCondition>,
    pub damage_conditions: Option<KineticCondition>,
    pub forward_movement: f32,
    pub damage_multiplier: f32,
    pub sound: Option<Sound>,
    pub hit_sound: Option<Sound>,
}

/// `minecraft:potion_contents`.
#[derive(Debug, Clone, PartialEq)]
pub struct PotionContents {
    /// Potion network id, or `-1` for none.
    pub potion: i32,
    /// Custom color, or `-1` for none.
    pub custom_color: i32,
    /// Effects beyond the potion's own.
    pub custom_effects: Vec<MobEffectInstance>,
    /// Custom translation suffix.
    pub custom_name: Option<String>,
}

impl Default for PotionContents {
    fn default() -> Self {
        Self {
            potion: -1,
            custom_color: -1,
            custom_effects: Vec::new(),
            custom_name: None,
        }
    }
}

/// One suspicious stew effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousStewEffect {
    /// Mob effect network id.
    pub effect: i32,
    /// Duration in ticks.
    pub duration: i32,
}

/// `minecraft:writable_book_content`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WritableBookContent {
    /// Pages.
    pub pages: Vec<Filterable<String>>,
}

/// `minecraft:written_book_content`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct WrittenBookContent {
    pub title: Filterable<String>,
    pub author: String,
    pub generation: i32,
    pub pages: Vec<Filterable<TextComponent>>,
    pub resolved: bool,
}

/// An inline armor trim material.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct TrimMaterial {
    pub asset_name: String,
    pub override_armor_assets: BTreeMap<Identifier, String>,
    pub description: TextComponent,
}

/// An inline armor trim pattern.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct TrimPattern {
    pub asset_id: Identifier,
    pub description: TextComponent,
    pub decal: bool,
}

/// `minecraft:trim`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct ArmorTrim {
    pub material: Holder<TrimMaterial>,
    pub pattern: Holder<TrimPattern>,
}

/// NBT tagged with the entity or block entity type it spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedEntityData {
    /// Entity type or block entity type network id.
    pub type_id: i32,
    /// Data, without the `id` key.
    pub tag: NbtCompound,
}

/// An inline goat horn instrument.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Instrument {
    pub sound_event: Sound,
    pub use_duration: f32,
    pub range: f32,
    pub description: TextComponent,
}

/// An inline jukebox song.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct JukeboxSong {
    pub sound_event: Sound,
    pub description: TextComponent,
    pub length_in_seconds: f32,
    pub comparator_output: i32,
}

/// `minecraft:lodestone_tracker`.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct LodestoneTracker {
    pub target: Option<GlobalPos>,
    pub tracked: bool,
}

/// A firework star explosion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireworkExplosion {
    /// Shape network id.
    pub shape: i32,
    /// Colors.
    pub colors: Vec<i32>,
    /// Fade colors.
    pub fade_colors: Vec<i32>,
    /// Leaves a trail.
    pub has_trail: bool,
    /// Twinkles.
    pub has_twinkle: bool,
}

/// `minecraft:fireworks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fireworks {
    /// Flight duration, hashed as a byte.
    pub flight_duration: i32,
    /// Explosions.
    pub explosions: Vec<FireworkExplosion>,
}

/// An inline banner pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct BannerPattern {
    pub asset_id: Identifier,
    pub translation_key: String,
}

/// One layer of a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerPatternLayer {
    /// Pattern.
    pub pattern: Holder<BannerPattern>,
    /// Dye color network id.
    pub color: i32,
}

/// A bee stored in a hive.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct BeehiveOccupant {
    pub entity_data: TypedEntityData,
    pub ticks_in_hive: i32,
    pub min_ticks_in_hive: i32,
}

/// `minecraft:block_state`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStateProperties {
    /// Property name to value.
    pub properties: BTreeMap<String, String>,
}

/// `minecraft:container`: slots in order. Empty slots are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerContents {
    /// Slots.
    pub slots: Vec<Option<ItemStack>>,
}

/// `minecraft:instrument`.
pub type InstrumentComponent = RegistryRef<Instrument>;

/// `minecraft:provides_trim_material`.
pub type ProvidesTrimMaterial = RegistryRef<TrimMaterial>;

/// `minecraft:jukebox_playable`.
pub type JukeboxPlayable = RegistryRef<JukeboxSong>;
