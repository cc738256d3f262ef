//! Known hash vectors recorded from the vanilla client.
//!
//! The table holds components whose hashes do not depend on any registry,
//! so a catalog can check itself against them with [`NoRegistries`]
//! before it is trusted with live traffic.
//!
//! [`NoRegistries`]: crate::registry::NoRegistries

use crate::component::{ComponentCatalog, ComponentKind, DataComponent};
use crate::hasher::HashError;
use crate::registry::RegistryLookup;
use crate::types::*;

/// A component value and the hash the vanilla client computes for it.
#[derive(Debug, Clone)]
pub struct KnownVector {
    /// Short label for logs.
    pub name: &'static str,
    /// The value to hash.
    pub component: DataComponent,
    /// Expected hash, as the signed int the client sends.
    pub expected: i32,
}

/// A vector whose hash did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorFailure {
    /// Label of the vector.
    pub name: &'static str,
    /// Component type of the vector.
    pub component: ComponentKind,
    /// Expected hash.
    pub expected: i32,
    /// What the catalog produced.
    pub actual: Result<i32, HashError>,
}

/// Outcome of [`verify_known_vectors`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Labels of matching vectors.
    pub passed: Vec<&'static str>,
    /// Mismatching vectors.
    pub failures: Vec<VectorFailure>,
}

impl SelfTestReport {
    /// Whether every vector matched.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

fn key(path: &str) -> Identifier {
    Identifier::minecraft(path)
}

fn vector(name: &'static str, component: DataComponent, expected: i32) -> KnownVector {
    KnownVector { name, component, expected }
}

fn equippable(
    slot: EquipmentSlot,
    equip_sound: Sound,
    flags: [bool; 5],
    shearing_sound: Sound,
) -> Equippable {
    let [dispensable, swappable, damage_on_hurt, equip_on_interact, can_be_sheared] = flags;
    Equippable {
        equip_sound,
        dispensable,
        swappable,
        damage_on_hurt,
        equip_on_interact,
        can_be_sheared,
        shearing_sound,
        ..Equippable::new(slot)
    }
}

/// Every registry-free vector.
pub fn known_vectors() -> Vec<KnownVector> {
    use DataComponent as C;

    let custom_data = NbtCompound::new()
        .with("hello", "g'day")
        .with("nice?", false)
        .with("coolness", Nbt::Byte(100))
        .with("geyser", NbtCompound::new().with("is", "very cool"))
        .with("a list", Nbt::List(vec![Nbt::List(vec!["in a list".into()])]));

    let map_decorations = NbtCompound::new().with(
        "test_decoration",
        NbtCompound::new()
            .with("type", "minecraft:player")
            .with("x", Nbt::Double(45.0))
            .with("z", Nbt::Double(67.4))
            .with("rotation", Nbt::Float(39.5)),
    );

    let styled = TextComponent::text("component with *style*")
        .color(TextColor::Named(NamedColor::Red))
        .italic(true);
    let with_children = TextComponent::text("component with more stuff").append(
        TextComponent::translatable_with_fallback("a.translate.string", "fallback!")
            .color(TextColor::Rgb(0x446688))
            .bold(true),
    );

    let food = |nutrition, saturation, can_always_eat| FoodProperties {
        nutrition,
        saturation,
        can_always_eat,
    };
    let tool = |default_mining_speed, damage_per_block, can_destroy_blocks_in_creative| ToolData {
        rules: Vec::new(),
        default_mining_speed,
        damage_per_block,
        can_destroy_blocks_in_creative,
    };
    let weapon = |item_damage_per_attack, disable_blocking_for_seconds| Weapon {
        item_damage_per_attack,
        disable_blocking_for_seconds,
    };
    let model_data = |floats: &[f32], flags: &[bool], strings: &[&str], colors: &[i32]| CustomModelData {
        floats: floats.to_vec(),
        flags: flags.to_vec(),
        strings: strings.iter().map(|s| s.to_string()).collect(),
        colors: colors.to_vec(),
    };

    vec![
        vector("custom_data", C::CustomData(custom_data), -385053299),
        vector("max_stack_size", C::MaxStackSize(64), 733160003),
        vector("max_damage", C::MaxDamage(13), -801733367),
        vector("damage", C::Damage(459), 1211405277),
        vector("unbreakable", C::Unbreakable(()), -982207288),
        vector("custom_name/plain", C::CustomName(TextComponent::text("simple component test!")), 950545066),
        vector("custom_name/translatable", C::CustomName(TextComponent::translatable("a.translatable")), 1983484873),
        vector("custom_name/styled", C::CustomName(styled), -886479206),
        vector("custom_name/children", C::CustomName(with_children), -1591253390),
        vector("item_model", C::ItemModel(key("testing")), -689946239),
        vector("rarity/common", C::Rarity(Rarity::Common), 75150990),
        vector("rarity/rare", C::Rarity(Rarity::Rare), -1420566726),
        vector("rarity/epic", C::Rarity(Rarity::Epic), -292715907),
        vector(
            "custom_model_data/full",
            C::CustomModelData(model_data(&[5.0, 3.0, -1.0], &[false, true, false], &["1", "3", "2"], &[3424, -123, 345])),
            1947635619,
        ),
        vector(
            "custom_model_data/no_colors",
            C::CustomModelData(model_data(&[5.03, 3.0, -1.11], &[true, true, false], &["2", "5", "7"], &[])),
            -512419908,
        ),
        vector(
            "tooltip_display/hidden_components",
            C::TooltipDisplay(TooltipDisplay {
                hide_tooltip: false,
                hidden_components: vec![ComponentKind::Consumable, ComponentKind::Damage],
            }),
            -816418453,
        ),
        vector(
            "tooltip_display/hide_tooltip",
            C::TooltipDisplay(TooltipDisplay {
                hide_tooltip: true,
                hidden_components: Vec::new(),
            }),
            14016722,
        ),
        vector("tooltip_display/default", C::TooltipDisplay(TooltipDisplay::default()), -982207288),
        vector("enchantment_glint_override/true", C::EnchantmentGlintOverride(true), -1019818302),
        vector("enchantment_glint_override/false", C::EnchantmentGlintOverride(false), 828198337),
        vector("food/1", C::Food(food(5, 1.4, false)), 445786378),
        vector("food/2", C::Food(food(3, 5.7, true)), 1917653498),
        vector("food/3", C::Food(food(7, 0.15, false)), -184166204),
        vector("damage_resistant", C::DamageResistant(key("testing")), -1230493835),
        vector("tool/1", C::Tool(tool(5.0, 3, false)), -1789071928),
        vector("tool/2", C::Tool(tool(3.0, 1, true)), -7422944),
        vector("weapon/1", C::Weapon(weapon(5, 2.0)), -154556976),
        vector("weapon/2", C::Weapon(weapon(1, 7.3)), 885347995),
        vector("enchantable", C::Enchantable(3), -1834983819),
        vector(
            "equippable/body",
            C::Equippable(equippable(
                EquipmentSlot::Body,
                Sound::builtin("item.armor.equip_generic"),
                [true, true, true, false, false],
                Sound::builtin("item.shears.snip"),
            )),
            1294431019,
        ),
        vector(
            "equippable/asset",
            C::Equippable(Equippable {
                asset_id: Some(key("testing")),
                ..equippable(
                    EquipmentSlot::Body,
                    Sound::builtin("item.armor.equip_chain"),
                    [true, true, true, false, true],
                    Sound::builtin("item.bone_meal.use"),
                )
            }),
            -801616214,
        ),
        vector(
            "equippable/custom_sound",
            C::Equippable(equippable(
                EquipmentSlot::Body,
                Sound::builtin("ambient.cave"),
                [false, true, false, false, false],
                Sound::Custom(CustomSound {
                    id: key("testing_equippable"),
                    range: 10.0,
                }),
            )),
            -1145684769,
        ),
        vector("equippable/helmet", C::Equippable(Equippable::new(EquipmentSlot::Head)), 497790992),
        vector(
            "equippable/allowed_tag",
            C::Equippable(Equippable {
                allowed_entities: Some(HolderSet::Tag(key("aquatic"))),
                ..Equippable::new(EquipmentSlot::Head)
            }),
            264760955,
        ),
        vector("map_decorations", C::MapDecorations(map_decorations), -625782954),
        vector(
            "lodestone_tracker/target",
            C::LodestoneTracker(LodestoneTracker {
                target: Some(GlobalPos {
                    dimension: key("overworld"),
                    pos: BlockPos::new(5, 6, 7),
                }),
                tracked: true,
            }),
            63561894,
        ),
        vector(
            "lodestone_tracker/empty",
            C::LodestoneTracker(LodestoneTracker {
                target: None,
                tracked: false,
            }),
            1595667667,
        ),
    ]
}

/// Hash every known vector with `catalog` and compare.
pub fn verify_known_vectors(catalog: &ComponentCatalog, registries: &dyn RegistryLookup) -> SelfTestReport {
    let mut report = SelfTestReport::default();
    for vector in known_vectors() {
        let actual = catalog
            .hash(&vector.component, registries)
            .map(|hash| hash.as_int());
        if actual == Ok(vector.expected) {
            tracing::info!(vector = vector.name, hash = vector.expected, "known vector matched");
            report.passed.push(vector.name);
        } else {
            tracing::error!(
                vector = vector.name,
                expected = vector.expected,
                actual = ?actual,
                "known vector mismatch"
            );
            report.failures.push(VectorFailure {
                name: vector.name,
                component: vector.component.kind(),
                expected: vector.expected,
                actual,
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashingConfig;
    use crate::registry::NoRegistries;

    #[test]
    fn test_vanilla_catalog_passes_self_test() {
        let catalog = ComponentCatalog::vanilla(&HashingConfig::default()).unwrap();
        let report = verify_known_vectors(&catalog, &NoRegistries);
        assert!(report.is_ok(), "{:#?}", report.failures);
        assert_eq!(report.passed.len(), known_vectors().len());
    }

    #[test]
    fn test_missing_hasher_is_reported() {
        let catalog = ComponentCatalog::builder().build(&HashingConfig::default());
        let report = verify_known_vectors(&catalog, &NoRegistries);
        assert!(report.passed.is_empty());
        let first = &report.failures[0];
        assert_eq!(first.component, ComponentKind::CustomData);
        assert_eq!(first.actual, Err(HashError::UnregisteredComponent(ComponentKind::CustomData)));
    }

    #[test]
    fn test_vector_labels_are_unique() {
        let mut names: Vec<_> = known_vectors().iter().map(|vector| vector.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), known_vectors().len());
    }
}
