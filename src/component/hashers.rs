//! Hashers for the composite values carried by data components.
//!
//! Field names and defaults follow the network codecs of each component:
//! a field left at its codec default is omitted from the map.

use crate::hasher::{self, from_enum, from_id_enum, map, map_builder, HashError, Hasher};
use crate::map_hasher::{MapBuilder, MapHasher};
use crate::registry::{Registry, RegistryHasher};
use crate::types::*;

use super::kind::ComponentKind;
use super::text::text_component;

fn registry(registry: Registry) -> Hasher<i32> {
    RegistryHasher::new(registry).into()
}

fn holder_set(registry: Registry) -> Hasher<HolderSet> {
    RegistryHasher::new(registry).holder_set()
}

// ─── Registries and enums ────────────────────────────────────────────────

static_hashers! {
    /// Item network ids.
    pub fn item() -> i32 = registry(Registry::Item);

    /// Entity type network ids.
    pub fn entity_type() -> i32 = registry(Registry::EntityType);

    /// Block entity type network ids.
    pub fn block_entity_type() -> i32 = registry(Registry::BlockEntityType);

    /// Enchantment network ids.
    pub fn enchantment() -> i32 = registry(Registry::Enchantment);

    /// Attribute network ids.
    pub fn attribute() -> i32 = registry(Registry::Attribute);

    /// Mob effect network ids.
    pub fn mob_effect() -> i32 = registry(Registry::MobEffect);

    /// Potion network ids.
    pub fn potion() -> i32 = registry(Registry::Potion);

    /// Dye color network ids.
    pub fn dye_color() -> i32 = from_id_enum(DyeColor::VALUES, DyeColor::as_str);

    /// Item rarity.
    pub fn rarity() -> Rarity = from_enum(Rarity::as_str);

    /// An int that travels as a byte.
    fn byte_int() -> i32 = hasher::byte().convert(|value: &i32| *value as i8);

    fn equipment_slot() -> EquipmentSlot = from_enum(EquipmentSlot::as_str);
    fn equipment_slot_group() -> EquipmentSlotGroup = from_enum(EquipmentSlotGroup::as_str);
    fn modifier_operation() -> ModifierOperation = from_enum(ModifierOperation::as_str);
    fn use_animation() -> ItemUseAnimation = from_enum(ItemUseAnimation::as_str);
    fn swing_animation_type() -> SwingAnimationType = from_enum(SwingAnimationType::as_str);
    fn player_model() -> PlayerModelType = from_enum(PlayerModelType::as_str);
    fn firework_shape() -> i32 = from_id_enum(FireworkExplosionShape::VALUES, FireworkExplosionShape::as_str);

    /// A component type, by key.
    pub fn component_key() -> ComponentKind = hasher::string().convert(|kind: &ComponentKind| kind.key());
}

// ─── Shared value types ──────────────────────────────────────────────────

static_hashers! {
    /// A sound event: builtin sounds hash as their key.
    pub fn sound() -> Sound = Hasher::new(|sound: &Sound, encoder| match sound {
        Sound::Builtin(id) => hasher::key().hash(id, encoder),
        Sound::Custom(custom) => custom_sound().hash(custom, encoder),
    });

    fn custom_sound() -> CustomSound = map_builder(MapBuilder::new(|b, sound: &CustomSound| {
        b.accept("sound_id", hasher::key(), &sound.id)
            .optional_float("range", hasher::float(), sound.range, 16.0);
    }));

    /// A dimension and block position.
    pub fn global_pos() -> GlobalPos = map_builder(MapBuilder::new(|b, pos: &GlobalPos| {
        b.accept("dimension", hasher::key(), &pos.dimension)
            .accept("pos", hasher::pos(), &pos.pos);
    }));

    fn profile_property() -> ProfileProperty = map_builder(MapBuilder::new(|b, property: &ProfileProperty| {
        let string = hasher::string();
        b.accept("name", string, &property.name)
            .accept("value", string, &property.value)
            .optional_nullable("signature", string, property.signature.as_deref());
    }));

    /// A player profile with its skin patch inlined.
    pub fn resolvable_profile() -> ResolvableProfile = map_builder(MapBuilder::new(|b, profile: &ResolvableProfile| {
        let key = hasher::key();
        b.optional_nullable("name", hasher::string(), profile.profile.name.as_deref())
            .optional_nullable("id", hasher::uuid(), profile.profile.id.as_ref())
            .optional_list("properties", profile_property(), &profile.profile.properties)
            .optional_nullable("texture", key, profile.texture.as_ref())
            .optional_nullable("cape", key, profile.cape.as_ref())
            .optional_nullable("elytra", key, profile.elytra.as_ref())
            .optional_nullable("model", player_model(), profile.model.as_ref());
    }));

    fn filterable_string() -> Filterable<String> = hasher::string().filterable();
    fn filterable_text() -> Filterable<TextComponent> = text_component().filterable();
}

// ─── Item stacks ─────────────────────────────────────────────────────────

static_hashers! {
    /// A component patch: set types hash by catalog, removed types as `!key` to unit.
    ///
    /// Needs an encoder built by a [`ComponentCatalog`](super::ComponentCatalog).
    pub fn data_components() -> DataComponents = Hasher::new(|patch: &DataComponents, encoder| {
        let catalog = encoder.catalog().ok_or(HashError::MissingCatalog)?;
        let entries = patch
            .iter()
            .map(|(kind, value)| match value {
                Some(component) => Ok((encoder.string(kind.key()), catalog.hash_with(component, encoder)?)),
                None => Ok((
                    hasher::key_removal().hash(&kind.identifier(), encoder)?,
                    hasher::unit().hash(&(), encoder)?,
                )),
            })
            .collect::<Result<Vec<_>, HashError>>()?;
        Ok(encoder.map(entries))
    });

    /// An item stack, with its component patch.
    pub fn item_stack() -> ItemStack = map_builder(MapBuilder::new(|b, stack: &ItemStack| {
        b.accept("id", item(), &stack.id)
            .accept("count", hasher::int(), &stack.count)
            .optional_nullable("components", data_components(), stack.components.as_ref());
    }));

    /// Container slots: `{slot, item}` for every occupied slot.
    pub fn container() -> ContainerContents = Hasher::new(|contents: &ContainerContents, encoder| {
        let slots = contents
            .slots
            .iter()
            .enumerate()
            .filter_map(|(slot, stack)| stack.as_ref().map(|stack| (slot as i32, stack)))
            .map(|(slot, stack)| {
                let mut map = MapHasher::new(encoder);
                map.accept("slot", hasher::int(), &slot).accept("item", item_stack(), stack);
                map.build()
            })
            .collect::<Result<Vec<_>, HashError>>()?;
        Ok(encoder.list(slots))
    });
}

// ─── Enchantments, predicates, modifiers ─────────────────────────────────

static_hashers! {
    /// Enchantment key to level.
    pub fn enchantments() -> ItemEnchantments =
        map(enchantment(), hasher::int()).project(|value: &ItemEnchantments| &value.enchantments);

    fn block_predicate() -> BlockPredicate = map_builder(MapBuilder::new(|b, predicate: &BlockPredicate| {
        b.optional_nullable("blocks", block_set(), predicate.blocks.as_ref())
            .optional_nullable("nbt", hasher::nbt_compound(), predicate.nbt.as_ref());
    }));

    fn block_set() -> HolderSet = holder_set(Registry::Block);

    /// A single predicate hashes as itself, any other count as a list.
    pub fn adventure_predicate() -> AdventureModePredicate =
        Hasher::new(|value: &AdventureModePredicate, encoder| match value.predicates.as_slice() {
            [single] => block_predicate().hash(single, encoder),
            many => block_predicate().hash_all(many, encoder),
        });

    fn modifier_display() -> ModifierDisplay = hasher::string().dispatch(
        "type",
        |display: &ModifierDisplay| display.type_name(),
        [("override", MapBuilder::new(|b, display: &ModifierDisplay| {
            if let ModifierDisplay::Override(text) = display {
                b.accept("value", text_component(), text);
            }
        }))],
    );

    fn attribute_modifier() -> AttributeModifierEntry = map_builder(MapBuilder::new(|b, entry: &AttributeModifierEntry| {
        b.accept("type", attribute(), &entry.attribute)
            .accept("id", hasher::key(), &entry.id)
            .accept("amount", hasher::double(), &entry.amount)
            .accept("operation", modifier_operation(), &entry.operation)
            .optional("slot", equipment_slot_group(), &entry.slot, &EquipmentSlotGroup::Any)
            .optional("display", modifier_display(), &entry.display, &ModifierDisplay::Default);
    }));

    /// Attribute modifiers, in order.
    pub fn attribute_modifiers() -> ItemAttributeModifiers =
        attribute_modifier().list().project(|value: &ItemAttributeModifiers| value.modifiers.as_slice());

    /// Custom model data lists; empty lists are omitted.
    pub fn custom_model_data() -> CustomModelData = map_builder(MapBuilder::new(|b, data: &CustomModelData| {
        b.optional_list("floats", hasher::float(), &data.floats)
            .optional_list("flags", hasher::bool(), &data.flags)
            .optional_list("strings", hasher::string(), &data.strings)
            .optional_list("colors", hasher::int(), &data.colors);
    }));

    /// Tooltip visibility.
    pub fn tooltip_display() -> TooltipDisplay = map_builder(MapBuilder::new(|b, display: &TooltipDisplay| {
        b.optional("hide_tooltip", hasher::bool(), &display.hide_tooltip, &false)
            .optional_list("hidden_components", component_key(), &display.hidden_components);
    }));
}

// ─── Consumption ─────────────────────────────────────────────────────────

fn write_effect_details(b: &mut MapHasher<'_>, details: &MobEffectDetails) {
    let bool = hasher::bool();
    b.optional("amplifier", byte_int(), &details.amplifier, &0)
        .optional("duration", hasher::int(), &details.duration, &0)
        .optional("ambient", bool, &details.ambient, &false)
        .optional("show_particles", bool, &details.show_particles, &true)
        .accept("show_icon", bool, &details.show_icon);
}

static_hashers! {
    /// A mob effect with its parameters.
    pub fn mob_effect_instance() -> MobEffectInstance = map_builder(MapBuilder::new(|b, effect: &MobEffectInstance| {
        b.accept("id", mob_effect(), &effect.effect);
        write_effect_details(b, &effect.details);
    }));

    fn mob_effect_set() -> HolderSet = holder_set(Registry::MobEffect);

    /// A consume effect, dispatched on its `type` key.
    pub fn consume_effect() -> ConsumeEffect = hasher::key().dispatch(
        "type",
        |effect: &ConsumeEffect| Identifier::minecraft(effect.type_path()),
        [
            (Identifier::minecraft("apply_effects"), MapBuilder::new(|b, effect: &ConsumeEffect| {
                if let ConsumeEffect::ApplyEffects { effects, probability } = effect {
                    b.accept_list("effects", mob_effect_instance(), effects)
                        .optional_float("probability", hasher::float(), *probability, 1.0);
                }
            })),
            (Identifier::minecraft("remove_effects"), MapBuilder::new(|b, effect: &ConsumeEffect| {
                if let ConsumeEffect::RemoveEffects(effects) = effect {
                    b.accept("effects", mob_effect_set(), effects);
                }
            })),
            (Identifier::minecraft("teleport_randomly"), MapBuilder::new(|b, effect: &ConsumeEffect| {
                if let ConsumeEffect::TeleportRandomly { diameter } = effect {
                    b.optional_float("diameter", hasher::float(), *diameter, 16.0);
                }
            })),
            (Identifier::minecraft("play_sound"), MapBuilder::new(|b, effect: &ConsumeEffect| {
                if let ConsumeEffect::PlaySound(event) = effect {
                    b.accept("sound", sound(), event);
                }
            })),
        ],
    );

    /// Food values.
    pub fn food() -> FoodProperties = map_builder(MapBuilder::new(|b, food: &FoodProperties| {
        b.accept("nutrition", hasher::int(), &food.nutrition)
            .accept("saturation", hasher::float(), &food.saturation)
            .optional("can_always_eat", hasher::bool(), &food.can_always_eat, &false);
    }));

    /// Consumption behaviour.
    pub fn consumable() -> Consumable = map_builder(MapBuilder::new(|b, consumable: &Consumable| {
        b.optional_float("consume_seconds", hasher::float(), consumable.consume_seconds, 1.6)
            .optional("animation", use_animation(), &consumable.animation, &ItemUseAnimation::Eat)
            .optional("sound", sound(), &consumable.sound, &Sound::builtin("entity.generic.eat"))
            .optional("has_consume_particles", hasher::bool(), &consumable.has_consume_particles, &true)
            .optional_list("on_consume_effects", consume_effect(), &consumable.on_consume_effects);
    }));

    /// Cooldown after use.
    pub fn use_cooldown() -> UseCooldown = map_builder(MapBuilder::new(|b, cooldown: &UseCooldown| {
        b.accept("seconds", hasher::float(), &cooldown.seconds)
            .optional_nullable("cooldown_group", hasher::key(), cooldown.cooldown_group.as_ref());
    }));

    /// Movement while using the item.
    pub fn use_effects() -> UseEffects = map_builder(MapBuilder::new(|b, effects: &UseEffects| {
        b.optional("can_sprint", hasher::bool(), &effects.can_sprint, &false)
            .optional("interact_vibrations", hasher::bool(), &effects.interact_vibrations, &true)
            .optional_float("speed_multiplier", hasher::float(), effects.speed_multiplier, 0.2);
    }));

    /// Effects applied when a totem triggers.
    pub fn death_protection() -> [ConsumeEffect] = map_builder(MapBuilder::new(|b, effects: &[ConsumeEffect]| {
        b.optional_list("death_effects", consume_effect(), effects);
    }));

    /// Potion, color, and extra effects.
    pub fn potion_contents() -> PotionContents = map_builder(MapBuilder::new(|b, contents: &PotionContents| {
        b.optional("potion", potion(), &contents.potion, &-1)
            .optional("custom_color", hasher::int(), &contents.custom_color, &-1)
            .optional_list("custom_effects", mob_effect_instance(), &contents.custom_effects)
            .optional_nullable("custom_name", hasher::string(), contents.custom_name.as_deref());
    }));

    fn suspicious_stew_effect() -> SuspiciousStewEffect = map_builder(MapBuilder::new(|b, effect: &SuspiciousStewEffect| {
        b.accept("id", mob_effect(), &effect.effect)
            .optional("duration", hasher::int(), &effect.duration, &160);
    }));

    /// Suspicious stew effects, in order.
    pub fn suspicious_stew_effects() -> [SuspiciousStewEffect] = suspicious_stew_effect().list();
}

// ─── Combat and tools ────────────────────────────────────────────────────

static_hashers! {
    fn tool_rule() -> ToolRule = map_builder(MapBuilder::new(|b, rule: &ToolRule| {
        b.accept("blocks", block_set(), &rule.blocks)
            .optional_nullable("speed", hasher::float(), rule.speed.as_ref())
            .optional_nullable("correct_for_drops", hasher::bool(), rule.correct_for_drops.as_ref());
    }));

    /// Mining rules.
    pub fn tool() -> ToolData = map_builder(MapBuilder::new(|b, tool: &ToolData| {
        b.accept_list("rules", tool_rule(), &tool.rules)
            .optional_float("default_mining_speed", hasher::float(), tool.default_mining_speed, 1.0)
            .optional("damage_per_block", hasher::int(), &tool.damage_per_block, &1)
            .optional("can_destroy_blocks_in_creative", hasher::bool(), &tool.can_destroy_blocks_in_creative, &true);
    }));

    /// Melee weapon durability.
    pub fn weapon() -> Weapon = map_builder(MapBuilder::new(|b, weapon: &Weapon| {
        b.optional("item_damage_per_attack", hasher::int(), &weapon.item_damage_per_attack, &1)
            .optional_float("disable_blocking_for_seconds", hasher::float(), weapon.disable_blocking_for_seconds, 0.0);
    }));

    /// Spear-style piercing attack.
    pub fn piercing_weapon() -> PiercingWeapon = map_builder(MapBuilder::new(|b, weapon: &PiercingWeapon| {
        b.optional("deals_knockback", hasher::bool(), &weapon.deals_knockback, &true)
            .optional("dismounts", hasher::bool(), &weapon.dismounts, &false)
            .optional_nullable("sound", sound(), weapon.sound.as_ref())
            .optional_nullable("hit_sound", sound(), weapon.hit_sound.as_ref());
    }));

    /// Reach limits.
    pub fn attack_range() -> AttackRange = map_builder(MapBuilder::new(|b, range: &AttackRange| {
        let float = hasher::float();
        b.optional_float("min_reach", float, range.min_reach, 0.0)
            .optional_float("max_reach", float, range.max_reach, 3.0)
            .optional_float("min_creative_reach", float, range.min_creative_reach, 0.0)
            .optional_float("max_creative_reach", float, range.max_creative_reach, 5.0)
            .optional_float("hitbox_margin", float, range.hitbox_margin, 0.3)
            .optional_float("mob_factor", float, range.mob_factor, 1.0);
    }));

    /// Swing animation.
    pub fn swing_animation() -> SwingAnimation = map_builder(MapBuilder::new(|b, swing: &SwingAnimation| {
        b.optional("type", swing_animation_type(), &swing.animation, &SwingAnimationType::Whack)
            .optional("duration", hasher::int(), &swing.duration, &6);
    }));

    /// Equipment slot and equip behaviour.
    pub fn equippable() -> Equippable = map_builder(MapBuilder::new(|b, equippable: &Equippable| {
        let key = hasher::key();
        let bool = hasher::bool();
        b.accept("slot", equipment_slot(), &equippable.slot)
            .optional("equip_sound", sound(), &equippable.equip_sound, &Sound::builtin("item.armor.equip_generic"))
            .optional_nullable("asset_id", key, equippable.asset_id.as_ref())
            .optional_nullable("camera_overlay", key, equippable.camera_overlay.as_ref())
            .optional_nullable("allowed_entities", entity_type_set(), equippable.allowed_entities.as_ref())
            .optional("dispensable", bool, &equippable.dispensable, &true)
            .optional("swappable", bool, &equippable.swappable, &true)
            .optional("damage_on_hurt", bool, &equippable.damage_on_hurt, &true)
            .optional("equip_on_interact", bool, &equippable.equip_on_interact, &false)
            .optional("can_be_sheared", bool, &equippable.can_be_sheared, &false)
            .optional("shearing_sound", sound(), &equippable.shearing_sound, &Sound::builtin("item.shears.snip"));
    }));

    fn entity_type_set() -> HolderSet = holder_set(Registry::EntityType);
    fn damage_type_set() -> HolderSet = holder_set(Registry::DamageType);

    fn damage_reduction() -> DamageReduction = map_builder(MapBuilder::new(|b, reduction: &DamageReduction| {
        b.optional_float("horizontal_blocking_angle", hasher::float(), reduction.horizontal_blocking_angle, 90.0)
            .optional_nullable("type", damage_type_set(), reduction.damage_types.as_ref())
            .accept("base", hasher::float(), &reduction.base)
            .accept("factor", hasher::float(), &reduction.factor);
    }));

    fn damage_reductions() -> [DamageReduction] = damage_reduction().list();

    fn item_damage_function() -> ItemDamageFunction = map_builder(MapBuilder::new(|b, function: &ItemDamageFunction| {
        b.accept("threshold", hasher::float(), &function.threshold)
            .accept("base", hasher::float(), &function.base)
            .accept("factor", hasher::float(), &function.factor);
    }));

    /// Shield-style blocking.
    pub fn blocks_attacks() -> BlocksAttacks = map_builder(MapBuilder::new(|b, blocks: &BlocksAttacks| {
        b.optional_float("block_delay_seconds", hasher::float(), blocks.block_delay_seconds, 0.0)
            .optional_float("disable_cooldown_scale", hasher::float(), blocks.disable_cooldown_scale, 1.0)
            .optional(
                "damage_reductions",
                damage_reductions(),
                &blocks.damage_reductions,
                &BlocksAttacks::default_damage_reductions(),
            )
            .optional("item_damage", item_damage_function(), &blocks.item_damage, &BlocksAttacks::default_item_damage())
            .optional_nullable("bypassed_by", hasher::tag(), blocks.bypassed_by.as_ref())
            .optional_nullable("block_sound", sound(), blocks.block_sound.as_ref())
            .optional_nullable("disabled_sound", sound(), blocks.disable_sound.as_ref());
    }));

    fn kinetic_condition() -> KineticCondition = map_builder(MapBuilder::new(|b, condition: &KineticCondition| {
        b.accept("max_duration_ticks", hasher::int(), &condition.max_duration_ticks)
            .optional_float("min_speed", hasher::float(), condition.min_speed, 0.0)
            .optional_float("min_relative_speed", hasher::float(), condition.min_relative_speed, 0.0);
    }));

    /// Charged lance attack.
    pub fn kinetic_weapon() -> KineticWeapon = map_builder(MapBuilder::new(|b, weapon: &KineticWeapon| {
        let condition = kinetic_condition();
        b.optional("contact_cooldown_ticks", hasher::int(), &weapon.contact_cooldown_ticks, &10)
            .optional("delay_ticks", hasher::int(), &weapon.delay_ticks, &0)
            .optional_nullable("dismount_conditions", condition, weapon.dismount_conditions.as_ref())
            .optional_nullable("knockback_conditions", condition, weapon.knockback_conditions.as_ref())
            .optional_nullable("damage_conditions", condition, weapon.damage_conditions.as_ref())
            .optional_float("forward_movement", hasher::float(), weapon.forward_movement, 0.0)
            .optional_float("damage_multiplier", hasher::float(), weapon.damage_multiplier, 1.0)
            .optional_nullable("sound", sound(), weapon.sound.as_ref())
            .optional_nullable("hit_sound", sound(), weapon.hit_sound.as_ref());
    }));

    /// Damage types the item ignores.
    pub fn damage_resistant() -> Identifier = map_builder(MapBuilder::new(|b, types: &Identifier| {
        b.accept("types", hasher::tag(), types);
    }));

    /// Enchantability.
    pub fn enchantable() -> i32 = map_builder(MapBuilder::new(|b, value: &i32| {
        b.accept("value", hasher::int(), value);
    }));

    /// Repair ingredients.
    pub fn repairable() -> HolderSet = map_builder(MapBuilder::new(|b, items: &HolderSet| {
        b.accept("items", item_set(), items);
    }));

    fn item_set() -> HolderSet = holder_set(Registry::Item);
}

// ─── Books ───────────────────────────────────────────────────────────────

static_hashers! {
    /// Book and quill pages.
    pub fn writable_book() -> WritableBookContent = map_builder(MapBuilder::new(|b, book: &WritableBookContent| {
        b.optional_list("pages", filterable_string(), &book.pages);
    }));

    /// Signed book.
    pub fn written_book() -> WrittenBookContent = map_builder(MapBuilder::new(|b, book: &WrittenBookContent| {
        b.accept("title", filterable_string(), &book.title)
            .accept("author", hasher::string(), &book.author)
            .accept("generation", hasher::int(), &book.generation)
            .optional_list("pages", filterable_text(), &book.pages)
            .optional("resolved", hasher::bool(), &book.resolved, &false);
    }));
}

// ─── Registry values sent inline ─────────────────────────────────────────

static_hashers! {
    fn trim_material() -> TrimMaterial = map_builder(MapBuilder::new(|b, material: &TrimMaterial| {
        b.accept("asset_name", hasher::string(), &material.asset_name)
            .optional(
                "override_armor_assets",
                armor_asset_overrides(),
                &material.override_armor_assets,
                &Default::default(),
            )
            .accept("description", text_component(), &material.description);
    }));

    fn armor_asset_overrides() -> std::collections::BTreeMap<Identifier, String> =
        map(hasher::key(), hasher::owned_string());

    fn trim_pattern() -> TrimPattern = map_builder(MapBuilder::new(|b, pattern: &TrimPattern| {
        b.accept("asset_id", hasher::key(), &pattern.asset_id)
            .accept("description", text_component(), &pattern.description)
            .accept("decal", hasher::bool(), &pattern.decal);
    }));

    /// Armor trim material and pattern.
    pub fn armor_trim() -> ArmorTrim = map_builder(MapBuilder::new(|b, trim: &ArmorTrim| {
        b.accept("material", trim_material_holder(), &trim.material)
            .accept("pattern", trim_pattern_holder(), &trim.pattern);
    }));

    fn trim_material_holder() -> Holder<TrimMaterial> =
        RegistryHasher::new(Registry::TrimMaterial).holder(trim_material());
    fn trim_pattern_holder() -> Holder<TrimPattern> =
        RegistryHasher::new(Registry::TrimPattern).holder(trim_pattern());

    /// Trim material provided by an ingredient.
    pub fn provides_trim_material() -> ProvidesTrimMaterial =
        RegistryHasher::new(Registry::TrimMaterial).registry_ref(trim_material());

    fn instrument_value() -> Instrument = map_builder(MapBuilder::new(|b, instrument: &Instrument| {
        b.accept("sound_event", sound(), &instrument.sound_event)
            .accept("use_duration", hasher::float(), &instrument.use_duration)
            .accept("range", hasher::float(), &instrument.range)
            .accept("description", text_component(), &instrument.description);
    }));

    /// Goat horn instrument.
    pub fn instrument() -> InstrumentComponent =
        RegistryHasher::new(Registry::Instrument).registry_ref(instrument_value());

    fn jukebox_song() -> JukeboxSong = map_builder(MapBuilder::new(|b, song: &JukeboxSong| {
        b.accept("sound_event", sound(), &song.sound_event)
            .accept("description", text_component(), &song.description)
            .accept("length_in_seconds", hasher::float(), &song.length_in_seconds)
            .accept("comparator_output", hasher::int(), &song.comparator_output);
    }));

    /// Music disc song.
    pub fn jukebox_playable() -> JukeboxPlayable =
        RegistryHasher::new(Registry::JukeboxSong).registry_ref(jukebox_song());

    fn banner_pattern() -> BannerPattern = map_builder(MapBuilder::new(|b, pattern: &BannerPattern| {
        b.accept("asset_id", hasher::key(), &pattern.asset_id)
            .accept("translation_key", hasher::string(), &pattern.translation_key);
    }));

    fn banner_pattern_holder() -> Holder<BannerPattern> =
        RegistryHasher::new(Registry::BannerPattern).holder(banner_pattern());

    fn banner_layer() -> BannerPatternLayer = map_builder(MapBuilder::new(|b, layer: &BannerPatternLayer| {
        b.accept("pattern", banner_pattern_holder(), &layer.pattern)
            .accept("color", dye_color(), &layer.color);
    }));

    /// Banner layers, bottom first.
    pub fn banner_layers() -> [BannerPatternLayer] = banner_layer().list();
}

// ─── Entities, blocks, fireworks ─────────────────────────────────────────

static_hashers! {
    /// Entity NBT with its entity type id.
    pub fn entity_data() -> TypedEntityData = map_builder(MapBuilder::new(|b, data: &TypedEntityData| {
        b.accept("id", entity_type(), &data.type_id).inline_nbt(&data.tag);
    }));

    /// Block entity NBT with its block entity type id.
    pub fn block_entity_data() -> TypedEntityData = map_builder(MapBuilder::new(|b, data: &TypedEntityData| {
        b.accept("id", block_entity_type(), &data.type_id).inline_nbt(&data.tag);
    }));

    fn beehive_occupant() -> BeehiveOccupant = map_builder(MapBuilder::new(|b, bee: &BeehiveOccupant| {
        b.accept("id", entity_type(), &bee.entity_data.type_id)
            .inline_nbt(&bee.entity_data.tag)
            .accept("ticks_in_hive", hasher::int(), &bee.ticks_in_hive)
            .accept("min_ticks_in_hive", hasher::int(), &bee.min_ticks_in_hive);
    }));

    /// Bees in a hive.
    pub fn bees() -> [BeehiveOccupant] = beehive_occupant().list();

    /// Block state property overrides.
    pub fn block_state() -> BlockStateProperties =
        map(hasher::owned_string(), hasher::owned_string()).project(|state: &BlockStateProperties| &state.properties);

    /// Compass target.
    pub fn lodestone_tracker() -> LodestoneTracker = map_builder(MapBuilder::new(|b, tracker: &LodestoneTracker| {
        b.optional_nullable("target", global_pos(), tracker.target.as_ref())
            .optional("tracked", hasher::bool(), &tracker.tracked, &true);
    }));

    /// One firework star explosion.
    pub fn firework_explosion() -> FireworkExplosion = map_builder(MapBuilder::new(|b, explosion: &FireworkExplosion| {
        b.accept("shape", firework_shape(), &explosion.shape)
            .optional_list("colors", hasher::int(), &explosion.colors)
            .optional_list("fade_colors", hasher::int(), &explosion.fade_colors)
            .optional("has_trail", hasher::bool(), &explosion.has_trail, &false)
            .optional("has_twinkle", hasher::bool(), &explosion.has_twinkle, &false);
    }));

    /// Firework rocket.
    pub fn fireworks() -> Fireworks = map_builder(MapBuilder::new(|b, fireworks: &Fireworks| {
        b.optional("flight_duration", byte_int(), &fireworks.flight_duration, &0)
            .optional_list("explosions", firework_explosion(), &fireworks.explosions);
    }));
}

// ─── Entity variants ─────────────────────────────────────────────────────

static_hashers! {
    /// Villager type ids.
    pub fn villager_variant() -> i32 = registry(Registry::VillagerType);
    /// Wolf variant ids.
    pub fn wolf_variant() -> i32 = registry(Registry::WolfVariant);
    /// Wolf sound variant ids.
    pub fn wolf_sound_variant() -> i32 = registry(Registry::WolfSoundVariant);
    /// Pig variant ids.
    pub fn pig_variant() -> i32 = registry(Registry::PigVariant);
    /// Cow variant ids.
    pub fn cow_variant() -> i32 = registry(Registry::CowVariant);
    /// Frog variant ids.
    pub fn frog_variant() -> i32 = registry(Registry::FrogVariant);
    /// Painting variant ids.
    pub fn painting_variant() -> i32 = registry(Registry::PaintingVariant);
    /// Cat variant ids.
    pub fn cat_variant() -> i32 = registry(Registry::CatVariant);

    /// Chicken variants, by holder or key.
    pub fn chicken_variant() -> Holder<Identifier> = RegistryHasher::new(Registry::ChickenVariant).either_holder();
    /// Zombie nautilus variants, by holder or key.
    pub fn zombie_nautilus_variant() -> Holder<Identifier> =
        RegistryHasher::new(Registry::ZombieNautilusVariant).either_holder();
    /// Damage types, by holder or key.
    pub fn damage_type() -> Holder<Identifier> = RegistryHasher::new(Registry::DamageType).either_holder();

    /// Fox variant ids.
    pub fn fox_variant() -> i32 = from_id_enum(FoxVariant::VALUES, FoxVariant::as_str);
    /// Salmon size ids.
    pub fn salmon_size() -> i32 = from_id_enum(SalmonVariant::VALUES, SalmonVariant::as_str);
    /// Parrot variant ids.
    pub fn parrot_variant() -> i32 = from_id_enum(ParrotVariant::VALUES, ParrotVariant::as_str);
    /// Mooshroom variant ids.
    pub fn mooshroom_variant() -> i32 = from_id_enum(MooshroomVariant::VALUES, MooshroomVariant::as_str);
    /// Horse color ids.
    pub fn horse_variant() -> i32 = from_id_enum(HorseVariant::VALUES, HorseVariant::as_str);
    /// Llama variant ids.
    pub fn llama_variant() -> i32 = from_id_enum(LlamaVariant::VALUES, LlamaVariant::as_str);
    /// Axolotl variant ids.
    pub fn axolotl_variant() -> i32 = from_id_enum(AxolotlVariant::VALUES, AxolotlVariant::as_str);

    /// Rabbit variant ids; the killer bunny is `99`.
    pub fn rabbit_variant() -> i32 = Hasher::new(|id: &i32, encoder| {
        let variant = RabbitVariant::from_id(*id).ok_or(HashError::UnknownEnumId {
            enum_name: "RabbitVariant",
            id: *id,
        })?;
        Ok(encoder.string(variant.as_str()))
    });

    /// Packed tropical fish pattern ids.
    pub fn tropical_fish_pattern() -> i32 = Hasher::new(|packed: &i32, encoder| {
        let pattern = TropicalFishPattern::from_packed_id(*packed).ok_or(HashError::UnknownEnumId {
            enum_name: "TropicalFishPattern",
            id: *packed,
        })?;
        Ok(encoder.string(pattern.as_str()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::HashEncoder;
    use crate::registry::{InMemoryRegistries, NoRegistries};

    fn encoder() -> HashEncoder<'static> {
        HashEncoder::new(&NoRegistries)
    }

    #[test]
    fn test_builtin_and_custom_sound() {
        let enc = encoder();
        let builtin = sound().hash(&Sound::builtin("entity.generic.eat"), &enc).unwrap();
        assert_eq!(builtin, enc.string("minecraft:entity.generic.eat"));

        let custom = Sound::Custom(CustomSound { id: Identifier::minecraft("my.sound"), range: 16.0 });
        let expected = enc.map([(enc.string("sound_id"), enc.string("minecraft:my.sound"))]);
        assert_eq!(sound().hash(&custom, &enc).unwrap(), expected);
    }

    #[test]
    fn test_use_cooldown_group_changes_hash() {
        let enc = encoder();
        let without = UseCooldown { seconds: 7.0, cooldown_group: None };
        let with = UseCooldown { seconds: 7.0, cooldown_group: Some(Identifier::minecraft("testing")) };
        assert_ne!(use_cooldown().hash(&without, &enc), use_cooldown().hash(&with, &enc));
    }

    #[test]
    fn test_consume_effect_dispatch() {
        let enc = encoder();
        let clear = consume_effect().hash(&ConsumeEffect::ClearAllEffects, &enc).unwrap();
        assert_eq!(clear, enc.map([(enc.string("type"), enc.string("minecraft:clear_all_effects"))]));

        let teleport = ConsumeEffect::TeleportRandomly { diameter: 16.0 };
        let expected = enc.map([(enc.string("type"), enc.string("minecraft:teleport_randomly"))]);
        assert_eq!(consume_effect().hash(&teleport, &enc).unwrap(), expected);
        let far = ConsumeEffect::TeleportRandomly { diameter: 8.0 };
        let expected = enc.map([
            (enc.string("type"), enc.string("minecraft:teleport_randomly")),
            (enc.string("diameter"), enc.number(8.0f32)),
        ]);
        assert_eq!(consume_effect().hash(&far, &enc).unwrap(), expected);
    }

    #[test]
    fn test_item_stack_needs_catalog() {
        let registries = InMemoryRegistries::new().with_entries(Registry::Item, [Identifier::minecraft("stick")]);
        let enc = HashEncoder::new(&registries);
        let bare = ItemStack::new(0, 1);
        assert!(item_stack().hash(&bare, &enc).is_ok());

        let patched = ItemStack::new(0, 1).with_components(DataComponents::new().without(ComponentKind::Glider));
        assert_eq!(item_stack().hash(&patched, &enc), Err(HashError::MissingCatalog));
    }

    #[test]
    fn test_container_skips_empty_slots() {
        let registries = InMemoryRegistries::new().with_entries(Registry::Item, [Identifier::minecraft("stick")]);
        let enc = HashEncoder::new(&registries);
        let contents = ContainerContents { slots: vec![None, Some(ItemStack::new(0, 2))] };
        let stick = enc.map([
            (enc.string("id"), enc.string("minecraft:stick")),
            (enc.string("count"), enc.number(2i32)),
        ]);
        let expected = enc.list([enc.map([(enc.string("slot"), enc.number(1i32)), (enc.string("item"), stick)])]);
        assert_eq!(container().hash(&contents, &enc).unwrap(), expected);
    }

    #[test]
    fn test_adventure_predicate_collapse() {
        let enc = encoder();
        let predicate = BlockPredicate { blocks: Some(HolderSet::Tag(Identifier::minecraft("logs"))), nbt: None };
        let single = AdventureModePredicate { predicates: vec![predicate.clone()] };
        let double = AdventureModePredicate { predicates: vec![predicate.clone(), predicate] };
        let one = adventure_predicate().hash(&single, &enc).unwrap();
        assert_eq!(one, enc.map([(enc.string("blocks"), enc.string("#minecraft:logs"))]));
        assert_eq!(adventure_predicate().hash(&double, &enc).unwrap(), enc.list([one, one]));
    }

    #[test]
    fn test_variant_ids() {
        let enc = encoder();
        assert_eq!(rabbit_variant().hash(&99, &enc).unwrap(), enc.string("evil"));
        assert!(rabbit_variant().hash(&6, &enc).is_err());
        let betty = TropicalFishPattern::Betty.packed_id();
        assert_eq!(tropical_fish_pattern().hash(&betty, &enc).unwrap(), enc.string("betty"));
        assert_eq!(fox_variant().hash(&1, &enc).unwrap(), enc.string("snow"));
    }

    #[test]
    fn test_blocks_attacks_defaults_elided() {
        let enc = encoder();
        let blocks = BlocksAttacks {
            block_delay_seconds: 0.0,
            disable_cooldown_scale: 1.0,
            damage_reductions: BlocksAttacks::default_damage_reductions(),
            item_damage: BlocksAttacks::default_item_damage(),
            bypassed_by: None,
            block_sound: None,
            disable_sound: None,
        };
        assert_eq!(blocks_attacks().hash(&blocks, &enc).unwrap(), enc.empty_map());
    }

    #[test]
    fn test_blocks_attacks_negative_zero_is_not_default() {
        let enc = encoder();
        let mut reductions = BlocksAttacks::default_damage_reductions();
        reductions[0].base = -0.0;
        let item_damage = ItemDamageFunction { base: -0.0, ..BlocksAttacks::default_item_damage() };
        let blocks = BlocksAttacks {
            block_delay_seconds: 0.0,
            disable_cooldown_scale: 1.0,
            damage_reductions: reductions.clone(),
            item_damage: item_damage.clone(),
            bypassed_by: None,
            block_sound: None,
            disable_sound: None,
        };
        let expected = enc.map([
            (enc.string("damage_reductions"), damage_reductions().hash(&reductions, &enc).unwrap()),
            (enc.string("item_damage"), item_damage_function().hash(&item_damage, &enc).unwrap()),
        ]);
        assert_eq!(blocks_attacks().hash(&blocks, &enc).unwrap(), expected);
    }

    fn make_piercing_weapon() -> PiercingWeapon {
        PiercingWeapon { deals_knockback: true, dismounts: false, sound: None, hit_sound: None }
    }

    fn make_kinetic_weapon() -> KineticWeapon {
        KineticWeapon {
            contact_cooldown_ticks: 10,
            delay_ticks: 0,
            dismount_conditions: None,
            knockback_conditions: None,
            damage_conditions: None,
            forward_movement: 0.0,
            damage_multiplier: 1.0,
            sound: None,
            hit_sound: None,
        }
    }

    #[test]
    fn test_piercing_weapon_dismounts_reads_own_field() {
        let enc = encoder();
        assert_eq!(piercing_weapon().hash(&make_piercing_weapon(), &enc).unwrap(), enc.empty_map());

        let weapon = PiercingWeapon { dismounts: true, ..make_piercing_weapon() };
        let expected = enc.map([(enc.string("dismounts"), enc.bool(true))]);
        assert_eq!(piercing_weapon().hash(&weapon, &enc).unwrap(), expected);

        let weapon = PiercingWeapon { deals_knockback: false, ..make_piercing_weapon() };
        let expected = enc.map([(enc.string("deals_knockback"), enc.bool(false))]);
        assert_eq!(piercing_weapon().hash(&weapon, &enc).unwrap(), expected);
    }

    #[test]
    fn test_kinetic_weapon_delay_ticks_reads_own_field() {
        let enc = encoder();
        assert_eq!(kinetic_weapon().hash(&make_kinetic_weapon(), &enc).unwrap(), enc.empty_map());

        let weapon = KineticWeapon { delay_ticks: 5, ..make_kinetic_weapon() };
        let expected = enc.map([(enc.string("delay_ticks"), enc.number(5i32))]);
        assert_eq!(kinetic_weapon().hash(&weapon, &enc).unwrap(), expected);

        let weapon = KineticWeapon { contact_cooldown_ticks: 5, ..make_kinetic_weapon() };
        let expected = enc.map([(enc.string("contact_cooldown_ticks"), enc.number(5i32))]);
        assert_eq!(kinetic_weapon().hash(&weapon, &enc).unwrap(), expected);
    }
}
