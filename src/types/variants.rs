//! Fixed enumerations that hash by name.
//!
//! Constants are listed in network id order: the protocol sends the index
//! into `VALUES`, and the hash uses the serialized name.

macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl $name {
            /// Every constant, in network id order.
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            /// Serialized name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Network id.
            pub const fn id(self) -> i32 {
                self as i32
            }
        }
    };
}

named_enum!(
    /// Item rarity.
    Rarity {
        Common => "common",
        Uncommon => "uncommon",
        Rare => "rare",
        Epic => "epic",
    }
);

named_enum!(
    /// The sixteen dye colors.
    DyeColor {
        White => "white",
        Orange => "orange",
        Magenta => "magenta",
        LightBlue => "light_blue",
        Yellow => "yellow",
        Lime => "lime",
        Pink => "pink",
        Gray => "gray",
        LightGray => "light_gray",
        Cyan => "cyan",
        Purple => "purple",
        Blue => "blue",
        Brown => "brown",
        Green => "green",
        Red => "red",
        Black => "black",
    }
);

named_enum!(
    /// Slot an equippable item goes into.
    EquipmentSlot {
        MainHand => "mainhand",
        OffHand => "offhand",
        Feet => "feet",
        Legs => "legs",
        Chest => "chest",
        Head => "head",
        Body => "body",
        Saddle => "saddle",
    }
);

named_enum!(
    /// Slot group an attribute modifier applies in.
    EquipmentSlotGroup {
        Any => "any",
        MainHand => "mainhand",
        OffHand => "offhand",
        Hand => "hand",
        Feet => "feet",
        Legs => "legs",
        Chest => "chest",
        Head => "head",
        Armor => "armor",
        Body => "body",
        Saddle => "saddle",
    }
);

named_enum!(
    /// How an attribute modifier combines with the base value.
    ModifierOperation {
        Add => "add_value",
        AddMultipliedBase => "add_multiplied_base",
        AddMultipliedTotal => "add_multiplied_total",
    }
);

named_enum!(
    /// Animation played while an item is used.
    ItemUseAnimation {
        None => "none",
        Eat => "eat",
        Drink => "drink",
        Block => "block",
        Bow => "bow",
        Trident => "trident",
        Crossbow => "crossbow",
        Spyglass => "spyglass",
        TootHorn => "toot_horn",
        Brush => "brush",
        Bundle => "bundle",
        Spear => "spear",
    }
);

named_enum!(
    /// Arm swing played on attack.
    SwingAnimationType {
        None => "none",
        Whack => "whack",
        Stab => "stab",
    }
);

named_enum!(
    /// Firework explosion shape.
    FireworkExplosionShape {
        SmallBall => "small_ball",
        LargeBall => "large_ball",
        Star => "star",
        Creeper => "creeper",
        Burst => "burst",
    }
);

named_enum!(
    /// Fox coat.
    FoxVariant {
        Red => "red",
        Snow => "snow",
    }
);

named_enum!(
    /// Salmon size.
    SalmonVariant {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
);

named_enum!(
    /// Parrot feathers.
    ParrotVariant {
        RedBlue => "red_blue",
        Blue => "blue",
        Green => "green",
        YellowBlue => "yellow_blue",
        Gray => "gray",
    }
);

named_enum!(
    /// Mooshroom type.
    MooshroomVariant {
        Red => "red",
        Brown => "brown",
    }
);

named_enum!(
    /// Horse coat color.
    HorseVariant {
        White => "white",
        Creamy => "creamy",
        Chestnut => "chestnut",
        Brown => "brown",
        Black => "black",
        Gray => "gray",
        DarkBrown => "dark_brown",
    }
);

named_enum!(
    /// Llama coat.
    LlamaVariant {
        Creamy => "creamy",
        White => "white",
        Brown => "brown",
        Gray => "gray",
    }
);

named_enum!(
    /// Axolotl color.
    AxolotlVariant {
        Lucy => "lucy",
        Wild => "wild",
        Gold => "gold",
        Cyan => "cyan",
        Blue => "blue",
    }
);

named_enum!(
    /// Player skin arm model.
    PlayerModelType {
        Wide => "wide",
        Slim => "slim",
    }
);

/// Rabbit coat. Ids are sparse: the killer bunny is 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum RabbitVariant {
    Brown,
    White,
    Black,
    WhiteSplotched,
    Gold,
    Salt,
    Evil,
}

impl RabbitVariant {
    /// Look up a variant by network id.
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(RabbitVariant::Brown),
            1 => Some(RabbitVariant::White),
            2 => Some(RabbitVariant::Black),
            3 => Some(RabbitVariant::WhiteSplotched),
            4 => Some(RabbitVariant::Gold),
            5 => Some(RabbitVariant::Salt),
            99 => Some(RabbitVariant::Evil),
            _ => None,
        }
    }

    /// Serialized name.
    pub const fn as_str(self) -> &'static str {
        match self {
            RabbitVariant::Brown => "brown",
            RabbitVariant::White => "white",
            RabbitVariant::Black => "black",
            RabbitVariant::WhiteSplotched => "white_splotched",
            RabbitVariant::Gold => "gold",
            RabbitVariant::Salt => "salt",
            RabbitVariant::Evil => "evil",
        }
    }
}

/// Tropical fish pattern.
///
/// The network form packs the body size into the low byte and the pattern
/// index within that size into the second byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum TropicalFishPattern {
    Kob,
    Sunstreak,
    Snooper,
    Dasher,
    Brinely,
    Spotty,
    Flopper,
    Stripey,
    Glitter,
    Blockfish,
    Betty,
    Clayfish,
}

impl TropicalFishPattern {
    const SMALL: [TropicalFishPattern; 6] = [
        TropicalFishPattern::Kob,
        TropicalFishPattern::Sunstreak,
        TropicalFishPattern::Snooper,
        TropicalFishPattern::Dasher,
        TropicalFishPattern::Brinely,
        TropicalFishPattern::Spotty,
    ];

    const LARGE: [TropicalFishPattern; 6] = [
        TropicalFishPattern::Flopper,
        TropicalFishPattern::Stripey,
        TropicalFishPattern::Glitter,
        TropicalFishPattern::Blockfish,
        TropicalFishPattern::Betty,
        TropicalFishPattern::Clayfish,
    ];

    /// Decode the packed `size | index << 8` form.
    pub fn from_packed_id(packed: i32) -> Option<Self> {
        let index = usize::try_from((packed >> 8) & 0xFF).ok()?;
        match packed & 0xFF {
            0 => Self::SMALL.get(index).copied(),
            1 => Self::LARGE.get(index).copied(),
            _ => None,
        }
    }

    /// Encode into the packed form.
    pub fn packed_id(self) -> i32 {
        let (size, index) = match Self::SMALL.iter().position(|p| *p == self) {
            Some(index) => (0, index),
            None => (1, Self::LARGE.iter().position(|p| *p == self).unwrap_or(0)),
        };
        size | ((index as i32) << 8)
    }

    /// Serialized name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TropicalFishPattern::Kob => "kob",
            TropicalFishPattern::Sunstreak => "sunstreak",
            TropicalFishPattern::Snooper => "snooper",
            TropicalFishPattern::Dasher => "dasher",
            TropicalFishPattern::Brinely => "brinely",
            TropicalFishPattern::Spotty => "spotty",
            TropicalFishPattern::Flopper => "flopper",
            TropicalFishPattern::Stripey => "stripey",
            TropicalFishPattern::Glitter => "glitter",
            TropicalFishPattern::Blockfish => "blockfish",
            TropicalFishPattern::Betty => "betty",
            TropicalFishPattern::Clayfish => "clayfish",
        }
    }
}
