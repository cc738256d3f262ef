//! Decoded values that the hashers consume.

pub mod components;
pub mod holder;
pub mod identifier;
pub mod item;
pub mod nbt;
pub mod text;
pub mod variants;

pub use components::*;
pub use holder::{Holder, HolderSet, RegistryRef};
pub use identifier::{Identifier, IdentifierError, DEFAULT_NAMESPACE};
pub use item::{DataComponents, HashedStack, ItemStack};
pub use nbt::{Nbt, NbtCompound};
pub use text::{ClickEvent, HoverEvent, NamedColor, Style, TextColor, TextComponent, TextContent};
pub use variants::*;
