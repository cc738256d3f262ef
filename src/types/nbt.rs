//! Free-form NBT values carried by custom-data style components.

use std::collections::BTreeMap;

/// A single NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum Nbt {
    /// `TAG_Byte`. Booleans are stored as bytes.
    Byte(i8),
    /// `TAG_Short`.
    Short(i16),
    /// `TAG_Int`.
    Int(i32),
    /// `TAG_Long`.
    Long(i64),
    /// `TAG_Float`.
    Float(f32),
    /// `TAG_Double`.
    Double(f64),
    /// `TAG_Byte_Array`.
    ByteArray(Vec<i8>),
    /// `TAG_String`.
    String(String),
    /// `TAG_List`.
    List(Vec<Nbt>),
    /// `TAG_Compound`.
    Compound(NbtCompound),
    /// `TAG_Int_Array`.
    IntArray(Vec<i32>),
    /// `TAG_Long_Array`.
    LongArray(Vec<i64>),
}

impl From<bool> for Nbt {
    fn from(value: bool) -> Self {
        Nbt::Byte(value as i8)
    }
}

impl From<&str> for Nbt {
    fn from(value: &str) -> Self {
        Nbt::String(value.to_string())
    }
}

impl From<NbtCompound> for Nbt {
    fn from(value: NbtCompound) -> Self {
        Nbt::Compound(value)
    }
}

/// An NBT compound: string keys to values, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NbtCompound {
    entries: BTreeMap<String, Nbt>,
}

impl NbtCompound {
    /// An empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Nbt>) -> Option<Nbt> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Nbt>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&Nbt> {
        self.entries.get(key)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Nbt)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the compound has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Nbt)> for NbtCompound {
    fn from_iter<I: IntoIterator<Item = (String, Nbt)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
