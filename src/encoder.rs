//! Structural hash encoder.
//!
//! This module turns primitive values, lists, maps, and NBT trees into a
//! [`HashCode`] by feeding a tag-prefixed byte stream to CRC-32C.
//!
//! ## Byte Stream Layout
//!
//! ```text
//! scalar   = TAG value-bytes            (little-endian)
//! string   = TAG_STRING len:i32 utf16*  (len counts UTF-16 code units)
//! list     = TAG_LIST_START hash* TAG_LIST_END            (given order)
//! map      = TAG_MAP_START (key value)* TAG_MAP_END       (sorted)
//! array    = TAG_X_ARRAY_START element* TAG_X_ARRAY_END   (given order)
//! ```
//!
//! Each nested `hash` contributes its four checksum bytes, little-endian.
//!
//! ## Determinism Guarantees
//!
//! - Map entries are sorted by key hash, then value hash (unsigned compare)
//! - List and array elements keep their order
//! - Numeric width is part of the stream: `5i8` and `5i32` hash differently

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::ComponentCatalog;
use crate::registry::RegistryLookup;
use crate::types::nbt::{Nbt, NbtCompound};

/// Discriminator byte written before every structural node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Nothing to encode.
    Empty = 1,
    /// Start of a map.
    MapStart = 2,
    /// End of a map.
    MapEnd = 3,
    /// Start of a list.
    ListStart = 4,
    /// End of a list.
    ListEnd = 5,
    /// 8-bit integer.
    Byte = 6,
    /// 16-bit integer.
    Short = 7,
    /// 32-bit integer.
    Int = 8,
    /// 64-bit integer.
    Long = 9,
    /// 32-bit float.
    Float = 10,
    /// 64-bit float.
    Double = 11,
    /// UTF-16 string.
    String = 12,
    /// Boolean.
    Boolean = 13,
    /// Start of a byte array.
    ByteArrayStart = 14,
    /// End of a byte array.
    ByteArrayEnd = 15,
    /// Start of an int array.
    IntArrayStart = 16,
    /// End of an int array.
    IntArrayEnd = 17,
    /// Start of a long array.
    LongArrayStart = 18,
    /// End of a long array.
    LongArrayEnd = 19,
}

impl Tag {
    /// Every tag, in byte order.
    pub const ALL: [Tag; 19] = [
        Tag::Empty,
        Tag::MapStart,
        Tag::MapEnd,
        Tag::ListStart,
        Tag::ListEnd,
        Tag::Byte,
        Tag::Short,
        Tag::Int,
        Tag::Long,
        Tag::Float,
        Tag::Double,
        Tag::String,
        Tag::Boolean,
        Tag::ByteArrayStart,
        Tag::ByteArrayEnd,
        Tag::IntArrayStart,
        Tag::IntArrayEnd,
        Tag::LongArrayStart,
        Tag::LongArrayEnd,
    ];

    /// The wire byte of this tag.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// A 32-bit CRC-32C hash of a structural byte stream.
///
/// Ordering is the unsigned order of the checksum, which is the order used
/// to canonicalize map entries. It carries no meaning about the hashed values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HashCode(u32);

impl HashCode {
    /// Wrap a raw checksum.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Hash a finished byte stream.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(crc32c::crc32c(bytes))
    }

    /// The raw checksum.
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The checksum truncated to a signed 32-bit integer, as stored in hashed stacks.
    pub const fn as_int(self) -> i32 {
        self.0 as i32
    }

    /// The bytes this hash contributes when nested in a larger stream.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<i32> for HashCode {
    fn from(value: i32) -> Self {
        Self(value as u32)
    }
}

impl fmt::Display for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashCode({})", self)
    }
}

/// A number tagged with the width it is hashed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Hashed with [`Tag::Byte`].
    Byte(i8),
    /// Hashed with [`Tag::Short`].
    Short(i16),
    /// Hashed with [`Tag::Int`].
    Int(i32),
    /// Hashed with [`Tag::Long`].
    Long(i64),
    /// Hashed with [`Tag::Float`].
    Float(f32),
    /// Hashed with [`Tag::Double`].
    Double(f64),
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}

number_from!(i8 => Byte, i16 => Short, i32 => Int, i64 => Long, f32 => Float, f64 => Double);

/// Accumulates one tagged byte stream.
struct Stream(Vec<u8>);

impl Stream {
    fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    fn tag(mut self, tag: Tag) -> Self {
        self.0.push(tag.byte());
        self
    }

    fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    fn finish(self) -> HashCode {
        HashCode::of_bytes(&self.0)
    }
}

/// Encodes structural values into [`HashCode`]s.
///
/// The encoder also carries the ambient context hashers need: the registry
/// snapshot used to resolve network ids, and optionally the component catalog
/// used when item stacks are hashed recursively.
#[derive(Clone, Copy)]
pub struct HashEncoder<'a> {
    registries: &'a dyn RegistryLookup,
    catalog: Option<&'a ComponentCatalog>,
    trace_fields: bool,
    empty: HashCode,
    empty_map: HashCode,
    false_hash: HashCode,
    true_hash: HashCode,
}

impl<'a> HashEncoder<'a> {
    /// Create an encoder that resolves registry ids through `registries`.
    pub fn new(registries: &'a dyn RegistryLookup) -> Self {
        Self {
            registries,
            catalog: None,
            trace_fields: false,
            empty: HashCode::of_bytes(&[Tag::Empty.byte()]),
            empty_map: HashCode::of_bytes(&[Tag::MapStart.byte(), Tag::MapEnd.byte()]),
            false_hash: HashCode::of_bytes(&[Tag::Boolean.byte(), 0]),
            true_hash: HashCode::of_bytes(&[Tag::Boolean.byte(), 1]),
        }
    }

    /// Attach the component catalog used for nested item stacks.
    pub fn with_catalog(mut self, catalog: &'a ComponentCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Emit a trace event for every hashed map field.
    pub fn with_field_tracing(mut self, enabled: bool) -> Self {
        self.trace_fields = enabled;
        self
    }

    /// The registry snapshot of the current session.
    pub fn registries(&self) -> &'a dyn RegistryLookup {
        self.registries
    }

    /// The component catalog, if one is attached.
    pub fn catalog(&self) -> Option<&'a ComponentCatalog> {
        self.catalog
    }

    /// Whether map fields are traced.
    pub fn trace_fields(&self) -> bool {
        self.trace_fields
    }

    /// Hash of `[TAG_EMPTY]`.
    pub fn empty(&self) -> HashCode {
        self.empty
    }

    /// Hash of a present but empty map.
    pub fn empty_map(&self) -> HashCode {
        self.empty_map
    }

    /// Hash a boolean.
    pub fn bool(&self, value: bool) -> HashCode {
        if value {
            self.true_hash
        } else {
            self.false_hash
        }
    }

    /// Hash a number at the width it carries.
    pub fn number(&self, number: impl Into<Number>) -> HashCode {
        match number.into() {
            Number::Byte(b) => Stream::with_capacity(2).tag(Tag::Byte).bytes(&b.to_le_bytes()).finish(),
            Number::Short(s) => Stream::with_capacity(3).tag(Tag::Short).bytes(&s.to_le_bytes()).finish(),
            Number::Int(i) => Stream::with_capacity(5).tag(Tag::Int).bytes(&i.to_le_bytes()).finish(),
            Number::Long(l) => Stream::with_capacity(9).tag(Tag::Long).bytes(&l.to_le_bytes()).finish(),
            Number::Float(f) => Stream::with_capacity(5).tag(Tag::Float).bytes(&f.to_bits().to_le_bytes()).finish(),
            Number::Double(d) => Stream::with_capacity(9).tag(Tag::Double).bytes(&d.to_bits().to_le_bytes()).finish(),
        }
    }

    /// Hash a string as its UTF-16 code units.
    pub fn string(&self, value: &str) -> HashCode {
        let units: Vec<u16> = value.encode_utf16().collect();
        let mut stream = Stream::with_capacity(5 + units.len() * 2)
            .tag(Tag::String)
            .bytes(&(units.len() as i32).to_le_bytes());
        for unit in units {
            stream = stream.bytes(&unit.to_le_bytes());
        }
        stream.finish()
    }

    /// Hash a map of already-hashed entries.
    ///
    /// Entries are sorted by key hash, then value hash, so insertion order
    /// never affects the result.
    pub fn map<I>(&self, entries: I) -> HashCode
    where
        I: IntoIterator<Item = (HashCode, HashCode)>,
    {
        let mut entries: Vec<(HashCode, HashCode)> = entries.into_iter().collect();
        entries.sort_unstable();

        let mut stream = Stream::with_capacity(2 + entries.len() * 8).tag(Tag::MapStart);
        for (key, value) in entries {
            stream = stream.bytes(&key.to_bytes()).bytes(&value.to_bytes());
        }
        stream.tag(Tag::MapEnd).finish()
    }

    /// Hash a list of already-hashed elements, keeping their order.
    pub fn list<I>(&self, elements: I) -> HashCode
    where
        I: IntoIterator<Item = HashCode>,
    {
        let mut stream = Stream::with_capacity(16).tag(Tag::ListStart);
        for element in elements {
            stream = stream.bytes(&element.to_bytes());
        }
        stream.tag(Tag::ListEnd).finish()
    }

    /// Hash a byte array.
    pub fn byte_array(&self, values: &[i8]) -> HashCode {
        let mut stream = Stream::with_capacity(2 + values.len()).tag(Tag::ByteArrayStart);
        for value in values {
            stream = stream.bytes(&value.to_le_bytes());
        }
        stream.tag(Tag::ByteArrayEnd).finish()
    }

    /// Hash an int array.
    pub fn int_array(&self, values: &[i32]) -> HashCode {
        let mut stream = Stream::with_capacity(2 + values.len() * 4).tag(Tag::IntArrayStart);
        for value in values {
            stream = stream.bytes(&value.to_le_bytes());
        }
        stream.tag(Tag::IntArrayEnd).finish()
    }

    /// Hash a long array.
    pub fn long_array(&self, values: &[i64]) -> HashCode {
        let mut stream = Stream::with_capacity(2 + values.len() * 8).tag(Tag::LongArrayStart);
        for value in values {
            stream = stream.bytes(&value.to_le_bytes());
        }
        stream.tag(Tag::LongArrayEnd).finish()
    }

    /// Hash any NBT value, dispatching on its variant.
    pub fn nbt(&self, value: &Nbt) -> HashCode {
        match value {
            Nbt::Byte(b) => self.number(*b),
            Nbt::Short(s) => self.number(*s),
            Nbt::Int(i) => self.number(*i),
            Nbt::Long(l) => self.number(*l),
            Nbt::Float(f) => self.number(*f),
            Nbt::Double(d) => self.number(*d),
            Nbt::String(s) => self.string(s),
            Nbt::ByteArray(bytes) => self.byte_array(bytes),
            Nbt::IntArray(ints) => self.int_array(ints),
            Nbt::LongArray(longs) => self.long_array(longs),
            Nbt::List(list) => self.nbt_list(list),
            Nbt::Compound(compound) => self.nbt_compound(compound),
        }
    }

    /// Hash an NBT compound as a map of string keys.
    pub fn nbt_compound(&self, compound: &NbtCompound) -> HashCode {
        self.map(compound.iter().map(|(key, value)| (self.string(key), self.nbt(value))))
    }

    /// Hash an NBT list.
    pub fn nbt_list(&self, list: &[Nbt]) -> HashCode {
        self.list(list.iter().map(|value| self.nbt(value)))
    }
}

impl fmt::Debug for HashEncoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashEncoder")
            .field("has_catalog", &self.catalog.is_some())
            .field("trace_fields", &self.trace_fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NoRegistries;

    fn encoder() -> HashEncoder<'static> {
        HashEncoder::new(&NoRegistries)
    }

    #[test]
    fn test_tag_table() {
        for (index, tag) in Tag::ALL.iter().enumerate() {
            assert_eq!(tag.byte() as usize, index + 1);
        }
    }

    #[test]
    fn test_int_vector() {
        // max_stack_size = 64
        assert_eq!(encoder().number(64i32).as_int(), 733160003);
    }

    #[test]
    fn test_empty_map_vector() {
        assert_eq!(encoder().empty_map().as_int(), -982207288);
    }

    #[test]
    fn test_empty_differs_from_empty_map() {
        let enc = encoder();
        assert_ne!(enc.empty(), enc.empty_map());
    }

    #[test]
    fn test_bool_constants() {
        let enc = encoder();
        assert_eq!(enc.bool(true).as_int(), -1019818302);
        assert_eq!(enc.bool(false).as_int(), 828198337);
        assert_eq!(enc.bool(true), HashCode::of_bytes(&[13, 1]));
    }

    #[test]
    fn test_numeric_width_matters() {
        let enc = encoder();
        let widths = [
            enc.number(5i8),
            enc.number(5i16),
            enc.number(5i32),
            enc.number(5i64),
            enc.number(5.0f32),
            enc.number(5.0f64),
        ];
        for i in 0..widths.len() {
            for j in (i + 1)..widths.len() {
                assert_ne!(widths[i], widths[j], "widths {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_string_counts_utf16_units() {
        let enc = encoder();
        // U+1F600 is one code point, two UTF-16 units, four UTF-8 bytes.
        let mut expected = vec![Tag::String.byte()];
        expected.extend_from_slice(&2i32.to_le_bytes());
        for unit in "\u{1F600}".encode_utf16() {
            expected.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(enc.string("\u{1F600}"), HashCode::of_bytes(&expected));
        assert_eq!(enc.string("simple component test!").as_int(), 950545066);
    }

    #[test]
    fn test_map_order_independent() {
        let enc = encoder();
        let a = (enc.string("a"), enc.number(1i32));
        let b = (enc.string("b"), enc.number(2i32));
        let c = (enc.string("c"), enc.bool(true));
        assert_eq!(enc.map([a, b, c]), enc.map([c, a, b]));
    }

    #[test]
    fn test_list_order_sensitive() {
        let enc = encoder();
        let one = enc.number(1i32);
        let two = enc.number(2i32);
        assert_ne!(enc.list([one, two]), enc.list([two, one]));
    }

    #[test]
    fn test_hash_code_display_is_le_hex() {
        let code = HashCode::from_u32(0x0102_0304);
        assert_eq!(code.to_string(), "04030201");
        assert_eq!(HashCode::from(-1).as_u32(), u32::MAX);
    }

    #[test]
    fn test_nbt_compound_vector() {
        let enc = encoder();
        let mut geyser = NbtCompound::new();
        geyser.insert("is", Nbt::String("very cool".into()));
        let mut compound = NbtCompound::new();
        compound.insert("hello", Nbt::String("g'day".into()));
        compound.insert("nice?", Nbt::Byte(0));
        compound.insert("coolness", Nbt::Byte(100));
        compound.insert("geyser", Nbt::Compound(geyser));
        compound.insert(
            "a list",
            Nbt::List(vec![Nbt::List(vec![Nbt::String("in a list".into())])]),
        );
        assert_eq!(enc.nbt_compound(&compound).as_int(), -385053299);
    }

    #[test]
    fn test_arrays_use_distinct_tags() {
        let enc = encoder();
        assert_ne!(enc.byte_array(&[]), enc.int_array(&[]));
        assert_ne!(enc.int_array(&[]), enc.long_array(&[]));
        assert_ne!(enc.int_array(&[1, 2]), enc.int_array(&[2, 1]));
    }

    #[test]
    fn test_nbt_list_of_arrays_is_hashed() {
        let enc = encoder();
        let list = [Nbt::IntArray(vec![1, 2]), Nbt::IntArray(vec![3])];
        let expected = enc.list([enc.int_array(&[1, 2]), enc.int_array(&[3])]);
        assert_eq!(enc.nbt_list(&list), expected);
        assert_ne!(enc.nbt_list(&list), enc.list([]));
    }
}
