//! Namespaced identifiers (`namespace:path`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Namespace used when a bare path is parsed.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

static NAMESPACE_PATTERN: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.-]+$"));

static PATH_PATTERN: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_./-]+$"));

/// Errors from parsing an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The namespace has characters outside `[a-z0-9_.-]`.
    #[error("invalid namespace in identifier {0:?}")]
    InvalidNamespace(String),

    /// The path has characters outside `[a-z0-9_./-]`.
    #[error("invalid path in identifier {0:?}")]
    InvalidPath(String),

    /// The validation pattern failed to compile.
    #[error("identifier pattern unavailable: {0}")]
    Pattern(String),
}

/// A namespaced key such as `minecraft:diamond_sword`.
///
/// Hashes as its full string form.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    full: String,
    colon: usize,
}

impl Identifier {
    /// Parse `namespace:path`, or a bare `path` in the `minecraft` namespace.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let (namespace, path) = match value.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, value),
        };

        if !matches(&NAMESPACE_PATTERN, namespace)? {
            return Err(IdentifierError::InvalidNamespace(value.to_string()));
        }
        if !matches(&PATH_PATTERN, path)? {
            return Err(IdentifierError::InvalidPath(value.to_string()));
        }

        Ok(Self::from_parts(namespace, path))
    }

    /// An identifier in the `minecraft` namespace, for known-good paths.
    ///
    /// The path is only checked in debug builds, where a bad path panics.
    /// Use [`Identifier::parse`] for untrusted input.
    pub fn minecraft(path: &str) -> Self {
        debug_assert!(
            matches(&PATH_PATTERN, path).unwrap_or(false),
            "invalid path in identifier {path:?}"
        );
        Self::from_parts(DEFAULT_NAMESPACE, path)
    }

    fn from_parts(namespace: &str, path: &str) -> Self {
        Self {
            full: format!("{}:{}", namespace, path),
            colon: namespace.len(),
        }
    }

    /// The namespace part.
    pub fn namespace(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The path part.
    pub fn path(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `namespace:path` form.
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

fn matches(pattern: &LazyLock<Result<Regex, regex_lite::Error>>, value: &str) -> Result<bool, IdentifierError> {
    match &**pattern {
        Ok(regex) => Ok(!value.is_empty() && regex.is_match(value)),
        Err(e) => Err(IdentifierError::Pattern(e.to_string())),
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.full)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Identifier::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_namespace() {
        let id = Identifier::parse("pumpkin").unwrap();
        assert_eq!(id.as_str(), "minecraft:pumpkin");
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.path(), "pumpkin");
    }

    #[test]
    fn test_parse_custom_namespace() {
        let id: Identifier = "geyser_mc:test_modifier_3".parse().unwrap();
        assert_eq!(id.namespace(), "geyser_mc");
        assert_eq!(id.path(), "test_modifier_3");
    }

    #[test]
    fn test_parse_nested_path() {
        let id = Identifier::parse("minecraft:salmon/size").unwrap();
        assert_eq!(id.path(), "salmon/size");
    }

    #[test]
    fn test_parse_rejects_bad_characters() {
        assert!(matches!(
            Identifier::parse("Upper:case"),
            Err(IdentifierError::InvalidNamespace(_))
        ));
        assert!(matches!(
            Identifier::parse("minecraft:has space"),
            Err(IdentifierError::InvalidPath(_))
        ));
        assert!(matches!(
            Identifier::parse("minecraft:"),
            Err(IdentifierError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_minecraft_matches_parse() {
        assert_eq!(Identifier::minecraft("salmon/size"), Identifier::parse("salmon/size").unwrap());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid path in identifier")]
    fn test_minecraft_rejects_bad_path_in_debug() {
        let _ = Identifier::minecraft("Has Space");
    }

    #[test]
    fn test_serde_as_string() {
        let id = Identifier::minecraft("melon");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"minecraft:melon\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
