//! Catalog configuration.
//!
//! ## Configuration
//!
//! Settings load from JSON or from environment variables:
//! - `STACK_HASH_TRACE_FIELDS`: log every hashed map field at `trace` (default: false)
//! - `STACK_HASH_SELF_TEST`: run the known-vector self test when a catalog is built (default: false)
//! - `STACK_HASH_NOT_HASHED`: comma-separated component keys skipped by stack hashing
//!   (default: `creative_slot_lock,map_post_processing`)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::component::ComponentKind;

/// Errors raised while loading a [`HashingConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document is malformed or has an unknown component key.
    #[error("invalid hashing config: {0}")]
    Json(#[from] serde_json::Error),

    /// A listed component key does not name a component type.
    #[error("unknown component type {0:?}")]
    UnknownComponent(String),
}

/// Settings for building a [`ComponentCatalog`](crate::ComponentCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Component types that stack hashing skips entirely.
    pub not_hashed: BTreeSet<ComponentKind>,
    /// Log every hashed map field at `trace`.
    pub trace_fields: bool,
    /// Run the known-vector self test when the catalog is built.
    pub self_test_on_build: bool,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            not_hashed: default_not_hashed(),
            trace_fields: false,
            self_test_on_build: false,
        }
    }
}

fn default_not_hashed() -> BTreeSet<ComponentKind> {
    [ComponentKind::CreativeSlotLock, ComponentKind::MapPostProcessing]
        .into_iter()
        .collect()
}

impl HashingConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to the default and log a warning.
    pub fn from_env() -> Self {
        let not_hashed = match std::env::var("STACK_HASH_NOT_HASHED") {
            Ok(keys) => parse_component_list(&keys).unwrap_or_else(|error| {
                tracing::warn!(%error, "ignoring STACK_HASH_NOT_HASHED");
                default_not_hashed()
            }),
            Err(_) => default_not_hashed(),
        };

        Self {
            not_hashed,
            trace_fields: std::env::var("STACK_HASH_TRACE_FIELDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            self_test_on_build: std::env::var("STACK_HASH_SELF_TEST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Parse a comma-separated list of component keys. Blank entries are ignored.
pub fn parse_component_list(keys: &str) -> Result<BTreeSet<ComponentKind>, ConfigError> {
    keys.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| ComponentKind::from_key(key).ok_or_else(|| ConfigError::UnknownComponent(key.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HashingConfig::default();
        assert!(config.not_hashed.contains(&ComponentKind::CreativeSlotLock));
        assert!(config.not_hashed.contains(&ComponentKind::MapPostProcessing));
        assert_eq!(config.not_hashed.len(), 2);
        assert!(!config.trace_fields);
        assert!(!config.self_test_on_build);
    }

    #[test]
    fn test_from_json_partial() {
        let config = HashingConfig::from_json(r#"{"trace_fields": true}"#).unwrap();
        assert!(config.trace_fields);
        assert_eq!(config.not_hashed, default_not_hashed());
    }

    #[test]
    fn test_from_json_component_keys() {
        let config = HashingConfig::from_json(r#"{"not_hashed": ["minecraft:lore", "minecraft:creative_slot_lock"]}"#).unwrap();
        assert_eq!(config.not_hashed.len(), 2);
        assert!(config.not_hashed.contains(&ComponentKind::Lore));

        let err = HashingConfig::from_json(r#"{"not_hashed": ["minecraft:bogus"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_parse_component_list() {
        let kinds = parse_component_list(" lore, minecraft:food ,,").unwrap();
        assert_eq!(kinds.into_iter().collect::<Vec<_>>(), vec![ComponentKind::Lore, ComponentKind::Food]);

        match parse_component_list("lore,nope") {
            Err(ConfigError::UnknownComponent(key)) => assert_eq!(key, "nope"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
