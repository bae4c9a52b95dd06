use std::path::Path;
use serde::Deserialize;
use crate::{
    error::NestGenError,
    rules::{default_rules, OverrideRule},
    type_map::TypeMap,
};

/// Class-level `@Schema({...})` options, identical for every emitted class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    pub id:          bool,
    pub timestamps:  bool,
    pub virtuals:    bool,
    pub version_key: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        SchemaOptions {
            id:          true,
            timestamps:  true,
            virtuals:    true,
            version_key: false,
        }
    }
}

/// Everything the converter needs, fixed at construction.
///
/// A `rules` key in JSON replaces the default rule list; `types` entries are
/// merged over the built-in table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub types:  TypeMap,
    pub rules:  Vec<OverrideRule>,
    pub schema: SchemaOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            types:  TypeMap::default(),
            rules:  default_rules(),
            schema: SchemaOptions::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self, NestGenError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, NestGenError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.rules.len(), 2);
    }

    #[test]
    fn test_partial_config() {
        let config = EngineConfig::from_json(r#"{
            "types": { "Decimal": "Number" },
            "rules": [],
            "schema": { "timestamps": false }
        }"#).unwrap();
        assert_eq!(config.types.resolve("Decimal"), "Number");
        assert_eq!(config.types.resolve("string"), "String");
        assert!(config.rules.is_empty());
        assert!(!config.schema.timestamps);
        assert!(config.schema.id);
    }

    #[test]
    fn test_invalid_config() {
        let err = EngineConfig::from_json(r#"{ "schema": { "id": "yes" } }"#).unwrap_err();
        assert!(matches!(err, NestGenError::Json(_)), "got {:?}", err);
    }
}
