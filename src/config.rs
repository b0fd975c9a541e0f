//! Registry configuration.
//!
//! Hosts can leave built-in layer types out of a registry and choose how
//! rejected registrations are handled. Configuration is stored as JSON;
//! missing fields take their defaults and unknown fields are ignored.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings used when building a [`SymbolLayerRegistry`](crate::SymbolLayerRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Built-in layer type identifiers to leave out of the registry.
    pub disabled_types: Vec<String>,
    /// Abort bulk registration at the first rejected entry instead of
    /// logging it and continuing.
    pub strict_registration: bool,
}

impl RegistryConfig {
    /// Creates a configuration with every built-in type and lenient registration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled_type(mut self, name: impl Into<String>) -> Self {
        self.disabled_types.push(name.into());
        self
    }

    pub fn with_strict_registration(mut self, strict: bool) -> Self {
        self.strict_registration = strict;
        self
    }

    /// Whether the layer type with this identifier is disabled.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_types.iter().any(|disabled| disabled == name)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Reads a configuration file, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded symbol layer registry config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using default registry config", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = RegistryConfig::from_json(
            r#"{ "disabled_types": ["RasterFill"], "strict_registration": true }"#,
        )
        .unwrap();

        assert!(config.is_disabled("RasterFill"));
        assert!(!config.is_disabled("SimpleFill"));
        assert!(config.strict_registration);
    }

    #[test]
    fn test_missing_and_unknown_fields_use_defaults() {
        let config = RegistryConfig::from_json(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            RegistryConfig::from_json("{ disabled_types"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = RegistryConfig::new()
            .with_disabled_type("VectorField")
            .with_strict_registration(true);
        let json = config.to_json().unwrap();

        assert_eq!(RegistryConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = RegistryConfig::load_or_default("/nonexistent/symbol-layers.json");
        assert_eq!(config, RegistryConfig::default());
    }
}
