//! Registry of symbol layer types.
//!
//! The registry maps stable identifiers such as `"SimpleLine"` to the
//! metadata of one layer type and constructs layers through it. Styling
//! code asks the registry for a layer by name, or for the layer types that
//! apply to a geometry category, without knowing the concrete types.
//!
//! Build a registry once at startup with [`SymbolLayerRegistry::with_builtin_types`]
//! (or [`SymbolLayerRegistry::from_config`]), register any extra types, then
//! share it by reference. [`SymbolLayerRegistry::instance`] provides a
//! process-wide registry for code that has no handle to pass around.

mod builtin;
mod metadata;

pub use builtin::builtin_metadata;
pub use metadata::{LayerFactory, PropertiesFactory, SldFactory, SymbolLayerMetadata};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::layer::{
    GeometryCategory, PropertyMap, SimpleFill, SimpleLine, SimpleMarker, SymbolLayer,
};
use crate::sld::SldElement;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Table of known symbol layer types keyed by identifier.
///
/// Registration takes `&mut self`; once populated, the registry is only
/// read and can be shared between threads.
#[derive(Debug, Default)]
pub struct SymbolLayerRegistry {
    metadata: HashMap<String, SymbolLayerMetadata>,
    /// Abort [`register_all`](Self::register_all) on the first rejection.
    strict_registration: bool,
}

impl SymbolLayerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding all built-in layer types.
    pub fn with_builtin_types() -> Self {
        Self::from_config(&RegistryConfig::default())
    }

    /// Creates a registry holding the built-in types the config leaves enabled.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry = Self {
            metadata: HashMap::new(),
            strict_registration: config.strict_registration,
        };
        let builtins = builtin_metadata();

        for name in &config.disabled_types {
            if !builtins.iter().any(|metadata| metadata.name() == name) {
                log::warn!("Config disables unknown symbol layer type {}", name);
            }
        }

        for metadata in builtins {
            if config.is_disabled(metadata.name()) {
                log::info!("Symbol layer type {} disabled by config", metadata.name());
                continue;
            }
            // Built-in identifiers are distinct, so this cannot be rejected
            if let Err(e) = registry.add_symbol_layer_type(metadata) {
                log::warn!("Skipping built-in symbol layer type: {}", e);
            }
        }

        log::debug!("Symbol layer registry created with {} types", registry.len());
        registry
    }

    /// The process-wide registry, populated with the built-in types on first use.
    pub fn instance() -> &'static SymbolLayerRegistry {
        static INSTANCE: OnceLock<SymbolLayerRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let registry = Self::with_builtin_types();
            log::info!("Initialized global symbol layer registry ({} types)", registry.len());
            registry
        })
    }

    /// Adds a layer type.
    ///
    /// Rejects metadata with an empty identifier or an identifier that is
    /// already registered; the table is left unchanged and the existing entry
    /// is kept.
    pub fn add_symbol_layer_type(
        &mut self,
        metadata: SymbolLayerMetadata,
    ) -> Result<(), RegistryError> {
        if metadata.name().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.metadata.contains_key(metadata.name()) {
            return Err(RegistryError::DuplicateType(metadata.name().to_string()));
        }

        log::debug!(
            "Registered symbol layer type {} ({})",
            metadata.name(),
            metadata.category()
        );
        self.metadata.insert(metadata.name().to_string(), metadata);
        Ok(())
    }

    /// Adds several layer types, returning how many were added.
    ///
    /// In strict mode the first rejection is returned as an error (entries
    /// before it stay registered). Otherwise rejections are logged and skipped.
    pub fn register_all(
        &mut self,
        metadata: impl IntoIterator<Item = SymbolLayerMetadata>,
    ) -> Result<usize, RegistryError> {
        let mut added = 0;
        for entry in metadata {
            match self.add_symbol_layer_type(entry) {
                Ok(()) => added += 1,
                Err(e) if self.strict_registration => return Err(e),
                Err(e) => log::warn!("Ignoring symbol layer type: {}", e),
            }
        }
        Ok(added)
    }

    /// Whether rejected registrations abort [`register_all`](Self::register_all).
    pub fn strict_registration(&self) -> bool {
        self.strict_registration
    }

    /// Metadata for the layer type with exactly this identifier.
    pub fn symbol_layer_metadata(&self, name: &str) -> Option<&SymbolLayerMetadata> {
        self.metadata.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metadata.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Identifiers of all registered types, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metadata.keys().map(String::as_str)
    }

    /// Creates a layer of the named type from saved properties.
    ///
    /// Returns `None` if no such type is registered.
    pub fn create_symbol_layer(
        &self,
        name: &str,
        properties: &PropertyMap,
    ) -> Option<Box<dyn SymbolLayer>> {
        let metadata = self.symbol_layer_metadata(name)?;
        Some(metadata.create_symbol_layer(properties))
    }

    /// Creates a layer of the named type from an SLD symbolizer element.
    ///
    /// Returns `None` if no such type is registered, if the type has no SLD
    /// import, or if the element does not describe a layer of this type.
    /// Use [`symbol_layer_metadata`](Self::symbol_layer_metadata) to tell
    /// these cases apart.
    pub fn create_symbol_layer_from_sld(
        &self,
        name: &str,
        element: &SldElement,
    ) -> Option<Box<dyn SymbolLayer>> {
        self.symbol_layer_metadata(name)?.create_symbol_layer_from_sld(element)
    }

    /// Identifiers of the layer types usable for `category`, including every
    /// `Hybrid` type. Order is unspecified.
    pub fn symbol_layers_for_category(&self, category: GeometryCategory) -> Vec<&str> {
        self.metadata
            .values()
            .filter(|metadata| metadata.category().applies_to(category))
            .map(|metadata| metadata.name())
            .collect()
    }

    /// A new default layer for `category`, or `None` for `Hybrid`.
    ///
    /// The defaults are fixed built-in types and do not depend on what is
    /// registered.
    pub fn default_symbol_layer(category: GeometryCategory) -> Option<Box<dyn SymbolLayer>> {
        match category {
            GeometryCategory::Marker => Some(Box::new(SimpleMarker::default())),
            GeometryCategory::Line => Some(Box::new(SimpleLine::default())),
            GeometryCategory::Fill => Some(Box::new(SimpleFill::default())),
            GeometryCategory::Hybrid => None,
        }
    }
}
