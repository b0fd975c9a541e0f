//! Pluggable symbol layer types for vector map styling.
//!
//! A feature's symbol is a stack of symbol layers: strokes, fills, markers.
//! Each layer type is registered in a [`SymbolLayerRegistry`] under a stable
//! identifier together with its geometry category and a factory. Styles are
//! restored by asking the registry for a layer by identifier, either from a
//! saved property map or from an SLD (Styled Layer Descriptor) symbolizer.
//!
//! ```
//! use symbol_layers::{GeometryCategory, PropertyMap, SymbolLayer, SymbolLayerRegistry};
//!
//! let registry = SymbolLayerRegistry::with_builtin_types();
//! let layer = registry
//!     .create_symbol_layer("SimpleLine", &PropertyMap::new())
//!     .unwrap();
//! assert_eq!(layer.category(), GeometryCategory::Line);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod layer;
pub mod registry;
pub mod sld;

pub use color::Color;
pub use config::RegistryConfig;
pub use error::{ConfigError, RegistryError, SldError};
pub use layer::{FromProperties, FromSld, GeometryCategory, PropertyMap, SymbolLayer};
pub use registry::{LayerFactory, SymbolLayerMetadata, SymbolLayerRegistry};
pub use sld::SldElement;
