//! Descriptors for registered layer types.

use crate::layer::{FromProperties, FromSld, GeometryCategory, PropertyMap, SymbolLayer};
use crate::sld::SldElement;
use std::fmt;
use std::marker::PhantomData;

/// Constructs layers of one type.
///
/// Implementations must be stateless or internally synchronized: a
/// populated registry may be shared between threads.
pub trait LayerFactory: Send + Sync {
    /// Creates a layer from saved properties. Never fails; bad values fall
    /// back to the type's defaults.
    fn create(&self, properties: &PropertyMap) -> Box<dyn SymbolLayer>;

    /// Creates a layer from an SLD symbolizer element.
    ///
    /// Returns `None` when the type has no SLD import or the element lacks
    /// what the type needs.
    fn create_from_sld(&self, _element: &SldElement) -> Option<Box<dyn SymbolLayer>> {
        None
    }

    /// Whether this factory implements SLD import at all.
    fn supports_sld(&self) -> bool {
        false
    }
}

/// Factory for a type that can only be created from properties.
pub struct PropertiesFactory<T>(PhantomData<fn() -> T>);

impl<T> PropertiesFactory<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for PropertiesFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromProperties> LayerFactory for PropertiesFactory<T> {
    fn create(&self, properties: &PropertyMap) -> Box<dyn SymbolLayer> {
        Box::new(T::from_properties(properties))
    }
}

/// Factory for a type that can be created from properties or from SLD.
pub struct SldFactory<T>(PhantomData<fn() -> T>);

impl<T> SldFactory<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SldFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromSld> LayerFactory for SldFactory<T> {
    fn create(&self, properties: &PropertyMap) -> Box<dyn SymbolLayer> {
        Box::new(T::from_properties(properties))
    }

    fn create_from_sld(&self, element: &SldElement) -> Option<Box<dyn SymbolLayer>> {
        T::from_sld(element).map(|layer| Box::new(layer) as Box<dyn SymbolLayer>)
    }

    fn supports_sld(&self) -> bool {
        true
    }
}

/// Registry entry describing one symbol layer type.
pub struct SymbolLayerMetadata {
    name: String,
    display_name: String,
    category: GeometryCategory,
    factory: Box<dyn LayerFactory>,
}

impl SymbolLayerMetadata {
    /// Describes a layer type built by an arbitrary factory.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        category: GeometryCategory,
        factory: impl LayerFactory + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            category,
            factory: Box::new(factory),
        }
    }

    /// Describes a layer type without SLD import.
    pub fn for_type<T: FromProperties>(display_name: impl Into<String>) -> Self {
        Self::new(
            T::LAYER_TYPE,
            display_name,
            T::CATEGORY,
            PropertiesFactory::<T>::new(),
        )
    }

    /// Describes a layer type that also imports from SLD.
    pub fn for_sld_type<T: FromSld>(display_name: impl Into<String>) -> Self {
        Self::new(T::LAYER_TYPE, display_name, T::CATEGORY, SldFactory::<T>::new())
    }

    /// Stable identifier, used as the persistence key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> GeometryCategory {
        self.category
    }

    pub fn supports_sld(&self) -> bool {
        self.factory.supports_sld()
    }

    /// Creates a new layer of this type from saved properties.
    pub fn create_symbol_layer(&self, properties: &PropertyMap) -> Box<dyn SymbolLayer> {
        self.factory.create(properties)
    }

    /// Creates a new layer of this type from an SLD symbolizer.
    pub fn create_symbol_layer_from_sld(
        &self,
        element: &SldElement,
    ) -> Option<Box<dyn SymbolLayer>> {
        self.factory.create_from_sld(element)
    }
}

impl fmt::Debug for SymbolLayerMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolLayerMetadata")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("category", &self.category)
            .field("supports_sld", &self.supports_sld())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{GradientFill, SimpleFill};

    #[test]
    fn test_for_type_takes_name_and_category_from_the_type() {
        let metadata = SymbolLayerMetadata::for_type::<GradientFill>("Gradient fill");

        assert_eq!(metadata.name(), "GradientFill");
        assert_eq!(metadata.display_name(), "Gradient fill");
        assert_eq!(metadata.category(), GeometryCategory::Fill);
        assert!(!metadata.supports_sld());
    }

    #[test]
    fn test_properties_only_type_ignores_sld() {
        let metadata = SymbolLayerMetadata::for_type::<GradientFill>("Gradient fill");
        let element = SldElement::new("PolygonSymbolizer").with_child(SldElement::new("Fill"));

        assert!(metadata.create_symbol_layer_from_sld(&element).is_none());
    }

    #[test]
    fn test_sld_type_creates_from_both_paths() {
        let metadata = SymbolLayerMetadata::for_sld_type::<SimpleFill>("Simple fill");
        assert!(metadata.supports_sld());

        let layer = metadata.create_symbol_layer(&PropertyMap::new());
        assert_eq!(layer.layer_type(), "SimpleFill");

        let layer = metadata
            .create_symbol_layer_from_sld(&SldElement::new("PolygonSymbolizer"))
            .unwrap();
        assert!(layer.downcast_ref::<SimpleFill>().is_some());
    }
}
