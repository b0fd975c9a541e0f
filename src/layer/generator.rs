//! Geometry generator layer.
//!
//! Renders a geometry computed from the feature by an expression, so it
//! can be used with any source geometry type.

use super::props::{property_map, read_str};
use super::{impl_symbol_layer, FromProperties, GeometryCategory, PropertyMap};
use crate::color::Color;

/// Draws the result of a geometry expression with a sub-symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryGenerator {
    /// Expression producing the geometry to draw.
    pub expression: String,
    /// Kind of symbol used for the generated geometry. Never `Hybrid`.
    pub symbol_type: GeometryCategory,
}

impl Default for GeometryGenerator {
    fn default() -> Self {
        Self {
            expression: String::new(),
            symbol_type: GeometryCategory::Fill,
        }
    }
}

impl GeometryGenerator {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("geometryModifier", self.expression.clone()),
            ("SymbolType", self.symbol_type.to_string()),
        ])
    }
}

impl FromProperties for GeometryGenerator {
    const LAYER_TYPE: &'static str = "GeometryGenerator";
    const CATEGORY: GeometryCategory = GeometryCategory::Hybrid;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            expression: read_str(properties, "geometryModifier")
                .map(str::to_string)
                .unwrap_or(defaults.expression),
            symbol_type: read_str(properties, "SymbolType")
                .and_then(|s| s.parse::<GeometryCategory>().ok())
                .filter(|category| *category != GeometryCategory::Hybrid)
                .unwrap_or(defaults.symbol_type),
        }
    }
}

impl_symbol_layer!(GeometryGenerator, color: |_layer| Color::BLACK);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::SymbolLayer;

    #[test]
    fn test_generator_is_hybrid_whatever_it_draws() {
        let props: PropertyMap = [
            ("geometryModifier", "buffer($geometry, 10)"),
            ("SymbolType", "Line"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let layer = GeometryGenerator::from_properties(&props);

        assert_eq!(layer.expression, "buffer($geometry, 10)");
        assert_eq!(layer.symbol_type, GeometryCategory::Line);
        assert_eq!(layer.category(), GeometryCategory::Hybrid);
    }

    #[test]
    fn test_generator_rejects_hybrid_sub_symbol() {
        let props: PropertyMap = [("SymbolType".to_string(), "Hybrid".to_string())]
            .into_iter()
            .collect();
        let layer = GeometryGenerator::from_properties(&props);

        assert_eq!(layer.symbol_type, GeometryCategory::Fill);
    }
}
