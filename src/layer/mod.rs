//! Symbol layer types.
//!
//! A symbol layer is one rendering rule (a stroke, a fill, a marker glyph)
//! contributing to a feature's symbol. This module defines the interface all
//! layer values share and the built-in layer types the registry knows about.
//! Layers only describe how they should look; painting happens elsewhere.

mod fill;
mod generator;
mod line;
mod marker;
pub(crate) mod props;

pub use fill::{
    CentroidFill, FillCoordinateMode, FillStyle, GradientFill, GradientSpread, GradientType,
    LinePatternFill, PointPatternFill, RasterFill, ShapeburstFill, SimpleFill, SvgFill,
};
pub use generator::GeometryGenerator;
pub use line::{ArrowHeadType, ArrowLine, ArrowType, MarkerLine, MarkerPlacement, SimpleLine};
pub use marker::{
    AngleOrientation, AngleUnits, EllipseMarker, FilledMarker, FontMarker, MarkerShape,
    SimpleMarker, SvgMarker, VectorField, VectorFieldType,
};
pub use props::{CapStyle, JoinStyle, LineStyle};

use crate::color::Color;
use crate::sld::SldElement;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// String settings a layer is created from and saved to.
pub type PropertyMap = BTreeMap<String, String>;

/// The kind of geometry a symbol layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryCategory {
    /// Point features.
    Marker,
    /// Line features.
    Line,
    /// Polygon features.
    Fill,
    /// Layers usable with any geometry, e.g. generated geometries.
    Hybrid,
}

impl GeometryCategory {
    /// All categories, in declaration order.
    pub const ALL: [GeometryCategory; 4] = [
        GeometryCategory::Marker,
        GeometryCategory::Line,
        GeometryCategory::Fill,
        GeometryCategory::Hybrid,
    ];

    /// Whether a layer of this category can be used for `requested` geometries.
    ///
    /// A layer applies when its category equals the requested one, and a
    /// `Hybrid` layer applies to every category.
    pub fn applies_to(self, requested: GeometryCategory) -> bool {
        self == requested || self == GeometryCategory::Hybrid
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryCategory::Marker => "Marker",
            GeometryCategory::Line => "Line",
            GeometryCategory::Fill => "Fill",
            GeometryCategory::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for GeometryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Marker" => Ok(GeometryCategory::Marker),
            "Line" => Ok(GeometryCategory::Line),
            "Fill" => Ok(GeometryCategory::Fill),
            "Hybrid" => Ok(GeometryCategory::Hybrid),
            other => Err(format!("Unknown geometry category: {}", other)),
        }
    }
}

/// A rendering rule that can be stacked into a feature's symbol.
pub trait SymbolLayer: fmt::Debug + Send + Sync {
    /// Registry identifier of this layer's type, e.g. `"SimpleLine"`.
    fn layer_type(&self) -> &'static str;

    /// The geometry category this layer renders.
    fn category(&self) -> GeometryCategory;

    /// The layer's main colour.
    fn color(&self) -> Color;

    /// The layer's settings, readable back by the same type's factory.
    fn properties(&self) -> PropertyMap;

    /// An independent copy of this layer.
    fn clone_layer(&self) -> Box<dyn SymbolLayer>;

    /// Access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn SymbolLayer {
    /// Downcasts to a concrete layer type.
    pub fn downcast_ref<T: SymbolLayer + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl Clone for Box<dyn SymbolLayer> {
    fn clone(&self) -> Self {
        self.clone_layer()
    }
}

/// A layer type constructible from a property map.
///
/// Malformed or missing values fall back to the type's defaults; creation
/// never fails.
pub trait FromProperties: SymbolLayer + Sized + 'static {
    /// Registry identifier for this type.
    const LAYER_TYPE: &'static str;
    /// Geometry category for this type.
    const CATEGORY: GeometryCategory;

    fn from_properties(properties: &PropertyMap) -> Self;
}

/// A layer type that can import itself from an SLD symbolizer element.
pub trait FromSld: FromProperties {
    /// Returns `None` when the element lacks what this type needs.
    fn from_sld(element: &SldElement) -> Option<Self>;
}

/// Implements the boilerplate parts of [`SymbolLayer`] for a built-in type.
macro_rules! impl_symbol_layer {
    ($ty:ty, color: |$this:ident| $color:expr) => {
        impl $crate::layer::SymbolLayer for $ty {
            fn layer_type(&self) -> &'static str {
                <$ty as $crate::layer::FromProperties>::LAYER_TYPE
            }

            fn category(&self) -> $crate::layer::GeometryCategory {
                <$ty as $crate::layer::FromProperties>::CATEGORY
            }

            fn color(&self) -> $crate::color::Color {
                let $this = self;
                $color
            }

            fn properties(&self) -> $crate::layer::PropertyMap {
                self.to_properties()
            }

            fn clone_layer(&self) -> Box<dyn $crate::layer::SymbolLayer> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}

pub(crate) use impl_symbol_layer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_membership() {
        use GeometryCategory::*;

        assert!(Line.applies_to(Line));
        assert!(!Line.applies_to(Fill));
        assert!(!Marker.applies_to(Line));
        for requested in GeometryCategory::ALL {
            assert!(Hybrid.applies_to(requested));
        }
    }

    #[test]
    fn test_category_names() {
        for category in GeometryCategory::ALL {
            assert_eq!(category.to_string().parse::<GeometryCategory>(), Ok(category));
        }
        assert!("Polygon".parse::<GeometryCategory>().is_err());
    }

    #[test]
    fn test_boxed_layer_clone_and_downcast() {
        let layer: Box<dyn SymbolLayer> = Box::new(SimpleLine {
            width: 3.0,
            ..Default::default()
        });
        let copy = layer.clone();

        assert_eq!(copy.layer_type(), "SimpleLine");
        assert_eq!(copy.downcast_ref::<SimpleLine>().map(|l| l.width), Some(3.0));
        assert!(copy.downcast_ref::<SimpleFill>().is_none());
    }
}
