//! The layer types every registry starts with.

use super::SymbolLayerMetadata;
use crate::layer::{
    ArrowLine, CentroidFill, EllipseMarker, FilledMarker, FontMarker, GeometryGenerator,
    GradientFill, LinePatternFill, MarkerLine, PointPatternFill, RasterFill, ShapeburstFill,
    SimpleFill, SimpleLine, SimpleMarker, SvgFill, SvgMarker, VectorField,
};

/// Metadata for all built-in layer types.
pub fn builtin_metadata() -> Vec<SymbolLayerMetadata> {
    vec![
        SymbolLayerMetadata::for_sld_type::<SimpleLine>("Simple line"),
        SymbolLayerMetadata::for_sld_type::<MarkerLine>("Marker line"),
        SymbolLayerMetadata::for_type::<ArrowLine>("Arrow"),
        SymbolLayerMetadata::for_sld_type::<SimpleMarker>("Simple marker"),
        SymbolLayerMetadata::for_type::<FilledMarker>("Filled marker"),
        SymbolLayerMetadata::for_sld_type::<SvgMarker>("SVG marker"),
        SymbolLayerMetadata::for_sld_type::<FontMarker>("Font marker"),
        SymbolLayerMetadata::for_sld_type::<EllipseMarker>("Ellipse marker"),
        SymbolLayerMetadata::for_type::<VectorField>("Vector field marker"),
        SymbolLayerMetadata::for_sld_type::<SimpleFill>("Simple fill"),
        SymbolLayerMetadata::for_type::<GradientFill>("Gradient fill"),
        SymbolLayerMetadata::for_type::<ShapeburstFill>("Shapeburst fill"),
        SymbolLayerMetadata::for_type::<RasterFill>("Raster image fill"),
        SymbolLayerMetadata::for_sld_type::<SvgFill>("SVG fill"),
        SymbolLayerMetadata::for_sld_type::<CentroidFill>("Centroid fill"),
        SymbolLayerMetadata::for_sld_type::<LinePatternFill>("Line pattern fill"),
        SymbolLayerMetadata::for_sld_type::<PointPatternFill>("Point pattern fill"),
        SymbolLayerMetadata::for_type::<GeometryGenerator>("Geometry generator"),
    ]
}
