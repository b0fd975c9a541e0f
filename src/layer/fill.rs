//! Fill symbol layers for polygon features.

use super::props::{
    decode_coord, encode_bool, encode_coord, property_enum, property_map, read_bool, read_color,
    read_coord, read_f64, read_num, read_str,
};
use super::{
    impl_symbol_layer, FromProperties, FromSld, GeometryCategory, JoinStyle, LineStyle,
    PropertyMap, SimpleLine, SimpleMarker,
};
use crate::color::Color;
use crate::sld::{self, SldElement};
use geo_types::Coord;

fn zero_offset() -> Coord<f64> {
    Coord { x: 0.0, y: 0.0 }
}

property_enum! {
    /// Brush pattern of a simple fill.
    FillStyle {
        NoBrush => "no",
        Solid => "solid",
        Horizontal => "horizontal",
        Vertical => "vertical",
        Cross => "cross",
        BDiagonal => "b_diagonal",
        FDiagonal => "f_diagonal",
        DiagonalCross => "diagonal_x",
        Dense1 => "dense1",
        Dense2 => "dense2",
        Dense3 => "dense3",
        Dense4 => "dense4",
        Dense5 => "dense5",
        Dense6 => "dense6",
        Dense7 => "dense7",
    }
    default Solid
}

/// A solid or hatched fill with an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFill {
    pub color: Color,
    pub style: FillStyle,
    pub outline_color: Color,
    pub outline_style: LineStyle,
    pub outline_width: f64,
    pub join_style: JoinStyle,
    pub offset: Coord<f64>,
}

impl Default for SimpleFill {
    fn default() -> Self {
        Self {
            color: Color::BLUE,
            style: FillStyle::Solid,
            outline_color: Color::OUTLINE,
            outline_style: LineStyle::Solid,
            outline_width: 0.26,
            join_style: JoinStyle::Bevel,
            offset: zero_offset(),
        }
    }
}

impl SimpleFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("color", self.color.encode()),
            ("style", self.style.as_str().to_string()),
            ("outline_color", self.outline_color.encode()),
            ("outline_style", self.outline_style.as_str().to_string()),
            ("outline_width", self.outline_width.to_string()),
            ("joinstyle", self.join_style.as_str().to_string()),
            ("offset", encode_coord(self.offset)),
        ])
    }
}

impl FromProperties for SimpleFill {
    const LAYER_TYPE: &'static str = "SimpleFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            color: read_color(properties, "color").unwrap_or(defaults.color),
            style: read_str(properties, "style")
                .and_then(FillStyle::from_name)
                .unwrap_or(defaults.style),
            outline_color: read_color(properties, "outline_color")
                .unwrap_or(defaults.outline_color),
            outline_style: read_str(properties, "outline_style")
                .and_then(LineStyle::from_name)
                .unwrap_or(defaults.outline_style),
            outline_width: read_f64(properties, "outline_width").unwrap_or(defaults.outline_width),
            join_style: read_str(properties, "joinstyle")
                .and_then(JoinStyle::from_name)
                .unwrap_or(defaults.join_style),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
        }
    }
}

impl FromSld for SimpleFill {
    /// A symbolizer without `Fill` gives an unfilled layer and one without
    /// `Stroke` gives no outline.
    fn from_sld(element: &SldElement) -> Option<Self> {
        let mut layer = Self::default();

        match element.first_child("Fill") {
            Some(fill) => {
                if let Some(color) = sld::fill_color(fill) {
                    layer.color = color;
                }
            }
            None => layer.style = FillStyle::NoBrush,
        }

        match element.first_child("Stroke") {
            Some(stroke) => {
                let stroke = sld::stroke_params(stroke);
                if let Some(color) = stroke.color {
                    layer.outline_color = color;
                }
                if let Some(width) = stroke.width {
                    layer.outline_width = width;
                }
                if let Some(join) = stroke.join {
                    layer.join_style = join;
                }
                if stroke.dash.is_some() {
                    layer.outline_style = LineStyle::Dash;
                }
            }
            None => layer.outline_style = LineStyle::NoPen,
        }

        if let Some(offset) = sld::displacement(element) {
            layer.offset = offset;
        }
        Some(layer)
    }
}

impl_symbol_layer!(SimpleFill, color: |layer| layer.color);

property_enum! {
    /// Shape of a colour gradient.
    GradientType {
        Linear => "linear",
        Radial => "radial",
        Conical => "conical",
    }
    default Linear
}

property_enum! {
    /// Whether fill geometry is relative to each feature or to the map view.
    FillCoordinateMode {
        Feature => "feature",
        Viewport => "viewport",
    }
    default Feature
}

property_enum! {
    /// How a gradient continues beyond its reference points.
    GradientSpread {
        Pad => "pad",
        Reflect => "reflect",
        Repeat => "repeat",
    }
    default Pad
}

/// A two-colour gradient fill.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientFill {
    pub color: Color,
    pub color2: Color,
    pub gradient_type: GradientType,
    pub coordinate_mode: FillCoordinateMode,
    pub spread: GradientSpread,
    /// Start of the gradient, relative to the feature bounding box.
    pub reference_point1: Coord<f64>,
    /// End of the gradient, relative to the feature bounding box.
    pub reference_point2: Coord<f64>,
    pub angle: f64,
    pub offset: Coord<f64>,
}

impl Default for GradientFill {
    fn default() -> Self {
        Self {
            color: Color::BLUE,
            color2: Color::WHITE,
            gradient_type: GradientType::Linear,
            coordinate_mode: FillCoordinateMode::Feature,
            spread: GradientSpread::Pad,
            reference_point1: Coord { x: 0.5, y: 0.0 },
            reference_point2: Coord { x: 0.5, y: 1.0 },
            angle: 0.0,
            offset: zero_offset(),
        }
    }
}

impl GradientFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("color", self.color.encode()),
            ("gradient_color2", self.color2.encode()),
            ("gradient_type", self.gradient_type.as_str().to_string()),
            ("coordinate_mode", self.coordinate_mode.as_str().to_string()),
            ("spread", self.spread.as_str().to_string()),
            ("reference_point1", encode_coord(self.reference_point1)),
            ("reference_point2", encode_coord(self.reference_point2)),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
        ])
    }
}

impl FromProperties for GradientFill {
    const LAYER_TYPE: &'static str = "GradientFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            color: read_color(properties, "color").unwrap_or(defaults.color),
            color2: read_color(properties, "gradient_color2").unwrap_or(defaults.color2),
            gradient_type: read_str(properties, "gradient_type")
                .and_then(GradientType::from_name)
                .unwrap_or(defaults.gradient_type),
            coordinate_mode: read_str(properties, "coordinate_mode")
                .and_then(FillCoordinateMode::from_name)
                .unwrap_or(defaults.coordinate_mode),
            spread: read_str(properties, "spread")
                .and_then(GradientSpread::from_name)
                .unwrap_or(defaults.spread),
            reference_point1: read_coord(properties, "reference_point1")
                .unwrap_or(defaults.reference_point1),
            reference_point2: read_coord(properties, "reference_point2")
                .unwrap_or(defaults.reference_point2),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
        }
    }
}

impl_symbol_layer!(GradientFill, color: |layer| layer.color);

/// A gradient that follows the distance from the polygon boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeburstFill {
    pub color: Color,
    pub color2: Color,
    pub blur_radius: u32,
    /// Shade across the whole shape instead of up to `max_distance`.
    pub use_whole_shape: bool,
    pub max_distance: f64,
    /// Ignore interior rings when measuring distances.
    pub ignore_rings: bool,
    pub offset: Coord<f64>,
}

impl Default for ShapeburstFill {
    fn default() -> Self {
        Self {
            color: Color::BLUE,
            color2: Color::WHITE,
            blur_radius: 0,
            use_whole_shape: true,
            max_distance: 5.0,
            ignore_rings: false,
            offset: zero_offset(),
        }
    }
}

impl ShapeburstFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("color", self.color.encode()),
            ("gradient_color2", self.color2.encode()),
            ("blur_radius", self.blur_radius.to_string()),
            ("use_whole_shape", encode_bool(self.use_whole_shape)),
            ("max_distance", self.max_distance.to_string()),
            ("ignore_rings", encode_bool(self.ignore_rings)),
            ("offset", encode_coord(self.offset)),
        ])
    }
}

impl FromProperties for ShapeburstFill {
    const LAYER_TYPE: &'static str = "ShapeburstFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            color: read_color(properties, "color").unwrap_or(defaults.color),
            color2: read_color(properties, "gradient_color2").unwrap_or(defaults.color2),
            blur_radius: read_num::<u32>(properties, "blur_radius")
                .unwrap_or(defaults.blur_radius),
            use_whole_shape: read_bool(properties, "use_whole_shape")
                .unwrap_or(defaults.use_whole_shape),
            max_distance: read_f64(properties, "max_distance").unwrap_or(defaults.max_distance),
            ignore_rings: read_bool(properties, "ignore_rings").unwrap_or(defaults.ignore_rings),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
        }
    }
}

impl_symbol_layer!(ShapeburstFill, color: |layer| layer.color);

/// A raster image tiled across the polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterFill {
    pub image_path: String,
    pub coordinate_mode: FillCoordinateMode,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
    /// Tile width; zero keeps the image's own size.
    pub width: f64,
    pub angle: f64,
    pub offset: Coord<f64>,
}

impl Default for RasterFill {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            coordinate_mode: FillCoordinateMode::Feature,
            alpha: 1.0,
            width: 0.0,
            angle: 0.0,
            offset: zero_offset(),
        }
    }
}

impl RasterFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("imageFile", self.image_path.clone()),
            ("coordinate_mode", self.coordinate_mode.as_str().to_string()),
            ("alpha", self.alpha.to_string()),
            ("width", self.width.to_string()),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
        ])
    }
}

impl FromProperties for RasterFill {
    const LAYER_TYPE: &'static str = "RasterFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            image_path: read_str(properties, "imageFile")
                .map(str::to_string)
                .unwrap_or(defaults.image_path),
            coordinate_mode: read_str(properties, "coordinate_mode")
                .and_then(FillCoordinateMode::from_name)
                .unwrap_or(defaults.coordinate_mode),
            alpha: read_f64(properties, "alpha")
                .map(|a| a.clamp(0.0, 1.0))
                .unwrap_or(defaults.alpha),
            width: read_f64(properties, "width").unwrap_or(defaults.width),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
        }
    }
}

impl_symbol_layer!(RasterFill, color: |layer| Color::WHITE.with_opacity(layer.alpha));

/// An SVG image tiled across the polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgFill {
    pub svg_path: String,
    /// Width of one pattern tile.
    pub width: f64,
    pub angle: f64,
    pub color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
}

impl Default for SvgFill {
    fn default() -> Self {
        Self {
            svg_path: String::new(),
            width: 20.0,
            angle: 0.0,
            color: Color::BLACK,
            outline_color: Color::OUTLINE,
            outline_width: 0.2,
        }
    }
}

impl SvgFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("svgFile", self.svg_path.clone()),
            ("width", self.width.to_string()),
            ("angle", self.angle.to_string()),
            ("color", self.color.encode()),
            ("outline_color", self.outline_color.encode()),
            ("outline_width", self.outline_width.to_string()),
        ])
    }
}

impl FromProperties for SvgFill {
    const LAYER_TYPE: &'static str = "SVGFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            svg_path: read_str(properties, "svgFile")
                .map(str::to_string)
                .unwrap_or(defaults.svg_path),
            width: read_f64(properties, "width").unwrap_or(defaults.width),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            color: read_color(properties, "color").unwrap_or(defaults.color),
            outline_color: read_color(properties, "outline_color")
                .unwrap_or(defaults.outline_color),
            outline_width: read_f64(properties, "outline_width").unwrap_or(defaults.outline_width),
        }
    }
}

impl FromSld for SvgFill {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic = element.find(&["Fill", "GraphicFill", "Graphic"])?;
        let svg_path = sld::external_graphic(graphic)?;
        let defaults = Self::default();

        Some(Self {
            svg_path,
            width: sld::number(graphic, "Size").unwrap_or(defaults.width),
            angle: sld::number(graphic, "Rotation").unwrap_or(defaults.angle),
            ..defaults
        })
    }
}

impl_symbol_layer!(SvgFill, color: |layer| layer.color);

/// A marker drawn at the polygon's centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidFill {
    /// Force the point inside the polygon.
    pub point_on_surface: bool,
    /// Draw a marker for each part of a multi-polygon.
    pub point_on_all_parts: bool,
    pub marker: SimpleMarker,
}

impl Default for CentroidFill {
    fn default() -> Self {
        Self {
            point_on_surface: false,
            point_on_all_parts: true,
            marker: SimpleMarker::default(),
        }
    }
}

impl CentroidFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("point_on_surface", encode_bool(self.point_on_surface)),
            ("point_on_all_parts", encode_bool(self.point_on_all_parts)),
        ])
    }
}

impl FromProperties for CentroidFill {
    const LAYER_TYPE: &'static str = "CentroidFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            point_on_surface: read_bool(properties, "point_on_surface")
                .unwrap_or(defaults.point_on_surface),
            point_on_all_parts: read_bool(properties, "point_on_all_parts")
                .unwrap_or(defaults.point_on_all_parts),
            marker: defaults.marker,
        }
    }
}

impl FromSld for CentroidFill {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic = element
            .first_child("Graphic")
            .or_else(|| element.find(&["Fill", "GraphicFill", "Graphic"]))?;

        Some(Self {
            marker: SimpleMarker::from_graphic(graphic)?,
            ..Self::default()
        })
    }
}

impl_symbol_layer!(CentroidFill, color: |layer| layer.marker.color);

/// Parallel lines hatching the polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePatternFill {
    /// Hatch angle in degrees.
    pub angle: f64,
    /// Distance between hatch lines.
    pub distance: f64,
    pub offset: f64,
    pub line: SimpleLine,
}

impl Default for LinePatternFill {
    fn default() -> Self {
        Self {
            angle: 45.0,
            distance: 5.0,
            offset: 0.0,
            line: SimpleLine::default(),
        }
    }
}

impl LinePatternFill {
    /// Hatch angle for an SLD well-known hatch mark.
    fn angle_for_mark(name: &str) -> Option<f64> {
        match name {
            "horline" => Some(0.0),
            "vertline" => Some(90.0),
            "slash" => Some(45.0),
            "backslash" => Some(135.0),
            _ => None,
        }
    }

    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("lineangle", self.angle.to_string()),
            ("distance", self.distance.to_string()),
            ("offset", self.offset.to_string()),
            ("color", self.line.color.encode()),
        ])
    }
}

impl FromProperties for LinePatternFill {
    const LAYER_TYPE: &'static str = "LinePatternFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let mut layer = Self::default();
        if let Some(angle) = read_f64(properties, "lineangle") {
            layer.angle = angle;
        }
        if let Some(distance) = read_f64(properties, "distance") {
            layer.distance = distance;
        }
        if let Some(offset) = read_f64(properties, "offset") {
            layer.offset = offset;
        }
        if let Some(color) = read_color(properties, "color") {
            layer.line.color = color;
        }
        layer
    }
}

impl FromSld for LinePatternFill {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic = element.find(&["Fill", "GraphicFill", "Graphic"])?;
        let mark = sld::mark(graphic)?;
        let base_angle = Self::angle_for_mark(mark.well_known_name.as_deref()?)?;

        let mut layer = Self {
            angle: base_angle + sld::number(graphic, "Rotation").unwrap_or(0.0),
            ..Self::default()
        };
        if let Some(distance) = sld::number(graphic, "Size") {
            layer.distance = distance;
        }
        if let Some(stroke) = &mark.stroke {
            layer.line.apply_stroke(stroke);
        }
        Some(layer)
    }
}

impl_symbol_layer!(LinePatternFill, color: |layer| layer.line.color);

/// Markers repeated on a regular grid across the polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPatternFill {
    pub distance_x: f64,
    pub distance_y: f64,
    /// Horizontal shift applied to every other row.
    pub displacement_x: f64,
    /// Vertical shift applied to every other column.
    pub displacement_y: f64,
    pub marker: SimpleMarker,
}

impl Default for PointPatternFill {
    fn default() -> Self {
        Self {
            distance_x: 15.0,
            distance_y: 15.0,
            displacement_x: 0.0,
            displacement_y: 0.0,
            marker: SimpleMarker::default(),
        }
    }
}

impl PointPatternFill {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("distance_x", self.distance_x.to_string()),
            ("distance_y", self.distance_y.to_string()),
            ("displacement_x", self.displacement_x.to_string()),
            ("displacement_y", self.displacement_y.to_string()),
        ])
    }
}

impl FromProperties for PointPatternFill {
    const LAYER_TYPE: &'static str = "PointPatternFill";
    const CATEGORY: GeometryCategory = GeometryCategory::Fill;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            distance_x: read_f64(properties, "distance_x").unwrap_or(defaults.distance_x),
            distance_y: read_f64(properties, "distance_y").unwrap_or(defaults.distance_y),
            displacement_x: read_f64(properties, "displacement_x")
                .unwrap_or(defaults.displacement_x),
            displacement_y: read_f64(properties, "displacement_y")
                .unwrap_or(defaults.displacement_y),
            marker: defaults.marker,
        }
    }
}

impl FromSld for PointPatternFill {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic_fill = element.find(&["Fill", "GraphicFill"])?;
        let graphic = graphic_fill.first_child("Graphic")?;

        let mut layer = Self {
            marker: SimpleMarker::from_graphic(graphic)?,
            ..Self::default()
        };
        let distance = graphic_fill
            .vendor_option("distance")
            .or_else(|| element.vendor_option("distance"))
            .and_then(decode_coord);
        if let Some(distance) = distance {
            layer.distance_x = distance.x;
            layer.distance_y = distance.y;
        }
        Some(layer)
    }
}

impl_symbol_layer!(PointPatternFill, color: |layer| layer.marker.color);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::MarkerShape;

    fn map(entries: &[(&str, &str)]) -> PropertyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn graphic_fill(graphic: SldElement) -> SldElement {
        SldElement::new("PolygonSymbolizer").with_child(
            SldElement::new("Fill").with_child(SldElement::new("GraphicFill").with_child(graphic)),
        )
    }

    fn mark(name: &str) -> SldElement {
        SldElement::new("Mark").with_child(SldElement::new("WellKnownName").with_text(name))
    }

    #[test]
    fn test_simple_fill_from_sld() {
        let xml = r##"<PolygonSymbolizer>
            <Fill>
              <SvgParameter name="fill">#ff0000</SvgParameter>
              <SvgParameter name="fill-opacity">0</SvgParameter>
            </Fill>
            <Stroke>
              <SvgParameter name="stroke">#000000</SvgParameter>
              <SvgParameter name="stroke-width">1</SvgParameter>
            </Stroke>
          </PolygonSymbolizer>"##;
        let element = SldElement::parse(xml).unwrap();
        let fill = SimpleFill::from_sld(&element).unwrap();

        assert_eq!(fill.color, Color::from_rgba_unmultiplied(255, 0, 0, 0));
        assert_eq!(fill.style, FillStyle::Solid);
        assert_eq!(fill.outline_color, Color::BLACK);
        assert_eq!(fill.outline_width, 1.0);
        assert_eq!(fill.outline_style, LineStyle::Solid);
    }

    #[test]
    fn test_simple_fill_from_bare_symbolizer() {
        let fill = SimpleFill::from_sld(&SldElement::new("PolygonSymbolizer")).unwrap();

        assert_eq!(fill.style, FillStyle::NoBrush);
        assert_eq!(fill.outline_style, LineStyle::NoPen);
    }

    #[test]
    fn test_gradient_fill_from_properties() {
        let fill = GradientFill::from_properties(&map(&[
            ("gradient_type", "radial"),
            ("spread", "reflect"),
            ("gradient_color2", "10,10,10"),
            ("reference_point1", "0,0"),
        ]));

        assert_eq!(fill.gradient_type, GradientType::Radial);
        assert_eq!(fill.spread, GradientSpread::Reflect);
        assert_eq!(fill.color2, Color::from_rgb(10, 10, 10));
        assert_eq!(fill.reference_point1, Coord { x: 0.0, y: 0.0 });
        assert_eq!(fill.reference_point2, Coord { x: 0.5, y: 1.0 });
    }

    #[test]
    fn test_raster_fill_clamps_alpha() {
        let fill = RasterFill::from_properties(&map(&[("alpha", "1.7"), ("imageFile", "a.png")]));
        assert_eq!(fill.alpha, 1.0);
        assert_eq!(fill.image_path, "a.png");
    }

    #[test]
    fn test_shapeburst_negative_blur_keeps_default() {
        let fill = ShapeburstFill::from_properties(&map(&[("blur_radius", "-3")]));
        assert_eq!(fill.blur_radius, 0);
    }

    #[test]
    fn test_svg_fill_from_sld() {
        let graphic = SldElement::new("Graphic")
            .with_child(
                SldElement::new("ExternalGraphic").with_child(
                    SldElement::new("OnlineResource").with_attribute("href", "hatch.svg"),
                ),
            )
            .with_child(SldElement::new("Size").with_text("12"))
            .with_child(SldElement::new("Rotation").with_text("30"));
        let fill = SvgFill::from_sld(&graphic_fill(graphic)).unwrap();

        assert_eq!(fill.svg_path, "hatch.svg");
        assert_eq!(fill.width, 12.0);
        assert_eq!(fill.angle, 30.0);
    }

    #[test]
    fn test_centroid_fill_from_sld() {
        let element = SldElement::new("PointSymbolizer")
            .with_child(SldElement::new("Graphic").with_child(mark("square")));
        let fill = CentroidFill::from_sld(&element).unwrap();

        assert_eq!(fill.marker.shape, MarkerShape::Square);
        assert!(fill.point_on_all_parts);
    }

    #[test]
    fn test_line_pattern_fill_from_sld() {
        let graphic = SldElement::new("Graphic")
            .with_child(
                mark("vertline").with_child(
                    SldElement::new("Stroke").with_child(
                        SldElement::new("SvgParameter")
                            .with_attribute("name", "stroke")
                            .with_text("#ff0000"),
                    ),
                ),
            )
            .with_child(SldElement::new("Size").with_text("8"))
            .with_child(SldElement::new("Rotation").with_text("10"));
        let fill = LinePatternFill::from_sld(&graphic_fill(graphic)).unwrap();

        assert_eq!(fill.angle, 100.0);
        assert_eq!(fill.distance, 8.0);
        assert_eq!(fill.line.color, Color::RED);
    }

    #[test]
    fn test_line_pattern_fill_rejects_unknown_mark() {
        let graphic = SldElement::new("Graphic").with_child(mark("circle"));
        assert!(LinePatternFill::from_sld(&graphic_fill(graphic)).is_none());
    }

    #[test]
    fn test_point_pattern_fill_from_sld() {
        let element = SldElement::new("PolygonSymbolizer").with_child(
            SldElement::new("Fill").with_child(
                SldElement::new("GraphicFill")
                    .with_child(SldElement::new("Graphic").with_child(mark("circle")))
                    .with_child(
                        SldElement::new("VendorOption")
                            .with_attribute("name", "distance")
                            .with_text("20,30"),
                    ),
            ),
        );
        let fill = PointPatternFill::from_sld(&element).unwrap();

        assert_eq!(fill.distance_x, 20.0);
        assert_eq!(fill.distance_y, 30.0);
        assert_eq!(fill.marker.shape, MarkerShape::Circle);
    }
}
