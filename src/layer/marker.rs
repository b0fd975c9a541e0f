//! Marker symbol layers for point features.

use super::props::{
    encode_coord, property_enum, property_map, read_color, read_coord, read_f64, read_str,
};
use super::{impl_symbol_layer, FromProperties, FromSld, GeometryCategory, PropertyMap};
use crate::color::Color;
use crate::sld::{self, SldElement};
use geo_types::Coord;

property_enum! {
    /// Built-in marker shapes.
    MarkerShape {
        Square => "square",
        Diamond => "diamond",
        Pentagon => "pentagon",
        Hexagon => "hexagon",
        Triangle => "triangle",
        EquilateralTriangle => "equilateral_triangle",
        Star => "star",
        Arrow => "arrow",
        Circle => "circle",
        Cross => "cross",
        CrossFill => "cross_fill",
        X => "x",
        Line => "line",
        ArrowHead => "arrowhead",
        FilledArrowHead => "filled_arrowhead",
        SemiCircle => "semi_circle",
    }
    default Circle
}

impl MarkerShape {
    /// Parses a shape name, accepting older aliases.
    pub fn decode(name: &str) -> Option<Self> {
        match name.trim() {
            "rectangle" => Some(MarkerShape::Square),
            "regular_star" => Some(MarkerShape::Star),
            "cross2" => Some(MarkerShape::X),
            other => MarkerShape::from_name(other),
        }
    }
}

/// Size, rotation and displacement of an SLD `Graphic`.
struct GraphicPlacement {
    size: Option<f64>,
    angle: Option<f64>,
    offset: Option<Coord<f64>>,
}

impl GraphicPlacement {
    fn read(graphic: &SldElement) -> Self {
        Self {
            size: sld::number(graphic, "Size"),
            angle: sld::number(graphic, "Rotation"),
            offset: sld::displacement(graphic),
        }
    }
}

fn zero_offset() -> Coord<f64> {
    Coord { x: 0.0, y: 0.0 }
}

/// A simple geometric shape with fill and outline.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleMarker {
    pub shape: MarkerShape,
    /// Fill colour.
    pub color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
    pub size: f64,
    /// Rotation in degrees, clockwise.
    pub angle: f64,
    pub offset: Coord<f64>,
}

impl Default for SimpleMarker {
    fn default() -> Self {
        Self {
            shape: MarkerShape::Circle,
            color: Color::RED,
            outline_color: Color::OUTLINE,
            outline_width: 0.0,
            size: 2.0,
            angle: 0.0,
            offset: zero_offset(),
        }
    }
}

impl SimpleMarker {
    /// Reads a marker from an SLD `Graphic` holding a `Mark`.
    pub(crate) fn from_graphic(graphic: &SldElement) -> Option<Self> {
        let mark = sld::mark(graphic)?;
        let placement = GraphicPlacement::read(graphic);
        let defaults = Self::default();

        let stroke = mark.stroke.unwrap_or_default();
        Some(Self {
            shape: mark
                .well_known_name
                .as_deref()
                .and_then(MarkerShape::decode)
                .unwrap_or(defaults.shape),
            color: mark.fill.unwrap_or(defaults.color),
            outline_color: stroke.color.unwrap_or(defaults.outline_color),
            outline_width: stroke.width.unwrap_or(defaults.outline_width),
            size: placement.size.unwrap_or(defaults.size),
            angle: placement.angle.unwrap_or(defaults.angle),
            offset: placement.offset.unwrap_or(defaults.offset),
        })
    }

    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("name", self.shape.as_str().to_string()),
            ("color", self.color.encode()),
            ("outline_color", self.outline_color.encode()),
            ("outline_width", self.outline_width.to_string()),
            ("size", self.size.to_string()),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
        ])
    }
}

impl FromProperties for SimpleMarker {
    const LAYER_TYPE: &'static str = "SimpleMarker";
    const CATEGORY: GeometryCategory = GeometryCategory::Marker;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            shape: read_str(properties, "name")
                .and_then(MarkerShape::decode)
                .unwrap_or(defaults.shape),
            color: read_color(properties, "color").unwrap_or(defaults.color),
            outline_color: read_color(properties, "outline_color")
                .unwrap_or(defaults.outline_color),
            outline_width: read_f64(properties, "outline_width").unwrap_or(defaults.outline_width),
            size: read_f64(properties, "size").unwrap_or(defaults.size),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
        }
    }
}

impl FromSld for SimpleMarker {
    fn from_sld(element: &SldElement) -> Option<Self> {
        Self::from_graphic(element.first_child("Graphic")?)
    }
}

impl_symbol_layer!(SimpleMarker, color: |layer| layer.color);

/// A marker shape filled by a fill symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledMarker {
    pub shape: MarkerShape,
    /// Colour of the inner fill.
    pub color: Color,
    pub size: f64,
    pub angle: f64,
    pub offset: Coord<f64>,
}

impl Default for FilledMarker {
    fn default() -> Self {
        Self {
            shape: MarkerShape::Circle,
            color: Color::RED,
            size: 2.0,
            angle: 0.0,
            offset: zero_offset(),
        }
    }
}

impl FilledMarker {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("name", self.shape.as_str().to_string()),
            ("color", self.color.encode()),
            ("size", self.size.to_string()),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
        ])
    }
}

impl FromProperties for FilledMarker {
    const LAYER_TYPE: &'static str = "FilledMarker";
    const CATEGORY: GeometryCategory = GeometryCategory::Marker;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            shape: read_str(properties, "name")
                .and_then(MarkerShape::decode)
                .unwrap_or(defaults.shape),
            color: read_color(properties, "color").unwrap_or(defaults.color),
            size: read_f64(properties, "size").unwrap_or(defaults.size),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
        }
    }
}

impl_symbol_layer!(FilledMarker, color: |layer| layer.color);

/// An SVG image used as a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgMarker {
    /// Path or URL of the SVG file.
    pub path: String,
    pub size: f64,
    pub angle: f64,
    pub offset: Coord<f64>,
    /// Replaces parametrised fill colours in the SVG.
    pub color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
}

impl Default for SvgMarker {
    fn default() -> Self {
        Self {
            path: "crosses/Star1.svg".to_string(),
            size: 4.0,
            angle: 0.0,
            offset: zero_offset(),
            color: Color::RED,
            outline_color: Color::OUTLINE,
            outline_width: 0.2,
        }
    }
}

impl SvgMarker {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("name", self.path.clone()),
            ("size", self.size.to_string()),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
            ("color", self.color.encode()),
            ("outline_color", self.outline_color.encode()),
            ("outline_width", self.outline_width.to_string()),
        ])
    }
}

impl FromProperties for SvgMarker {
    const LAYER_TYPE: &'static str = "SvgMarker";
    const CATEGORY: GeometryCategory = GeometryCategory::Marker;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            path: read_str(properties, "name")
                .map(str::to_string)
                .unwrap_or(defaults.path),
            size: read_f64(properties, "size").unwrap_or(defaults.size),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
            color: read_color(properties, "color").unwrap_or(defaults.color),
            outline_color: read_color(properties, "outline_color")
                .unwrap_or(defaults.outline_color),
            outline_width: read_f64(properties, "outline_width").unwrap_or(defaults.outline_width),
        }
    }
}

impl FromSld for SvgMarker {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic = element.first_child("Graphic")?;
        let path = sld::external_graphic(graphic)?;
        let placement = GraphicPlacement::read(graphic);
        let defaults = Self::default();

        Some(Self {
            path,
            size: placement.size.unwrap_or(defaults.size),
            angle: placement.angle.unwrap_or(defaults.angle),
            offset: placement.offset.unwrap_or(defaults.offset),
            ..defaults
        })
    }
}

impl_symbol_layer!(SvgMarker, color: |layer| layer.color);

/// A single font glyph used as a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMarker {
    pub font_family: String,
    pub character: char,
    pub size: f64,
    pub angle: f64,
    pub offset: Coord<f64>,
    pub color: Color,
}

impl Default for FontMarker {
    fn default() -> Self {
        Self {
            font_family: "Dingbats".to_string(),
            character: 'A',
            size: 2.0,
            angle: 0.0,
            offset: zero_offset(),
            color: Color::BLACK,
        }
    }
}

impl FontMarker {
    /// Splits an SLD mark name of the form `ttf://<family>#0x<code>`.
    fn decode_ttf_name(name: &str) -> Option<(String, char)> {
        let rest = name.trim().strip_prefix("ttf://")?;
        let (family, code) = rest.rsplit_once('#')?;
        let code = code
            .strip_prefix("0x")
            .or_else(|| code.strip_prefix("0X"))?;
        let character = char::from_u32(u32::from_str_radix(code, 16).ok()?)?;
        if family.is_empty() {
            return None;
        }
        Some((family.to_string(), character))
    }

    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("font", self.font_family.clone()),
            ("chr", self.character.to_string()),
            ("size", self.size.to_string()),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
            ("color", self.color.encode()),
        ])
    }
}

impl FromProperties for FontMarker {
    const LAYER_TYPE: &'static str = "FontMarker";
    const CATEGORY: GeometryCategory = GeometryCategory::Marker;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            font_family: read_str(properties, "font")
                .map(str::to_string)
                .unwrap_or(defaults.font_family),
            character: read_str(properties, "chr")
                .and_then(|s| s.chars().next())
                .unwrap_or(defaults.character),
            size: read_f64(properties, "size").unwrap_or(defaults.size),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
            color: read_color(properties, "color").unwrap_or(defaults.color),
        }
    }
}

impl FromSld for FontMarker {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic = element.first_child("Graphic")?;
        let mark = sld::mark(graphic)?;
        let (font_family, character) = Self::decode_ttf_name(mark.well_known_name.as_deref()?)?;
        let placement = GraphicPlacement::read(graphic);
        let defaults = Self::default();

        Some(Self {
            font_family,
            character,
            size: placement.size.unwrap_or(defaults.size),
            angle: placement.angle.unwrap_or(defaults.angle),
            offset: placement.offset.unwrap_or(defaults.offset),
            color: mark.fill.unwrap_or(defaults.color),
        })
    }
}

impl_symbol_layer!(FontMarker, color: |layer| layer.color);

/// A marker shape with independent width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseMarker {
    pub symbol_name: String,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub offset: Coord<f64>,
    pub color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
}

impl Default for EllipseMarker {
    fn default() -> Self {
        Self {
            symbol_name: "circle".to_string(),
            width: 1.0,
            height: 1.0,
            angle: 0.0,
            offset: zero_offset(),
            color: Color::WHITE,
            outline_color: Color::BLACK,
            outline_width: 0.0,
        }
    }
}

impl EllipseMarker {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("symbol_name", self.symbol_name.clone()),
            ("symbol_width", self.width.to_string()),
            ("symbol_height", self.height.to_string()),
            ("angle", self.angle.to_string()),
            ("offset", encode_coord(self.offset)),
            ("color", self.color.encode()),
            ("outline_color", self.outline_color.encode()),
            ("outline_width", self.outline_width.to_string()),
        ])
    }
}

impl FromProperties for EllipseMarker {
    const LAYER_TYPE: &'static str = "EllipseMarker";
    const CATEGORY: GeometryCategory = GeometryCategory::Marker;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            symbol_name: read_str(properties, "symbol_name")
                .map(str::to_string)
                .unwrap_or(defaults.symbol_name),
            width: read_f64(properties, "symbol_width").unwrap_or(defaults.width),
            height: read_f64(properties, "symbol_height").unwrap_or(defaults.height),
            angle: read_f64(properties, "angle").unwrap_or(defaults.angle),
            offset: read_coord(properties, "offset").unwrap_or(defaults.offset),
            color: read_color(properties, "color").unwrap_or(defaults.color),
            outline_color: read_color(properties, "outline_color")
                .unwrap_or(defaults.outline_color),
            outline_width: read_f64(properties, "outline_width").unwrap_or(defaults.outline_width),
        }
    }
}

impl FromSld for EllipseMarker {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic = element.first_child("Graphic")?;
        let mark = sld::mark(graphic)?;
        let placement = GraphicPlacement::read(graphic);
        let defaults = Self::default();
        let stroke = mark.stroke.unwrap_or_default();
        let size = placement.size.unwrap_or(defaults.width);

        Some(Self {
            symbol_name: mark.well_known_name.unwrap_or(defaults.symbol_name),
            width: size,
            height: size,
            angle: placement.angle.unwrap_or(defaults.angle),
            offset: placement.offset.unwrap_or(defaults.offset),
            color: mark.fill.unwrap_or(defaults.color),
            outline_color: stroke.color.unwrap_or(defaults.outline_color),
            outline_width: stroke.width.unwrap_or(defaults.outline_width),
        })
    }
}

impl_symbol_layer!(EllipseMarker, color: |layer| layer.color);

property_enum! {
    /// How the two attributes of a vector field are interpreted.
    VectorFieldType {
        Cartesian => "cartesian",
        Polar => "polar",
        Height => "height",
    }
    default Cartesian
}

property_enum! {
    /// Direction in which polar angles grow.
    AngleOrientation {
        Clockwise => "clockwise",
        CounterClockwise => "counterclockwise",
    }
    default Clockwise
}

property_enum! {
    /// Unit of polar angles.
    AngleUnits {
        Degrees => "degrees",
        Radians => "radians",
    }
    default Degrees
}

/// Draws a displacement arrow per point from two attribute values.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    pub x_attribute: String,
    pub y_attribute: String,
    pub field_type: VectorFieldType,
    pub angle_orientation: AngleOrientation,
    pub angle_units: AngleUnits,
    pub scale: f64,
    /// Colour of the arrow line.
    pub color: Color,
}

impl Default for VectorField {
    fn default() -> Self {
        Self {
            x_attribute: String::new(),
            y_attribute: String::new(),
            field_type: VectorFieldType::Cartesian,
            angle_orientation: AngleOrientation::Clockwise,
            angle_units: AngleUnits::Degrees,
            scale: 1.0,
            color: Color::OUTLINE,
        }
    }
}

impl VectorField {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("x_attribute", self.x_attribute.clone()),
            ("y_attribute", self.y_attribute.clone()),
            ("vector_field_type", self.field_type.as_str().to_string()),
            ("angle_orientation", self.angle_orientation.as_str().to_string()),
            ("angle_units", self.angle_units.as_str().to_string()),
            ("scale", self.scale.to_string()),
            ("color", self.color.encode()),
        ])
    }
}

impl FromProperties for VectorField {
    const LAYER_TYPE: &'static str = "VectorField";
    const CATEGORY: GeometryCategory = GeometryCategory::Marker;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            x_attribute: read_str(properties, "x_attribute")
                .map(str::to_string)
                .unwrap_or(defaults.x_attribute),
            y_attribute: read_str(properties, "y_attribute")
                .map(str::to_string)
                .unwrap_or(defaults.y_attribute),
            field_type: read_str(properties, "vector_field_type")
                .and_then(VectorFieldType::from_name)
                .unwrap_or(defaults.field_type),
            angle_orientation: read_str(properties, "angle_orientation")
                .and_then(AngleOrientation::from_name)
                .unwrap_or(defaults.angle_orientation),
            angle_units: read_str(properties, "angle_units")
                .and_then(AngleUnits::from_name)
                .unwrap_or(defaults.angle_units),
            scale: read_f64(properties, "scale").unwrap_or(defaults.scale),
            color: read_color(properties, "color").unwrap_or(defaults.color),
        }
    }
}

impl_symbol_layer!(VectorField, color: |layer| layer.color);

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> PropertyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn point_symbolizer(graphic: SldElement) -> SldElement {
        SldElement::new("PointSymbolizer").with_child(graphic)
    }

    #[test]
    fn test_simple_marker_from_properties() {
        let marker = SimpleMarker::from_properties(&map(&[
            ("name", "rectangle"),
            ("color", "0,0,255,128"),
            ("size", "5"),
            ("offset", "1,2"),
        ]));

        assert_eq!(marker.shape, MarkerShape::Square);
        assert_eq!(marker.color, Color::from_rgba_unmultiplied(0, 0, 255, 128));
        assert_eq!(marker.size, 5.0);
        assert_eq!(marker.offset, Coord { x: 1.0, y: 2.0 });
        assert_eq!(marker.angle, 0.0);
    }

    #[test]
    fn test_simple_marker_unknown_shape_falls_back() {
        let marker = SimpleMarker::from_properties(&map(&[("name", "dodecagon")]));
        assert_eq!(marker.shape, MarkerShape::Circle);
    }

    #[test]
    fn test_simple_marker_from_sld() {
        let xml = r##"<PointSymbolizer>
            <Graphic>
              <Mark>
                <WellKnownName>star</WellKnownName>
                <Fill><SvgParameter name="fill">#00ff00</SvgParameter></Fill>
                <Stroke>
                  <SvgParameter name="stroke">#000000</SvgParameter>
                  <SvgParameter name="stroke-width">0.5</SvgParameter>
                </Stroke>
              </Mark>
              <Size>6</Size>
              <Rotation>45</Rotation>
            </Graphic>
          </PointSymbolizer>"##;
        let element = SldElement::parse(xml).unwrap();
        let marker = SimpleMarker::from_sld(&element).unwrap();

        assert_eq!(marker.shape, MarkerShape::Star);
        assert_eq!(marker.color, Color::from_rgb(0, 255, 0));
        assert_eq!(marker.outline_color, Color::BLACK);
        assert_eq!(marker.outline_width, 0.5);
        assert_eq!(marker.size, 6.0);
        assert_eq!(marker.angle, 45.0);
    }

    #[test]
    fn test_simple_marker_from_sld_requires_mark() {
        let element = point_symbolizer(SldElement::new("Graphic"));
        assert!(SimpleMarker::from_sld(&element).is_none());
    }

    #[test]
    fn test_svg_marker_from_sld() {
        let graphic = SldElement::new("Graphic")
            .with_child(
                SldElement::new("ExternalGraphic").with_child(
                    SldElement::new("OnlineResource").with_attribute("href", "icons/pin.svg"),
                ),
            )
            .with_child(SldElement::new("Size").with_text("8"));
        let marker = SvgMarker::from_sld(&point_symbolizer(graphic)).unwrap();

        assert_eq!(marker.path, "icons/pin.svg");
        assert_eq!(marker.size, 8.0);
        assert_eq!(marker.outline_width, 0.2);
    }

    #[test]
    fn test_svg_marker_from_sld_requires_external_graphic() {
        let element = point_symbolizer(SldElement::new("Graphic"));
        assert!(SvgMarker::from_sld(&element).is_none());
    }

    #[test]
    fn test_font_marker_from_sld() {
        let graphic = SldElement::new("Graphic").with_child(
            SldElement::new("Mark")
                .with_child(SldElement::new("WellKnownName").with_text("ttf://Webdings#0x42")),
        );
        let marker = FontMarker::from_sld(&point_symbolizer(graphic)).unwrap();

        assert_eq!(marker.font_family, "Webdings");
        assert_eq!(marker.character, 'B');
    }

    #[test]
    fn test_font_marker_rejects_plain_mark_names() {
        assert_eq!(FontMarker::decode_ttf_name("circle"), None);
        assert_eq!(FontMarker::decode_ttf_name("ttf://#0x41"), None);
        assert_eq!(FontMarker::decode_ttf_name("ttf://Arial#65"), None);
    }

    #[test]
    fn test_ellipse_marker_from_sld_uses_size_for_both_axes() {
        let graphic = SldElement::new("Graphic")
            .with_child(
                SldElement::new("Mark")
                    .with_child(SldElement::new("WellKnownName").with_text("triangle")),
            )
            .with_child(SldElement::new("Size").with_text("3"));
        let marker = EllipseMarker::from_sld(&point_symbolizer(graphic)).unwrap();

        assert_eq!(marker.symbol_name, "triangle");
        assert_eq!(marker.width, 3.0);
        assert_eq!(marker.height, 3.0);
    }

    #[test]
    fn test_vector_field_from_properties() {
        let field = VectorField::from_properties(&map(&[
            ("x_attribute", "dx"),
            ("y_attribute", "dy"),
            ("vector_field_type", "polar"),
            ("angle_units", "radians"),
        ]));

        assert_eq!(field.x_attribute, "dx");
        assert_eq!(field.field_type, VectorFieldType::Polar);
        assert_eq!(field.angle_units, AngleUnits::Radians);
        assert_eq!(field.angle_orientation, AngleOrientation::Clockwise);
    }
}
