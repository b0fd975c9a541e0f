//! Line symbol layers: plain strokes, marker lines and arrows.

use super::props::{
    decode_dash, encode_bool, encode_dash, property_enum, property_map, read_any, read_bool,
    read_color, read_f64, read_num, read_str,
};
use super::{
    impl_symbol_layer, CapStyle, FromProperties, FromSld, GeometryCategory, JoinStyle, LineStyle,
    PropertyMap, SimpleMarker,
};
use crate::color::Color;
use crate::sld::{self, SldElement, StrokeParams};

/// A solid or dashed stroke along the line.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleLine {
    pub color: Color,
    /// Stroke width in millimetres.
    pub width: f64,
    pub line_style: LineStyle,
    pub join_style: JoinStyle,
    pub cap_style: CapStyle,
    /// Perpendicular offset from the line.
    pub offset: f64,
    /// Dash pattern used instead of `line_style` when set.
    pub custom_dash: Option<Vec<f64>>,
}

impl Default for SimpleLine {
    fn default() -> Self {
        Self {
            color: Color::OUTLINE,
            width: 0.26,
            line_style: LineStyle::Solid,
            join_style: JoinStyle::Bevel,
            cap_style: CapStyle::Square,
            offset: 0.0,
            custom_dash: None,
        }
    }
}

impl SimpleLine {
    /// Applies the settings present in an SLD stroke.
    pub(crate) fn apply_stroke(&mut self, stroke: &StrokeParams) {
        if let Some(color) = stroke.color {
            self.color = color;
        }
        if let Some(width) = stroke.width {
            self.width = width;
        }
        if let Some(join) = stroke.join {
            self.join_style = join;
        }
        if let Some(cap) = stroke.cap {
            self.cap_style = cap;
        }
        if stroke.dash.is_some() {
            self.custom_dash = stroke.dash.clone();
        }
    }

    fn to_properties(&self) -> PropertyMap {
        let mut props = property_map([
            ("line_color", self.color.encode()),
            ("line_width", self.width.to_string()),
            ("line_style", self.line_style.as_str().to_string()),
            ("joinstyle", self.join_style.as_str().to_string()),
            ("capstyle", self.cap_style.as_str().to_string()),
            ("offset", self.offset.to_string()),
            ("use_custom_dash", encode_bool(self.custom_dash.is_some())),
        ]);
        if let Some(dash) = &self.custom_dash {
            props.insert("customdash".to_string(), encode_dash(dash));
        }
        props
    }
}

impl FromProperties for SimpleLine {
    const LAYER_TYPE: &'static str = "SimpleLine";
    const CATEGORY: GeometryCategory = GeometryCategory::Line;

    fn from_properties(properties: &PropertyMap) -> Self {
        let mut layer = Self::default();
        if let Some(color) = read_any(properties, &["line_color", "color"]).and_then(Color::decode)
        {
            layer.color = color;
        }
        if let Some(width) = read_any(properties, &["line_width", "width"])
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|w| w.is_finite())
        {
            layer.width = width;
        }
        if let Some(style) =
            read_any(properties, &["line_style", "penstyle"]).and_then(LineStyle::from_name)
        {
            layer.line_style = style;
        }
        if let Some(join) = read_str(properties, "joinstyle").and_then(JoinStyle::from_name) {
            layer.join_style = join;
        }
        if let Some(cap) = read_str(properties, "capstyle").and_then(CapStyle::from_name) {
            layer.cap_style = cap;
        }
        if let Some(offset) = read_f64(properties, "offset") {
            layer.offset = offset;
        }
        if read_bool(properties, "use_custom_dash") == Some(true) {
            layer.custom_dash = read_str(properties, "customdash").and_then(decode_dash);
        }
        layer
    }
}

impl FromSld for SimpleLine {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let stroke = element.first_child("Stroke")?;
        let mut layer = Self::default();
        layer.apply_stroke(&sld::stroke_params(stroke));
        if let Some(offset) = sld::number(element, "PerpendicularOffset") {
            layer.offset = offset;
        }
        Some(layer)
    }
}

impl_symbol_layer!(SimpleLine, color: |layer| layer.color);

property_enum! {
    /// Where the markers of a marker line are placed.
    MarkerPlacement {
        Interval => "interval",
        Vertex => "vertex",
        LastVertex => "lastvertex",
        FirstVertex => "firstvertex",
        CentralPoint => "centralpoint",
        CurvePoint => "curvepoint",
    }
    default Interval
}

/// Markers repeated along the line.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLine {
    /// Distance between markers when placed at intervals.
    pub interval: f64,
    /// Rotate markers to follow the line direction.
    pub rotate: bool,
    pub placement: MarkerPlacement,
    pub offset: f64,
    /// The marker drawn at each position.
    pub marker: SimpleMarker,
}

impl Default for MarkerLine {
    fn default() -> Self {
        Self {
            interval: 3.0,
            rotate: true,
            placement: MarkerPlacement::Interval,
            offset: 0.0,
            marker: SimpleMarker::default(),
        }
    }
}

impl MarkerLine {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("interval", self.interval.to_string()),
            ("rotate", encode_bool(self.rotate)),
            ("placement", self.placement.as_str().to_string()),
            ("offset", self.offset.to_string()),
        ])
    }
}

impl FromProperties for MarkerLine {
    const LAYER_TYPE: &'static str = "MarkerLine";
    const CATEGORY: GeometryCategory = GeometryCategory::Line;

    fn from_properties(properties: &PropertyMap) -> Self {
        let mut layer = Self::default();
        if let Some(interval) = read_f64(properties, "interval") {
            layer.interval = interval;
        }
        if let Some(rotate) = read_bool(properties, "rotate") {
            layer.rotate = rotate;
        }
        if let Some(placement) =
            read_str(properties, "placement").and_then(MarkerPlacement::from_name)
        {
            layer.placement = placement;
        }
        if let Some(offset) = read_f64(properties, "offset") {
            layer.offset = offset;
        }
        layer
    }
}

impl FromSld for MarkerLine {
    fn from_sld(element: &SldElement) -> Option<Self> {
        let graphic_stroke = element.find(&["Stroke", "GraphicStroke"])?;
        let graphic = graphic_stroke.first_child("Graphic")?;

        let mut layer = Self {
            marker: SimpleMarker::from_graphic(graphic).unwrap_or_default(),
            ..Self::default()
        };
        if let Some(gap) = sld::number(graphic_stroke, "Gap") {
            layer.interval = gap;
        }
        if let Some(offset) = sld::number(element, "PerpendicularOffset") {
            layer.offset = offset;
        }
        Some(layer)
    }
}

impl_symbol_layer!(MarkerLine, color: |layer| layer.marker.color);

property_enum! {
    /// Which ends of an arrow carry a head.
    ArrowHeadType {
        Single => "0",
        Reversed => "1",
        Double => "2",
    }
    default Single
}

property_enum! {
    /// Whether the arrow body is full or split along its axis.
    ArrowType {
        Plain => "0",
        LeftHalf => "1",
        RightHalf => "2",
    }
    default Plain
}

/// A filled arrow shape following the line.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLine {
    pub color: Color,
    pub arrow_width: f64,
    pub arrow_start_width: f64,
    pub head_length: f64,
    pub head_thickness: f64,
    pub head_type: ArrowHeadType,
    pub arrow_type: ArrowType,
    pub is_curved: bool,
    /// Draw one arrow per line segment instead of one for the whole line.
    pub is_repeated: bool,
}

impl Default for ArrowLine {
    fn default() -> Self {
        Self {
            color: Color::OUTLINE,
            arrow_width: 1.0,
            arrow_start_width: 1.0,
            head_length: 1.5,
            head_thickness: 1.5,
            head_type: ArrowHeadType::Single,
            arrow_type: ArrowType::Plain,
            is_curved: true,
            is_repeated: true,
        }
    }
}

impl ArrowLine {
    fn to_properties(&self) -> PropertyMap {
        property_map([
            ("color", self.color.encode()),
            ("arrow_width", self.arrow_width.to_string()),
            ("arrow_start_width", self.arrow_start_width.to_string()),
            ("head_length", self.head_length.to_string()),
            ("head_thickness", self.head_thickness.to_string()),
            ("head_type", self.head_type.as_str().to_string()),
            ("arrow_type", self.arrow_type.as_str().to_string()),
            ("is_curved", encode_bool(self.is_curved)),
            ("is_repeated", encode_bool(self.is_repeated)),
        ])
    }
}

impl FromProperties for ArrowLine {
    const LAYER_TYPE: &'static str = "ArrowLine";
    const CATEGORY: GeometryCategory = GeometryCategory::Line;

    fn from_properties(properties: &PropertyMap) -> Self {
        let defaults = Self::default();
        Self {
            color: read_color(properties, "color").unwrap_or(defaults.color),
            arrow_width: read_f64(properties, "arrow_width").unwrap_or(defaults.arrow_width),
            arrow_start_width: read_f64(properties, "arrow_start_width")
                .unwrap_or(defaults.arrow_start_width),
            head_length: read_f64(properties, "head_length").unwrap_or(defaults.head_length),
            head_thickness: read_f64(properties, "head_thickness")
                .unwrap_or(defaults.head_thickness),
            head_type: read_num::<u8>(properties, "head_type")
                .and_then(|v| ArrowHeadType::from_name(&v.to_string()))
                .unwrap_or(defaults.head_type),
            arrow_type: read_num::<u8>(properties, "arrow_type")
                .and_then(|v| ArrowType::from_name(&v.to_string()))
                .unwrap_or(defaults.arrow_type),
            is_curved: read_bool(properties, "is_curved").unwrap_or(defaults.is_curved),
            is_repeated: read_bool(properties, "is_repeated").unwrap_or(defaults.is_repeated),
        }
    }
}

impl_symbol_layer!(ArrowLine, color: |layer| layer.color);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::SymbolLayer;

    fn map(entries: &[(&str, &str)]) -> PropertyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_line_from_properties() {
        let line = SimpleLine::from_properties(&map(&[
            ("line_color", "255,0,0,255"),
            ("line_width", "1.2"),
            ("line_style", "dash"),
            ("capstyle", "round"),
            ("use_custom_dash", "1"),
            ("customdash", "3;1"),
        ]));

        assert_eq!(line.color, Color::RED);
        assert_eq!(line.width, 1.2);
        assert_eq!(line.line_style, LineStyle::Dash);
        assert_eq!(line.cap_style, CapStyle::Round);
        assert_eq!(line.join_style, JoinStyle::Bevel);
        assert_eq!(line.custom_dash, Some(vec![3.0, 1.0]));
    }

    #[test]
    fn test_simple_line_legacy_keys() {
        let line = SimpleLine::from_properties(&map(&[
            ("color", "0,0,255"),
            ("width", "2"),
            ("penstyle", "dot"),
        ]));

        assert_eq!(line.color, Color::BLUE);
        assert_eq!(line.width, 2.0);
        assert_eq!(line.line_style, LineStyle::Dot);
    }

    #[test]
    fn test_simple_line_malformed_values_keep_defaults() {
        let line = SimpleLine::from_properties(&map(&[
            ("line_color", "not a colour"),
            ("line_width", "wide"),
            ("line_style", "zigzag"),
            ("use_custom_dash", "0"),
            ("customdash", "3;1"),
        ]));

        assert_eq!(line, SimpleLine::default());
    }

    #[test]
    fn test_simple_line_from_sld() {
        let xml = r##"<LineSymbolizer>
            <Stroke>
              <SvgParameter name="stroke">#00ff00</SvgParameter>
              <SvgParameter name="stroke-width">3</SvgParameter>
              <SvgParameter name="stroke-dasharray">4 2</SvgParameter>
            </Stroke>
            <PerpendicularOffset>-1</PerpendicularOffset>
          </LineSymbolizer>"##;
        let element = SldElement::parse(xml).unwrap();
        let line = SimpleLine::from_sld(&element).unwrap();

        assert_eq!(line.color, Color::from_rgb(0, 255, 0));
        assert_eq!(line.width, 3.0);
        assert_eq!(line.offset, -1.0);
        assert_eq!(line.custom_dash, Some(vec![4.0, 2.0]));
        assert_eq!(line.properties().get("use_custom_dash").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_simple_line_from_sld_requires_stroke() {
        assert!(SimpleLine::from_sld(&SldElement::new("LineSymbolizer")).is_none());
    }

    #[test]
    fn test_marker_line_from_sld() {
        let xml = r##"<LineSymbolizer>
            <Stroke>
              <GraphicStroke>
                <Graphic>
                  <Mark>
                    <WellKnownName>triangle</WellKnownName>
                    <Fill><SvgParameter name="fill">#0000ff</SvgParameter></Fill>
                  </Mark>
                  <Size>4</Size>
                </Graphic>
                <Gap>10</Gap>
              </GraphicStroke>
            </Stroke>
          </LineSymbolizer>"##;
        let element = SldElement::parse(xml).unwrap();
        let line = MarkerLine::from_sld(&element).unwrap();

        assert_eq!(line.interval, 10.0);
        assert_eq!(line.marker.size, 4.0);
        assert_eq!(line.color(), Color::BLUE);
    }

    #[test]
    fn test_marker_line_from_sld_requires_graphic_stroke() {
        let element = SldElement::new("LineSymbolizer").with_child(SldElement::new("Stroke"));
        assert!(MarkerLine::from_sld(&element).is_none());
    }

    #[test]
    fn test_arrow_line_enums() {
        let arrow = ArrowLine::from_properties(&map(&[
            ("head_type", "2"),
            ("arrow_type", "7"),
            ("is_curved", "0"),
        ]));

        assert_eq!(arrow.head_type, ArrowHeadType::Double);
        assert_eq!(arrow.arrow_type, ArrowType::Plain);
        assert!(!arrow.is_curved);
        assert!(arrow.is_repeated);
    }
}
