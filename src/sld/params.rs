//! Readers for the SLD building blocks shared by several layer types.

use super::SldElement;
use crate::color::Color;
use crate::layer::{CapStyle, JoinStyle};
use geo_types::Coord;

/// Settings read from an SLD `Stroke` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeParams {
    pub color: Option<Color>,
    pub width: Option<f64>,
    pub join: Option<JoinStyle>,
    pub cap: Option<CapStyle>,
    pub dash: Option<Vec<f64>>,
}

/// Settings read from an SLD `Mark` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkParams {
    pub well_known_name: Option<String>,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeParams>,
}

/// Reads a `Stroke` element's parameters.
pub(crate) fn stroke_params(stroke: &SldElement) -> StrokeParams {
    let params = stroke.parameters();
    let opacity = params.get("stroke-opacity").and_then(|v| parse_finite(v));
    let color = params
        .get("stroke")
        .and_then(|v| Color::from_hex(v))
        .map(|c| match opacity {
            Some(opacity) => c.with_opacity(opacity),
            None => c,
        });
    let dash = params.get("stroke-dasharray").and_then(|v| {
        v.split_whitespace()
            .map(parse_finite)
            .collect::<Option<Vec<f64>>>()
            .filter(|dashes| !dashes.is_empty())
    });

    StrokeParams {
        color,
        width: params.get("stroke-width").and_then(|v| parse_finite(v)),
        join: params
            .get("stroke-linejoin")
            .and_then(|v| JoinStyle::from_sld(v)),
        cap: params
            .get("stroke-linecap")
            .and_then(|v| CapStyle::from_sld(v)),
        dash,
    }
}

/// Reads the colour of a `Fill` element (`fill` plus `fill-opacity`).
pub(crate) fn fill_color(fill: &SldElement) -> Option<Color> {
    let params = fill.parameters();
    let color = Color::from_hex(params.get("fill")?)?;
    Some(
        match params.get("fill-opacity").and_then(|v| parse_finite(v)) {
            Some(opacity) => color.with_opacity(opacity),
            None => color,
        },
    )
}

/// Reads the first `Mark` of a `Graphic` element.
pub(crate) fn mark(graphic: &SldElement) -> Option<MarkParams> {
    let mark = graphic.first_child("Mark")?;
    Some(MarkParams {
        well_known_name: mark.child_text("WellKnownName").map(str::to_string),
        fill: mark.first_child("Fill").and_then(fill_color),
        stroke: mark.first_child("Stroke").map(stroke_params),
    })
}

/// Reads the `href` of a graphic's `ExternalGraphic/OnlineResource`.
pub(crate) fn external_graphic(graphic: &SldElement) -> Option<String> {
    graphic
        .find(&["ExternalGraphic", "OnlineResource"])?
        .attribute("href")
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Reads a `Displacement` child as an offset.
pub(crate) fn displacement(element: &SldElement) -> Option<Coord<f64>> {
    let displacement = element.first_child("Displacement")?;
    Some(Coord {
        x: number(displacement, "DisplacementX").unwrap_or(0.0),
        y: number(displacement, "DisplacementY").unwrap_or(0.0),
    })
}

/// Reads a child's text as a finite number.
pub(crate) fn number(element: &SldElement, child: &str) -> Option<f64> {
    parse_finite(element.child_text(child)?)
}

/// Parses a finite number. `NaN` and infinities are treated as absent.
fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: &str) -> SldElement {
        SldElement::new("SvgParameter")
            .with_attribute("name", name)
            .with_text(value)
    }

    #[test]
    fn test_stroke_params() {
        let stroke = SldElement::new("Stroke")
            .with_child(param("stroke", "#00ff00"))
            .with_child(param("stroke-opacity", "0.5"))
            .with_child(param("stroke-width", "1.5"))
            .with_child(param("stroke-linejoin", "round"))
            .with_child(param("stroke-linecap", "butt"))
            .with_child(param("stroke-dasharray", "4 2"));

        let params = stroke_params(&stroke);
        assert_eq!(params.color, Some(Color::from_rgba_unmultiplied(0, 255, 0, 128)));
        assert_eq!(params.width, Some(1.5));
        assert_eq!(params.join, Some(JoinStyle::Round));
        assert_eq!(params.cap, Some(CapStyle::Flat));
        assert_eq!(params.dash, Some(vec![4.0, 2.0]));
    }

    #[test]
    fn test_stroke_params_reject_non_finite_values() {
        let stroke = SldElement::new("Stroke")
            .with_child(param("stroke", "#00ff00"))
            .with_child(param("stroke-opacity", "NaN"))
            .with_child(param("stroke-width", "inf"))
            .with_child(param("stroke-dasharray", "inf 2"));

        let params = stroke_params(&stroke);
        assert_eq!(params.color, Some(Color::from_rgb(0, 255, 0)));
        assert_eq!(params.width, None);
        assert_eq!(params.dash, None);
    }

    #[test]
    fn test_fill_color_ignores_nan_opacity() {
        let fill = SldElement::new("Fill")
            .with_child(param("fill", "#336699"))
            .with_child(param("fill-opacity", "NaN"));

        assert_eq!(fill_color(&fill), Some(Color::from_rgb(0x33, 0x66, 0x99)));
    }

    #[test]
    fn test_empty_stroke_has_no_settings() {
        assert_eq!(stroke_params(&SldElement::new("Stroke")), StrokeParams::default());
    }

    #[test]
    fn test_mark_and_displacement() {
        let graphic = SldElement::new("Graphic")
            .with_child(
                SldElement::new("Mark")
                    .with_child(SldElement::new("WellKnownName").with_text("square"))
                    .with_child(SldElement::new("Fill").with_child(param("fill", "#0000ff"))),
            )
            .with_child(
                SldElement::new("Displacement")
                    .with_child(SldElement::new("DisplacementX").with_text("2"))
                    .with_child(SldElement::new("DisplacementY").with_text("-1")),
            );

        let mark = mark(&graphic).unwrap();
        assert_eq!(mark.well_known_name.as_deref(), Some("square"));
        assert_eq!(mark.fill, Some(Color::BLUE));
        assert_eq!(mark.stroke, None);
        assert_eq!(displacement(&graphic), Some(Coord { x: 2.0, y: -1.0 }));
    }
}
