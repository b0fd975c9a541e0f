//! Minimal style document (SLD) model.
//!
//! Layer types that support SLD import receive one symbolizer element of
//! this tree (a `LineSymbolizer`, `PointSymbolizer` or `PolygonSymbolizer`)
//! and read what they need from it. Names are stored without their namespace
//! prefix, so `se:Stroke` and `sld:Stroke` are both `Stroke`.

mod params;

pub use params::{MarkParams, StrokeParams};
pub(crate) use params::{displacement, external_graphic, fill_color, mark, number, stroke_params};

use crate::error::SldError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;

/// One element of a style document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SldElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<SldElement>,
}

impl SldElement {
    /// Creates an element with the given local name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: SldElement) -> Self {
        self.children.push(child);
        self
    }

    /// Local name of the element, without namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute with this local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// All child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &SldElement> {
        self.children.iter()
    }

    /// Child elements with this local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SldElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn first_child(&self, name: &str) -> Option<&SldElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Follows a chain of child names, taking the first match at each step.
    pub fn find(&self, path: &[&str]) -> Option<&SldElement> {
        path.iter().try_fold(self, |element, name| element.first_child(name))
    }

    /// Trimmed text of the first child with this name, if non-empty.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.first_child(name)
            .map(|child| child.text())
            .filter(|text| !text.is_empty())
    }

    /// `SvgParameter` and `CssParameter` children keyed by their `name` attribute.
    pub fn parameters(&self) -> BTreeMap<String, String> {
        self.children
            .iter()
            .filter(|child| child.name == "SvgParameter" || child.name == "CssParameter")
            .filter_map(|child| {
                let name = child.attribute("name")?;
                Some((name.to_string(), child.text().to_string()))
            })
            .collect()
    }

    /// Text of the `VendorOption` child with this `name` attribute.
    pub fn vendor_option(&self, name: &str) -> Option<&str> {
        self.children_named("VendorOption")
            .find(|option| option.attribute("name") == Some(name))
            .map(|option| option.text())
    }

    /// Parses an XML document and returns its root element.
    pub fn parse(xml: &str) -> Result<Self, SldError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<SldElement> = Vec::new();
        let mut root: Option<SldElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => stack.push(element_from_start(&start)?),
                Ok(Event::Empty(start)) => {
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element);
                }
                Ok(Event::End(end)) => {
                    let element = stack.pop().ok_or_else(|| {
                        SldError::UnbalancedTag(
                            String::from_utf8_lossy(end.local_name().as_ref()).into_owned(),
                        )
                    })?;
                    attach(&mut stack, &mut root, element);
                }
                Ok(Event::Text(text)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = text.unescape().map_err(|e| SldError::Xml(e.to_string()))?;
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(data)) => {
                    if let Some(current) = stack.last_mut() {
                        current
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(SldError::Xml(e.to_string())),
            }
        }

        if let Some(open) = stack.pop() {
            return Err(SldError::Xml(format!("Unclosed element: {}", open.name)));
        }
        root.ok_or(SldError::EmptyDocument)
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<SldElement, SldError> {
    let mut element = SldElement::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| SldError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| SldError::Xml(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Adds a finished element to its parent, or makes it the root.
fn attach(stack: &mut [SldElement], root: &mut Option<SldElement>, element: SldElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        // Only the first top-level element counts as the document root
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_SYMBOLIZER: &str = r##"
        <se:LineSymbolizer xmlns:se="http://www.opengis.net/se">
          <se:Stroke>
            <se:SvgParameter name="stroke">#ff0000</se:SvgParameter>
            <se:SvgParameter name="stroke-width">2</se:SvgParameter>
          </se:Stroke>
          <se:PerpendicularOffset>1.5</se:PerpendicularOffset>
        </se:LineSymbolizer>
    "##;

    #[test]
    fn test_parse_strips_prefixes() {
        let root = SldElement::parse(LINE_SYMBOLIZER).unwrap();
        assert_eq!(root.name(), "LineSymbolizer");
        assert_eq!(root.child_text("PerpendicularOffset"), Some("1.5"));

        let params = root.first_child("Stroke").unwrap().parameters();
        assert_eq!(params.get("stroke").map(String::as_str), Some("#ff0000"));
        assert_eq!(params.get("stroke-width").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_attributes_and_empty_elements() {
        let xml = r#"<ExternalGraphic><OnlineResource xlink:type="simple" xlink:href="pin.svg"/><Format>image/svg+xml</Format></ExternalGraphic>"#;
        let root = SldElement::parse(xml).unwrap();

        let resource = root.first_child("OnlineResource").unwrap();
        assert_eq!(resource.attribute("href"), Some("pin.svg"));
        assert_eq!(resource.attribute("type"), Some("simple"));
        assert_eq!(root.child_text("Format"), Some("image/svg+xml"));

        let names: Vec<&str> = root.children().map(SldElement::name).collect();
        assert_eq!(names, vec!["OnlineResource", "Format"]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(SldElement::parse(""), Err(SldError::EmptyDocument));
        assert!(SldElement::parse("<a><b></a>").is_err());
        assert!(SldElement::parse("<a>").is_err());
    }

    #[test]
    fn test_find_and_vendor_option() {
        let root = SldElement::new("PolygonSymbolizer").with_child(
            SldElement::new("Fill").with_child(
                SldElement::new("GraphicFill")
                    .with_child(SldElement::new("Graphic"))
                    .with_child(
                        SldElement::new("VendorOption")
                            .with_attribute("name", "distance")
                            .with_text("20,30"),
                    ),
            ),
        );

        assert!(root.find(&["Fill", "GraphicFill", "Graphic"]).is_some());
        assert!(root.find(&["Fill", "Stroke"]).is_none());

        let graphic_fill = root.find(&["Fill", "GraphicFill"]).unwrap();
        assert_eq!(graphic_fill.vendor_option("distance"), Some("20,30"));
        assert_eq!(graphic_fill.vendor_option("spacing"), None);
    }
}
