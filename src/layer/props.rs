//! Reading and writing layer settings in property maps.
//!
//! Values are plain strings. Readers return `None` for missing or
//! unparseable values so callers can keep their defaults.

use super::PropertyMap;
use crate::color::Color;
use geo_types::Coord;
use std::str::FromStr;

/// Declares a fieldless enum stored in property maps by name.
macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Name used in property maps.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Parses a property-map name.
            pub fn from_name(s: &str) -> Option<Self> {
                match s.trim() {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

pub(crate) use property_enum;

property_enum! {
    /// Dash pattern of a stroke.
    LineStyle {
        NoPen => "no",
        Solid => "solid",
        Dash => "dash",
        Dot => "dot",
        DashDot => "dash dot",
        DashDotDot => "dash dot dot",
    }
    default Solid
}

property_enum! {
    /// How stroke segments meet.
    JoinStyle {
        Bevel => "bevel",
        Miter => "miter",
        Round => "round",
    }
    default Bevel
}

property_enum! {
    /// How stroke ends are drawn.
    CapStyle {
        Square => "square",
        Flat => "flat",
        Round => "round",
    }
    default Square
}

impl JoinStyle {
    /// Parses an SLD `stroke-linejoin` value.
    pub fn from_sld(s: &str) -> Option<Self> {
        match s.trim() {
            "mitre" | "miter" => Some(JoinStyle::Miter),
            "round" => Some(JoinStyle::Round),
            "bevel" => Some(JoinStyle::Bevel),
            _ => None,
        }
    }
}

impl CapStyle {
    /// Parses an SLD `stroke-linecap` value.
    pub fn from_sld(s: &str) -> Option<Self> {
        match s.trim() {
            "butt" => Some(CapStyle::Flat),
            "round" => Some(CapStyle::Round),
            "square" => Some(CapStyle::Square),
            _ => None,
        }
    }
}

/// Reads a string value, ignoring empty strings.
pub(crate) fn read_str<'a>(properties: &'a PropertyMap, key: &str) -> Option<&'a str> {
    properties
        .get(key)
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
}

/// Reads the first present key of `keys`. Used where a type accepts legacy names.
pub(crate) fn read_any<'a>(properties: &'a PropertyMap, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| read_str(properties, key))
}

pub(crate) fn read_num<T: FromStr>(properties: &PropertyMap, key: &str) -> Option<T> {
    read_str(properties, key)?.trim().parse::<T>().ok()
}

/// Reads a finite `f64`.
pub(crate) fn read_f64(properties: &PropertyMap, key: &str) -> Option<f64> {
    read_num::<f64>(properties, key).filter(|v| v.is_finite())
}

pub(crate) fn read_bool(properties: &PropertyMap, key: &str) -> Option<bool> {
    parse_bool(read_str(properties, key)?)
}

pub(crate) fn read_color(properties: &PropertyMap, key: &str) -> Option<Color> {
    Color::decode(read_str(properties, key)?)
}

pub(crate) fn read_coord(properties: &PropertyMap, key: &str) -> Option<Coord<f64>> {
    decode_coord(read_str(properties, key)?)
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "1" | "true" | "True" => Some(true),
        "0" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub(crate) fn encode_bool(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

/// Parses `"x,y"`.
pub(crate) fn decode_coord(s: &str) -> Option<Coord<f64>> {
    let (x, y) = s.split_once(',')?;
    let x = x.trim().parse::<f64>().ok()?;
    let y = y.trim().parse::<f64>().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Coord { x, y })
}

pub(crate) fn encode_coord(coord: Coord<f64>) -> String {
    format!("{},{}", coord.x, coord.y)
}

/// Parses a `;`-separated dash pattern such as `"5;2"`.
pub(crate) fn decode_dash(s: &str) -> Option<Vec<f64>> {
    let dashes = s
        .split(';')
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<f64>>>()?;
    if dashes.is_empty() {
        None
    } else {
        Some(dashes)
    }
}

pub(crate) fn encode_dash(dashes: &[f64]) -> String {
    dashes
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Builds a property map from key/value pairs.
pub(crate) fn property_map<const N: usize>(entries: [(&str, String); N]) -> PropertyMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
