//! RGBA colour values used by symbol layers.
//!
//! Colours are stored in property maps as `"r,g,b,a"` and appear in style
//! documents as `#rrggbb` hex strings with a separate opacity.

use std::fmt;

/// An 8-bit-per-channel RGBA colour (alpha is not premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    /// Dark gray used for strokes and outlines.
    pub const OUTLINE: Color = Color::from_rgb(35, 35, 35);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba_unmultiplied(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the same colour with alpha taken from an opacity in `0.0..=1.0`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.with_alpha(a)
    }

    /// Parses the property-map form `"r,g,b"` or `"r,g,b,a"`.
    pub fn decode(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }
        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        let a = match parts.get(3) {
            Some(a) => a.parse::<u8>().ok()?,
            None => 255,
        };
        Some(Self { r, g, b, a })
    }

    /// Property-map form, always with alpha: `"r,g,b,a"`.
    pub fn encode(&self) -> String {
        format!("{},{},{},{}", self.r, self.g, self.b, self.a)
    }

    /// Parses an SLD hex colour (`#rrggbb`, leading `#` optional). Alpha is 255.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::from_rgb(r, g, b))
    }

    /// SLD hex form without alpha, e.g. `#ff0000`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_and_without_alpha() {
        assert_eq!(Color::decode("10,20,30"), Some(Color::from_rgb(10, 20, 30)));
        assert_eq!(
            Color::decode("10, 20, 30, 40"),
            Some(Color::from_rgba_unmultiplied(10, 20, 30, 40))
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(Color::decode(""), None);
        assert_eq!(Color::decode("red"), None);
        assert_eq!(Color::decode("1,2"), None);
        assert_eq!(Color::decode("256,0,0"), None);
        assert_eq!(Color::decode("1,2,3,4,5"), None);
    }

    #[test]
    fn test_encode_always_has_alpha() {
        assert_eq!(Color::from_rgb(1, 2, 3).encode(), "1,2,3,255");
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::from_hex("#FF8000"), Some(Color::from_rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::from_rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_rgb(255, 128, 0).to_hex(), "#ff8000");
    }

    #[test]
    fn test_opacity() {
        assert_eq!(Color::RED.with_opacity(0.5).a, 128);
        assert_eq!(Color::RED.with_opacity(3.0).a, 255);
        assert_eq!(Color::RED.with_opacity(-1.0).a, 0);
    }
}
