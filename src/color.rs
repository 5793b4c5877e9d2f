//! RGBA color type used by highlight styles.
//!
//! Colors arrive from configuration as hex strings, so parsing is the main
//! job here.
//!
//! # Examples
//!
//! ```
//! use paren_hl::Rgba;
//!
//! let bg = Rgba::from_hex("#3a3a5c").unwrap();
//! assert_eq!(bg.to_rgb_u8(), (0x3a, 0x3a, 0x5c));
//! assert_eq!(bg.to_string(), "#3a3a5c");
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb_u8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::from_rgba_u8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Strict variant of [`Rgba::from_hex`] for configuration values.
    pub fn parse_hex(hex: &str) -> Result<Self> {
        Self::from_hex(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_formats() {
        assert_eq!(Rgba::from_hex("#f00"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("0000FF"), Some(Rgba::BLUE));
        let translucent = Rgba::from_hex("#ffffff80").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#12"), None);
        assert_eq!(Rgba::from_hex("#gggggg"), None);
        // Multi-byte input must not panic on slicing.
        assert_eq!(Rgba::from_hex("#é1"), None);
        assert_eq!(Rgba::from_hex("aéé"), None);
        // `from_str_radix` alone would take a sign.
        assert_eq!(Rgba::from_hex("#+1+1+1"), None);
        assert_eq!(Rgba::from_hex("+ff"), None);
        assert_eq!(Rgba::from_hex("#ff ff "), None);
    }

    #[test]
    fn test_parse_hex_error() {
        let err = Rgba::parse_hex("teal").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "teal"));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgba::from_rgb_u8(1, 2, 255).to_string(), "#0102ff");
        assert_eq!(Rgba::BLUE.to_string(), "#0000ff");
    }
}
