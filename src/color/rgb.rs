//! 8-bit sRGB color value
//!
//! `RgbColor` is the pivot representation of the crate: every other color
//! type converts through it, and luminance and contrast are computed on it.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::Color;
use crate::constants::ranges::{CHANNEL_MAX, PACKED_MAX};
use crate::{parse, ColorError, Result};

/// sRGB color with three 8-bit channels
///
/// Serializes as its canonical hex string (`"123456"`) and deserializes
/// through the color parser, so any supported notation is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0x00, 0x00, 0x00);
    pub const WHITE: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);

    /// Create a color from channels already known to be in range
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from untyped integer channels
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Range` naming the first channel outside 0x00 to 0xFF.
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: checked_channel("r", r)?,
            g: checked_channel("g", g)?,
            b: checked_channel("b", b)?,
        })
    }

    /// Create a color from a packed `0xRRGGBB` integer
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Range` if `value` is above `0xFFFFFF`.
    pub fn from_packed(value: u32) -> Result<Self> {
        if value > PACKED_MAX {
            return Err(ColorError::range("value", value, 0x000000, PACKED_MAX));
        }

        Ok(Self {
            r: ((value & 0xFF0000) >> 16) as u8,
            g: ((value & 0x00FF00) >> 8) as u8,
            b: (value & 0x0000FF) as u8,
        })
    }

    /// Copy-construct from any other color representation
    pub fn from_color<C: Color>(color: &C) -> Self {
        color.to_rgb()
    }

    /// Pack into a `0xRRGGBB` integer
    pub fn to_packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// All three channels as a tuple
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn set_r(&mut self, value: i64) -> Result<()> {
        self.r = checked_channel("r", value)?;
        Ok(())
    }

    pub fn set_g(&mut self, value: i64) -> Result<()> {
        self.g = checked_channel("g", value)?;
        Ok(())
    }

    pub fn set_b(&mut self, value: i64) -> Result<()> {
        self.b = checked_channel("b", value)?;
        Ok(())
    }

    /// Replace all three channels; nothing is assigned unless every channel is valid
    pub fn set_rgb(&mut self, r: i64, g: i64, b: i64) -> Result<()> {
        *self = Self::try_new(r, g, b)?;
        Ok(())
    }

    /// Normalized floating point sRGB, for use with `palette`
    pub fn to_srgb_f32(self) -> Srgb<f32> {
        Srgb::<u8>::from(self).into_format()
    }
}

fn checked_channel(name: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| ColorError::range(name, value as f64, 0, CHANNEL_MAX))
}

impl Color for RgbColor {
    fn from_rgb(rgb: RgbColor) -> Self {
        rgb
    }

    fn to_rgb(&self) -> RgbColor {
        *self
    }
}

/// Canonical form: uppercase hex without a leading `#`
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse_rgb(s)
    }
}

impl TryFrom<u32> for RgbColor {
    type Error = ColorError;

    fn try_from(value: u32) -> Result<Self> {
        Self::from_packed(value)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        parse::parse_rgb(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_string()
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(color: RgbColor) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_roundtrip() {
        let color = RgbColor::from_packed(0x123456).unwrap();
        assert_eq!(color.rgb(), (0x12, 0x34, 0x56));
        assert_eq!(color.to_packed(), 0x123456);
    }

    #[test]
    fn test_packed_out_of_range() {
        let err = RgbColor::from_packed(0x1000000).unwrap_err();
        assert!(matches!(err, ColorError::Range { component: "value", .. }));
    }

    #[test]
    fn test_try_new_rejects_each_channel() {
        assert!(matches!(
            RgbColor::try_new(-1, 0, 0),
            Err(ColorError::Range { component: "r", .. })
        ));
        assert!(matches!(
            RgbColor::try_new(0, 256, 0),
            Err(ColorError::Range { component: "g", .. })
        ));
        assert!(matches!(
            RgbColor::try_new(0, 0, 1000),
            Err(ColorError::Range { component: "b", .. })
        ));
        assert_eq!(RgbColor::try_new(0, 127, 255).unwrap(), RgbColor::new(0, 127, 255));
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(RgbColor::new(0x12, 0x34, 0x56).to_string(), "123456");
        assert_eq!(RgbColor::new(0xAB, 0xCD, 0xEF).to_string(), "ABCDEF");
        assert_eq!(RgbColor::BLACK.to_string(), "000000");
    }

    #[test]
    fn test_failed_setter_leaves_color_untouched() {
        let mut color = RgbColor::new(1, 2, 3);
        assert!(color.set_g(300).is_err());
        assert!(color.set_rgb(10, 20, -5).is_err());
        assert_eq!(color, RgbColor::new(1, 2, 3));

        color.set_b(0xFF).unwrap();
        assert_eq!(color, RgbColor::new(1, 2, 0xFF));
    }

    #[test]
    fn test_palette_interop() {
        let color = RgbColor::new(255, 0, 51);
        let srgb: Srgb<u8> = color.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (255, 0, 51));
        assert_eq!(RgbColor::from(srgb), color);

        let normalized = color.to_srgb_f32();
        assert!((normalized.red - 1.0).abs() < 1e-6);
        assert!((normalized.blue - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let color = RgbColor::new(0x00, 0x7F, 0xFF);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"007FFF\"");

        let parsed: RgbColor = serde_json::from_str("\"#123\"").unwrap();
        assert_eq!(parsed, RgbColor::new(0x11, 0x22, 0x33));

        assert!(serde_json::from_str::<RgbColor>("\"not a color\"").is_err());
    }
}
