//! Color values for color-valued attributes.

use super::{AttributeError, AttributeResult};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serializable attribute color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl AttributeColor {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(text: &str) -> AttributeResult<Self> {
        let invalid = || AttributeError::Parse {
            expected: "color (#rrggbb or #rrggbbaa)",
            input: text.to_string(),
        };
        let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| invalid())
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for AttributeColor {
    /// Opaque colors omit the alpha channel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl From<Color> for AttributeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<AttributeColor> for Color {
    fn from(color: AttributeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            AttributeColor::parse_hex("#ff8000").unwrap(),
            AttributeColor::rgb(255, 128, 0)
        );
        assert_eq!(
            AttributeColor::parse_hex("#00000080").unwrap(),
            AttributeColor::new(0, 0, 0, 128)
        );
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(AttributeColor::parse_hex("ff8000").is_err());
        assert!(AttributeColor::parse_hex("#ff80").is_err());
        assert!(AttributeColor::parse_hex("#gg0000").is_err());
        assert!(AttributeColor::parse_hex("#ééé").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeColor::WHITE.to_string(), "#ffffff");
        assert_eq!(AttributeColor::new(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = AttributeColor::rgb(10, 20, 30).into();
        assert_eq!(AttributeColor::from(color), AttributeColor::rgb(10, 20, 30));
    }
}
