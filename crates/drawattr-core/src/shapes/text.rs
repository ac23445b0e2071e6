//! Text alignment shared by the alignment attribute and label layout.

use crate::attribute::AttributeOption;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
///
/// The discriminants are the alignment attribute's underlying option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum TextAlign {
    Left = 2,
    #[default]
    Center = 0,
    Right = 4,
}

impl TextAlign {
    pub const LEFT: i32 = TextAlign::Left as i32;
    pub const CENTER: i32 = TextAlign::Center as i32;
    pub const RIGHT: i32 = TextAlign::Right as i32;

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            Self::LEFT => Some(TextAlign::Left),
            Self::CENTER => Some(TextAlign::Center),
            Self::RIGHT => Some(TextAlign::Right),
            _ => None,
        }
    }

    /// Read an alignment from an option of the alignment attribute.
    pub fn from_option(option: &AttributeOption) -> Option<Self> {
        option.value().as_int().and_then(Self::from_value)
    }

    /// Message key of the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            TextAlign::Left => "alignStart",
            TextAlign::Center => "alignMiddle",
            TextAlign::Right => "alignEnd",
        }
    }

    /// Horizontal offset from the anchor point to the left edge of a text run
    /// of the given width.
    pub fn x_offset(self, width: f64) -> f64 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }

    /// Get all alignments in presentation order.
    pub fn all() -> &'static [TextAlign] {
        &[TextAlign::Left, TextAlign::Center, TextAlign::Right]
    }
}
