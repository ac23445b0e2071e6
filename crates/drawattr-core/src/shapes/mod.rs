//! Shape families and paint modes that select attribute sets.

mod text;

pub use text::TextAlign;

use crate::attribute::AttributeOption;
use serde::{Deserialize, Serialize};

/// Whether a closed shape is drawn with an outline, a fill, or both.
///
/// The tags are the paint-type attribute's underlying option values and are
/// stable across file versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    #[default]
    Stroke,
    Fill,
    Both,
}

impl PaintMode {
    pub fn tag(self) -> &'static str {
        match self {
            PaintMode::Stroke => "stroke",
            PaintMode::Fill => "fill",
            PaintMode::Both => "both",
        }
    }

    /// Strict lookup by tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "stroke" => Some(PaintMode::Stroke),
            "fill" => Some(PaintMode::Fill),
            "both" => Some(PaintMode::Both),
            _ => None,
        }
    }

    /// Lenient lookup: anything that is neither `stroke` nor `fill` paints both.
    pub fn from_option(option: &AttributeOption) -> Self {
        match option.value().as_tag() {
            Some("stroke") => PaintMode::Stroke,
            Some("fill") => PaintMode::Fill,
            Some("both") => PaintMode::Both,
            _ => {
                log::warn!(
                    "Unrecognized paint type {:?}, treating as both",
                    option.value()
                );
                PaintMode::Both
            }
        }
    }

    /// Message key of the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            PaintMode::Stroke => "paintStroke",
            PaintMode::Fill => "paintFill",
            PaintMode::Both => "paintBoth",
        }
    }

    pub fn draws_stroke(self) -> bool {
        matches!(self, PaintMode::Stroke | PaintMode::Both)
    }

    pub fn draws_fill(self) -> bool {
        matches!(self, PaintMode::Fill | PaintMode::Both)
    }

    /// Cycle to the next paint mode.
    pub fn next(self) -> Self {
        match self {
            PaintMode::Stroke => PaintMode::Fill,
            PaintMode::Fill => PaintMode::Both,
            PaintMode::Both => PaintMode::Stroke,
        }
    }

    /// Get all paint modes in presentation order.
    pub fn all() -> &'static [PaintMode] {
        &[PaintMode::Stroke, PaintMode::Fill, PaintMode::Both]
    }
}

/// Shape families with distinct attribute schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Oval,
    Polygon,
    /// Rectangle with a corner radius.
    RoundRectangle,
    Line,
    Polyline,
    Text,
}

impl ShapeKind {
    /// Closed shapes pick their attributes by paint mode; lines and text do not.
    pub fn uses_paint_mode(self) -> bool {
        matches!(
            self,
            ShapeKind::Rectangle | ShapeKind::Oval | ShapeKind::Polygon | ShapeKind::RoundRectangle
        )
    }

    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Rectangle,
            ShapeKind::Oval,
            ShapeKind::Polygon,
            ShapeKind::RoundRectangle,
            ShapeKind::Line,
            ShapeKind::Polyline,
            ShapeKind::Text,
        ]
    }
}
