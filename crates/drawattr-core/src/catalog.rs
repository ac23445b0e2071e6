//! The fixed catalog of drawing attributes.

use crate::attribute::{Attribute, AttributeColor, AttributeOption, FontSpec};
use crate::locale::{EnglishLocale, Locale};
use crate::shapes::{PaintMode, TextAlign};
use std::sync::OnceLock;
use thiserror::Error;

/// Catalog errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Attribute catalog is already initialized")]
    AlreadyInitialized,
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: i32 = 1;
/// Default corner radius for rounded rectangles.
pub const DEFAULT_CORNER_RADIUS: i32 = 10;

/// Every drawing attribute and option value.
#[derive(Debug)]
pub struct DrawAttrs {
    pub align_left: AttributeOption,
    pub align_center: AttributeOption,
    pub align_right: AttributeOption,

    pub paint_stroke: AttributeOption,
    pub paint_fill: AttributeOption,
    pub paint_both: AttributeOption,

    pub font: Attribute,
    pub alignment: Attribute,
    pub paint_type: Attribute,
    /// 1 to 8.
    pub stroke_width: Attribute,
    pub stroke_color: Attribute,
    /// Fill of a placed shape.
    pub fill_color: Attribute,
    /// Fill the text tool gives new text. Same key as `fill_color`, different attribute.
    pub text_default_fill: Attribute,
    /// 1 to 1000.
    pub corner_radius: Attribute,
}

impl DrawAttrs {
    /// Build a standalone catalog with labels from `locale`.
    pub fn new(locale: &dyn Locale) -> Self {
        let align = |a: TextAlign| AttributeOption::new(a.value(), locale.text(a.label_key()));
        let paint = |p: PaintMode| AttributeOption::new(p.tag(), locale.text(p.label_key()));

        let align_left = align(TextAlign::Left);
        let align_center = align(TextAlign::Center);
        let align_right = align(TextAlign::Right);

        let paint_stroke = paint(PaintMode::Stroke);
        let paint_fill = paint(PaintMode::Fill);
        let paint_both = paint(PaintMode::Both);

        let font = Attribute::font("font", locale.text("attrFont"), FontSpec::DEFAULT);
        let alignment = Attribute::options(
            "align",
            locale.text("attrAlign"),
            [align_left.clone(), align_center.clone(), align_right.clone()],
            align_center.clone(),
        );
        let paint_type = Attribute::options(
            "paintType",
            locale.text("attrPaint"),
            [paint_stroke.clone(), paint_fill.clone(), paint_both.clone()],
            paint_stroke.clone(),
        );
        let stroke_width = Attribute::integer_range(
            "stroke-width",
            locale.text("attrStrokeWidth"),
            1,
            8,
            DEFAULT_STROKE_WIDTH,
        );
        let stroke_color =
            Attribute::color("stroke", locale.text("attrStroke"), AttributeColor::BLACK);
        let fill_color = Attribute::color("fill", locale.text("attrFill"), AttributeColor::WHITE);
        let text_default_fill =
            Attribute::color("fill", locale.text("attrFill"), AttributeColor::BLACK);
        let corner_radius = Attribute::integer_range(
            "rx",
            locale.text("attrRx"),
            1,
            1000,
            DEFAULT_CORNER_RADIUS,
        );

        Self {
            align_left,
            align_center,
            align_right,
            paint_stroke,
            paint_fill,
            paint_both,
            font,
            alignment,
            paint_type,
            stroke_width,
            stroke_color,
            fill_color,
            text_default_fill,
            corner_radius,
        }
    }

    /// The paint-type option for a paint mode.
    pub fn paint_option(&self, mode: PaintMode) -> &AttributeOption {
        match mode {
            PaintMode::Stroke => &self.paint_stroke,
            PaintMode::Fill => &self.paint_fill,
            PaintMode::Both => &self.paint_both,
        }
    }

    /// The alignment option for a text alignment.
    pub fn align_option(&self, align: TextAlign) -> &AttributeOption {
        match align {
            TextAlign::Left => &self.align_left,
            TextAlign::Center => &self.align_center,
            TextAlign::Right => &self.align_right,
        }
    }

    /// All attributes, in declaration order.
    pub fn all(&self) -> [&Attribute; 8] {
        [
            &self.font,
            &self.alignment,
            &self.paint_type,
            &self.stroke_width,
            &self.stroke_color,
            &self.fill_color,
            &self.text_default_fill,
            &self.corner_radius,
        ]
    }
}

static CATALOG: OnceLock<DrawAttrs> = OnceLock::new();

/// Install the process-wide catalog with labels from `locale`.
///
/// Must run before the first [`get`]; afterwards the catalog is fixed.
pub fn init(locale: &dyn Locale) -> CatalogResult<&'static DrawAttrs> {
    let mut installed = false;
    let attrs = CATALOG.get_or_init(|| {
        installed = true;
        DrawAttrs::new(locale)
    });
    if installed {
        log::debug!("Attribute catalog initialized");
        Ok(attrs)
    } else {
        Err(CatalogError::AlreadyInitialized)
    }
}

/// The process-wide catalog, initialized with English labels on first use.
pub fn get() -> &'static DrawAttrs {
    CATALOG.get_or_init(|| {
        log::debug!("Attribute catalog initialized with default labels");
        DrawAttrs::new(&EnglishLocale)
    })
}
