//! Per-shape attribute values.

use crate::attribute::{
    Attribute, AttributeColor, AttributeId, AttributeResult, AttributeValue, FontSpec,
};
use crate::catalog::{self, DrawAttrs};
use crate::schema::{AttributeSet, AttributeSets};
use crate::shapes::{PaintMode, ShapeKind, TextAlign};
use std::collections::HashMap;

/// Attribute values set on one shape.
///
/// Unset attributes read as their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeValues {
    values: HashMap<AttributeId, AttributeValue>,
}

impl AttributeValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values seeded with the defaults of every attribute `kind` can show
    /// in any paint mode.
    pub fn for_kind(kind: ShapeKind) -> Self {
        let sets = AttributeSets::global();
        let mut values = Self::new();
        for mode in PaintMode::all() {
            for attr in sets.for_shape(kind, *mode) {
                values
                    .values
                    .entry(attr.id())
                    .or_insert_with(|| attr.default_value().clone());
            }
        }
        values
    }

    /// The value of `attr`, or its default when unset.
    pub fn get<'v>(&'v self, attr: &'v Attribute) -> &'v AttributeValue {
        self.values.get(&attr.id()).unwrap_or(attr.default_value())
    }

    /// Whether `attr` carries an explicit value.
    pub fn is_set(&self, attr: &Attribute) -> bool {
        self.values.contains_key(&attr.id())
    }

    /// Set `attr` after checking the value against its domain.
    pub fn set(&mut self, attr: &Attribute, value: AttributeValue) -> AttributeResult<()> {
        attr.validate(&value)?;
        self.values.insert(attr.id(), value);
        Ok(())
    }

    /// Parse `text` in `attr`'s standard form and set it.
    pub fn set_parsed(&mut self, attr: &Attribute, text: &str) -> AttributeResult<()> {
        let value = attr.parse(text)?;
        self.values.insert(attr.id(), value);
        Ok(())
    }

    /// Remove an explicit value, returning it.
    pub fn reset(&mut self, attr: &Attribute) -> Option<AttributeValue> {
        self.values.remove(&attr.id())
    }

    /// Current paint mode, from the process-wide paint-type attribute.
    pub fn paint_mode(&self) -> PaintMode {
        self.paint_mode_in(catalog::get())
    }

    pub fn set_paint_mode(&mut self, mode: PaintMode) {
        let attrs = catalog::get();
        self.values.insert(
            attrs.paint_type.id(),
            AttributeValue::Option(attrs.paint_option(mode).clone()),
        );
    }

    fn paint_mode_in(&self, attrs: &DrawAttrs) -> PaintMode {
        self.get(&attrs.paint_type)
            .as_option()
            .map(PaintMode::from_option)
            .unwrap_or_default()
    }

    /// The attributes currently editable on a shape of `kind`.
    pub fn editable_attributes(&self, kind: ShapeKind) -> &'static AttributeSet<'static> {
        let sets = AttributeSets::global();
        sets.for_shape(kind, self.paint_mode_in(sets.catalog()))
    }

    pub fn stroke_width(&self) -> i32 {
        let attr = &catalog::get().stroke_width;
        self.get(attr)
            .as_integer()
            .unwrap_or(catalog::DEFAULT_STROKE_WIDTH)
    }

    pub fn corner_radius(&self) -> i32 {
        let attr = &catalog::get().corner_radius;
        self.get(attr)
            .as_integer()
            .unwrap_or(catalog::DEFAULT_CORNER_RADIUS)
    }

    pub fn stroke_color(&self) -> AttributeColor {
        self.get(&catalog::get().stroke_color)
            .as_color()
            .unwrap_or(AttributeColor::BLACK)
    }

    pub fn fill_color(&self) -> AttributeColor {
        self.get(&catalog::get().fill_color)
            .as_color()
            .unwrap_or(AttributeColor::WHITE)
    }

    pub fn font(&self) -> &FontSpec {
        static DEFAULT_FONT: FontSpec = FontSpec::DEFAULT;
        self.get(&catalog::get().font)
            .as_font()
            .unwrap_or(&DEFAULT_FONT)
    }

    pub fn alignment(&self) -> TextAlign {
        self.get(&catalog::get().alignment)
            .as_option()
            .and_then(TextAlign::from_option)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
