//! Attribute sets per shape family and paint mode.
//!
//! All sets are built once per catalog and handed out by reference, so
//! resolving a schema never allocates.

use crate::attribute::{Attribute, AttributeOption};
use crate::catalog::{self, DrawAttrs};
use crate::shapes::{PaintMode, ShapeKind};
use std::sync::OnceLock;

/// An ordered, frozen list of attributes in property-editor order.
#[derive(Debug)]
pub struct AttributeSet<'a> {
    name: &'static str,
    attrs: Box<[&'a Attribute]>,
}

impl<'a> AttributeSet<'a> {
    fn new(name: &'static str, attrs: &[&'a Attribute]) -> Self {
        debug_assert!(
            attrs
                .iter()
                .enumerate()
                .all(|(i, a)| !attrs[..i].contains(a)),
            "duplicate attribute in set {name}"
        );
        Self {
            name,
            attrs: attrs.into(),
        }
    }

    /// Stable name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The attributes in presentation order.
    pub fn attributes(&self) -> &[&'a Attribute] {
        &self.attrs
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The attribute at presentation position `index`.
    pub fn get(&self, index: usize) -> Option<&'a Attribute> {
        self.attrs.get(index).copied()
    }

    /// Membership by attribute identity.
    pub fn contains(&self, attr: &Attribute) -> bool {
        self.index_of(attr).is_some()
    }

    /// Presentation position of `attr`, by identity.
    pub fn index_of(&self, attr: &Attribute) -> Option<usize> {
        self.attrs.iter().position(|a| a.id() == attr.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Attribute> + '_ {
        self.attrs.iter().copied()
    }
}

impl<'s, 'a> IntoIterator for &'s AttributeSet<'a> {
    type Item = &'s &'a Attribute;
    type IntoIter = std::slice::Iter<'s, &'a Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}

/// Every attribute set drawn from one catalog.
#[derive(Debug)]
pub struct AttributeSets<'a> {
    attrs: &'a DrawAttrs,
    text: AttributeSet<'a>,
    text_tool: AttributeSet<'a>,
    stroke: AttributeSet<'a>,
    fill_stroke: AttributeSet<'a>,
    fill_fill: AttributeSet<'a>,
    fill_both: AttributeSet<'a>,
    rrect_stroke: AttributeSet<'a>,
    rrect_fill: AttributeSet<'a>,
    rrect_both: AttributeSet<'a>,
}

static SETS: OnceLock<AttributeSets<'static>> = OnceLock::new();

impl<'a> AttributeSets<'a> {
    pub fn new(attrs: &'a DrawAttrs) -> Self {
        let a = attrs;
        Self {
            attrs,
            text: AttributeSet::new("text", &[&a.font, &a.alignment, &a.fill_color]),
            text_tool: AttributeSet::new(
                "textTool",
                &[&a.font, &a.alignment, &a.text_default_fill],
            ),
            stroke: AttributeSet::new("strokeOnly", &[&a.stroke_width, &a.stroke_color]),
            fill_stroke: AttributeSet::new(
                "fillStroke.stroke",
                &[&a.paint_type, &a.stroke_width, &a.stroke_color],
            ),
            fill_fill: AttributeSet::new("fillStroke.fill", &[&a.paint_type, &a.fill_color]),
            fill_both: AttributeSet::new(
                "fillStroke.both",
                &[&a.paint_type, &a.stroke_width, &a.stroke_color, &a.fill_color],
            ),
            rrect_stroke: AttributeSet::new(
                "roundRect.stroke",
                &[&a.paint_type, &a.stroke_width, &a.stroke_color, &a.corner_radius],
            ),
            rrect_fill: AttributeSet::new(
                "roundRect.fill",
                &[&a.paint_type, &a.fill_color, &a.corner_radius],
            ),
            rrect_both: AttributeSet::new(
                "roundRect.both",
                &[
                    &a.paint_type,
                    &a.stroke_width,
                    &a.stroke_color,
                    &a.fill_color,
                    &a.corner_radius,
                ],
            ),
        }
    }

    /// Sets over the process-wide catalog.
    pub fn global() -> &'static AttributeSets<'static> {
        SETS.get_or_init(|| AttributeSets::new(catalog::get()))
    }

    /// The catalog these sets were built from.
    pub fn catalog(&self) -> &'a DrawAttrs {
        self.attrs
    }

    /// Text shapes: font, alignment, fill color.
    pub fn text(&self) -> &AttributeSet<'a> {
        &self.text
    }

    /// The text tool before a shape exists: font, alignment, default text fill.
    pub fn text_tool(&self) -> &AttributeSet<'a> {
        &self.text_tool
    }

    /// Lines and polylines: stroke width, stroke color.
    pub fn stroke(&self) -> &AttributeSet<'a> {
        &self.stroke
    }

    /// Rectangles, ovals and polygons.
    pub fn fill(&self, mode: PaintMode) -> &AttributeSet<'a> {
        match mode {
            PaintMode::Stroke => &self.fill_stroke,
            PaintMode::Fill => &self.fill_fill,
            PaintMode::Both => &self.fill_both,
        }
    }

    /// Rounded rectangles: the fill set plus corner radius.
    pub fn round_rect(&self, mode: PaintMode) -> &AttributeSet<'a> {
        match mode {
            PaintMode::Stroke => &self.rrect_stroke,
            PaintMode::Fill => &self.rrect_fill,
            PaintMode::Both => &self.rrect_both,
        }
    }

    /// [`AttributeSets::fill`] keyed by a paint-type option.
    ///
    /// Options other than `stroke` and `fill` get the `both` set.
    pub fn fill_for(&self, paint: &AttributeOption) -> &AttributeSet<'a> {
        self.fill(PaintMode::from_option(paint))
    }

    /// [`AttributeSets::round_rect`] keyed by a paint-type option.
    pub fn round_rect_for(&self, paint: &AttributeOption) -> &AttributeSet<'a> {
        self.round_rect(PaintMode::from_option(paint))
    }

    /// The editable attributes of a shape family in a paint mode.
    ///
    /// `mode` is ignored by shapes without a paint type.
    pub fn for_shape(&self, kind: ShapeKind, mode: PaintMode) -> &AttributeSet<'a> {
        match kind {
            ShapeKind::Rectangle | ShapeKind::Oval | ShapeKind::Polygon => self.fill(mode),
            ShapeKind::RoundRectangle => self.round_rect(mode),
            ShapeKind::Line | ShapeKind::Polyline => self.stroke(),
            ShapeKind::Text => self.text(),
        }
    }
}

/// Attributes of text shapes.
pub fn text_attributes() -> &'static AttributeSet<'static> {
    AttributeSets::global().text()
}

/// Attributes of the text tool.
pub fn text_tool_attributes() -> &'static AttributeSet<'static> {
    AttributeSets::global().text_tool()
}

/// Attributes of lines and polylines.
pub fn stroke_attributes() -> &'static AttributeSet<'static> {
    AttributeSets::global().stroke()
}

/// Attributes of a rectangle, oval or polygon in paint mode `mode`.
pub fn fill_attributes(mode: PaintMode) -> &'static AttributeSet<'static> {
    AttributeSets::global().fill(mode)
}

/// Attributes of a rounded rectangle in paint mode `mode`.
pub fn round_rect_attributes(mode: PaintMode) -> &'static AttributeSet<'static> {
    AttributeSets::global().round_rect(mode)
}

/// Attributes of a rectangle, oval or polygon with the given paint type.
pub fn fill_attributes_for(paint: &AttributeOption) -> &'static AttributeSet<'static> {
    AttributeSets::global().fill_for(paint)
}

/// Attributes of a rounded rectangle with the given paint type.
pub fn round_rect_attributes_for(paint: &AttributeOption) -> &'static AttributeSet<'static> {
    AttributeSets::global().round_rect_for(paint)
}

/// Attributes of any shape family, see [`AttributeSets::for_shape`].
pub fn attributes_for(kind: ShapeKind, mode: PaintMode) -> &'static AttributeSet<'static> {
    AttributeSets::global().for_shape(kind, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishLocale;

    fn ids(set: &AttributeSet<'_>) -> Vec<crate::attribute::AttributeId> {
        set.iter().map(Attribute::id).collect()
    }

    #[test]
    fn test_fill_stroke() {
        let a = catalog::get();
        let set = fill_attributes_for(&a.paint_stroke);
        assert_eq!(
            ids(set),
            vec![a.paint_type.id(), a.stroke_width.id(), a.stroke_color.id()]
        );
    }

    #[test]
    fn test_fill_fill() {
        let a = catalog::get();
        let set = fill_attributes_for(&a.paint_fill);
        assert_eq!(ids(set), vec![a.paint_type.id(), a.fill_color.id()]);
    }

    #[test]
    fn test_fill_both() {
        let a = catalog::get();
        let set = fill_attributes_for(&a.paint_both);
        assert_eq!(
            ids(set),
            vec![
                a.paint_type.id(),
                a.stroke_width.id(),
                a.stroke_color.id(),
                a.fill_color.id()
            ]
        );
    }

    #[test]
    fn test_round_rect_appends_corner_radius() {
        let a = catalog::get();
        for mode in PaintMode::all() {
            let option = a.paint_option(*mode);
            let mut expected = ids(fill_attributes_for(option));
            expected.push(a.corner_radius.id());
            let rrect = round_rect_attributes_for(option);
            assert_eq!(ids(rrect), expected);
            assert_eq!(rrect.get(rrect.len() - 1), Some(&a.corner_radius));
        }
    }

    #[test]
    fn test_unknown_option_falls_back_to_both() {
        let dashed = AttributeOption::new("dashed", "Dashed");
        assert!(std::ptr::eq(
            fill_attributes_for(&dashed),
            fill_attributes(PaintMode::Both)
        ));
        assert!(std::ptr::eq(
            round_rect_attributes_for(&dashed),
            round_rect_attributes(PaintMode::Both)
        ));
        let numeric = AttributeOption::new(1, "One");
        assert!(std::ptr::eq(
            fill_attributes_for(&numeric),
            fill_attributes(PaintMode::Both)
        ));
    }

    #[test]
    fn test_option_dispatch_agrees_with_paint_mode() {
        let a = catalog::get();
        let options = [
            a.paint_stroke.clone(),
            a.paint_fill.clone(),
            a.paint_both.clone(),
            AttributeOption::new("dashed", "Dashed"),
            AttributeOption::new(0, "Zero"),
        ];
        for option in &options {
            let mode = PaintMode::from_option(option);
            assert!(std::ptr::eq(fill_attributes_for(option), fill_attributes(mode)));
            assert!(std::ptr::eq(
                round_rect_attributes_for(option),
                round_rect_attributes(mode)
            ));
        }
    }

    #[test]
    fn test_option_matches_by_value() {
        let relabeled = AttributeOption::new("fill", "Remplissage");
        assert!(std::ptr::eq(
            fill_attributes_for(&relabeled),
            fill_attributes(PaintMode::Fill)
        ));
    }

    #[test]
    fn test_same_instance_on_repeat() {
        let a = catalog::get();
        for mode in PaintMode::all() {
            let option = a.paint_option(*mode);
            assert!(std::ptr::eq(fill_attributes_for(option), fill_attributes_for(option)));
            assert!(std::ptr::eq(fill_attributes_for(option), fill_attributes(*mode)));
            assert!(std::ptr::eq(
                round_rect_attributes_for(option),
                round_rect_attributes(*mode)
            ));
        }
        assert!(std::ptr::eq(text_attributes(), text_attributes()));
    }

    #[test]
    fn test_text_and_text_tool() {
        let text = text_attributes();
        let tool = text_tool_attributes();
        assert_eq!(text.len(), 3);
        assert_eq!(tool.len(), 3);
        assert_eq!(text.get(0), tool.get(0));
        assert_eq!(text.get(1), tool.get(1));
        assert_ne!(text.get(2), tool.get(2));
        assert_eq!(text.get(2).map(Attribute::key), tool.get(2).map(Attribute::key));
        assert_eq!(text.get(2), Some(&catalog::get().fill_color));
        assert!(!text.contains(&catalog::get().text_default_fill));
    }

    #[test]
    fn test_stroke_only() {
        let a = catalog::get();
        let set = stroke_attributes();
        assert_eq!(ids(set), vec![a.stroke_width.id(), a.stroke_color.id()]);
        assert!(!set.contains(&a.paint_type));
    }

    #[test]
    fn test_for_shape() {
        let sets = AttributeSets::global();
        assert!(std::ptr::eq(
            attributes_for(ShapeKind::Oval, PaintMode::Fill),
            sets.fill(PaintMode::Fill)
        ));
        assert!(std::ptr::eq(
            attributes_for(ShapeKind::RoundRectangle, PaintMode::Stroke),
            sets.round_rect(PaintMode::Stroke)
        ));
        for mode in PaintMode::all() {
            assert!(std::ptr::eq(attributes_for(ShapeKind::Line, *mode), sets.stroke()));
            assert!(std::ptr::eq(attributes_for(ShapeKind::Text, *mode), sets.text()));
        }
    }

    #[test]
    fn test_no_duplicates() {
        let sets = AttributeSets::global();
        let mut all = vec![sets.text(), sets.text_tool(), sets.stroke()];
        for mode in PaintMode::all() {
            all.push(sets.fill(*mode));
            all.push(sets.round_rect(*mode));
        }
        for set in all {
            for (i, attr) in set.iter().enumerate() {
                assert_eq!(set.index_of(attr), Some(i), "duplicate in {}", set.name());
            }
        }
    }

    #[test]
    fn test_local_catalog() {
        let attrs = DrawAttrs::new(&EnglishLocale);
        let sets = AttributeSets::new(&attrs);
        let set = sets.fill_for(&attrs.paint_stroke);
        assert_eq!(set.name(), "fillStroke.stroke");
        assert!(set.contains(&attrs.stroke_width));
        // Different catalog, different identities.
        assert!(!set.contains(&catalog::get().stroke_width));
        assert!(std::ptr::eq(sets.catalog(), &attrs));
    }
}
