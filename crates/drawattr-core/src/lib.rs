//! DrawAttr Core Library
//!
//! Attribute catalog and schema resolver for vector drawing shapes: which
//! style attributes a shape exposes for its family and paint mode.

pub mod attribute;
pub mod catalog;
pub mod locale;
pub mod schema;
pub mod shapes;
pub mod values;

pub use attribute::{
    Attribute, AttributeColor, AttributeDomain, AttributeError, AttributeId, AttributeOption,
    AttributeResult, AttributeValue, FontSpec, FontStyle, OptionValue,
};
pub use catalog::{CatalogError, DrawAttrs};
pub use locale::{EnglishLocale, Locale, LocaleError, StringTable};
pub use schema::{
    AttributeSet, AttributeSets, attributes_for, fill_attributes, fill_attributes_for,
    round_rect_attributes, round_rect_attributes_for, stroke_attributes, text_attributes,
    text_tool_attributes,
};
pub use shapes::{PaintMode, ShapeKind, TextAlign};
pub use values::AttributeValues;
