//! Attribute definitions: identity, value domain, default value and parsing.

mod color;
mod font;
mod option;

pub use color::AttributeColor;
pub use font::{FontSpec, FontStyle};
pub use option::{AttributeOption, OptionValue};

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Attribute value errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("Invalid {expected}: {input:?}")]
    Parse {
        expected: &'static str,
        input: String,
    },
    #[error("Value {value} for attribute {key} is outside [{min}, {max}]")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: i32,
        max: i32,
    },
    #[error("Unknown option {value:?} for attribute {key}")]
    UnknownOption {
        key: &'static str,
        value: String,
    },
    #[error("Attribute {key} expects a {expected} value")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
    },
}

/// Result type for attribute operations.
pub type AttributeResult<T> = Result<T, AttributeError>;

/// Opaque attribute identity.
///
/// Every factory call hands out a fresh id, so two attributes with the same
/// key and label are still different attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(u32);

impl AttributeId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU32, Ordering};

        static ID_COUNTER: AtomicU32 = AtomicU32::new(1);
        AttributeId(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The set of values an attribute accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDomain {
    Font,
    Color,
    /// Inclusive integer range.
    IntegerRange {
        min: i32,
        max: i32,
    },
    Options(Box<[AttributeOption]>),
}

impl AttributeDomain {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeDomain::Font => "font",
            AttributeDomain::Color => "color",
            AttributeDomain::IntegerRange { .. } => "integer",
            AttributeDomain::Options(_) => "option",
        }
    }
}

/// A concrete attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Font(FontSpec),
    Color(AttributeColor),
    Integer(i32),
    Option(AttributeOption),
}

impl AttributeValue {
    pub fn as_font(&self) -> Option<&FontSpec> {
        match self {
            AttributeValue::Font(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<AttributeColor> {
        match self {
            AttributeValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<&AttributeOption> {
        match self {
            AttributeValue::Option(option) => Some(option),
            _ => None,
        }
    }
}

/// A named, typed, user-editable shape property.
///
/// Attributes compare and hash by [`AttributeId`], never by key.
#[derive(Debug, Clone)]
pub struct Attribute {
    id: AttributeId,
    key: &'static str,
    label: String,
    domain: AttributeDomain,
    default: AttributeValue,
}

impl Attribute {
    fn with_domain(
        key: &'static str,
        label: impl Into<String>,
        domain: AttributeDomain,
        default: AttributeValue,
    ) -> Self {
        Self {
            id: AttributeId::next(),
            key,
            label: label.into(),
            domain,
            default,
        }
    }

    /// Create a font-valued attribute.
    pub fn font(key: &'static str, label: impl Into<String>, default: FontSpec) -> Self {
        Self::with_domain(key, label, AttributeDomain::Font, AttributeValue::Font(default))
    }

    /// Create a color-valued attribute.
    pub fn color(key: &'static str, label: impl Into<String>, default: AttributeColor) -> Self {
        Self::with_domain(key, label, AttributeDomain::Color, AttributeValue::Color(default))
    }

    /// Create an integer attribute accepting `min..=max`.
    ///
    /// The bounds are normalized so that `min <= max`, and the default is
    /// clamped into them.
    pub fn integer_range(
        key: &'static str,
        label: impl Into<String>,
        min: i32,
        max: i32,
        default: i32,
    ) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self::with_domain(
            key,
            label,
            AttributeDomain::IntegerRange { min, max },
            AttributeValue::Integer(default.clamp(min, max)),
        )
    }

    /// Create an enumerated attribute.
    ///
    /// Options repeating an earlier underlying value are dropped. A default
    /// outside the option list falls back to the first option; with no options
    /// at all the default becomes the only one.
    pub fn options(
        key: &'static str,
        label: impl Into<String>,
        options: impl IntoIterator<Item = AttributeOption>,
        default: AttributeOption,
    ) -> Self {
        let mut unique: Vec<AttributeOption> = Vec::new();
        for option in options {
            if unique.contains(&option) {
                log::warn!("Attribute {key}: dropping duplicate option {}", option.value());
                continue;
            }
            unique.push(option);
        }

        let default = match unique.iter().position(|o| *o == default) {
            Some(index) => unique[index].clone(),
            None if !unique.is_empty() => {
                log::warn!(
                    "Attribute {key}: default {} is not an option, using {}",
                    default.value(),
                    unique[0].value()
                );
                unique[0].clone()
            }
            None => {
                unique.push(default.clone());
                default
            }
        };

        Self::with_domain(
            key,
            label,
            AttributeDomain::Options(unique.into_boxed_slice()),
            AttributeValue::Option(default),
        )
    }

    pub fn id(&self) -> AttributeId {
        self.id
    }

    /// Stable key used for persistence. Not unique.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn domain(&self) -> &AttributeDomain {
        &self.domain
    }

    pub fn default_value(&self) -> &AttributeValue {
        &self.default
    }

    /// Allowed options; empty for non-enumerated attributes.
    pub fn option_list(&self) -> &[AttributeOption] {
        match &self.domain {
            AttributeDomain::Options(options) => options,
            _ => &[],
        }
    }

    /// Find the catalog option with the given underlying value.
    pub fn option_by_value(&self, value: &OptionValue) -> Option<&AttributeOption> {
        self.option_list().iter().find(|o| o.value() == value)
    }

    /// Check that `value` belongs to this attribute's domain.
    pub fn validate(&self, value: &AttributeValue) -> AttributeResult<()> {
        match (&self.domain, value) {
            (AttributeDomain::Font, AttributeValue::Font(_))
            | (AttributeDomain::Color, AttributeValue::Color(_)) => Ok(()),
            (AttributeDomain::IntegerRange { min, max }, AttributeValue::Integer(v)) => {
                if (*min..=*max).contains(v) {
                    Ok(())
                } else {
                    Err(AttributeError::OutOfRange {
                        key: self.key,
                        value: i64::from(*v),
                        min: *min,
                        max: *max,
                    })
                }
            }
            (AttributeDomain::Options(_), AttributeValue::Option(option)) => {
                if self.option_by_value(option.value()).is_some() {
                    Ok(())
                } else {
                    Err(AttributeError::UnknownOption {
                        key: self.key,
                        value: option.value().to_string(),
                    })
                }
            }
            (domain, _) => Err(AttributeError::TypeMismatch {
                key: self.key,
                expected: domain.kind(),
            }),
        }
    }

    /// Parse a value from its standard string form.
    pub fn parse(&self, text: &str) -> AttributeResult<AttributeValue> {
        match &self.domain {
            AttributeDomain::Font => FontSpec::parse(text).map(AttributeValue::Font),
            AttributeDomain::Color => AttributeColor::parse_hex(text).map(AttributeValue::Color),
            AttributeDomain::IntegerRange { min, max } => {
                let value: i64 = text.trim().parse().map_err(|_| AttributeError::Parse {
                    expected: "integer",
                    input: text.to_string(),
                })?;
                if value < i64::from(*min) || value > i64::from(*max) {
                    return Err(AttributeError::OutOfRange {
                        key: self.key,
                        value,
                        min: *min,
                        max: *max,
                    });
                }
                // In range, so it fits in i32.
                Ok(AttributeValue::Integer(value as i32))
            }
            AttributeDomain::Options(options) => {
                let text = text.trim();
                options
                    .iter()
                    .find(|o| o.value().to_string() == text)
                    .cloned()
                    .map(AttributeValue::Option)
                    .ok_or_else(|| AttributeError::UnknownOption {
                        key: self.key,
                        value: text.to_string(),
                    })
            }
        }
    }

    /// Render a value in its standard string form, which [`Attribute::parse`] reads back.
    pub fn format(&self, value: &AttributeValue) -> AttributeResult<String> {
        self.validate(value)?;
        Ok(match value {
            AttributeValue::Font(font) => font.to_string(),
            AttributeValue::Color(color) => color.to_string(),
            AttributeValue::Integer(v) => v.to_string(),
            AttributeValue::Option(option) => option.value().to_string(),
        })
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
