//! Enumerated attribute options.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Underlying value of an option: the stable identity used for comparison and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i32),
    Tag(Cow<'static, str>),
}

impl OptionValue {
    pub const fn tag(tag: &'static str) -> Self {
        OptionValue::Tag(Cow::Borrowed(tag))
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            OptionValue::Int(v) => Some(*v),
            OptionValue::Tag(_) => None,
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            OptionValue::Tag(t) => Some(t.as_ref()),
            OptionValue::Int(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(v) => write!(f, "{v}"),
            OptionValue::Tag(t) => f.write_str(t),
        }
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&'static str> for OptionValue {
    fn from(value: &'static str) -> Self {
        OptionValue::tag(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Tag(Cow::Owned(value))
    }
}

/// One allowed value of an enumerated attribute.
///
/// Equality and hashing only look at the underlying value; the label is
/// locale-dependent display text.
#[derive(Debug, Clone)]
pub struct AttributeOption {
    value: OptionValue,
    label: String,
}

impl AttributeOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for AttributeOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for AttributeOption {}

impl Hash for AttributeOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for AttributeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
