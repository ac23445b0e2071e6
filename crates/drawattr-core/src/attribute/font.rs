//! Font values for font-valued attributes.

use super::{AttributeError, AttributeResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Name used in the standard string form.
    pub fn name(&self) -> &'static str {
        match self {
            FontStyle::Plain => "plain",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "bolditalic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }

    /// Get all available font styles.
    pub fn all() -> &'static [FontStyle] {
        &[
            FontStyle::Plain,
            FontStyle::Bold,
            FontStyle::Italic,
            FontStyle::BoldItalic,
        ]
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// A font description: family, style and point size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: Cow<'static, str>,
    pub style: FontStyle,
    /// Size in points.
    pub size: u16,
}

impl FontSpec {
    /// Used whenever a text shape has no explicit font set.
    pub const DEFAULT: FontSpec = FontSpec {
        family: Cow::Borrowed("SansSerif"),
        style: FontStyle::Plain,
        size: 12,
    };

    pub fn new(family: impl Into<Cow<'static, str>>, style: FontStyle, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Parse the standard form `"<family> <style> <size>"`.
    ///
    /// The family may contain spaces; style and size are always the last two
    /// words. Runs of whitespace count as one separator.
    pub fn parse(text: &str) -> AttributeResult<Self> {
        let invalid = || AttributeError::Parse {
            expected: "font (\"<family> <style> <size>\")",
            input: text.to_string(),
        };
        let words: Vec<&str> = text.split_whitespace().collect();
        let [family @ .., style, size] = words.as_slice() else {
            return Err(invalid());
        };
        if family.is_empty() {
            return Err(invalid());
        }
        let size = size
            .parse::<u16>()
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(invalid)?;
        let style = FontStyle::from_name(style).ok_or_else(invalid)?;
        let family = family.join(" ");
        Ok(Self::new(family, style, size))
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.family, self.style.name(), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = FontSpec::default();
        assert_eq!(font.family, "SansSerif");
        assert_eq!(font.style, FontStyle::Plain);
        assert_eq!(font.size, 12);
        assert_eq!(font.to_string(), "SansSerif plain 12");
    }

    #[test]
    fn test_parse_family_with_spaces() {
        let font = FontSpec::parse("Noto Sans bolditalic 18").unwrap();
        assert_eq!(font.family, "Noto Sans");
        assert_eq!(font.style, FontStyle::BoldItalic);
        assert!(font.style.is_bold() && font.style.is_italic());
        assert_eq!(font.size, 18);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let font = FontSpec::parse("SansSerif plain  12").unwrap();
        assert_eq!(font, FontSpec::DEFAULT);
        let font = FontSpec::parse("Noto\tSans\tbold\t14").unwrap();
        assert_eq!(font.family, "Noto Sans");
        assert_eq!(font.style, FontStyle::Bold);
        assert_eq!(font.size, 14);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(FontSpec::parse("SansSerif 12").is_err());
        assert!(FontSpec::parse("SansSerif heavy 12").is_err());
        assert!(FontSpec::parse("SansSerif plain 0").is_err());
        assert!(FontSpec::parse("").is_err());
        assert!(FontSpec::parse("plain 12").is_err());
    }
}
