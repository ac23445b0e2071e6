//! Display-label lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// String table errors.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid string table: {0}")]
    Parse(String),
}

/// Result type for locale operations.
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Resolves a message key to display text.
///
/// Lookups never fail: a missing key yields some fallback string.
pub trait Locale: Send + Sync {
    fn text(&self, key: &str) -> String;
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

impl EnglishLocale {
    /// Look up a key, returning `None` if it is not one of the built-in keys.
    pub fn lookup(key: &str) -> Option<&'static str> {
        let text = match key {
            "attrFont" => "Font",
            "attrAlign" => "Alignment",
            "attrPaint" => "Paint Type",
            "attrStrokeWidth" => "Stroke Width",
            "attrStroke" => "Stroke Color",
            "attrFill" => "Fill Color",
            "attrRx" => "Corner Radius",
            "alignStart" => "Left",
            "alignMiddle" => "Center",
            "alignEnd" => "Right",
            "paintStroke" => "Border Only",
            "paintFill" => "Fill Only",
            "paintBoth" => "Border & Fill",
            _ => return None,
        };
        Some(text)
    }
}

impl Locale for EnglishLocale {
    fn text(&self, key: &str) -> String {
        Self::lookup(key).unwrap_or(key).to_string()
    }
}

/// A user-supplied string table, typically loaded from a JSON object of
/// `"key": "text"` pairs.
///
/// Keys missing from the table fall back to English, then to the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> LocaleResult<Self> {
        serde_json::from_str(json).map_err(|e| LocaleError::Parse(e.to_string()))
    }

    /// Read and parse a JSON table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> LocaleResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LocaleError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let table = Self::from_json(&json)?;
        log::info!("Loaded {} labels from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Locale for StringTable {
    fn text(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => EnglishLocale.text(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_fallback_to_key() {
        assert_eq!(EnglishLocale.text("attrFont"), "Font");
        assert_eq!(EnglishLocale.text("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_table_falls_back_to_english() {
        let table = StringTable::new().with("attrFont", "Schrift");
        assert_eq!(table.text("attrFont"), "Schrift");
        assert_eq!(table.text("attrAlign"), "Alignment");
        assert_eq!(table.text("missing"), "missing");
    }

    #[test]
    fn test_from_json() {
        let table = StringTable::from_json(r#"{"paintFill": "Remplissage"}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.text("paintFill"), "Remplissage");
        assert!(matches!(
            StringTable::from_json("[1, 2]"),
            Err(LocaleError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"attrRx": "Eckenradius"}}"#).unwrap();
        let table = StringTable::from_path(file.path()).unwrap();
        assert_eq!(table.text("attrRx"), "Eckenradius");
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = StringTable::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(LocaleError::Io { .. })));
    }
}
