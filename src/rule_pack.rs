//! Rule-pack loading and serialization.
//!
//! A rule pack is a schema-less structured document. It is loaded once per
//! expansion run, kept as a generic [`serde_json::Value`], and embedded
//! verbatim into every expanded artifact.

use std::path::Path;

use serde_json::Value;

use crate::ports::filesystem::FileSystem;

/// A loaded rule-pack document.
#[derive(Debug, Clone, PartialEq)]
pub struct RulePack {
    value: Value,
}

impl RulePack {
    /// Wraps an already-parsed document.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Loads a rule pack from `path`.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML; anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a well-formed
    /// document.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, String> {
        let text = fs
            .read_to_string(path)
            .map_err(|e| format!("Failed to read rule pack {}: {e}", path.display()))?;
        Self::parse(&text, is_yaml(path))
            .map_err(|e| format!("Failed to parse rule pack {}: {e}", path.display()))
    }

    /// Parses a rule pack from text.
    ///
    /// # Errors
    ///
    /// Returns the parser's message when the text is malformed.
    pub fn parse(text: &str, yaml: bool) -> Result<Self, String> {
        let value: Value = if yaml {
            serde_yaml::from_str(text).map_err(|e| e.to_string())?
        } else {
            serde_json::from_str(text).map_err(|e| e.to_string())?
        };
        Ok(Self::new(value))
    }

    /// Returns the underlying document.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Serializes the document as two-space indented JSON in source key order.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        // Serializing a `Value` cannot fail: every key is already a string.
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
