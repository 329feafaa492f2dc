//! Formatting options.

use serde::Deserialize;

use crate::error::{PrettifierError, Result};

/// Options for one [`Formatter`](crate::format::Formatter).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    /// Pixels of left padding per nesting level
    pub indent_unit: u32,
    /// Most trailing flag letters consumed after a regex literal
    pub max_regex_flags: usize,
    /// Deepest dotted chain resolved against parent property tables
    pub max_member_depth: usize,
    /// Prepended to every span class name
    pub class_prefix: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            indent_unit: 20,
            max_regex_flags: 4,
            max_member_depth: 64,
            class_prefix: String::new(),
        }
    }
}

impl HighlightConfig {
    /// Parse and validate a JSON configuration. Missing keys take their
    /// default values.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: HighlightConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_indent_unit(mut self, indent_unit: u32) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_member_depth == 0 {
            return Err(PrettifierError::InvalidConfig {
                message: "max_member_depth must be at least 1".to_string(),
            });
        }
        if let Some(bad) = self
            .class_prefix
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(PrettifierError::InvalidConfig {
                message: format!("class_prefix may not contain '{}'", bad),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HighlightConfig::default();
        assert_eq!(config.indent_unit, 20);
        assert_eq!(config.max_regex_flags, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = HighlightConfig::from_json(r#"{"indent_unit": 8}"#).unwrap();
        assert_eq!(config.indent_unit, 8);
        assert_eq!(config.max_member_depth, 64);
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = HighlightConfig::from_json(r#"{"indent": 8}"#).unwrap_err();
        assert!(matches!(err, PrettifierError::Config(_)));
    }

    #[test]
    fn test_validate() {
        let err = HighlightConfig::from_json(r#"{"max_member_depth": 0}"#).unwrap_err();
        assert!(matches!(err, PrettifierError::InvalidConfig { .. }));

        let bad_prefix = HighlightConfig::default().with_class_prefix("a\"b");
        assert!(bad_prefix.validate().is_err());
        assert!(HighlightConfig::default()
            .with_class_prefix("js-")
            .validate()
            .is_ok());
    }
}
