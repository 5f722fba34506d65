//! Pipeline configuration.
//!
//! Every pass can be switched off individually; the order of the passes that
//! remain enabled never changes. A config file is plain JSON, and any key left
//! out takes its default:
//!
//! ```json
//! { "normalize_dates": false, "century_pivot": 50 }
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::dates::DEFAULT_CENTURY_PIVOT;

/// Configuration for the text normalisation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    pub convert_to_ascii: bool,
    pub expand_abbreviations: bool,
    pub remove_digit_separators: bool,
    pub normalize_currency: bool,
    pub normalize_dates: bool,
    pub normalize_quotes: bool,
    pub collapse_whitespace: bool,
    pub trim: bool,
    /// Two-digit years below this value are placed in the 2000s.
    pub century_pivot: u8,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            convert_to_ascii: true,
            expand_abbreviations: true,
            remove_digit_separators: true,
            normalize_currency: true,
            normalize_dates: true,
            normalize_quotes: true,
            collapse_whitespace: true,
            trim: true,
            century_pivot: DEFAULT_CENTURY_PIVOT,
        }
    }
}

impl NormalizerConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse normalizer config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid config '{}'", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.century_pivot > 100 {
            bail!("century_pivot must be in 0..=100, got {}", self.century_pivot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_is_default() {
        let config = NormalizerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.century_pivot, 69);
    }

    #[test]
    fn test_partial_override() {
        let config =
            NormalizerConfig::from_json_str(r#"{"normalize_dates": false, "century_pivot": 50}"#).unwrap();
        assert!(!config.normalize_dates);
        assert!(config.expand_abbreviations);
        assert_eq!(config.century_pivot, 50);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(NormalizerConfig::from_json_str(r#"{"lowercase": true}"#).is_err());
    }

    #[test]
    fn test_pivot_out_of_range() {
        let err = NormalizerConfig::from_json_str(r#"{"century_pivot": 150}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("century_pivot"), "got: {:#}", err);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, r#"{{"trim": false}}"#).unwrap();

        let config = NormalizerConfig::load(file.path()).unwrap();
        assert!(!config.trim);
        assert!(config.collapse_whitespace);
    }

    #[test]
    fn test_load_missing_file() {
        let err = NormalizerConfig::load(Path::new("/nonexistent/ttsnorm.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config"), "got: {:#}", err);
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = NormalizerConfig { century_pivot: 30, ..Default::default() };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(NormalizerConfig::from_json_str(&json).unwrap(), config);
    }
}
