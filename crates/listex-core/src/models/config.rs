//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ListexError, Result};
use crate::listing::rules::aliases;

/// Main configuration for the listex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListexConfig {
    /// Field resolution configuration.
    pub extraction: ExtractionConfig,
}

impl Default for ListexConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Field resolution configuration.
///
/// Alias lists are ordered: earlier entries win when a record carries
/// several spellings of the same field. Matching is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Accepted spellings for the price field.
    pub price_aliases: Vec<String>,

    /// Accepted spellings for the area field.
    pub area_aliases: Vec<String>,

    /// Accepted spellings for the furnishing-status field.
    pub furnishing_aliases: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            price_aliases: to_owned(aliases::PRICE),
            area_aliases: to_owned(aliases::AREA),
            furnishing_aliases: to_owned(aliases::FURNISHING),
        }
    }
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl ListexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ListexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ListexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alias_lists() {
        let config = ExtractionConfig::default();
        assert_eq!(config.price_aliases, ["price", "Price", "PRICE"]);
        assert_eq!(config.area_aliases[0], "area");
        assert_eq!(config.furnishing_aliases[0], "furnishingstatus");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"price_aliases": ["cost"]}}"#).unwrap();

        let config = ListexConfig::from_file(&path).unwrap();
        assert_eq!(config.extraction.price_aliases, ["cost"]);
        assert_eq!(config.extraction.area_aliases[0], "area");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ListexConfig::default();
        config.save(&path).unwrap();

        let loaded = ListexConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.price_aliases, config.extraction.price_aliases);
    }
}
