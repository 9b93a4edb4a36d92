// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{RELATED_TERMS_LIMIT, SEARCH_LIMIT, UNIFIED_SEARCH_LIMIT};

/// TOML configuration for a studydeck data directory.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Glossary store filename, relative to the data directory.
    #[serde(default = "default_dictionary_db")]
    pub dictionary_db: String,
    /// Note store filename, relative to the data directory.
    #[serde(default = "default_notes_db")]
    pub notes_db: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default = "default_unified_limit")]
    pub unified_limit: usize,
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

// Default value functions
fn default_dictionary_db() -> String { "dictionary.db".to_string() }
fn default_notes_db() -> String { "notes.db".to_string() }
fn default_result_limit() -> usize { SEARCH_LIMIT }
fn default_unified_limit() -> usize { UNIFIED_SEARCH_LIMIT }
fn default_related_limit() -> usize { RELATED_TERMS_LIMIT }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dictionary_db: default_dictionary_db(),
            notes_db: default_notes_db(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            unified_limit: default_unified_limit(),
            related_limit: default_related_limit(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the config file if present, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the store paths against the data directory.
    pub fn dictionary_db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.dictionary_db)
    }

    pub fn notes_db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.notes_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_missing_file_when_loading_or_default_then_uses_defaults() {
        let config = Config::load_or_default("/nonexistent/studydeck.toml").unwrap();

        assert_eq!(config.storage.dictionary_db, "dictionary.db");
        assert_eq!(config.storage.notes_db, "notes.db");
        assert_eq!(config.search.result_limit, SEARCH_LIMIT);
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("studydeck.toml");

        let toml_content = r#"
[storage]
dictionary_db = "glossary.sqlite"
notes_db = "journal.sqlite"

[search]
result_limit = 25
unified_limit = 8
related_limit = 3
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.storage.dictionary_db, "glossary.sqlite");
        assert_eq!(config.storage.notes_db, "journal.sqlite");
        assert_eq!(config.search.result_limit, 25);
        assert_eq!(config.search.unified_limit, 8);
        assert_eq!(config.search.related_limit, 3);
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        fs::write(&config_path, "[storage]\nnotes_db = \"n.db\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        // Specified value
        assert_eq!(config.storage.notes_db, "n.db");
        // Default values
        assert_eq!(config.storage.dictionary_db, "dictionary.db");
        assert_eq!(config.search.unified_limit, UNIFIED_SEARCH_LIMIT);
    }

    #[test]
    fn given_data_dir_when_resolving_paths_then_joins_filenames() {
        let config = Config::default();
        let dir = Path::new("/data/studydeck");

        assert_eq!(
            config.dictionary_db_path(dir),
            PathBuf::from("/data/studydeck/dictionary.db")
        );
        assert_eq!(
            config.notes_db_path(dir),
            PathBuf::from("/data/studydeck/notes.db")
        );
    }
}
