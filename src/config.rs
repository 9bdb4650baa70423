//! Configuration for the autocomplete service layer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for [`crate::autocomplete::Autocompleter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Frequency used when a word is added or loaded without one.
    pub default_frequency: u32,

    /// Edit distance used by fuzzy queries that don't specify one.
    pub default_max_distance: usize,

    /// Cap on the number of words a query returns.
    /// If None, every match is returned.
    pub max_results: Option<usize>,

    /// Whether words and queries are lower-cased before reaching the trie.
    pub lowercase: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            default_frequency: 1,
            default_max_distance: 1,
            max_results: None,
            lowercase: true,
        }
    }
}

impl AutocompleteConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AutocompleteConfig::default();
        assert_eq!(config.default_frequency, 1);
        assert_eq!(config.default_max_distance, 1);
        assert_eq!(config.max_results, None);
        assert!(config.lowercase);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AutocompleteConfig =
            serde_json::from_str(r#"{"max_results": 10, "lowercase": false}"#).unwrap();

        assert_eq!(config.max_results, Some(10));
        assert!(!config.lowercase);
        assert_eq!(config.default_frequency, 1);
        assert_eq!(config.default_max_distance, 1);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"default_max_distance": 2}}"#).unwrap();
        temp_file.flush().unwrap();

        let config = AutocompleteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_max_distance, 2);
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not json").unwrap();
        temp_file.flush().unwrap();

        assert!(AutocompleteConfig::from_file(temp_file.path()).is_err());
    }
}
