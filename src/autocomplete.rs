//! Thread-safe autocomplete service over a [`Trie`].
//!
//! [`Autocompleter`] is the entry point for request handlers. It lower-cases
//! input, validates caller-supplied frequencies and guards the trie with a
//! single reader/writer lock: any number of queries run concurrently, while
//! [`Autocompleter::add_word`] waits for exclusive access.

use log::debug;
use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use crate::config::AutocompleteConfig;
use crate::error::{AutosuggestError, Result};
use crate::suggestion::{self, Suggestion};
use crate::trie::Trie;

/// Size statistics of the underlying trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of distinct words.
    pub words: usize,
    /// Number of nodes, including the root.
    pub nodes: usize,
}

/// Case-folding, lock-guarded autocomplete service.
#[derive(Debug)]
pub struct Autocompleter {
    trie: RwLock<Trie>,
    config: AutocompleteConfig,
}

impl Autocompleter {
    /// Create an empty service with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AutocompleteConfig::default())
    }

    /// Create an empty service with a custom configuration.
    pub fn with_config(config: AutocompleteConfig) -> Self {
        Self::from_trie(Trie::new(), config)
    }

    /// Wrap an already populated trie. Its words are used as-is.
    pub fn from_trie(trie: Trie, config: AutocompleteConfig) -> Self {
        Autocompleter {
            trie: RwLock::new(trie),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// Register `word` or update its frequency.
    ///
    /// The word is trimmed (and lower-cased unless disabled in the config).
    /// An empty word, a negative frequency or one above `u32::MAX` is
    /// rejected with [`AutosuggestError::InvalidArgument`].
    pub fn add_word(&self, word: &str, frequency: i64) -> Result<()> {
        let frequency = u32::try_from(frequency).map_err(|_| {
            AutosuggestError::invalid_argument(format!(
                "frequency must be between 0 and {}, got {frequency}",
                u32::MAX
            ))
        })?;

        let word = self.normalize(word.trim());
        if word.is_empty() {
            return Err(AutosuggestError::invalid_argument("word must not be empty"));
        }

        debug!("adding word '{word}' with frequency {frequency}");
        self.trie.write().insert(&word, frequency);
        Ok(())
    }

    /// Register `word` with the configured default frequency.
    pub fn add_word_default(&self, word: &str) -> Result<()> {
        self.add_word(word, i64::from(self.config.default_frequency))
    }

    /// Ranked completions of `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        suggestion::into_words(self.suggest_ranked(prefix))
    }

    /// Ranked completions of `prefix` with their frequencies.
    pub fn suggest_ranked(&self, prefix: &str) -> Vec<Suggestion> {
        let prefix = self.normalize(prefix);
        let results = self.trie.read().suggest_ranked(&prefix);
        self.limit(results)
    }

    /// Ranked approximate matches of `query`.
    ///
    /// `max_distance` falls back to the configured default when `None`.
    pub fn fuzzy_suggest(&self, query: &str, max_distance: Option<usize>) -> Vec<String> {
        suggestion::into_words(self.fuzzy_suggest_ranked(query, max_distance))
    }

    /// Ranked approximate matches of `query` with frequencies and distances.
    pub fn fuzzy_suggest_ranked(&self, query: &str, max_distance: Option<usize>) -> Vec<Suggestion> {
        let query = self.normalize(query);
        let max_distance = max_distance.unwrap_or(self.config.default_max_distance);
        let results = self.trie.read().fuzzy_suggest_ranked(&query, max_distance);
        self.limit(results)
    }

    /// Word and node counts.
    pub fn stats(&self) -> TrieStats {
        let trie = self.trie.read();
        TrieStats {
            words: trie.len(),
            nodes: trie.node_count(),
        }
    }

    /// Shared read access to the trie. Writers block while the guard lives.
    pub fn trie(&self) -> RwLockReadGuard<'_, Trie> {
        self.trie.read()
    }

    fn normalize(&self, text: &str) -> String {
        if self.config.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }

    fn limit(&self, mut results: Vec<Suggestion>) -> Vec<Suggestion> {
        if let Some(max_results) = self.config.max_results {
            results.truncate(max_results);
        }
        results
    }
}

impl Default for Autocompleter {
    fn default() -> Self {
        Self::new()
    }
}
