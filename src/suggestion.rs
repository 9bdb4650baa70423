//! Ranked suggestion results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A word returned by a suggestion query together with its ranking data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Frequency recorded for the word at insertion time.
    pub frequency: u32,
    /// Edit distance from the query, present for fuzzy results only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

impl Suggestion {
    /// Create a suggestion coming from an exact-prefix search.
    pub fn new(word: String, frequency: u32) -> Self {
        Suggestion {
            word,
            frequency,
            distance: None,
        }
    }

    /// Create a suggestion coming from a fuzzy search.
    pub fn with_distance(word: String, frequency: u32, distance: usize) -> Self {
        Suggestion {
            word,
            frequency,
            distance: Some(distance),
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher frequencies come first, equal frequencies in word order
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort suggestions by frequency descending, breaking ties by word.
///
/// Words are unique within a single query result, so the order is total and
/// independent of the order in which the trie yielded them.
pub fn rank(suggestions: &mut [Suggestion]) {
    suggestions.sort_unstable();
}

/// Strip ranking data, keeping only the ordered words.
pub fn into_words(suggestions: Vec<Suggestion>) -> Vec<String> {
    suggestions.into_iter().map(|s| s.word).collect()
}
