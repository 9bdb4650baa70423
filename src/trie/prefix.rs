//! Exact-prefix suggestion.

use crate::suggestion::{self, Suggestion};
use crate::trie::{Trie, TrieNode};

impl Trie {
    /// Words starting with `prefix`, highest frequency first.
    ///
    /// Returns an empty list when no inserted word starts with `prefix`.
    /// If `prefix` is itself a word it is part of the result. The empty
    /// prefix matches every word.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        suggestion::into_words(self.suggest_ranked(prefix))
    }

    /// Like [`Trie::suggest`] but keeps each word's frequency.
    pub fn suggest_ranked(&self, prefix: &str) -> Vec<Suggestion> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut buffer = String::from(prefix);
        collect(start, &mut buffer, &mut results);

        suggestion::rank(&mut results);
        results
    }
}

/// Pre-order walk pushing every terminal word below `node`.
///
/// `buffer` holds the path to `node` on entry and is restored before returning.
fn collect(node: &TrieNode, buffer: &mut String, results: &mut Vec<Suggestion>) {
    if let Some(frequency) = node.frequency() {
        results.push(Suggestion::new(buffer.clone(), frequency));
    }

    for (symbol, child) in node.children() {
        buffer.push(symbol);
        collect(child, buffer, results);
        buffer.pop();
    }
}
