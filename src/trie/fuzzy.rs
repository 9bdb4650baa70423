//! Edit-distance (fuzzy) suggestion.
//!
//! The walk carries one Levenshtein row per depth: the row for a node holds
//! the distances between the word spelled by that node and every prefix of
//! the query. Extending a word never lowers the row minimum, so once the
//! minimum exceeds `max_distance` the whole subtree is skipped. Every word
//! that survives gets exactly the distance the full table would give.

use log::trace;

use crate::suggestion::{self, Suggestion};
use crate::trie::{Trie, TrieNode};
use crate::util::levenshtein::{first_row, next_row};

impl Trie {
    /// Words within `max_distance` edits of `query`, highest frequency first.
    pub fn fuzzy_suggest(&self, query: &str, max_distance: usize) -> Vec<String> {
        suggestion::into_words(self.fuzzy_suggest_ranked(query, max_distance))
    }

    /// Like [`Trie::fuzzy_suggest`] but keeps each word's frequency and distance.
    pub fn fuzzy_suggest_ranked(&self, query: &str, max_distance: usize) -> Vec<Suggestion> {
        let query: Vec<char> = query.chars().collect();
        let mut search = FuzzySearch {
            query: &query,
            max_distance,
            word: String::new(),
            results: Vec::new(),
            visited: 0,
        };

        search.walk(&self.root, &first_row(&query));
        trace!(
            "fuzzy search visited {} of {} nodes, {} matches",
            search.visited,
            self.node_count,
            search.results.len()
        );

        let mut results = search.results;
        suggestion::rank(&mut results);
        results
    }
}

struct FuzzySearch<'q> {
    query: &'q [char],
    max_distance: usize,
    /// Path from the root to the node being visited.
    word: String,
    results: Vec<Suggestion>,
    visited: usize,
}

impl FuzzySearch<'_> {
    fn walk(&mut self, node: &TrieNode, row: &[usize]) {
        self.visited += 1;

        let distance = row[self.query.len()];
        if let Some(frequency) = node.frequency()
            && distance <= self.max_distance
        {
            self.results
                .push(Suggestion::with_distance(self.word.clone(), frequency, distance));
        }

        if row.iter().min().is_none_or(|&min| min > self.max_distance) {
            return;
        }

        for (symbol, child) in node.children() {
            let child_row = next_row(row, symbol, self.query);
            self.word.push(symbol);
            self.walk(child, &child_row);
            self.word.pop();
        }
    }
}
