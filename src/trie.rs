//! Indexed prefix trie with frequency-ranked exact and fuzzy suggestions.
//!
//! Words are stored as paths of `char`s from the root; a terminal node marks
//! the end of a word and carries its frequency. Two queries run over the
//! tree:
//!
//! - [`Trie::suggest`] walks to the node spelling the prefix and collects
//!   every word below it.
//! - [`Trie::fuzzy_suggest`] walks the whole tree and keeps every word within
//!   a Levenshtein distance of the query.
//!
//! Both return words ordered by frequency (highest first), with equal
//! frequencies in lexicographic order.
//!
//! The trie performs no normalization and has no internal locking. See
//! [`crate::autocomplete::Autocompleter`] for a case-folding, lock-guarded
//! wrapper.
//!
//! # Examples
//!
//! ```
//! use autosuggest::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("weather", 5);
//! trie.insert("wealth", 3);
//! trie.insert("weary", 1);
//!
//! assert_eq!(trie.suggest("wea"), vec!["weather", "wealth", "weary"]);
//! assert_eq!(trie.fuzzy_suggest("wether", 1), vec!["weather"]);
//! ```

mod fuzzy;
mod node;
mod prefix;

pub use node::TrieNode;

/// A prefix tree of words with frequencies.
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
    /// Number of distinct terminal words.
    len: usize,
    /// Number of nodes including the root.
    node_count: usize,
}

impl Trie {
    /// Create an empty trie holding only the root node.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            len: 0,
            node_count: 1,
        }
    }

    /// Insert `word` with the given frequency.
    ///
    /// Missing nodes along the path are created. Inserting a word that is
    /// already present replaces its frequency. The empty string marks the
    /// root as terminal.
    pub fn insert(&mut self, word: &str, frequency: u32) {
        let mut created = 0;
        let mut node = &mut self.root;
        for symbol in word.chars() {
            node = node.children.entry(symbol).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
        }

        if !node.is_terminal {
            self.len += 1;
        }
        node.terminate(frequency);
        self.node_count += created;
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Frequency of `word`, or `None` if it was never inserted.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.find(word).and_then(TrieNode::frequency)
    }

    /// Whether `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The node reached by following `path` from the root.
    fn find(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, symbol| node.child(symbol))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for Trie {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<(S, u32)> for Trie {
    fn extend<I: IntoIterator<Item = (S, u32)>>(&mut self, iter: I) {
        for (word, frequency) in iter {
            self.insert(word.as_ref(), frequency);
        }
    }
}
