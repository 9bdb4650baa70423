//! Trie nodes.

use ahash::AHashMap;

/// A node in the trie.
///
/// Each node exclusively owns its children, so the structure is a strict
/// tree with no shared or back references.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Child nodes keyed by the next symbol. Iteration order is unspecified.
    pub(crate) children: AHashMap<char, TrieNode>,
    /// True iff the path from the root to this node spells an inserted word.
    pub(crate) is_terminal: bool,
    /// Ranking score, meaningful only when `is_terminal` is set.
    pub(crate) frequency: u32,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node terminates an inserted word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The frequency of the word ending here, if any.
    pub fn frequency(&self) -> Option<u32> {
        self.is_terminal.then_some(self.frequency)
    }

    /// The child reached by `symbol`.
    pub fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Iterate over `(symbol, child)` pairs in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&symbol, child)| (symbol, child))
    }

    /// Mark this node as the end of a word, overwriting any previous score.
    pub(crate) fn terminate(&mut self, frequency: u32) {
        self.is_terminal = true;
        self.frequency = frequency;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_not_terminal() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert_eq!(node.frequency(), None);
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn test_terminate_overwrites_frequency() {
        let mut node = TrieNode::new();
        node.terminate(4);
        assert_eq!(node.frequency(), Some(4));

        node.terminate(2);
        assert_eq!(node.frequency(), Some(2));
    }
}
