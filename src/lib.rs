//! # Autosuggest
//!
//! Frequency-ranked word suggestions backed by an in-memory prefix trie.
//!
//! ## Features
//!
//! - Exact-prefix completion ranked by frequency
//! - Fuzzy (Levenshtein) matching with subtree pruning
//! - Deterministic ordering: ties broken lexicographically
//! - Lock-guarded service layer with case folding
//! - Word list loading and a small CLI

pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod suggestion;
pub mod trie;
pub mod util;

pub mod prelude {
    pub use crate::autocomplete::{Autocompleter, TrieStats};
    pub use crate::config::AutocompleteConfig;
    pub use crate::error::{AutosuggestError, Result};
    pub use crate::suggestion::Suggestion;
    pub use crate::trie::Trie;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
