//! Shared utility modules used across Autosuggest components.

pub mod levenshtein;
