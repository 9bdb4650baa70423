//! Error types for the Autosuggest library.
//!
//! The trie itself never fails. Errors come from the layers around it:
//! argument validation in [`crate::autocomplete::Autocompleter`], dictionary
//! loading, configuration files and the CLI.
//!
//! # Examples
//!
//! ```
//! use autosuggest::error::{AutosuggestError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutosuggestError::invalid_argument("frequency must be non-negative"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Autosuggest operations.
#[derive(Error, Debug)]
pub enum AutosuggestError {
    /// Caller contract violations (negative frequency, empty word, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed dictionary input
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O errors (dictionary and config files, stdin/stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AutosuggestError.
pub type Result<T> = std::result::Result<T, AutosuggestError>;

impl AutosuggestError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AutosuggestError::InvalidArgument(msg.into())
    }

    /// Create a new parse error for the given 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        AutosuggestError::Parse {
            line,
            message: msg.into(),
        }
    }
}
