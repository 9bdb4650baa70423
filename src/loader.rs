//! Bulk loading of word lists.
//!
//! A word list has one entry per line: a word, optionally followed by
//! whitespace and an integer frequency. Entries without a frequency get the
//! service's default frequency.
//!
//! ```text
//! weather 5
//! wealth  3
//! weary
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::autocomplete::Autocompleter;
use crate::error::{AutosuggestError, Result};

/// Summary of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Entries passed to the trie.
    pub inserted: usize,
    /// Blank lines.
    pub skipped: usize,
}

/// Load a word list file into `service`.
pub fn load_words_from_file<P: AsRef<Path>>(
    path: P,
    service: &Autocompleter,
) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_words(BufReader::new(file), service)?;

    info!(
        "loaded {} words from {} ({} lines)",
        report.inserted,
        path.display(),
        report.lines
    );
    Ok(report)
}

/// Load a word list from any buffered reader into `service`.
///
/// Stops at the first malformed line; entries before it stay inserted.
/// A frequency that is not an integer is a `Parse` error, a negative or
/// empty entry an `InvalidArgument` naming the line.
pub fn load_words<R: BufRead>(reader: R, service: &Autocompleter) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        report.lines += 1;

        let parts: Vec<&str> = line.split_whitespace().collect();
        let added = match parts.as_slice() {
            [] => {
                report.skipped += 1;
                continue;
            }
            [word] => service.add_word_default(word),
            [word, frequency] => {
                let frequency = frequency.parse::<i64>().map_err(|e| {
                    AutosuggestError::parse(
                        line_number,
                        format!("invalid frequency '{frequency}': {e}"),
                    )
                })?;
                service.add_word(word, frequency)
            }
            [word, ..] => {
                warn!("line {line_number}: expected 'word [frequency]', ignoring extra fields");
                service.add_word_default(word)
            }
        };
        added.map_err(|e| match e {
            AutosuggestError::InvalidArgument(message) => {
                AutosuggestError::invalid_argument(format!("line {line_number}: {message}"))
            }
            other => other,
        })?;

        report.inserted += 1;
    }

    Ok(report)
}
