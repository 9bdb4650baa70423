//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{AutosuggestArgs, OutputFormat};
use crate::error::Result;
use crate::loader::LoadReport;
use crate::suggestion::Suggestion;

/// Result structure for suggest and fuzzy queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<usize>,
    pub suggestions: Vec<Suggestion>,
    pub duration_us: u64,
}

/// Word list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub words: usize,
    pub nodes: usize,
    pub load: Option<LoadReport>,
}

/// Result structure for adding a word from the shell.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddResult {
    pub word: String,
    pub frequency: i64,
}

/// Write query results in the selected format.
pub fn write_suggestions<W: Write>(
    out: &mut W,
    results: &SuggestionResults,
    args: &AutosuggestArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(out, results, args),
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "Suggestions for '{}' ({} matches, {}µs):",
                    results.query,
                    results.suggestions.len(),
                    results.duration_us
                )?;
                for suggestion in &results.suggestions {
                    match suggestion.distance {
                        Some(distance) => writeln!(
                            out,
                            "  {} (frequency: {}, distance: {})",
                            suggestion.word, suggestion.frequency, distance
                        )?,
                        None => writeln!(
                            out,
                            "  {} (frequency: {})",
                            suggestion.word, suggestion.frequency
                        )?,
                    }
                }
            } else {
                for suggestion in &results.suggestions {
                    writeln!(out, "{}", suggestion.word)?;
                }
            }
            Ok(())
        }
    }
}

/// Write statistics in the selected format.
pub fn write_stats<W: Write>(out: &mut W, stats: &StatsResult, args: &AutosuggestArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(out, stats, args),
        OutputFormat::Human => {
            writeln!(out, "Words: {}", stats.words)?;
            writeln!(out, "Nodes: {}", stats.nodes)?;
            if let Some(load) = &stats.load {
                writeln!(out, "Lines read: {}", load.lines)?;
                writeln!(out, "Blank lines: {}", load.skipped)?;
            }
            Ok(())
        }
    }
}

/// Write the acknowledgement for an added word.
pub fn write_added<W: Write>(out: &mut W, added: &AddResult, args: &AutosuggestArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(out, added, args),
        OutputFormat::Human => {
            writeln!(
                out,
                "Word added: {} (frequency: {})",
                added.word, added.frequency
            )?;
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &AutosuggestArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
