//! Command line argument parsing for the Autosuggest CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Autosuggest - frequency-ranked prefix and fuzzy word suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "autosuggest")]
#[command(about = "Frequency-ranked prefix and fuzzy word suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutosuggestArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Service configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "AUTOSUGGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutosuggestArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Complete a prefix
    Suggest(SuggestArgs),

    /// Find words within an edit distance of a query
    Fuzzy(FuzzyArgs),

    /// Show word list statistics
    Stats(StatsArgs),

    /// Read add/suggest/fuzzy commands from stdin
    Shell(ShellArgs),
}

/// Arguments for prefix suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word list file ("word [frequency]" per line)
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for fuzzy suggestion
#[derive(Parser, Debug, Clone)]
pub struct FuzzyArgs {
    /// Word list file ("word [frequency]" per line)
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: PathBuf,

    /// Possibly misspelled query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum edit distance (defaults to the configured value)
    #[arg(short = 'd', long)]
    pub max_distance: Option<usize>,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list file ("word [frequency]" per line)
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: PathBuf,
}

/// Arguments for the interactive shell
#[derive(Parser, Debug, Clone)]
pub struct ShellArgs {
    /// Word list to preload
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: Option<PathBuf>,
}

/// Output formats supported by CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_command() {
        let args = AutosuggestArgs::try_parse_from([
            "autosuggest",
            "suggest",
            "words.txt",
            "wea",
            "--limit",
            "5",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.words_file, PathBuf::from("words.txt"));
            assert_eq!(suggest_args.prefix, "wea");
            assert_eq!(suggest_args.limit, Some(5));
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_fuzzy_command() {
        let args = AutosuggestArgs::try_parse_from([
            "autosuggest",
            "fuzzy",
            "words.txt",
            "wether",
            "-d",
            "2",
        ])
        .unwrap();

        if let Command::Fuzzy(fuzzy_args) = args.command {
            assert_eq!(fuzzy_args.query, "wether");
            assert_eq!(fuzzy_args.max_distance, Some(2));
            assert_eq!(fuzzy_args.limit, None);
        } else {
            panic!("Expected Fuzzy command");
        }

        let args =
            AutosuggestArgs::try_parse_from(["autosuggest", "fuzzy", "words.txt", "wether"])
                .unwrap();
        if let Command::Fuzzy(fuzzy_args) = args.command {
            assert_eq!(fuzzy_args.max_distance, None);
        }
    }

    #[test]
    fn test_shell_without_words_file() {
        let args = AutosuggestArgs::try_parse_from(["autosuggest", "shell"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Shell(ShellArgs { words_file: None })
        ));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = AutosuggestArgs::try_parse_from(["autosuggest", "stats", "w.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            AutosuggestArgs::try_parse_from(["autosuggest", "-vv", "stats", "w.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            AutosuggestArgs::try_parse_from(["autosuggest", "--quiet", "-v", "stats", "w.txt"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = AutosuggestArgs::try_parse_from([
            "autosuggest",
            "--format",
            "json",
            "stats",
            "w.txt",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
