//! Command implementations for the Autosuggest CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::autocomplete::Autocompleter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AutocompleteConfig;
use crate::error::{AutosuggestError, Result};
use crate::loader::{LoadReport, load_words_from_file};
use crate::suggestion::Suggestion;

/// Execute a CLI command.
pub fn execute_command(args: AutosuggestArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Suggest(suggest_args) => run_suggest(suggest_args, &args, &mut out),
        Command::Fuzzy(fuzzy_args) => run_fuzzy(fuzzy_args, &args, &mut out),
        Command::Stats(stats_args) => run_stats(stats_args, &args, &mut out),
        Command::Shell(shell_args) => {
            let (service, _) = build_service(shell_args.words_file.as_deref(), None, &args)?;
            let stdin = io::stdin();
            run_shell(&service, stdin.lock(), &mut out, &args)
        }
    }
}

/// Complete a prefix against a word list.
fn run_suggest<W: Write>(args: &SuggestArgs, cli_args: &AutosuggestArgs, out: &mut W) -> Result<()> {
    let (service, _) = build_service(Some(args.words_file.as_path()), args.limit, cli_args)?;

    let start_time = Instant::now();
    let suggestions = service.suggest_ranked(&args.prefix);
    let results = query_results(&args.prefix, None, suggestions, start_time);

    write_suggestions(out, &results, cli_args)
}

/// Fuzzy-match a query against a word list.
fn run_fuzzy<W: Write>(args: &FuzzyArgs, cli_args: &AutosuggestArgs, out: &mut W) -> Result<()> {
    let (service, _) = build_service(Some(args.words_file.as_path()), args.limit, cli_args)?;
    let max_distance = args
        .max_distance
        .unwrap_or(service.config().default_max_distance);

    let start_time = Instant::now();
    let suggestions = service.fuzzy_suggest_ranked(&args.query, Some(max_distance));
    let results = query_results(&args.query, Some(max_distance), suggestions, start_time);

    write_suggestions(out, &results, cli_args)
}

/// Show word list statistics.
fn run_stats<W: Write>(args: &StatsArgs, cli_args: &AutosuggestArgs, out: &mut W) -> Result<()> {
    let (service, load) = build_service(Some(args.words_file.as_path()), None, cli_args)?;
    let stats = service.stats();

    write_stats(
        out,
        &StatsResult {
            words: stats.words,
            nodes: stats.nodes,
            load,
        },
        cli_args,
    )
}

/// Serve line-oriented commands until `quit` or end of input.
///
/// ```text
/// add <word> [frequency]
/// suggest [prefix]
/// fuzzy <query> [max-distance]
/// stats
/// quit
/// ```
///
/// A failing command prints an error and the shell keeps reading.
pub fn run_shell<R: BufRead, W: Write>(
    service: &Autocompleter,
    input: R,
    out: &mut W,
    args: &AutosuggestArgs,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, operands)) = parts.split_first() else {
            continue;
        };

        debug!("shell command '{command}' with {} operands", operands.len());
        let outcome = match command {
            "quit" | "exit" => break,
            "add" => shell_add(service, operands, out, args),
            "suggest" => {
                let prefix = operands.first().copied().unwrap_or("");
                let start_time = Instant::now();
                let suggestions = service.suggest_ranked(prefix);
                write_suggestions(out, &query_results(prefix, None, suggestions, start_time), args)
            }
            "fuzzy" => shell_fuzzy(service, operands, out, args),
            "stats" => {
                let stats = service.stats();
                write_stats(
                    out,
                    &StatsResult {
                        words: stats.words,
                        nodes: stats.nodes,
                        load: None,
                    },
                    args,
                )
            }
            "help" => {
                writeln!(
                    out,
                    "commands: add <word> [frequency] | suggest [prefix] | fuzzy <query> [max-distance] | stats | quit"
                )?;
                Ok(())
            }
            other => Err(AutosuggestError::invalid_argument(format!(
                "unknown command '{other}'"
            ))),
        };

        match outcome {
            Ok(()) => {}
            Err(AutosuggestError::Io(e)) => return Err(AutosuggestError::Io(e)),
            Err(e) => {
                warn!("shell command '{command}' failed: {e}");
                writeln!(out, "Error: {e}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

fn shell_add<W: Write>(
    service: &Autocompleter,
    operands: &[&str],
    out: &mut W,
    args: &AutosuggestArgs,
) -> Result<()> {
    let (word, frequency) = match operands {
        [word] => (*word, i64::from(service.config().default_frequency)),
        [word, frequency] => {
            let frequency = frequency.parse::<i64>().map_err(|e| {
                AutosuggestError::invalid_argument(format!("invalid frequency '{frequency}': {e}"))
            })?;
            (*word, frequency)
        }
        _ => {
            return Err(AutosuggestError::invalid_argument(
                "usage: add <word> [frequency]",
            ));
        }
    };

    service.add_word(word, frequency)?;
    write_added(
        out,
        &AddResult {
            word: word.to_string(),
            frequency,
        },
        args,
    )
}

fn shell_fuzzy<W: Write>(
    service: &Autocompleter,
    operands: &[&str],
    out: &mut W,
    args: &AutosuggestArgs,
) -> Result<()> {
    let (query, max_distance) = match operands {
        [query] => (*query, service.config().default_max_distance),
        [query, max_distance] => {
            let max_distance = max_distance.parse::<usize>().map_err(|e| {
                AutosuggestError::invalid_argument(format!(
                    "invalid max distance '{max_distance}': {e}"
                ))
            })?;
            (*query, max_distance)
        }
        _ => {
            return Err(AutosuggestError::invalid_argument(
                "usage: fuzzy <query> [max-distance]",
            ));
        }
    };

    let start_time = Instant::now();
    let suggestions = service.fuzzy_suggest_ranked(query, Some(max_distance));
    write_suggestions(
        out,
        &query_results(query, Some(max_distance), suggestions, start_time),
        args,
    )
}

/// Build a service from the CLI configuration and an optional word list.
fn build_service(
    words_file: Option<&Path>,
    limit: Option<usize>,
    args: &AutosuggestArgs,
) -> Result<(Autocompleter, Option<LoadReport>)> {
    let mut config = match &args.config {
        Some(path) => AutocompleteConfig::from_file(path)?,
        None => AutocompleteConfig::default(),
    };
    if limit.is_some() {
        config.max_results = limit;
    }

    let service = Autocompleter::with_config(config);
    let report = match words_file {
        Some(path) => Some(load_words_from_file(path, &service)?),
        None => None,
    };

    Ok((service, report))
}

fn query_results(
    query: &str,
    max_distance: Option<usize>,
    suggestions: Vec<Suggestion>,
    start_time: Instant,
) -> SuggestionResults {
    SuggestionResults {
        query: query.to_string(),
        max_distance,
        suggestions,
        duration_us: saturating_micros(start_time.elapsed()),
    }
}

/// Whole microseconds in `elapsed`, capped at `u64::MAX`.
fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> AutosuggestArgs {
        AutosuggestArgs::try_parse_from(argv).unwrap()
    }

    fn shell(service: &Autocompleter, script: &str) -> String {
        let args = parse(&["autosuggest", "shell"]);
        let mut out = Vec::new();
        run_shell(service, Cursor::new(script), &mut out, &args).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn words_file() -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "weather 5").unwrap();
        writeln!(temp_file, "wealth 3").unwrap();
        writeln!(temp_file, "weary").unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_shell_add_then_suggest() {
        let service = Autocompleter::new();
        let output = shell(
            &service,
            "add weather 5\nadd wealth 3\nadd weary\nsuggest wea\nfuzzy wether 1\n",
        );

        assert_eq!(
            output,
            "Word added: weather (frequency: 5)\n\
             Word added: wealth (frequency: 3)\n\
             Word added: weary (frequency: 1)\n\
             weather\nwealth\nweary\n\
             weather\n"
        );
    }

    #[test]
    fn test_shell_reports_errors_and_continues() {
        let service = Autocompleter::new();
        let output = shell(&service, "add word -2\nfrobnicate\nadd word 2\n");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Error: Invalid argument"));
        assert!(lines[1].contains("unknown command 'frobnicate'"));
        assert_eq!(lines[2], "Word added: word (frequency: 2)");
    }

    #[test]
    fn test_shell_stops_at_quit() {
        let service = Autocompleter::new();
        shell(&service, "add one\nquit\nadd two\n");

        assert!(service.trie().contains("one"));
        assert!(!service.trie().contains("two"));
    }

    #[test]
    fn test_suggest_command_with_limit() {
        let file = words_file();
        let path = file.path().to_str().unwrap();
        let args = parse(&["autosuggest", "suggest", path, "wea", "-l", "2"]);

        let mut out = Vec::new();
        if let Command::Suggest(suggest_args) = &args.command {
            run_suggest(suggest_args, &args, &mut out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "weather\nwealth\n");
    }

    #[test]
    fn test_fuzzy_command_json() {
        let file = words_file();
        let path = file.path().to_str().unwrap();
        let args = parse(&["autosuggest", "-f", "json", "fuzzy", path, "wether"]);

        let mut out = Vec::new();
        if let Command::Fuzzy(fuzzy_args) = &args.command {
            run_fuzzy(fuzzy_args, &args, &mut out).unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["max_distance"], 1);
        assert_eq!(value["suggestions"][0]["word"], "weather");
        assert_eq!(value["suggestions"][0]["distance"], 1);
        assert_eq!(value["suggestions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_stats_command() {
        let file = words_file();
        let path = file.path().to_str().unwrap();
        let args = parse(&["autosuggest", "stats", path]);

        let mut out = Vec::new();
        if let Command::Stats(stats_args) = &args.command {
            run_stats(stats_args, &args, &mut out).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Words: 3"));
        assert!(text.contains("Lines read: 3"));
    }

    #[test]
    fn test_saturating_micros() {
        assert_eq!(saturating_micros(Duration::from_micros(1_500)), 1_500);
        assert_eq!(saturating_micros(Duration::from_nanos(999)), 0);
        assert_eq!(saturating_micros(Duration::MAX), u64::MAX);
    }
}
