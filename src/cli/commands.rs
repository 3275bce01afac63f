//! Command implementations for the stemmer CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, StemmerError};
use crate::stemmer::StemmerHr;
use crate::stemmer::rule::RuleTable;

/// Execute a CLI command.
pub fn execute_command(args: StemmerArgs) -> Result<()> {
    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args, &args),
        Command::Text(text_args) => stem_text(text_args, &args),
        Command::Rules(rules_args) => show_rules(rules_args, &args),
    }
}

/// Stem the words given on the command line.
fn stem_words(args: &StemArgs, cli_args: &StemmerArgs) -> Result<()> {
    let stemmer = StemmerHr::with_config(cli_args.stemmer_config()?)?;

    let stems = args
        .words
        .iter()
        .map(|word| stemmer.stem_detailed(word))
        .collect();

    output_result(&StemResults { stems }, cli_args)
}

/// Stem a text file or stdin.
fn stem_text(args: &TextArgs, cli_args: &StemmerArgs) -> Result<()> {
    let stemmer = StemmerHr::with_config(cli_args.stemmer_config()?)?;
    let text = read_input(args.file.as_deref())?;

    let documents = if args.lines {
        let lines: Vec<&str> = text.lines().collect();
        info!("Stemming {} lines", lines.len());
        stemmer.stem_texts(&lines)
    } else {
        vec![stemmer.stem_text(&text)]
    };

    output_result(&TextResults { documents }, cli_args)
}

/// Report the rule table.
fn show_rules(args: &RulesArgs, cli_args: &StemmerArgs) -> Result<()> {
    let config = cli_args.stemmer_config()?;
    let table = RuleTable::from_path(config.rules_path())?;

    output_result(&RulesReport::from_table(&table, !args.skipped_only), cli_args)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            info!("Reading text from {}", path.display());
            fs::read_to_string(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => StemmerError::other(format!(
                    "input file not found: {}",
                    path.display()
                )),
                _ => StemmerError::Io(e),
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceKind;

    #[test]
    fn test_read_missing_input() {
        let err = read_input(Some(Path::new("/nonexistent/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("input file not found"));
    }

    #[test]
    fn test_missing_rule_file_fails() {
        let args = StemmerArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Json,
            pretty: false,
            config: None,
            data_dir: None,
            rules: Some("/nonexistent/rules.txt".into()),
            stopwords: None,
            explain: false,
            lowercase_stopwords: false,
            command: Command::Rules(RulesArgs {
                skipped_only: false,
            }),
        };

        let err = execute_command(args).unwrap_err();
        assert!(matches!(
            err,
            StemmerError::FileNotFound {
                kind: SourceKind::Rules,
                ..
            }
        ));
    }
}
