//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, StemmerArgs};
use crate::error::Result;
use crate::stemmer::engine::StemOutcome;
use crate::stemmer::rule::{RuleTable, SkippedLine};

/// Result structure for the `stem` command.
#[derive(Debug, Serialize)]
pub struct StemResults {
    pub stems: Vec<StemOutcome>,
}

/// Result structure for the `text` command.
#[derive(Debug, Serialize)]
pub struct TextResults {
    /// One entry per document (a single entry unless `--lines` was given).
    pub documents: Vec<Vec<String>>,
}

/// One rule in a rule report.
#[derive(Debug, Serialize)]
pub struct RuleEntry {
    pub index: usize,
    pub stem_pattern: String,
    pub suffix_pattern: String,
}

/// Result structure for the `rules` command.
#[derive(Debug, Serialize)]
pub struct RulesReport {
    pub rule_count: usize,
    pub rules: Vec<RuleEntry>,
    pub skipped: Vec<SkippedLine>,
}

impl RulesReport {
    pub fn from_table(table: &RuleTable, include_rules: bool) -> Self {
        let rules = if include_rules {
            table
                .iter()
                .map(|rule| RuleEntry {
                    index: rule.index(),
                    stem_pattern: rule.stem_pattern().to_string(),
                    suffix_pattern: rule.suffix_pattern().to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        RulesReport {
            rule_count: table.len(),
            rules,
            skipped: table.skipped().to_vec(),
        }
    }
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()>;
}

impl HumanOutput for StemResults {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        for outcome in &self.stems {
            if verbosity > 1 {
                let rule = match outcome.rule {
                    Some(rule) => format!("rule #{rule}"),
                    None => "no rule".to_string(),
                };
                writeln!(out, "{} -> {} [{rule}]", outcome.input, outcome.stem)?;
            } else {
                writeln!(out, "{} -> {}", outcome.input, outcome.stem)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for TextResults {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> io::Result<()> {
        for stems in &self.documents {
            writeln!(out, "{}", stems.join(" "))?;
        }
        Ok(())
    }
}

impl HumanOutput for RulesReport {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        if verbosity > 0 {
            writeln!(
                out,
                "{} rules loaded, {} lines skipped",
                self.rule_count,
                self.skipped.len()
            )?;
        }
        for rule in &self.rules {
            writeln!(out, "#{:<4} {} {}", rule.index, rule.stem_pattern, rule.suffix_pattern)?;
        }
        for skipped in &self.skipped {
            writeln!(
                out,
                "line {}: {}: {}",
                skipped.line_number, skipped.reason, skipped.line
            )?;
        }
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(result: &T, args: &StemmerArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, args.verbosity(), &mut out)
}

/// Write a result to `out`.
pub fn write_result<T>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    verbosity: u8,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match format {
        OutputFormat::Human => result.write_human(out, verbosity)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
