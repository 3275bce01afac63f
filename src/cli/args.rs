//! Command line argument parsing for the stemmer CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{StemmerConfig, StopwordCase};
use crate::error::Result;

/// stemmer-hr - rule-based stemming for Croatian text
#[derive(Parser, Debug, Clone)]
#[command(name = "stemmer-hr")]
#[command(about = "Rule-based stemmer for Croatian text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StemmerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding rules_simple.txt and stop.txt
    #[arg(long, value_name = "DIR", env = "STEMMER_HR_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Rule file (overrides the data directory)
    #[arg(long, value_name = "RULES_FILE", global = true)]
    pub rules: Option<PathBuf>,

    /// Stopword file (overrides the data directory)
    #[arg(long, value_name = "STOPWORDS_FILE", global = true)]
    pub stopwords: Option<PathBuf>,

    /// Log every rule decision
    #[arg(long, global = true)]
    pub explain: bool,

    /// Lower-case stopword entries when loading them
    #[arg(long, global = true)]
    pub lowercase_stopwords: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemmerArgs {
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

    /// Build the stemmer configuration: the config file (if any) first,
    /// then command line overrides on top.
    pub fn stemmer_config(&self) -> Result<StemmerConfig> {
        let mut config = match &self.config {
            Some(path) => StemmerConfig::from_json_file(path)?,
            None => StemmerConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir);
        }
        if let Some(rules) = &self.rules {
            config = config.with_rules_file(rules);
        }
        if let Some(stopwords) = &self.stopwords {
            config = config.with_stopwords_file(stopwords);
        }
        if self.explain {
            config = config.with_explain(true);
        }
        if self.lowercase_stopwords {
            config = config.with_stopword_case(StopwordCase::Lowercase);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem individual words
    Stem(StemArgs),

    /// Stem running text from a file or stdin
    Text(TextArgs),

    /// Show the loaded rule table and any skipped lines
    Rules(RulesArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for stemming text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Treat every line as a separate document
    #[arg(long)]
    pub lines: bool,
}

/// Arguments for inspecting the rule table
#[derive(Parser, Debug, Clone)]
pub struct RulesArgs {
    /// Only list skipped lines
    #[arg(long)]
    pub skipped_only: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stem_command() {
        let args = StemmerArgs::parse_from(["stemmer-hr", "-vv", "stem", "šumu", "čuda"]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Stem(stem_args) => assert_eq!(stem_args.words, vec!["šumu", "čuda"]),
            _ => panic!("expected stem command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = StemmerArgs::parse_from(["stemmer-hr", "-v", "-q", "rules"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_overrides_build_config() {
        let args = StemmerArgs::parse_from([
            "stemmer-hr",
            "text",
            "--rules",
            "/tmp/rules.txt",
            "--lowercase-stopwords",
            "--explain",
        ]);
        let config = args.stemmer_config().unwrap();

        assert_eq!(config.rules_path(), PathBuf::from("/tmp/rules.txt"));
        assert_eq!(config.stopword_case, StopwordCase::Lowercase);
        assert!(config.explain);
    }

    #[test]
    fn test_stem_requires_words() {
        assert!(StemmerArgs::try_parse_from(["stemmer-hr", "stem"]).is_err());
    }
}
