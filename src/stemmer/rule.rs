//! Suffix-stripping rules and the ordered rule table.
//!
//! A rule source is a sequence of lines. Lines starting with `#` are
//! comments; every other non-blank line holds a stem fragment and a suffix
//! fragment separated by exactly one space:
//!
//! ```text
//! # OSNOVA NASTAVAK
//! .+(s|š)k ijima|ijega|oga|ome|omu|a|e|i|o|u
//! .+ov ima|om|e|a|u|i
//! ```
//!
//! Each line compiles to the anchored pattern `^(STEM)(SUFFIX)$`. The table
//! keeps rules in source order; a rule's priority is its index.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, SourceKind, StemmerError};

/// Marker that starts a comment line in a rule source.
pub const COMMENT_MARKER: char = '#';

/// Rule table shipped with the crate.
const BUNDLED_RULES: &str = include_str!("../../etc/rules_simple.txt");

/// A compiled suffix-stripping rule.
#[derive(Debug, Clone)]
pub struct Rule {
    index: usize,
    stem_pattern: String,
    suffix_pattern: String,
    matcher: Regex,
}

impl Rule {
    /// Compile a rule from its two fragments.
    ///
    /// `index` is the rule's position in its table.
    pub fn new(index: usize, stem_pattern: &str, suffix_pattern: &str) -> Result<Self> {
        let source = format!("^({stem_pattern})({suffix_pattern})$");
        let matcher = Regex::new(&source)
            .map_err(|e| StemmerError::invalid_rule(format!("{source}: {e}")))?;

        Ok(Rule {
            index,
            stem_pattern: stem_pattern.to_string(),
            suffix_pattern: suffix_pattern.to_string(),
            matcher,
        })
    }

    /// Position of this rule in its table. Lower index wins.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn stem_pattern(&self) -> &str {
        &self.stem_pattern
    }

    pub fn suffix_pattern(&self) -> &str {
        &self.suffix_pattern
    }

    /// The full anchored pattern this rule matches with.
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// Match the whole token and return the captured stem portion.
    pub fn split<'t>(&self, token: &'t str) -> Option<&'t str> {
        self.matcher
            .captures(token)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.index, self.pattern())
    }
}

/// Why a rule source line was left out of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The line did not split into exactly two space-separated fields.
    FieldCount { found: usize },
    /// The fragments did not compile into a regular expression.
    InvalidPattern { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount { found } => {
                write!(f, "expected 2 space-separated fields, found {found}")
            }
            SkipReason::InvalidPattern { message } => write!(f, "invalid pattern: {message}"),
        }
    }
}

/// A malformed line from a rule source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// Ordered collection of rules, built once from a rule source.
///
/// Malformed lines are dropped without shifting the relative order of the
/// surviving rules, and are kept in [`skipped`](Self::skipped) for reporting.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
    skipped: Vec<SkippedLine>,
}

impl RuleTable {
    /// Build a table from an in-memory sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = RuleTable::default();
        for (i, line) in lines.into_iter().enumerate() {
            table.push_line(i + 1, line.as_ref());
        }
        table.log_summary();
        table
    }

    /// Build a table from rule source text.
    pub fn parse(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    /// Build a table from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = RuleTable::default();
        for (i, line) in reader.lines().enumerate() {
            table.push_line(i + 1, &line?);
        }
        table.log_summary();
        Ok(table)
    }

    /// Load a table from a rule file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| StemmerError::from_open(e, SourceKind::Rules, path))?;
        debug!("Loading rules from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// The rule table compiled into the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_RULES)
    }

    fn push_line(&mut self, line_number: usize, raw: &str) {
        if raw.starts_with(COMMENT_MARKER) {
            return;
        }
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let fields: Vec<&str> = line.split(' ').collect();
        let rule = match fields.as_slice() {
            [stem, suffix] => Rule::new(self.rules.len(), stem, suffix).map_err(|e| {
                SkipReason::InvalidPattern {
                    message: e.to_string(),
                }
            }),
            _ => Err(SkipReason::FieldCount {
                found: fields.len(),
            }),
        };

        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(reason) => {
                warn!("Skipping rule on line {line_number} ({reason}): {line}");
                self.skipped.push(SkippedLine {
                    line_number,
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    fn log_summary(&self) {
        debug!(
            "Rule table ready: {} rules, {} lines skipped",
            self.rules.len(),
            self.skipped.len()
        );
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lines that were rejected while loading.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
