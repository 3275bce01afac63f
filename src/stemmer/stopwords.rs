//! Stopword set.
//!
//! The source format is one word per line with surrounding whitespace
//! stripped. There are no comments. Membership is exact string equality;
//! stopwords themselves are never stemmed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::debug;

use crate::config::StopwordCase;
use crate::error::{Result, SourceKind, StemmerError};

/// Stopword list shipped with the crate.
const BUNDLED_STOPWORDS: &str = include_str!("../../etc/stop.txt");

/// Unordered set of words excluded from stemming output.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: AHashSet<String>,
}

impl StopwordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an in-memory sequence of lines.
    pub fn from_lines<I, S>(lines: I, case: StopwordCase) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = StopwordSet::new();
        for line in lines {
            set.insert(line.as_ref(), case);
        }
        set
    }

    /// Build a set from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, case: StopwordCase) -> Result<Self> {
        let mut set = StopwordSet::new();
        for line in reader.lines() {
            set.insert(&line?, case);
        }
        Ok(set)
    }

    /// Load a set from a stopword file.
    pub fn from_path<P: AsRef<Path>>(path: P, case: StopwordCase) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| StemmerError::from_open(e, SourceKind::Stopwords, path))?;
        let set = Self::from_reader(BufReader::new(file), case)?;
        debug!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// The stopword list compiled into the crate.
    pub fn bundled(case: StopwordCase) -> Self {
        Self::from_lines(BUNDLED_STOPWORDS.lines(), case)
    }

    fn insert(&mut self, line: &str, case: StopwordCase) {
        let word = line.trim();
        if word.is_empty() {
            return;
        }
        let word = match case {
            StopwordCase::AsWritten => word.to_string(),
            StopwordCase::Lowercase => word.to_lowercase(),
        };
        self.words.insert(word);
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
