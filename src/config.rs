//! Stemmer configuration.
//!
//! [`StemmerConfig`] names the rule and stopword sources and the diagnostic
//! switches. It is consumed once when a [`StemmerHr`](crate::StemmerHr) is
//! built; the loaded tables are immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use stemmer_hr::config::{StemmerConfig, StopwordCase};
//!
//! let config = StemmerConfig::default()
//!     .with_data_dir("/usr/share/stemmer-hr")
//!     .with_stopword_case(StopwordCase::Lowercase)
//!     .with_explain(true);
//!
//! assert_eq!(
//!     config.rules_path(),
//!     std::path::Path::new("/usr/share/stemmer-hr/rules_simple.txt")
//! );
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SourceKind, StemmerError};

/// Directory searched for the data files when no override is given.
pub const DEFAULT_DATA_DIR: &str = "etc";

/// File name of the rule table inside the data directory.
pub const RULES_FILE_NAME: &str = "rules_simple.txt";

/// File name of the stopword list inside the data directory.
pub const STOPWORDS_FILE_NAME: &str = "stop.txt";

/// How stopword entries are compared against tokens.
///
/// Tokens are always lower-cased by the pipeline. A stopword file with
/// capitalised entries will therefore never match under `AsWritten`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordCase {
    /// Compare against the entries exactly as they appear in the file.
    #[default]
    AsWritten,
    /// Lower-case every entry at load time.
    Lowercase,
}

/// Configuration for building a stemmer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Directory holding `rules_simple.txt` and `stop.txt`.
    pub data_dir: PathBuf,

    /// Explicit rule file, overriding `data_dir`.
    pub rules_file: Option<PathBuf>,

    /// Explicit stopword file, overriding `data_dir`.
    pub stopwords_file: Option<PathBuf>,

    /// Log every rule decision through a [`LogTracer`](crate::stemmer::trace::LogTracer).
    pub explain: bool,

    /// Stopword comparison policy.
    pub stopword_case: StopwordCase,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        StemmerConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            rules_file: None,
            stopwords_file: None,
            explain: false,
            stopword_case: StopwordCase::default(),
        }
    }
}

impl StemmerConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| StemmerError::from_open(e, SourceKind::Config, path))?;
        let config: StemmerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_rules_file<P: Into<PathBuf>>(mut self, rules_file: P) -> Self {
        self.rules_file = Some(rules_file.into());
        self
    }

    pub fn with_stopwords_file<P: Into<PathBuf>>(mut self, stopwords_file: P) -> Self {
        self.stopwords_file = Some(stopwords_file.into());
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn with_stopword_case(mut self, stopword_case: StopwordCase) -> Self {
        self.stopword_case = stopword_case;
        self
    }

    /// Resolved path of the rule source.
    pub fn rules_path(&self) -> PathBuf {
        self.rules_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(RULES_FILE_NAME))
    }

    /// Resolved path of the stopword source.
    pub fn stopwords_path(&self) -> PathBuf {
        self.stopwords_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(STOPWORDS_FILE_NAME))
    }

    /// Check that the configuration names usable paths.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty()
            && (self.rules_file.is_none() || self.stopwords_file.is_none())
        {
            return Err(StemmerError::config(
                "data_dir is empty and no explicit rule/stopword files are set",
            ));
        }
        Ok(())
    }
}
