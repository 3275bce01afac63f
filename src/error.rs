//! Error types for the Croatian stemmer.
//!
//! Only construction can fail: loading the rule table or the stopword list,
//! or reading a configuration file. Once a [`StemmerHr`](crate::StemmerHr)
//! exists, stemming is total and never returns an error.
//!
//! # Examples
//!
//! ```
//! use stemmer_hr::error::{Result, StemmerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemmerError::config("data directory is not set"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which external source a file error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Rules,
    Stopwords,
    Config,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Rules => write!(f, "rule"),
            SourceKind::Stopwords => write!(f, "stopword"),
            SourceKind::Config => write!(f, "config"),
        }
    }
}

/// The main error type for stemmer operations.
#[derive(Error, Debug)]
pub enum StemmerError {
    /// I/O errors while reading a source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A rule, stopword or config file does not exist
    #[error("{kind} file not found: {}", .path.display())]
    FileNotFound { kind: SourceKind, path: PathBuf },

    /// A single rule could not be compiled
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with StemmerError.
pub type Result<T> = std::result::Result<T, StemmerError>;

impl StemmerError {
    /// Create a new file-not-found error.
    pub fn file_not_found<P: Into<PathBuf>>(kind: SourceKind, path: P) -> Self {
        StemmerError::FileNotFound {
            kind,
            path: path.into(),
        }
    }

    /// Create a new invalid rule error.
    pub fn invalid_rule<S: Into<String>>(msg: S) -> Self {
        StemmerError::InvalidRule(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemmerError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemmerError::Other(msg.into())
    }

    /// Map an I/O error raised while opening `path`, turning `NotFound` into
    /// [`StemmerError::FileNotFound`].
    pub fn from_open(err: io::Error, kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::file_not_found(kind, path)
        } else {
            StemmerError::Io(err)
        }
    }

    /// Whether this error reports a missing source file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StemmerError::FileNotFound { .. })
    }
}
