//! # stemmer-hr
//!
//! A rule-based stemmer for Croatian, for use as a preprocessing step in
//! search indexing and text mining.
//!
//! ## Features
//!
//! - Ordered suffix-stripping rules loaded from a plain text table
//! - Vowel check with support for syllabic "r"
//! - Stopword removal
//! - Text analysis pipeline built from char filters, a tokenizer and token filters
//! - Optional tracing of every rule decision
//!
//! ```
//! use stemmer_hr::StemmerHr;
//!
//! let stemmer = StemmerHr::bundled();
//! assert_eq!(stemmer.stem("šumu"), "šum");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod stemmer;

pub use config::{StemmerConfig, StopwordCase};
pub use error::{Result, StemmerError};
pub use stemmer::StemmerHr;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
