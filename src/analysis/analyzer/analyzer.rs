//! Core analyzer trait definition.
//!
//! An [`Analyzer`] turns raw text into a processed token stream:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use stemmer_hr::analysis::analyzer::Analyzer;
//! use stemmer_hr::analysis::analyzer::CroatianAnalyzer;
//!
//! let analyzer = CroatianAnalyzer::bundled();
//! let stems: Vec<String> = analyzer.analyze("Zašao neki momak").map(|t| t.text).collect();
//!
//! assert_eq!(stems, vec!["zaša", "nek", "momak"]);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis never fails: any input text yields a (possibly empty) stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
