//! Pipeline analyzer that combines char filters, a tokenizer and token filters.
//!
//! Processing order:
//! 1. Char filters normalize the raw text
//! 2. The tokenizer splits the normalized text into tokens
//! 3. Token filters are applied in the order they were added
//!
//! Token offsets refer to the normalized text.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use stemmer_hr::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use stemmer_hr::analysis::char_filter::LowercaseCharFilter;
//! use stemmer_hr::analysis::token_filter::StopFilter;
//! use stemmer_hr::analysis::tokenizer::RegexTokenizer;
//! use stemmer_hr::config::StopwordCase;
//! use stemmer_hr::stemmer::stopwords::StopwordSet;
//!
//! let stopwords = StopwordSet::from_lines(["je"], StopwordCase::AsWritten);
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::new(stopwords)))
//!     .with_name("no_je");
//!
//! let tokens: Vec<_> = analyzer.analyze("Ono JE šuma").collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "ono");
//! assert_eq!(tokens[1].text, "šuma");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut normalized = Cow::Borrowed(text);
        for char_filter in &self.char_filters {
            normalized = Cow::Owned(char_filter.filter(&normalized));
        }

        let mut tokens = self.tokenizer.tokenize(&normalized);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
