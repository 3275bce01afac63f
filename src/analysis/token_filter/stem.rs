//! Stemming token filter.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Filter that replaces each token's text with its stem.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter with the given stemmer.
    pub fn new(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let stemmed = tokens
            .map(|token| {
                let stem = self.stemmer.stem(&token.text);
                token.with_text(stem)
            })
            .collect::<Vec<_>>();

        Box::new(stemmed.into_iter())
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
