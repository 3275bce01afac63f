//! Stop filter implementation.
//!
//! Removes tokens found in a [`StopwordSet`]. Removed tokens leave no
//! placeholder behind; the remaining tokens keep their original positions.
//!
//! # Examples
//!
//! ```
//! use stemmer_hr::analysis::token::Token;
//! use stemmer_hr::analysis::token_filter::Filter;
//! use stemmer_hr::analysis::token_filter::stop::StopFilter;
//! use stemmer_hr::config::StopwordCase;
//! use stemmer_hr::stemmer::stopwords::StopwordSet;
//!
//! let stopwords = StopwordSet::from_lines(["biti", "sam"], StopwordCase::AsWritten);
//! let filter = StopFilter::new(stopwords);
//! let tokens = vec![Token::new("biti", 0), Token::new("šuma", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "šuma");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::stemmer::stopwords::StopwordSet;
use crate::stemmer::trace::{NoopTracer, StemTracer, TraceEvent};

/// A filter that drops stopwords from the token stream.
#[derive(Clone)]
pub struct StopFilter {
    stopwords: Arc<StopwordSet>,
    tracer: Arc<dyn StemTracer>,
}

impl fmt::Debug for StopFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopFilter")
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl StopFilter {
    /// Create a stop filter over `stopwords`.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self::shared(Arc::new(stopwords))
    }

    /// Create a stop filter over a shared stopword set.
    pub fn shared(stopwords: Arc<StopwordSet>) -> Self {
        StopFilter {
            stopwords,
            tracer: Arc::new(NoopTracer),
        }
    }

    /// Report every skipped stopword to `tracer`.
    pub fn with_tracer(mut self, tracer: Arc<dyn StemTracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let tracing = self.tracer.enabled();
        let kept: Vec<Token> = tokens
            .filter(|token| {
                if self.is_stop_word(&token.text) {
                    if tracing {
                        self.tracer.record(TraceEvent::StopwordSkipped {
                            token: token.text.clone(),
                        });
                    }
                    false
                } else {
                    true
                }
            })
            .collect();

        Box::new(kept.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopwordCase;
    use crate::stemmer::trace::CollectingTracer;

    fn filter() -> StopFilter {
        StopFilter::new(StopwordSet::from_lines(
            ["biti", "sam", "će"],
            StopwordCase::AsWritten,
        ))
    }

    #[test]
    fn test_stop_filter() {
        let tokens = vec![
            Token::new("sam", 0),
            Token::new("bio", 1),
            Token::new("u", 2),
            Token::new("će", 3),
            Token::new("šumi", 4),
        ];

        let result: Vec<Token> = filter().filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "bio");
        assert_eq!(result[1].text, "u");
        assert_eq!(result[2].text, "šumi");
        assert_eq!(result[2].position, 4);
    }

    #[test]
    fn test_stop_filter_reports_skips() {
        let tracer = Arc::new(CollectingTracer::new());
        let filter = filter().with_tracer(tracer.clone());
        let tokens = vec![Token::new("biti", 0), Token::new("dobar", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 1);
        assert_eq!(
            tracer.events(),
            vec![TraceEvent::StopwordSkipped {
                token: "biti".to_string()
            }]
        );
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter().name(), "stop");
    }
}
