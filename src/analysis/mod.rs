//! Text analysis pipeline.
//!
//! Raw text is lower-cased by a char filter, split into word runs by a
//! tokenizer, and passed through token filters that drop stopwords and
//! stem what remains.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::{Filter, StemFilter, Stemmer, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer};
