//! Token types for text analysis.
//!
//! A [`Token`] is a maximal run of word characters taken from the
//! normalized input text. Tokens flow through the analysis pipeline as a
//! [`TokenStream`].
//!
//! # Examples
//!
//! ```
//! use stemmer_hr::analysis::token::Token;
//!
//! let token = Token::with_offsets("šumu", 4, 21, 26);
//! assert_eq!(token.text, "šumu");
//! assert_eq!(token.position, 4);
//! assert_eq!(token.char_len(), 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Byte offset where this token starts in the normalized text
    pub start_offset: usize,

    /// Byte offset where this token ends in the normalized text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token without offsets.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens flowing through the pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
