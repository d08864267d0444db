//! Word tokens produced by the line tokenizer.
//!
//! A [`WordToken`] is the unit that flows from the tokenizer into phoneme
//! resolution and clustering. Tokens are immutable once created.
//!
//! # Examples
//!
//! ```
//! use rhymer::analysis::token::WordToken;
//!
//! let token = WordToken::new("night", 2, 4);
//! assert_eq!(token.word, "night");
//! assert_eq!(token.line, 2);
//! assert_eq!(token.position, 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cleaned, line-tagged word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordToken {
    /// The cleaned lowercase word
    pub word: String,

    /// Zero-based line index in the input text
    pub line: usize,

    /// Zero-based index of the run within its line.
    ///
    /// Punctuation runs are counted too, so positions are not necessarily
    /// contiguous across the surviving words of a line.
    pub position: usize,
}

impl WordToken {
    /// Create a new token.
    pub fn new<S: Into<String>>(word: S, line: usize, position: usize) -> Self {
        WordToken {
            word: word.into(),
            line,
            position,
        }
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.word, self.line, self.position)
    }
}

/// Whether the token at `index` is the last word of its line.
///
/// True when the next token in scan order sits on another line, or when there
/// is no next token.
pub fn is_line_end(tokens: &[WordToken], index: usize) -> bool {
    match (tokens.get(index), tokens.get(index + 1)) {
        (Some(current), Some(next)) => next.line != current.line,
        _ => true,
    }
}
