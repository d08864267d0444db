//! Stopword handling.
//!
//! Function words rarely carry a rhyme and would otherwise flood the
//! clusters, so analysis can skip them. The default English list is a fixed
//! closed set.
//!
//! # Examples
//!
//! ```
//! use rhymer::analysis::stop::StopWords;
//!
//! let stop_words = StopWords::new();
//! assert!(stop_words.is_stop_word("the"));
//! assert!(!stop_words.is_stop_word("moon"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::WordToken;

/// Default English stop words.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "and", "a", "an", "of", "to", "in", "is", "it", "that", "for", "on", "with", "as",
    "at", "by", "be", "or", "but", "if", "so", "then", "than", "this", "these", "those", "from",
    "are", "was", "were", "will", "would", "could", "should", "i", "you", "he", "she", "we",
    "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A set of words excluded from analysis.
#[derive(Clone, Debug)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// Create a stopword set with the default English words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a stopword set from custom words.
    pub fn with_stop_words(words: HashSet<String>) -> Self {
        StopWords {
            words: Arc::new(words),
        }
    }

    /// Create a stopword set from a list of words.
    ///
    /// ```
    /// use rhymer::analysis::stop::StopWords;
    ///
    /// let stop_words = StopWords::from_words(vec!["la", "da"]);
    /// assert_eq!(stop_words.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Check if a cleaned word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check if a token's word is a stop word.
    pub fn is_stopped(&self, token: &WordToken) -> bool {
        self.is_stop_word(&token.word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}
