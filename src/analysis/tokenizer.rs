//! Line-aware tokenizer.
//!
//! The tokenizer splits text into lines on `'\n'` and extracts maximal runs
//! of letters and apostrophes from each line. Runs of other non-space
//! characters are extracted as well, only to keep each word's `position`
//! aligned with what a reader sees; they never become tokens.
//!
//! # Examples
//!
//! ```
//! use rhymer::analysis::tokenizer::LineTokenizer;
//!
//! let tokenizer = LineTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello, world!\nGood night");
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[1].word, "world");
//! assert_eq!(tokens[1].position, 2);
//! assert_eq!(tokens[3].line, 1);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::WordToken;

/// Word runs and punctuation runs, in scan order.
static RUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z']+|[^A-Za-z'\s]+").expect("run pattern should be valid")
});

/// Normalize a raw word for analysis.
///
/// Lowercases, drops every character that is not an ASCII letter, apostrophe
/// or hyphen, then trims apostrophes from both ends. May return an empty
/// string.
///
/// # Examples
///
/// ```
/// use rhymer::analysis::tokenizer::clean_word;
///
/// assert_eq!(clean_word("'Tis"), "tis");
/// assert_eq!(clean_word("well-known!"), "well-known");
/// assert_eq!(clean_word("..."), "");
/// ```
pub fn clean_word(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '\'' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    kept.trim_matches('\'').to_string()
}

/// Number of lines the tokenizer sees in `text`.
///
/// Blank or whitespace-only text has no lines.
pub fn line_count(text: &str) -> usize {
    if text.trim().is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

/// Splits text into line-tagged word tokens.
#[derive(Clone, Debug, Default)]
pub struct LineTokenizer;

impl LineTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        LineTokenizer
    }

    /// Tokenize `text` into cleaned words tagged with line and position.
    pub fn tokenize(&self, text: &str) -> Vec<WordToken> {
        let mut tokens = Vec::new();

        for (line, content) in text.split('\n').enumerate() {
            for (position, run) in RUN_PATTERN.find_iter(content).enumerate() {
                let run = run.as_str();
                if !is_word_run(run) {
                    continue;
                }
                let word = clean_word(run);
                if !word.is_empty() {
                    tokens.push(WordToken::new(word, line, position));
                }
            }
        }

        tokens
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "line"
    }
}

fn is_word_run(run: &str) -> bool {
    run.chars().all(|c| c.is_ascii_alphabetic() || c == '\'')
}
