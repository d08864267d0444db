//! Spans: tokens prepared for clustering.

use serde::{Deserialize, Serialize};

use crate::analysis::stop::StopWords;
use crate::analysis::token::{WordToken, is_line_end};
use crate::phonetic::resolver::PhonemeResolver;
use crate::phonetic::tail::RhymeTail;

/// A word that takes part in clustering, with its rhyme tail resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    /// Index of the originating token in the token sequence
    pub index: usize,

    /// Zero-based line index
    pub line: usize,

    /// The cleaned word
    pub word: String,

    /// Nucleus and coda
    #[serde(flatten)]
    pub tail: RhymeTail,

    /// Coarse prefilter key, see [`RhymeTail::bucket_key`]
    pub bucket_key: String,

    /// Whether the word ends its line
    pub is_line_end: bool,
}

impl Span {
    /// Create a span for a token whose tail is already known.
    pub fn new(index: usize, token: &WordToken, tail: RhymeTail, is_line_end: bool) -> Self {
        Span {
            index,
            line: token.line,
            word: token.word.clone(),
            bucket_key: tail.bucket_key(),
            tail,
            is_line_end,
        }
    }

    /// Stress-stripped nucleus vowel, if any.
    pub fn nucleus(&self) -> Option<&str> {
        self.tail.nucleus.as_deref()
    }

    /// Stress-stripped coda.
    pub fn coda(&self) -> &[String] {
        &self.tail.coda
    }
}

/// Build one span per analyzable token.
///
/// Line-finality is decided on the full token sequence, stopwords included;
/// stopwords are dropped afterwards when `stop_words` is given. Tokens that
/// resolve to no phonemes are skipped.
pub fn build_spans(
    tokens: &[WordToken],
    resolver: &PhonemeResolver,
    stop_words: Option<&StopWords>,
) -> Vec<Span> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| !stop_words.is_some_and(|s| s.is_stopped(token)))
        .filter_map(|(index, token)| {
            let phones = resolver.word_to_phones(&token.word);
            if phones.is_empty() {
                return None;
            }
            let tail = RhymeTail::from_phones(&phones);
            Some(Span::new(index, token, tail, is_line_end(tokens, index)))
        })
        .collect()
}
