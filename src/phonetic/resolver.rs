//! Word → phoneme resolution.
//!
//! Resolution order for a cleaned word:
//!
//! 1. the override table of irregular spellings,
//! 2. the rule-based converter in [`heuristic`](crate::phonetic::heuristic).
//!
//! Results are memoized per cleaned word in a [`PhonemeCache`] owned by the
//! resolver, so independent resolvers never share state.
//!
//! # Examples
//!
//! ```
//! use rhymer::phonetic::resolver::PhonemeResolver;
//!
//! let resolver = PhonemeResolver::new();
//! assert_eq!(resolver.word_to_phones("Ja!"), vec!["Y", "AA1"]);
//! assert_eq!(resolver.word_to_phones("cat"), vec!["K", "AE1", "T"]);
//! assert!(resolver.word_to_phones("?!").is_empty());
//! ```

use log::trace;

use crate::analysis::tokenizer::clean_word;
use crate::phonetic::cache::PhonemeCache;
use crate::phonetic::heuristic::heuristic_phones;

/// Irregular spellings with known pronunciations. Extend freely.
const OVERRIDES: &[(&str, &[&str])] = &[
    ("lekker", &["L", "EH1", "K", "ER0"]),
    ("bru", &["B", "R", "UW1"]),
    ("boet", &["B", "UH1", "T"]),
    ("ja", &["Y", "AA1"]),
    ("ain't", &["EY1", "N", "T"]),
];

/// Look up a cleaned word in the override table.
pub fn lookup_override(word: &str) -> Option<Vec<String>> {
    OVERRIDES
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, phones)| phones.iter().map(|p| p.to_string()).collect())
}

/// Resolves words to phoneme sequences with memoization.
#[derive(Debug, Default)]
pub struct PhonemeResolver {
    cache: PhonemeCache,
}

impl PhonemeResolver {
    /// Create a resolver with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a raw word to its phoneme sequence.
    ///
    /// Returns an empty sequence only when the word cleans to nothing; the
    /// caller should skip such words. Any other word yields at least one
    /// phoneme.
    pub fn word_to_phones(&self, raw: &str) -> Vec<String> {
        let key = clean_word(raw);
        if key.is_empty() {
            return Vec::new();
        }

        self.cache.get_or_insert_with(&key, || {
            let phones = lookup_override(&key).unwrap_or_else(|| heuristic_phones(&key));
            trace!("resolved {key:?} -> {phones:?}");
            phones
        })
    }

    /// Access the underlying cache.
    pub fn cache(&self) -> &PhonemeCache {
        &self.cache
    }
}
