//! Memoization of word → phoneme lookups.

use ahash::AHashMap;
use parking_lot::RwLock;

/// Thread-safe, append-only cache of phoneme sequences keyed by cleaned word.
///
/// Readers always receive their own copy, so mutating a returned sequence
/// never touches the cached entry.
#[derive(Debug, Default)]
pub struct PhonemeCache {
    entries: RwLock<AHashMap<String, Vec<String>>>,
}

impl PhonemeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the cached sequence for `word`.
    pub fn get(&self, word: &str) -> Option<Vec<String>> {
        self.entries.read().get(word).cloned()
    }

    /// Store the sequence for `word`, keeping an existing entry if present.
    pub fn insert(&self, word: &str, phones: Vec<String>) {
        self.entries
            .write()
            .entry(word.to_string())
            .or_insert(phones);
    }

    /// Return the cached sequence for `word`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, word: &str, resolve: F) -> Vec<String>
    where
        F: FnOnce() -> Vec<String>,
    {
        if let Some(phones) = self.get(word) {
            return phones;
        }

        let phones = resolve();
        let mut entries = self.entries.write();
        entries
            .entry(word.to_string())
            .or_insert(phones)
            .clone()
    }

    /// Number of cached words.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
