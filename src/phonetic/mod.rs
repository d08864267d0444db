//! Phonetic approximation.
//!
//! This module turns words into ARPAbet-style phoneme sequences, extracts
//! the rhyme-relevant tail of a sequence, and scores how far apart two tails
//! sound.
//!
//! # Examples
//!
//! ```
//! use rhymer::phonetic::{PhonemeResolver, RhymeTail, rhyme_distance};
//!
//! let resolver = PhonemeResolver::new();
//! let cat = RhymeTail::from_phones(&resolver.word_to_phones("cat"));
//! let bat = RhymeTail::from_phones(&resolver.word_to_phones("bat"));
//!
//! assert_eq!(cat, bat);
//! assert_eq!(rhyme_distance(&cat, &bat), 0.0);
//! ```

pub mod cache;
pub mod distance;
pub mod heuristic;
pub mod phoneme;
pub mod resolver;
pub mod tail;

// Re-export commonly used types
pub use cache::PhonemeCache;
pub use distance::{coda_distance, nucleus_distance, rhyme_distance};
pub use phoneme::{VowelFamily, is_vowel, strip_stress};
pub use resolver::PhonemeResolver;
pub use tail::RhymeTail;
