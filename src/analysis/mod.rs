//! Text analysis for Rhymer.
//!
//! Turns raw text into cleaned, line-tagged word tokens and decides which
//! tokens take part in rhyme analysis.

pub mod stop;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use stop::StopWords;
pub use token::{WordToken, is_line_end};
pub use tokenizer::{LineTokenizer, clean_word, line_count};
