//! # Rhymer
//!
//! Approximate phonetic rhyme detection for plain text.
//!
//! ## Features
//!
//! - Pure Rust, no pronunciation dictionary required
//! - Heuristic grapheme-to-phoneme conversion with a small override table
//! - Nucleus/coda rhyme tails and weighted phonetic distance
//! - Bucketed greedy rhyme grouping and vowel-only assonance clusters
//! - Per-line rhyme scheme labels (A/B/C/-)
//! - JSON export of the full analysis
//!
//! ## Example
//!
//! ```
//! use rhymer::prelude::*;
//!
//! let result = analyze("The cat\nwore a hat", &AnalyzerConfig::default()).unwrap();
//! assert_eq!(result.scheme.to_string(), "A A");
//! ```

pub mod analysis;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod engine;
pub mod error;
pub mod phonetic;
pub mod scheme;

pub mod prelude {
    pub use crate::config::AnalyzerConfig;
    pub use crate::engine::{AnalysisResult, RhymeEngine, analyze};
    pub use crate::error::{Result, RhymerError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
