//! The analysis entry point.
//!
//! [`RhymeEngine`] wires the pipeline together:
//!
//! ```text
//! text → tokens → phonemes → rhyme tails → spans → groups → scheme
//! ```
//!
//! Each call to [`RhymeEngine::analyze`] recomputes everything from the
//! input text. Only the engine's phoneme cache survives between calls, and
//! it is safe to share one engine across threads.
//!
//! # Examples
//!
//! ```
//! use rhymer::config::AnalyzerConfig;
//! use rhymer::engine::RhymeEngine;
//!
//! let engine = RhymeEngine::new(AnalyzerConfig::default()).unwrap();
//! let result = engine.analyze("cat\nhat\ndog\nlog");
//!
//! assert_eq!(result.scheme.to_string(), "A A B B");
//! assert_eq!(result.rhyme_groups.len(), 2);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::stop::StopWords;
use crate::analysis::token::WordToken;
use crate::analysis::tokenizer::{LineTokenizer, line_count};
use crate::cluster::assonance::{AssonanceCluster, AssonanceGrouper};
use crate::cluster::rhyme::{RhymeGroup, RhymeGrouper};
use crate::cluster::span::{Span, build_spans};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::phonetic::resolver::PhonemeResolver;
use crate::scheme::{RhymeScheme, assign_scheme};

/// Everything one analysis run produces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Every word token, stopwords included
    pub tokens: Vec<WordToken>,

    /// One span per analyzed token
    pub spans: Vec<Span>,

    /// Rhyme groups over span indices
    pub rhyme_groups: Vec<RhymeGroup>,

    /// Vowel-only clusters over span indices; empty when disabled
    pub assonance_clusters: Vec<AssonanceCluster>,

    /// One label per input line
    pub scheme: RhymeScheme,
}

impl AnalysisResult {
    /// Check if the run found nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Words of a rhyme group, in member order.
    pub fn group_words(&self, group: &RhymeGroup) -> Vec<&str> {
        group.iter().map(|i| self.spans[i].word.as_str()).collect()
    }

    /// Words of an assonance cluster, in member order.
    pub fn cluster_words(&self, cluster: &AssonanceCluster) -> Vec<&str> {
        cluster.iter().map(|i| self.spans[i].word.as_str()).collect()
    }

    /// Render the result as JSON for export.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// A configured analyzer with its own phoneme cache.
#[derive(Debug)]
pub struct RhymeEngine {
    config: AnalyzerConfig,
    tokenizer: LineTokenizer,
    stop_words: StopWords,
    resolver: PhonemeResolver,
}

impl RhymeEngine {
    /// Create an engine. Fails if the configuration does not validate.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(RhymeEngine {
            config,
            tokenizer: LineTokenizer::new(),
            stop_words: StopWords::new(),
            resolver: PhonemeResolver::new(),
        })
    }

    /// Replace the stopword set used when stopwords are ignored.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Get the active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get the phoneme resolver (and through it, the cache).
    pub fn resolver(&self) -> &PhonemeResolver {
        &self.resolver
    }

    /// Analyze a block of text.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = self.tokenizer.tokenize(text);
        let stop_words = self.config.ignore_stopwords.then_some(&self.stop_words);
        let spans = build_spans(&tokens, &self.resolver, stop_words);

        let rhyme_groups = RhymeGrouper::from_config(&self.config).group(&spans);
        let assonance_clusters = if self.config.assonance_enabled {
            AssonanceGrouper::from_config(&self.config).group(&spans)
        } else {
            Vec::new()
        };
        let scheme = assign_scheme(&spans, &rhyme_groups, line_count(text));

        debug!(
            "analyzed {} line(s): {} token(s), {} span(s), {} rhyme group(s), {} assonance cluster(s), {} cached word(s)",
            scheme.len(),
            tokens.len(),
            spans.len(),
            rhyme_groups.len(),
            assonance_clusters.len(),
            self.resolver.cache().len()
        );

        AnalysisResult {
            tokens,
            spans,
            rhyme_groups,
            assonance_clusters,
            scheme,
        }
    }
}

/// Analyze `text` with a fresh engine built from `config`.
pub fn analyze(text: &str, config: &AnalyzerConfig) -> Result<AnalysisResult> {
    Ok(RhymeEngine::new(config.clone())?.analyze(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RhymerError;

    fn engine() -> RhymeEngine {
        RhymeEngine::new(AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_couplets() {
        let result = engine().analyze("cat\nhat\ndog\nlog");

        assert_eq!(result.tokens.len(), 4);
        assert!(result.spans.iter().all(|s| s.is_line_end));
        assert_eq!(result.group_words(&result.rhyme_groups[0]), vec!["cat", "hat"]);
        assert_eq!(result.group_words(&result.rhyme_groups[1]), vec!["dog", "log"]);
        assert_eq!(result.scheme.to_string(), "A A B B");
    }

    #[test]
    fn test_blank_input() {
        for text in ["", "   ", "\n\n", " \t\n "] {
            let result = engine().analyze(text);
            assert!(result.is_empty());
            assert!(result.spans.is_empty());
            assert!(result.rhyme_groups.is_empty());
            assert!(result.assonance_clusters.is_empty());
            assert!(result.scheme.is_empty());
        }
    }

    #[test]
    fn test_punctuation_only_lines() {
        let result = engine().analyze("cat!\n...\nhat?");

        assert_eq!(result.tokens.len(), 2);
        assert_eq!(result.scheme.to_string(), "A - A");
    }

    #[test]
    fn test_assonance_disabled() {
        let config = AnalyzerConfig::default().with_assonance(false);
        let result = RhymeEngine::new(config).unwrap().analyze("cat band lamp\nhat");

        assert!(result.assonance_clusters.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig::default().with_perfect_threshold(f64::INFINITY);
        let err = RhymeEngine::new(config).unwrap_err();
        assert!(matches!(err, RhymerError::Config(_)));
    }

    #[test]
    fn test_cache_persists_across_calls() {
        let engine = engine();
        engine.analyze("cat\nhat");
        let cached = engine.resolver().cache().len();
        engine.analyze("hat\ncat");

        assert_eq!(cached, 2);
        assert_eq!(engine.resolver().cache().len(), cached);
    }

    #[test]
    fn test_custom_stop_words() {
        let engine = engine().with_stop_words(StopWords::from_words(vec!["la"]));
        let result = engine.analyze("la la la\nthe cat");

        let words: Vec<_> = result.spans.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["the", "cat"]);
    }

    #[test]
    fn test_json_export_field_names() {
        let result = engine().analyze("cat\nhat");
        let value: serde_json::Value = serde_json::from_str(&result.to_json(false).unwrap()).unwrap();

        for key in ["tokens", "spans", "rhymeGroups", "assonanceClusters", "scheme"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["rhymeGroups"], serde_json::json!([[0, 1]]));
        assert_eq!(value["scheme"], serde_json::json!(["A", "A"]));
        assert_eq!(value["tokens"][1], serde_json::json!({"word": "hat", "line": 1, "position": 0}));
    }

    #[test]
    fn test_json_export_roundtrip() {
        let result = engine().analyze("the moon in June\nshone on a spoon");
        let back: AnalysisResult = serde_json::from_str(&result.to_json(true).unwrap()).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_free_function() {
        let result = analyze("dog\nlog", &AnalyzerConfig::default()).unwrap();
        assert_eq!(result.scheme.to_string(), "A A");
    }
}
