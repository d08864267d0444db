//! End-to-end analysis scenarios.

use std::io::Write;

use rhymer::analysis::stop::StopWords;
use rhymer::config::{AnalyzerConfig, ConfigOverlay};
use rhymer::engine::{AnalysisResult, RhymeEngine, analyze};
use rhymer::error::{Result, RhymerError};

fn group_words(result: &AnalysisResult) -> Vec<Vec<&str>> {
    result
        .rhyme_groups
        .iter()
        .map(|g| result.group_words(g))
        .collect()
}

#[test]
fn test_two_couplets() -> Result<()> {
    let result = analyze("cat\nhat\ndog\nlog", &AnalyzerConfig::default())?;

    assert_eq!(group_words(&result), vec![vec!["cat", "hat"], vec!["dog", "log"]]);
    assert_eq!(result.scheme.to_string(), "A A B B");

    Ok(())
}

#[test]
fn test_internal_and_final_same_tail() -> Result<()> {
    let result = analyze("the cat sat\non a bat", &AnalyzerConfig::default())?;

    assert_eq!(group_words(&result), vec![vec!["cat", "sat", "bat"]]);
    assert_eq!(result.scheme.to_string(), "A A");

    Ok(())
}

#[test]
fn test_line_end_decided_before_stopwords_are_dropped() -> Result<()> {
    // "the" closes line one, so "hat" is internal even after "the" is skipped
    let result = analyze("a hat for the\ncat", &AnalyzerConfig::default())?;

    let hat = result.spans.iter().find(|s| s.word == "hat").unwrap();
    assert!(!hat.is_line_end);
    assert_eq!(group_words(&result), vec![vec!["hat", "cat"]]);
    assert_eq!(result.scheme.to_string(), "- A");

    Ok(())
}

#[test]
fn test_stopwords_ignored_by_default() -> Result<()> {
    let result = analyze("the\nthe", &AnalyzerConfig::default())?;

    assert_eq!(result.tokens.len(), 2);
    assert!(result.spans.is_empty());
    assert_eq!(result.scheme.to_string(), "- -");

    Ok(())
}

#[test]
fn test_stopwords_kept_when_configured() -> Result<()> {
    let config = AnalyzerConfig::default().with_ignore_stopwords(false);
    let result = analyze("the\nthe", &config)?;

    assert_eq!(result.spans.len(), 2);
    assert_eq!(result.scheme.to_string(), "A A");

    Ok(())
}

#[test]
fn test_slant_threshold_controls_internal_pairs() -> Result<()> {
    let text = "cat cast\nblue";

    let strict = analyze(text, &AnalyzerConfig::default().with_slant_threshold(0.1))?;
    assert!(strict.rhyme_groups.is_empty());

    let loose = analyze(text, &AnalyzerConfig::default().with_slant_threshold(0.5))?;
    assert_eq!(group_words(&loose), vec![vec!["cat", "cast"]]);

    Ok(())
}

#[test]
fn test_assonance_clusters() -> Result<()> {
    let result = analyze("cat band lamp\nhat", &AnalyzerConfig::default())?;

    let clusters: Vec<Vec<&str>> = result
        .assonance_clusters
        .iter()
        .map(|c| result.cluster_words(c))
        .collect();
    assert_eq!(clusters, vec![vec!["cat", "band", "lamp", "hat"]]);
    assert_eq!(group_words(&result), vec![vec!["cat", "hat"]]);
    assert_eq!(result.scheme.to_string(), "- A");

    let quiet = analyze("cat band lamp\nhat", &AnalyzerConfig::default().with_assonance(false))?;
    assert!(quiet.assonance_clusters.is_empty());
    assert_eq!(quiet.rhyme_groups, result.rhyme_groups);

    Ok(())
}

#[test]
fn test_override_words() -> Result<()> {
    let engine = RhymeEngine::new(AnalyzerConfig::default())?;

    assert_eq!(engine.resolver().word_to_phones("Lekker"), vec!["L", "EH1", "K", "ER0"]);
    assert_eq!(engine.resolver().word_to_phones("bru!"), vec!["B", "R", "UW1"]);

    Ok(())
}

#[test]
fn test_blank_and_punctuation_input() -> Result<()> {
    let blank = analyze(" \n\t\n", &AnalyzerConfig::default())?;
    assert!(blank.is_empty());
    assert!(blank.scheme.is_empty());

    let punct = analyze("moon!\n--- ...\nspoon?", &AnalyzerConfig::default())?;
    assert_eq!(punct.tokens.len(), 2);
    assert_eq!(punct.scheme.to_string(), "A - A");

    Ok(())
}

#[test]
fn test_span_export_shape() -> Result<()> {
    let result = analyze("cat\nhat", &AnalyzerConfig::default())?;
    let value: serde_json::Value = serde_json::from_str(&result.to_json(false)?)?;

    assert_eq!(
        value["spans"][0],
        serde_json::json!({
            "index": 0,
            "line": 0,
            "word": "cat",
            "nucleus": ["AE"],
            "coda": ["T"],
            "bucketKey": "AE|T",
            "isLineEnd": true
        })
    );

    Ok(())
}

#[test]
fn test_user_settings_over_defaults() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"slantThreshold": 0.1, "assonanceEnabled": false}}"#)?;

    let config = ConfigOverlay::from_file(file.path())?.apply(AnalyzerConfig::default());
    let result = RhymeEngine::new(config)?.analyze("cat cast\nblue");

    assert!(result.rhyme_groups.is_empty());
    assert!(result.assonance_clusters.is_empty());

    Ok(())
}

#[test]
fn test_strict_config_requires_every_key() {
    let err = AnalyzerConfig::from_json_str(r#"{"slantThreshold": 0.1}"#).unwrap_err();
    assert!(matches!(err, RhymerError::Config(_)));
}

#[test]
fn test_custom_stop_words() -> Result<()> {
    let engine = RhymeEngine::new(AnalyzerConfig::default())?
        .with_stop_words(StopWords::from_words(vec!["hat"]));
    let result = engine.analyze("cat\nhat\nbat");

    assert_eq!(group_words(&result), vec![vec!["cat", "bat"]]);
    assert_eq!(result.scheme.to_string(), "A - A");

    Ok(())
}
