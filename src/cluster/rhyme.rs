//! Rhyme grouping.
//!
//! Spans are bucketed by [`Span::bucket_key`] and grouped greedily inside
//! each bucket around anchors (see [`anchor_groups`]). Two spans with
//! different bucket keys never share a group, whatever their distance.
//!
//! A pair of line-final words is judged against the perfect threshold; any
//! pair with an internal word is judged against the slant threshold.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cluster::bucket::{anchor_groups, bucket_by};
use crate::cluster::span::Span;
use crate::config::AnalyzerConfig;
use crate::phonetic::distance::rhyme_distance;

/// Span indices judged to rhyme. Members are in scan order; the first one
/// is the anchor the others were compared against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RhymeGroup {
    pub members: Vec<usize>,
}

impl RhymeGroup {
    /// Create a group from span indices.
    pub fn new(members: Vec<usize>) -> Self {
        RhymeGroup { members }
    }

    /// The span every other member was compared against.
    pub fn anchor(&self) -> Option<usize> {
        self.members.first().copied()
    }

    /// Check if the group holds a span index.
    pub fn contains(&self, span: usize) -> bool {
        self.members.contains(&span)
    }

    /// Get the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over member span indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }
}

/// Groups spans into rhyme groups.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RhymeGrouper {
    perfect_threshold: f64,
    slant_threshold: f64,
}

impl RhymeGrouper {
    /// Create a grouper with explicit cutoffs.
    pub fn new(perfect_threshold: f64, slant_threshold: f64) -> Self {
        RhymeGrouper {
            perfect_threshold,
            slant_threshold,
        }
    }

    /// Create a grouper from the analyzer configuration.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.perfect_threshold, config.slant_threshold)
    }

    /// Cutoff that applies to a pair of spans.
    pub fn threshold_for(&self, a: &Span, b: &Span) -> f64 {
        if a.is_line_end && b.is_line_end {
            self.perfect_threshold
        } else {
            self.slant_threshold
        }
    }

    /// Whether `b` may join a group anchored at `a`.
    pub fn joins(&self, a: &Span, b: &Span) -> bool {
        rhyme_distance(&a.tail, &b.tail) <= self.threshold_for(a, b)
    }

    /// Group spans. Singleton groups are not reported.
    pub fn group(&self, spans: &[Span]) -> Vec<RhymeGroup> {
        let mut groups = Vec::new();

        for bucket in bucket_by(spans, |span| span.bucket_key.as_str()) {
            let found = anchor_groups(&bucket, |a, b| self.joins(&spans[a], &spans[b]));
            trace!(
                "bucket {} ({} spans): {} group(s)",
                spans[bucket[0]].bucket_key,
                bucket.len(),
                found.len()
            );
            groups.extend(found.into_iter().map(RhymeGroup::new));
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stop::StopWords;
    use crate::analysis::tokenizer::LineTokenizer;
    use crate::cluster::span::build_spans;
    use crate::phonetic::resolver::PhonemeResolver;

    fn spans_for(text: &str) -> Vec<Span> {
        let tokens = LineTokenizer::new().tokenize(text);
        build_spans(&tokens, &PhonemeResolver::new(), Some(&StopWords::new()))
    }

    fn words(spans: &[Span], groups: &[RhymeGroup]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.iter().map(|i| spans[i].word.clone()).collect())
            .collect()
    }

    #[test]
    fn test_line_end_pairs() {
        let spans = spans_for("cat\nhat\ndog\nlog");
        let groups = RhymeGrouper::from_config(&AnalyzerConfig::default()).group(&spans);

        assert_eq!(words(&spans, &groups), vec![vec!["cat", "hat"], vec!["dog", "log"]]);
    }

    #[test]
    fn test_threshold_selection() {
        let spans = spans_for("cat sat\nmat");
        let grouper = RhymeGrouper::new(0.1, 0.4);

        // cat is internal, sat and mat end their lines
        assert_eq!(grouper.threshold_for(&spans[0], &spans[1]), 0.4);
        assert_eq!(grouper.threshold_for(&spans[1], &spans[2]), 0.1);
    }

    #[test]
    fn test_internal_pairs_use_slant_threshold() {
        // cast vs cat: same bucket, distance 0.15
        let spans = spans_for("cat cast\nblue");

        let strict = RhymeGrouper::new(1.0, 0.1).group(&spans);
        assert!(strict.is_empty());

        let loose = RhymeGrouper::new(0.0, 0.15).group(&spans);
        assert_eq!(words(&spans, &loose), vec![vec!["cat", "cast"]]);
    }

    #[test]
    fn test_line_end_pairs_use_perfect_threshold() {
        let spans = spans_for("cat\ncast");

        assert!(RhymeGrouper::new(0.1, 1.0).group(&spans).is_empty());
        assert_eq!(RhymeGrouper::new(0.2, 0.0).group(&spans).len(), 1);
    }

    #[test]
    fn test_bucket_key_is_hard_prefilter() {
        // "cats" and "cat" differ in their last coda phoneme
        let spans = spans_for("cat\ncats");
        assert_ne!(spans[0].bucket_key, spans[1].bucket_key);

        let groups = RhymeGrouper::new(1.0, 1.0).group(&spans);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_each_span_in_at_most_one_group() {
        let spans = spans_for("cat hat\nbat mat\nsat flat\ndog log\nfog");
        let groups = RhymeGrouper::from_config(&AnalyzerConfig::default()).group(&spans);

        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            assert!(group.len() > 1);
            for member in group.iter() {
                assert!(seen.insert(member), "span {member} in two groups");
            }
        }
    }

    #[test]
    fn test_group_serializes_as_array() {
        let group = RhymeGroup::new(vec![0, 3]);
        assert_eq!(serde_json::to_string(&group).unwrap(), "[0,3]");
        assert_eq!(group.anchor(), Some(0));
        assert!(group.contains(3));
    }
}
