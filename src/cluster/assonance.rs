//! Vowel-only ("assonance") grouping.
//!
//! Independent of rhyme groups: spans are bucketed by nucleus vowel alone and
//! joined when their nucleus distance is within the assonance threshold. A
//! span may sit in a rhyme group and an assonance cluster at the same time.

use serde::{Deserialize, Serialize};

use crate::cluster::bucket::{anchor_groups, bucket_by};
use crate::cluster::span::Span;
use crate::config::AnalyzerConfig;
use crate::phonetic::distance::nucleus_distance;

/// Span indices sharing a close vowel, in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssonanceCluster {
    pub members: Vec<usize>,
}

impl AssonanceCluster {
    /// Create a cluster from span indices.
    pub fn new(members: Vec<usize>) -> Self {
        AssonanceCluster { members }
    }

    /// Get the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the cluster is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over member span indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }
}

/// Groups spans by vowel sound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssonanceGrouper {
    threshold: f64,
}

impl AssonanceGrouper {
    /// Create a grouper with an explicit cutoff.
    pub fn new(threshold: f64) -> Self {
        AssonanceGrouper { threshold }
    }

    /// Create a grouper from the analyzer configuration.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.assonance_threshold)
    }

    /// Group spans. Singleton clusters are not reported.
    pub fn group(&self, spans: &[Span]) -> Vec<AssonanceCluster> {
        bucket_by(spans, |span| span.nucleus().unwrap_or("_"))
            .iter()
            .flat_map(|bucket| {
                anchor_groups(bucket, |a, b| {
                    nucleus_distance(spans[a].nucleus(), spans[b].nucleus()) <= self.threshold
                })
            })
            .map(AssonanceCluster::new)
            .collect()
    }
}
