//! Clustering of spans into rhyme groups and assonance clusters.
//!
//! Both groupers follow the same policy: bucket first, then join greedily
//! around anchors inside each bucket. The policy is order-dependent by
//! construction; it is not a transitive closure.

pub mod assonance;
pub mod bucket;
pub mod rhyme;
pub mod span;

// Re-export commonly used types
pub use assonance::{AssonanceCluster, AssonanceGrouper};
pub use rhyme::{RhymeGroup, RhymeGrouper};
pub use span::{Span, build_spans};
