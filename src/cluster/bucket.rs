//! Bucketing and anchor-based greedy grouping shared by the groupers.

use std::hash::Hash;

use ahash::AHashMap;

/// Partition item indices by key.
///
/// Buckets come back in order of each key's first appearance and hold their
/// indices in ascending order, so downstream output never depends on hash
/// iteration order.
pub fn bucket_by<'a, T, K, F>(items: &'a [T], mut key: F) -> Vec<Vec<usize>>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> K,
{
    let mut slots: AHashMap<K, usize> = AHashMap::new();
    let mut buckets: Vec<Vec<usize>> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let slot = *slots.entry(key(item)).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(index);
    }

    buckets
}

/// Greedy, non-transitive grouping inside one bucket.
///
/// Each still-unvisited index becomes an anchor; every later unvisited index
/// that `joins(anchor, candidate)` accepts is pulled into the anchor's group
/// and never reconsidered. Candidates are compared against the anchor only,
/// never against other members. Groups of one are dropped.
pub fn anchor_groups<F>(bucket: &[usize], mut joins: F) -> Vec<Vec<usize>>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut visited = vec![false; bucket.len()];
    let mut groups = Vec::new();

    for x in 0..bucket.len() {
        if visited[x] {
            continue;
        }
        visited[x] = true;
        let anchor = bucket[x];
        let mut group = vec![anchor];

        for y in x + 1..bucket.len() {
            if visited[y] {
                continue;
            }
            if joins(anchor, bucket[y]) {
                visited[y] = true;
                group.push(bucket[y]);
            }
        }

        if group.len() > 1 {
            groups.push(group);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_by_first_appearance() {
        let keys = ["b", "a", "b", "c", "a"];
        let buckets = bucket_by(&keys, |k| *k);

        assert_eq!(buckets, vec![vec![0, 2], vec![1, 4], vec![3]]);
    }

    #[test]
    fn test_bucket_by_empty() {
        let keys: [&str; 0] = [];
        assert!(bucket_by(&keys, |k| *k).is_empty());
    }

    #[test]
    fn test_anchor_groups_drop_singletons() {
        let groups = anchor_groups(&[0, 1, 2], |_, _| false);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_anchor_groups_are_not_transitive() {
        // 0~1 and 1~2 but not 0~2: 2 is never compared against 1
        let close = |a: usize, b: usize| a.abs_diff(b) == 1;
        let groups = anchor_groups(&[0, 1, 2], close);

        assert_eq!(groups, vec![vec![0, 1]]);
    }

    #[test]
    fn test_anchor_groups_skip_joined_members() {
        let groups = anchor_groups(&[3, 5, 7, 9], |a, b| (a + b) % 4 == 0);
        // anchor 3 takes 5 and 9; 7 is left alone
        assert_eq!(groups, vec![vec![3, 5, 9]]);
    }
}
