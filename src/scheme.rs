//! Rhyme-scheme assignment.
//!
//! Maps line-final rhyme groups onto the classic per-line letter notation.
//! Letters are issued in order of first appearance and shared across the
//! whole document; lines whose last word belongs to no group get
//! [`PLACEHOLDER`].
//!
//! # Examples
//!
//! ```
//! use rhymer::scheme::label_for;
//!
//! assert_eq!(label_for(0), "A");
//! assert_eq!(label_for(25), "Z");
//! assert_eq!(label_for(26), "AA");
//! ```

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::cluster::rhyme::RhymeGroup;
use crate::cluster::span::Span;

/// Label for lines with no line-final rhyme group.
pub const PLACEHOLDER: &str = "-";

/// Per-line rhyme labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RhymeScheme {
    pub labels: Vec<String>,
}

impl RhymeScheme {
    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the scheme has no lines.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of a line, if the line exists.
    pub fn label(&self, line: usize) -> Option<&str> {
        self.labels.get(line).map(String::as_str)
    }

    /// Iterate over labels in line order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl fmt::Display for RhymeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join(" "))
    }
}

/// Label for the `n`th distinct group: `A`..`Z`, then `AA`, `AB`, …
pub fn label_for(mut n: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label.iter().rev().collect()
}

/// Assign a label to each of `line_count` lines.
pub fn assign_scheme(spans: &[Span], groups: &[RhymeGroup], line_count: usize) -> RhymeScheme {
    let mut line_group: AHashMap<usize, usize> = AHashMap::new();
    for (group_id, group) in groups.iter().enumerate() {
        for member in group.iter() {
            let span = &spans[member];
            if span.is_line_end {
                line_group.insert(span.line, group_id);
            }
        }
    }

    let mut letters: AHashMap<usize, String> = AHashMap::new();
    let labels = (0..line_count)
        .map(|line| match line_group.get(&line) {
            None => PLACEHOLDER.to_string(),
            Some(group_id) => {
                let next = letters.len();
                letters
                    .entry(*group_id)
                    .or_insert_with(|| label_for(next))
                    .clone()
            }
        })
        .collect();

    RhymeScheme { labels }
}
