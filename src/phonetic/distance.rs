//! Phonetic distance between rhyme tails.
//!
//! All distances lie on a 0 (identical) to 1 (unrelated) scale. The rhyme
//! distance weights the vowel at 0.7 and the consonant tail at 0.3.

use crate::phonetic::phoneme::{VowelFamily, consonant_class, strip_stress};
use crate::phonetic::tail::RhymeTail;

/// Weight of the nucleus in [`rhyme_distance`].
pub const NUCLEUS_WEIGHT: f64 = 0.7;

/// Weight of the coda in [`rhyme_distance`].
pub const CODA_WEIGHT: f64 = 0.3;

/// Distance between two different vowels of the same family.
pub const SAME_FAMILY_DISTANCE: f64 = 0.25;

/// Coda distance when neither side has any consonant to compare.
pub const EMPTY_CODA_DISTANCE: f64 = 0.6;

/// Number of trailing coda positions compared.
pub const CODA_WINDOW: usize = 3;

/// Stress-stripped vowel class; an empty nucleus is its own class.
fn vowel_class(nucleus: Option<&str>) -> &str {
    nucleus.map(strip_stress).unwrap_or("unk")
}

/// Distance between two nuclei.
///
/// 0.0 for the same vowel, 0.25 for different vowels of one family, 1.0
/// otherwise.
///
/// ```
/// use rhymer::phonetic::distance::nucleus_distance;
///
/// assert_eq!(nucleus_distance(Some("IH"), Some("IY1")), 0.25);
/// assert_eq!(nucleus_distance(None, None), 0.0);
/// assert_eq!(nucleus_distance(Some("AE"), None), 1.0);
/// ```
pub fn nucleus_distance(a: Option<&str>, b: Option<&str>) -> f64 {
    let (class_a, class_b) = (vowel_class(a), vowel_class(b));
    if class_a == class_b {
        return 0.0;
    }

    match (VowelFamily::of(class_a), VowelFamily::of(class_b)) {
        (Some(family_a), Some(family_b)) if family_a == family_b => SAME_FAMILY_DISTANCE,
        _ => 1.0,
    }
}

/// Distance between two codas.
///
/// Consonants are collapsed through [`consonant_class`] and the last
/// [`CODA_WINDOW`] positions are compared, aligned from the end. A position
/// where only one side still has a consonant counts as a mismatch.
///
/// ```
/// use rhymer::phonetic::distance::coda_distance;
///
/// assert_eq!(coda_distance(&["T"], &["D"]), 0.0);
/// assert_eq!(coda_distance(&["S", "T"], &["T"]), 0.5);
/// assert_eq!(coda_distance::<&str>(&[], &[]), 0.6);
/// ```
pub fn coda_distance<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let len = a.len().max(b.len());
    if len == 0 {
        return EMPTY_CODA_DISTANCE;
    }

    let mut comparisons = 0usize;
    let mut mismatches = 0usize;
    for offset in 1..=len.min(CODA_WINDOW) {
        let (x, y) = (class_from_end(a, offset), class_from_end(b, offset));
        if x.is_none() && y.is_none() {
            continue;
        }
        comparisons += 1;
        if x != y {
            mismatches += 1;
        }
    }

    if comparisons == 0 {
        EMPTY_CODA_DISTANCE
    } else {
        mismatches as f64 / comparisons as f64
    }
}

/// Consonant class `offset` positions from the end of a coda (1 = last).
fn class_from_end<S: AsRef<str>>(coda: &[S], offset: usize) -> Option<&str> {
    coda.len()
        .checked_sub(offset)
        .map(|i| consonant_class(coda[i].as_ref()))
}

/// Weighted rhyme distance between two tails.
pub fn rhyme_distance(a: &RhymeTail, b: &RhymeTail) -> f64 {
    NUCLEUS_WEIGHT * nucleus_distance(a.nucleus.as_deref(), b.nucleus.as_deref())
        + CODA_WEIGHT * coda_distance(&a.coda, &b.coda)
}
