//! Phoneme symbols and their classification.
//!
//! Phonemes are ARPAbet-style codes. Vowels may carry a trailing stress
//! digit (`0`, `1` or `2`); every comparison works on the stress-stripped
//! form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stress-stripped vowel codes.
pub const VOWELS: &[&str] = &[
    "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
];

/// Neutral vowel used when a word yields no phonemes at all.
pub const NEUTRAL_VOWEL: &str = "AH0";

/// Remove one trailing stress digit, if present.
///
/// ```
/// use rhymer::phonetic::phoneme::strip_stress;
///
/// assert_eq!(strip_stress("AE1"), "AE");
/// assert_eq!(strip_stress("T"), "T");
/// ```
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.strip_suffix(['0', '1', '2']).unwrap_or(phoneme)
}

/// Whether the phoneme is a vowel, ignoring stress.
pub fn is_vowel(phoneme: &str) -> bool {
    VOWELS.contains(&strip_stress(phoneme))
}

/// Coarse vowel families used to score near-miss vowels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VowelFamily {
    LowBack,
    LowFront,
    MidFront,
    RColored,
    HighFront,
    MidBack,
    HighBack,
    Diphthong,
}

impl VowelFamily {
    /// Family of a stress-stripped vowel, or `None` for unknown codes.
    pub fn of(vowel: &str) -> Option<VowelFamily> {
        let family = match strip_stress(vowel) {
            "AA" | "AH" | "AO" => VowelFamily::LowBack,
            "AE" => VowelFamily::LowFront,
            "EH" | "EY" => VowelFamily::MidFront,
            "ER" => VowelFamily::RColored,
            "IH" | "IY" => VowelFamily::HighFront,
            "OW" | "UH" => VowelFamily::MidBack,
            "UW" => VowelFamily::HighBack,
            "AY" | "AW" | "OY" => VowelFamily::Diphthong,
            _ => return None,
        };
        Some(family)
    }

    /// Get the name of this family.
    pub fn name(&self) -> &'static str {
        match self {
            VowelFamily::LowBack => "low-back",
            VowelFamily::LowFront => "low-front",
            VowelFamily::MidFront => "mid-front",
            VowelFamily::RColored => "r-colored",
            VowelFamily::HighFront => "high-front",
            VowelFamily::MidBack => "mid-back",
            VowelFamily::HighBack => "high-back",
            VowelFamily::Diphthong => "diph",
        }
    }
}

impl fmt::Display for VowelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collapse a consonant onto its equivalence class.
///
/// Voiced/voiceless pairs, the nasals, and affricate/fricative pairs share
/// a representative. Other phonemes map to themselves.
///
/// ```
/// use rhymer::phonetic::phoneme::consonant_class;
///
/// assert_eq!(consonant_class("Z"), "S");
/// assert_eq!(consonant_class("NG"), "N");
/// assert_eq!(consonant_class("HH"), "HH");
/// ```
pub fn consonant_class(phoneme: &str) -> &str {
    match phoneme {
        "S" | "Z" => "S",
        "T" | "D" => "T",
        "F" | "V" => "F",
        "K" | "G" => "K",
        "M" | "N" | "NG" => "N",
        "CH" | "JH" => "CH",
        "SH" | "ZH" => "SH",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_stress_only_trailing_digit() {
        assert_eq!(strip_stress("ER0"), "ER");
        assert_eq!(strip_stress("OY2"), "OY");
        assert_eq!(strip_stress("AH"), "AH");
        assert_eq!(strip_stress(""), "");
    }

    #[test]
    fn test_is_vowel() {
        assert!(is_vowel("AE1"));
        assert!(is_vowel("UW"));
        assert!(!is_vowel("T"));
        assert!(!is_vowel("HH"));
        assert!(!is_vowel("Y"));
    }

    #[test]
    fn test_every_vowel_has_a_family() {
        for vowel in VOWELS {
            assert!(VowelFamily::of(vowel).is_some(), "{vowel} has no family");
        }
        assert_eq!(VowelFamily::of("T"), None);
    }

    #[test]
    fn test_family_grouping() {
        assert_eq!(VowelFamily::of("IH1"), VowelFamily::of("IY0"));
        assert_eq!(VowelFamily::of("AY"), Some(VowelFamily::Diphthong));
        assert_ne!(VowelFamily::of("AE"), VowelFamily::of("EH"));
        assert_eq!(VowelFamily::RColored.to_string(), "r-colored");
    }

    #[test]
    fn test_consonant_class() {
        assert_eq!(consonant_class("D"), consonant_class("T"));
        assert_eq!(consonant_class("JH"), "CH");
        assert_eq!(consonant_class("ZH"), "SH");
        assert_eq!(consonant_class("M"), "N");
        assert_eq!(consonant_class("B"), "B");
        assert_ne!(consonant_class("B"), consonant_class("P"));
    }
}
