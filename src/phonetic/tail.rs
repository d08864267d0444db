//! Rhyme-relevant tail of a phoneme sequence.
//!
//! The tail is the last vowel (the nucleus) plus every consonant after it
//! (the coda). Both are stored stress-stripped.

use serde::{Deserialize, Serialize};

use crate::phonetic::phoneme::{is_vowel, strip_stress};

/// Nucleus and coda of a word.
///
/// The nucleus is exported as a zero- or one-element array so the JSON shape
/// stays the same whether or not a vowel was found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RhymeTail {
    /// Final vowel, stress-stripped. `None` for vowel-less input.
    #[serde(with = "nucleus_seq")]
    pub nucleus: Option<String>,

    /// Consonants after the nucleus, stress-stripped, in original order.
    pub coda: Vec<String>,
}

impl RhymeTail {
    /// Decompose a phoneme sequence.
    ///
    /// With no vowel present, the nucleus is empty and the coda falls back to
    /// the last two phonemes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhymer::phonetic::tail::RhymeTail;
    ///
    /// let tail = RhymeTail::from_phones(&["K", "AE1", "S", "T"]);
    /// assert_eq!(tail.nucleus.as_deref(), Some("AE"));
    /// assert_eq!(tail.coda, vec!["S", "T"]);
    /// ```
    pub fn from_phones<S: AsRef<str>>(phones: &[S]) -> Self {
        let stripped = |p: &S| strip_stress(p.as_ref()).to_string();

        match phones.iter().rposition(|p| is_vowel(p.as_ref())) {
            Some(last_vowel) => RhymeTail {
                nucleus: Some(stripped(&phones[last_vowel])),
                coda: phones[last_vowel + 1..].iter().map(stripped).collect(),
            },
            None => RhymeTail {
                nucleus: None,
                coda: phones[phones.len().saturating_sub(2)..]
                    .iter()
                    .map(stripped)
                    .collect(),
            },
        }
    }

    /// Last coda phoneme, if any.
    pub fn last_coda(&self) -> Option<&str> {
        self.coda.last().map(String::as_str)
    }

    /// Coarse prefilter key: `"<nucleus>|<last coda>"`, `_` standing in for
    /// a missing part.
    ///
    /// ```
    /// use rhymer::phonetic::tail::RhymeTail;
    ///
    /// assert_eq!(RhymeTail::from_phones(&["D", "OW1", "G"]).bucket_key(), "OW|G");
    /// assert_eq!(RhymeTail::from_phones(&["B", "OY1"]).bucket_key(), "OY|_");
    /// ```
    pub fn bucket_key(&self) -> String {
        format!(
            "{}|{}",
            self.nucleus.as_deref().unwrap_or("_"),
            self.last_coda().unwrap_or("_")
        )
    }
}

mod nucleus_seq {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::error::RhymerError;

    pub fn serialize<S>(nucleus: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        nucleus.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut seq = Vec::<String>::deserialize(deserializer)?;
        match seq.len() {
            0 | 1 => Ok(seq.pop()),
            n => Err(serde::de::Error::custom(RhymerError::analysis(format!(
                "nucleus holds at most one phoneme, got {n}"
            )))),
        }
    }
}
