//! Rule-based grapheme-to-phoneme conversion.
//!
//! A deliberately rough converter for words the override table does not
//! know. The word is scanned left to right; at each position vowel digraphs
//! are tried first (in table order), then single vowels, then a word-final
//! `y`, then consonants. Characters with no mapping are dropped.

use crate::phonetic::phoneme::NEUTRAL_VOWEL;

/// Vowel digraphs in priority order. The first match at a position wins.
const VOWEL_DIGRAPHS: &[(&str, &str)] = &[
    ("oy", "OY1"),
    ("oi", "OY1"),
    ("ay", "AY1"),
    ("ai", "AY1"),
    ("ey", "AY1"),
    ("ei", "AY1"),
    ("oo", "UW1"),
    ("ow", "OW1"),
    ("ou", "OW1"),
    ("au", "AO1"),
    ("ee", "IY1"),
    ("ie", "IY1"),
    ("ea", "EH1"),
];

fn single_vowel(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("AE1"),
        'e' => Some("EH1"),
        'i' => Some("IH1"),
        'o' => Some("OW1"),
        'u' => Some("UH1"),
        _ => None,
    }
}

fn consonant(c: char) -> Option<&'static str> {
    let phone = match c {
        'b' => "B",
        'c' | 'k' | 'q' | 'x' => "K",
        'd' => "D",
        'f' => "F",
        'g' => "G",
        'h' => "HH",
        'j' => "JH",
        'l' => "L",
        'm' => "M",
        'n' => "N",
        'p' => "P",
        'r' => "R",
        's' => "S",
        't' => "T",
        'v' => "V",
        'w' => "W",
        'y' => "Y",
        'z' => "Z",
        _ => return None,
    };
    Some(phone)
}

fn ends_word(rest: &str) -> bool {
    !rest.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Convert a word to phonemes with the heuristic rules.
///
/// Never returns an empty sequence: a word with no mappable letters yields
/// the neutral vowel alone.
///
/// # Examples
///
/// ```
/// use rhymer::phonetic::heuristic::heuristic_phones;
///
/// assert_eq!(heuristic_phones("cat"), vec!["K", "AE1", "T"]);
/// assert_eq!(heuristic_phones("boy"), vec!["B", "OY1"]);
/// assert_eq!(heuristic_phones("happy"), vec!["HH", "AE1", "P", "P", "IY1"]);
/// ```
pub fn heuristic_phones(word: &str) -> Vec<String> {
    let lower = word.to_ascii_lowercase();
    let mut phones = Vec::new();
    let mut rest = lower.as_str();

    while let Some(c) = rest.chars().next() {
        if let Some((digraph, phone)) = VOWEL_DIGRAPHS.iter().find(|(d, _)| rest.starts_with(d)) {
            phones.push(phone.to_string());
            rest = &rest[digraph.len()..];
            continue;
        }

        let after = &rest[c.len_utf8()..];
        let phone = match c {
            'y' if ends_word(after) => Some("IY1"),
            _ => single_vowel(c).or_else(|| consonant(c)),
        };
        if let Some(phone) = phone {
            phones.push(phone.to_string());
        }
        rest = after;
    }

    if phones.is_empty() {
        phones.push(NEUTRAL_VOWEL.to_string());
    }
    phones
}
