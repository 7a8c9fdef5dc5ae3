// src/lexicon.rs
//! Read-only word tables shared by the signals.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Closed list of high-frequency function words.
pub const STOPWORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
    "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
    "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
    "these", "give", "day", "most", "us", "is", "was", "are", "been", "being", "has", "had",
    "does", "did", "having", "am", "such", "both", "each", "few", "more", "many", "much",
    "several", "through", "during", "before",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Predictability assigned to words missing from `COMMON_WORDS`.
pub const UNLISTED_WORD_PROBABILITY: f64 = 0.02;

const COMMON_WORDS: &[(&str, f64)] = &[
    ("the", 0.2),
    ("a", 0.15),
    ("and", 0.15),
    ("to", 0.12),
    ("of", 0.12),
    ("in", 0.12),
    ("is", 0.10),
    ("that", 0.10),
    ("for", 0.10),
    ("it", 0.10),
    ("with", 0.09),
    ("as", 0.08),
    ("on", 0.08),
    ("be", 0.08),
    ("have", 0.08),
];

static COMMON_WORD_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| COMMON_WORDS.iter().copied().collect());

pub fn word_probability(token: &str) -> f64 {
    COMMON_WORD_TABLE
        .get(token)
        .copied()
        .unwrap_or(UNLISTED_WORD_PROBABILITY)
}

/// Sentence openers that earn the structure bonus in the perplexity proxy.
pub const DISCOURSE_STARTERS: &[&str] = &["this", "the", "in", "our", "by", "as", "for", "through"];

pub const TRANSITIONS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "additionally",
    "consequently",
    "thus",
    "hence",
];

pub const QUALIFIERS: &[&str] = &[
    "significant",
    "important",
    "notable",
    "remarkable",
    "evident",
    "clear",
    "obvious",
    "essential",
];

pub const PASSIVE_MARKERS: &[&str] = &["is", "are", "was", "were", "be", "been", "being"];

pub const FORMAL_MARKERS: &[&str] = &[
    "provides",
    "demonstrates",
    "indicates",
    "suggests",
    "shows",
    "reveals",
    "presents",
];

/// Vocabulary of classroom / instructional writing.
pub const INSTRUCTIONAL_MARKERS: &[&str] = &[
    "explain",
    "example",
    "demonstrate",
    "show",
    "evidence",
    "support",
    "claim",
    "topic",
    "sentence",
    "paragraph",
    "continue",
    "pattern",
    "relationship",
    "instruction",
    "write",
    "essay",
    "learn",
    "teaching",
    "student",
];

pub const ACADEMIC_MARKERS: &[&str] = &[
    "moreover",
    "furthermore",
    "however",
    "thus",
    "therefore",
    "significant",
    "important",
    "relevant",
    "appropriate",
];

/// Characters counted for punctuation diversity.
pub const PUNCTUATION: &[char] = &['!', '?', '.', ';', ':', ',', '-', '\u{2014}', '\u{2013}'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopword_list_has_no_duplicates() {
        assert_eq!(STOPWORD_SET.len(), STOPWORDS.len());
        assert!(STOPWORDS.len() >= 110);
    }

    #[test]
    fn lookups() {
        assert!(is_stopword("the"));
        assert!(!is_stopword("quantum"));
        assert_eq!(word_probability("the"), 0.2);
        assert_eq!(word_probability("zebra"), UNLISTED_WORD_PROBABILITY);
    }
}
