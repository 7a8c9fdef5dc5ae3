//! Flesch Reading Ease with a vowel-group syllable estimate.

use super::bands;
use super::signal::SignalOutcome;

const FALLBACK: f64 = 0.5;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-group runs after dropping one trailing silent `e`; at least 1.
pub fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let stem = match lower.strip_suffix('e') {
        Some(s) if !s.is_empty() => s,
        _ => lower.as_str(),
    };

    let mut groups = 0;
    let mut in_group = false;
    for c in stem.chars() {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups.max(1)
}

pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    let w = words as f64;
    206.835 - 1.015 * (w / sentences as f64) - 84.6 * (syllables as f64 / w)
}

pub fn evaluate(tokens: &[String], sentence_count: usize) -> SignalOutcome {
    if tokens.is_empty() || sentence_count == 0 {
        return SignalOutcome::new(0.0, FALLBACK);
    }
    let total: usize = tokens.iter().map(|t| syllables(t)).sum();
    let flesch = flesch_reading_ease(tokens.len(), sentence_count, total);
    SignalOutcome::new(flesch, bands::READABILITY.score(flesch))
}
