//! Semantic-flow consistency: how uniformly sentences lean on stock connective
//! and formal vocabulary, discounted for text that reads as classroom or
//! academic writing by a human.

use super::signal::SignalOutcome;
use crate::lexicon::{
    ACADEMIC_MARKERS, FORMAL_MARKERS, INSTRUCTIONAL_MARKERS, PASSIVE_MARKERS, QUALIFIERS,
    TRANSITIONS,
};

const MIN_SENTENCES: usize = 2;
const FALLBACK: f64 = 0.5;
const UNIFORM_RATIO: f64 = 0.6;
const SPARSE_SCALE: f64 = 0.3;
const PASSIVE_MIN_CHARS: usize = 20;
const CONTEXT_MIN_MARKERS: usize = 2;
const INSTRUCTIONAL_PENALTY: f64 = 0.35;
const ACADEMIC_PENALTY: f64 = 0.20;

/// Consistency score plus the penalty subtracted from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Semantic {
    pub outcome: SignalOutcome,
    /// Consistency before the context penalty; read by the confidence formula.
    pub consistency: f64,
    pub penalty: f64,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn count_present(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| haystack.contains(*n)).count()
}

fn has_marker(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    let passive =
        contains_any(&lower, PASSIVE_MARKERS) && lower.chars().count() > PASSIVE_MIN_CHARS;
    contains_any(&lower, TRANSITIONS)
        || contains_any(&lower, QUALIFIERS)
        || contains_any(&lower, FORMAL_MARKERS)
        || passive
}

pub fn consistency(sentences: &[&str]) -> f64 {
    if sentences.len() < MIN_SENTENCES {
        return FALLBACK;
    }
    let marked = sentences.iter().filter(|s| has_marker(s)).count();
    let ratio = marked as f64 / sentences.len() as f64;
    if ratio > UNIFORM_RATIO {
        ratio.min(1.0)
    } else {
        ratio * SPARSE_SCALE
    }
}

pub fn context_penalty(text: &str) -> f64 {
    let lower = text.to_lowercase();
    if count_present(&lower, INSTRUCTIONAL_MARKERS) >= CONTEXT_MIN_MARKERS {
        INSTRUCTIONAL_PENALTY
    } else if count_present(&lower, ACADEMIC_MARKERS) >= CONTEXT_MIN_MARKERS {
        ACADEMIC_PENALTY
    } else {
        0.0
    }
}

pub fn evaluate(text: &str, sentences: &[&str]) -> Semantic {
    let c = consistency(sentences);
    let penalty = context_penalty(text);
    Semantic {
        outcome: SignalOutcome::new(c, (c - penalty).max(0.0)),
        consistency: c,
        penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_sentences;

    #[test]
    fn single_sentence_uses_fallback_before_penalty() {
        let text = "Nothing to see";
        let out = evaluate(text, &split_sentences(text));
        assert_eq!(out.consistency, 0.5);
        assert_eq!(out.outcome.score, 0.5);

        let text = "The student will write an essay";
        let out = evaluate(text, &split_sentences(text));
        assert_eq!(out.penalty, 0.35);
        assert!((out.outcome.score - 0.15).abs() < 1e-12);
    }

    #[test]
    fn uniform_marker_use_keeps_full_ratio() {
        let text = "However, the plan works. The data reveals a trend. It is clearly the case here.";
        let s = split_sentences(text);
        assert_eq!(consistency(&s), 1.0);
    }

    #[test]
    fn sparse_marker_use_is_scaled_down() {
        let text = "Dogs bark. Cats nap. Birds sing loudly. However, fish swim.";
        let c = consistency(&split_sentences(text));
        assert!((c - 0.25 * 0.3).abs() < 1e-12);
    }

    #[test]
    fn short_sentences_do_not_count_passive() {
        // "is" appears but the sentence is under 20 chars.
        assert!(!has_marker("Fish is food"));
        assert!(has_marker("The fish is food for the bears"));
    }

    #[test]
    fn passive_length_is_measured_after_trimming() {
        // 20 chars once trimmed; the leading space after "nap." does not count.
        assert!(!has_marker("A fish is a nice pet"));
        assert!(has_marker("A fish is a nice pets"));
        let c = consistency(&split_sentences("Dogs nap. A fish is a nice pet."));
        assert_eq!(c, 0.0);
    }

    #[test]
    fn academic_penalty_applies_without_instructional_context() {
        assert_eq!(context_penalty("Moreover, the result is significant"), 0.20);
        assert_eq!(context_penalty("plain words only"), 0.0);
    }

    #[test]
    fn score_floors_at_zero() {
        let text = "Dogs bark. Cats nap. For example, a student may explain it.";
        let out = evaluate(text, &split_sentences(text));
        assert_eq!(out.penalty, 0.35);
        assert_eq!(out.outcome.score, 0.0);
    }
}
