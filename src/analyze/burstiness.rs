//! Sentence-rhythm variance built on a per-sentence perplexity proxy.
//!
//! The proxy is not language-model perplexity: it is the mean "predictability"
//! of a sentence's words from a small common-word table, nudged by a structural
//! bonus for stock sentence openers, then mapped onto roughly [2, 6].

use super::bands;
use super::signal::SignalOutcome;
use crate::lexicon::{word_probability, DISCOURSE_STARTERS};
use crate::text::tokenize;

const STARTER_BONUS: f64 = 0.05;

/// Burstiness outcome plus the mean proxy, which the confidence formula reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burstiness {
    pub outcome: SignalOutcome,
    pub mean_perplexity: f64,
}

fn opens_with_starter(sentence: &str) -> bool {
    let trimmed = sentence.trim_start();
    let Some(first) = trimmed.split_whitespace().next() else {
        return false;
    };
    // The opener must be followed by whitespace, not end the sentence.
    if first.len() == trimmed.len() {
        return false;
    }
    // Case-sensitive: a capitalized opener gets no bonus.
    DISCOURSE_STARTERS.iter().any(|s| first == *s)
}

pub fn sentence_perplexity(sentence: &str) -> f64 {
    let words = tokenize(sentence);
    if words.is_empty() {
        return 0.0;
    }
    let predictability =
        words.iter().map(|w| word_probability(w)).sum::<f64>() / words.len() as f64;
    let bonus = if opens_with_starter(sentence) {
        STARTER_BONUS
    } else {
        0.0
    };
    2.0 + (1.0 - (predictability + bonus)) * 4.0
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 below two samples.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

pub fn evaluate(sentences: &[&str]) -> Burstiness {
    let perplexities: Vec<f64> = sentences.iter().map(|s| sentence_perplexity(s)).collect();
    let b = population_std_dev(&perplexities);
    Burstiness {
        outcome: SignalOutcome::new(b, bands::BURSTINESS.score(b)),
        mean_perplexity: mean(&perplexities),
    }
}
