//! Repetition signature over bigrams and trigrams.

use super::bands;
use super::ngram::{ngram_frequencies, ngrams, repeated_ratio};
use super::signal::SignalOutcome;

const MIN_TOKENS: usize = 6;
const FALLBACK: f64 = 0.35;
const BIGRAM_WEIGHT: f64 = 0.6;
const TRIGRAM_WEIGHT: f64 = 0.4;

/// 0.6·(repeated/distinct bigrams) + 0.4·(repeated/distinct trigrams).
pub fn repetition_ratio(tokens: &[String]) -> f64 {
    let bigrams = ngrams(tokens, 2);
    let trigrams = ngrams(tokens, 3);
    repeated_ratio(&ngram_frequencies(&bigrams)) * BIGRAM_WEIGHT
        + repeated_ratio(&ngram_frequencies(&trigrams)) * TRIGRAM_WEIGHT
}

pub fn evaluate(tokens: &[String]) -> SignalOutcome {
    if tokens.len() < MIN_TOKENS {
        return SignalOutcome::fixed(FALLBACK);
    }
    let r = repetition_ratio(tokens);
    SignalOutcome::new(r, bands::REPETITION.score(r))
}
