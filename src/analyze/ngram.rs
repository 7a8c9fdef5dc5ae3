//! N-gram signature: how repetitive word transitions are.

use std::collections::HashMap;

use super::bands;
use super::entropy::{frequencies, shannon_entropy};
use super::signal::SignalOutcome;

const MIN_TOKENS: usize = 3;
const FALLBACK: f64 = 0.5;
const BIGRAM_WEIGHT: f64 = 0.6;
const TRIGRAM_WEIGHT: f64 = 0.4;

/// Space-joined n-grams in order.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join(" ")).collect()
}

pub fn ngram_frequencies(grams: &[String]) -> HashMap<&str, usize> {
    frequencies(grams.iter().map(String::as_str))
}

/// Distinct n-grams seen more than once, over distinct n-grams.
pub fn repeated_ratio(freq: &HashMap<&str, usize>) -> f64 {
    if freq.is_empty() {
        return 0.0;
    }
    let repeated = freq.values().filter(|&&c| c > 1).count();
    repeated as f64 / freq.len() as f64
}

pub fn evaluate(tokens: &[String]) -> SignalOutcome {
    if tokens.len() < MIN_TOKENS {
        return SignalOutcome::fixed(FALLBACK);
    }

    let bigrams = ngrams(tokens, 2);
    let bigram_entropy = shannon_entropy(&ngram_frequencies(&bigrams), bigrams.len());

    let trigrams = ngrams(tokens, 3);
    let trigram_repetition = repeated_ratio(&ngram_frequencies(&trigrams));

    let signature = bands::BIGRAM_ENTROPY.score(bigram_entropy) * BIGRAM_WEIGHT
        + bands::TRIGRAM_REPETITION.score(trigram_repetition) * TRIGRAM_WEIGHT;
    SignalOutcome::fixed(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn builds_ordered_ngrams() {
        let toks = tokenize("a b c d");
        assert_eq!(ngrams(&toks, 2), vec!["a b", "b c", "c d"]);
        assert_eq!(ngrams(&toks, 3), vec!["a b c", "b c d"]);
        assert!(ngrams(&toks, 5).is_empty());
    }

    #[test]
    fn short_input_uses_fallback() {
        assert_eq!(evaluate(&tokenize("two words")).score, 0.5);
    }

    #[test]
    fn short_text_without_repeats() {
        // Low bigram entropy (few bigrams) → 1.0*0.6; no repeated trigram → 0.2*0.4.
        let out = evaluate(&tokenize("one two three four five"));
        assert!((out.score - 0.68).abs() < 1e-12);
    }

    #[test]
    fn repeated_trigrams_raise_the_signature() {
        let out = evaluate(&tokenize("the cat sat on the mat the cat sat on the mat"));
        assert!((out.score - 0.92).abs() < 1e-12);
    }

    #[test]
    fn long_varied_text_drops_bigram_indicator() {
        // 400 distinct tokens → bigram entropy ≈ log2(399) > 8.2
        let toks: Vec<String> = (0..400).map(|i| format!("w{i}")).collect();
        let out = evaluate(&toks);
        assert!((out.score - 0.08).abs() < 1e-12);
    }
}
