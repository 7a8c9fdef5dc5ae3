//! Lexical richness (type/token ratio).

use std::collections::HashSet;

use super::bands;
use super::signal::SignalOutcome;

const FALLBACK: f64 = 0.5;

pub fn unique_count(tokens: &[String]) -> usize {
    tokens.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

pub fn type_token_ratio(tokens: &[String]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    Some(unique_count(tokens) as f64 / tokens.len() as f64)
}

pub fn evaluate(tokens: &[String]) -> SignalOutcome {
    match type_token_ratio(tokens) {
        Some(ttr) => SignalOutcome::new(ttr, bands::LEXICAL.score(ttr)),
        None => SignalOutcome::fixed(FALLBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn all_distinct_is_human_band() {
        let out = evaluate(&tokenize("alpha beta gamma delta"));
        assert_eq!(out.raw, 1.0);
        assert_eq!(out.score, 0.15);
    }

    #[test]
    fn narrow_vocabulary_is_ai_band() {
        let out = evaluate(&tokenize("go go go go stop"));
        assert!((out.raw - 0.4).abs() < 1e-12);
        assert_eq!(out.score, 0.75);
    }

    #[test]
    fn no_tokens_uses_fallback() {
        assert_eq!(evaluate(&[]).score, 0.5);
    }
}
