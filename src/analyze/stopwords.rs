//! Stopword balance.

use super::bands;
use super::signal::SignalOutcome;
use crate::lexicon::is_stopword;

const FALLBACK: f64 = 0.5;

pub fn stopword_ratio(tokens: &[String]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let n = tokens.iter().filter(|t| is_stopword(t)).count();
    Some(n as f64 / tokens.len() as f64)
}

pub fn evaluate(tokens: &[String]) -> SignalOutcome {
    match stopword_ratio(tokens) {
        Some(r) => SignalOutcome::new(r, bands::STOPWORDS.score(r)),
        None => SignalOutcome::fixed(FALLBACK),
    }
}
