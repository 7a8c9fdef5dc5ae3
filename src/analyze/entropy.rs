//! Word-distribution entropy.

use std::collections::HashMap;

use super::bands;
use super::signal::SignalOutcome;

/// Occurrence count per distinct item.
pub fn frequencies<'a, I>(items: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut freq = HashMap::new();
    for it in items {
        *freq.entry(it).or_insert(0) += 1;
    }
    freq
}

/// Shannon entropy in bits: -Σ p·log2(p).
pub fn shannon_entropy(freq: &HashMap<&str, usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    freq.values()
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum()
}

pub fn word_entropy(tokens: &[String]) -> f64 {
    let freq = frequencies(tokens.iter().map(String::as_str));
    shannon_entropy(&freq, tokens.len())
}

pub fn evaluate(tokens: &[String]) -> SignalOutcome {
    let h = word_entropy(tokens);
    SignalOutcome::new(h, bands::ENTROPY.score(h))
}
