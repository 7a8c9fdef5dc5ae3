//! Fixed ensemble weights.
//!
//! Weights are held in hundredths so the "sums to exactly 1.0" invariant is an
//! integer identity rather than a floating-point approximation:
//!
//! | signal      | weight |
//! |-------------|--------|
//! | entropy     | 0.25   |
//! | burstiness  | 0.20   |
//! | n-gram      | 0.15   |
//! | semantic    | 0.10   |
//! | lexical     | 0.10   |
//! | repetition  | 0.10   |
//! | readability | 0.05   |
//! | stopwords   | 0.05   |

use serde::Serialize;

use super::signal::SignalKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Weights {
    pub w_entropy: u32,
    pub w_burstiness: u32,
    pub w_ngram: u32,
    pub w_semantic: u32,
    pub w_lexical: u32,
    pub w_repetition: u32,
    pub w_readability: u32,
    pub w_stopwords: u32,
}

pub const WEIGHTS: Weights = Weights {
    w_entropy: 25,
    w_burstiness: 20,
    w_ngram: 15,
    w_semantic: 10,
    w_lexical: 10,
    w_repetition: 10,
    w_readability: 5,
    w_stopwords: 5,
};

impl Weights {
    pub const fn hundredths(&self, kind: SignalKind) -> u32 {
        match kind {
            SignalKind::Entropy => self.w_entropy,
            SignalKind::Burstiness => self.w_burstiness,
            SignalKind::NGram => self.w_ngram,
            SignalKind::Semantic => self.w_semantic,
            SignalKind::Lexical => self.w_lexical,
            SignalKind::Repetition => self.w_repetition,
            SignalKind::Readability => self.w_readability,
            SignalKind::Stopwords => self.w_stopwords,
        }
    }

    pub fn total_hundredths(&self) -> u32 {
        SignalKind::ALL.iter().map(|k| self.hundredths(*k)).sum()
    }
}

// Compile-time guard on the sum.
const _: () = assert!(
    WEIGHTS.w_entropy
        + WEIGHTS.w_burstiness
        + WEIGHTS.w_ngram
        + WEIGHTS.w_semantic
        + WEIGHTS.w_lexical
        + WEIGHTS.w_repetition
        + WEIGHTS.w_readability
        + WEIGHTS.w_stopwords
        == 100
);
