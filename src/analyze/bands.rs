//! Ordered threshold tables mapping a raw statistic to an AI-likelihood.
//!
//! Each table is a list of `(bound, value)` pairs evaluated top-down; the first
//! bound the statistic satisfies wins, otherwise `otherwise` applies. Earlier
//! rows are the more AI-indicative ones.

/// How a statistic is compared against each bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cmp {
    /// `x < bound`
    Below,
    /// `x > bound`
    Above,
}

#[derive(Clone, Copy, Debug)]
pub struct BandTable {
    pub cmp: Cmp,
    pub bands: &'static [(f64, f64)],
    pub otherwise: f64,
}

impl BandTable {
    pub const fn below(bands: &'static [(f64, f64)], otherwise: f64) -> Self {
        Self {
            cmp: Cmp::Below,
            bands,
            otherwise,
        }
    }

    pub const fn above(bands: &'static [(f64, f64)], otherwise: f64) -> Self {
        Self {
            cmp: Cmp::Above,
            bands,
            otherwise,
        }
    }

    pub fn score(&self, x: f64) -> f64 {
        self.bands
            .iter()
            .find(|(bound, _)| match self.cmp {
                Cmp::Below => x < *bound,
                Cmp::Above => x > *bound,
            })
            .map(|(_, value)| *value)
            .unwrap_or(self.otherwise)
    }
}

pub const ENTROPY: BandTable = BandTable::below(
    &[(3.5, 1.0), (3.8, 0.85), (4.2, 0.6), (4.5, 0.3), (5.5, 0.1)],
    0.02,
);

pub const BURSTINESS: BandTable =
    BandTable::below(&[(0.35, 0.95), (0.6, 0.75), (0.9, 0.55), (1.2, 0.35)], 0.15);

pub const BIGRAM_ENTROPY: BandTable = BandTable::below(&[(8.2, 1.0)], 0.0);

pub const TRIGRAM_REPETITION: BandTable = BandTable::above(&[(0.08, 0.8)], 0.2);

pub const LEXICAL: BandTable =
    BandTable::below(&[(0.40, 0.95), (0.48, 0.75), (0.56, 0.55), (0.65, 0.35)], 0.15);

pub const REPETITION: BandTable = BandTable::above(&[(0.10, 0.95), (0.06, 0.75), (0.03, 0.50)], 0.25);

pub const READABILITY: BandTable =
    BandTable::below(&[(40.0, 0.80), (55.0, 0.60), (70.0, 0.45), (85.0, 0.35)], 0.20);

// Not monotone: very stopword-heavy text drifts back toward AI.
pub const STOPWORDS: BandTable =
    BandTable::below(&[(0.35, 0.80), (0.45, 0.60), (0.55, 0.40), (0.65, 0.50)], 0.70);
