//! Ensemble scoring and the fast-signal agreement behind the confidence label.
//!
//! Two distinct measurements live here:
//! - `percentage`: Σ weight·score over all eight signal records, clamped to
//!   [0,1], scaled to 0–100 and rounded.
//! - `agreement`: a smaller weighted vote over four raw statistics (burstiness,
//!   mean perplexity, n-gram signature, semantic consistency), each with its own
//!   thresholds. Its burstiness cut-offs (0.7 / 1.0) intentionally differ from
//!   the burstiness band table; the two numbers are calibrated separately.

use serde::Serialize;
use std::fmt;

use super::bands::BandTable;
use super::signal::SignalRecord;

const AGREE_BURSTINESS: BandTable = BandTable::below(&[(0.7, 1.0), (1.0, 0.5)], 0.0);
const AGREE_PERPLEXITY: BandTable = BandTable::below(&[(3.5, 1.0), (4.0, 0.5)], 0.0);
const AGREE_NGRAM: BandTable = BandTable::above(&[(0.65, 1.0), (0.50, 0.5)], 0.0);
const AGREE_SEMANTIC: BandTable = BandTable::above(&[(0.55, 1.0), (0.40, 0.5)], 0.0);

const W_AGREE_BURSTINESS: f64 = 0.30;
const W_AGREE_PERPLEXITY: f64 = 0.45;
const W_AGREE_NGRAM: f64 = 0.15;
const W_AGREE_SEMANTIC: f64 = 0.10;

/// Weighted sum of sub-scores, unclamped.
pub fn weighted_sum(records: &[SignalRecord]) -> f64 {
    records.iter().map(SignalRecord::contribution).sum()
}

pub fn percentage(records: &[SignalRecord]) -> u8 {
    (weighted_sum(records).clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Raw statistics the agreement vote reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AgreementInputs {
    pub burstiness: f64,
    pub perplexity: f64,
    pub ngram: f64,
    pub semantic: f64,
}

pub fn agreement(inputs: &AgreementInputs) -> f64 {
    AGREE_BURSTINESS.score(inputs.burstiness) * W_AGREE_BURSTINESS
        + AGREE_NGRAM.score(inputs.ngram) * W_AGREE_NGRAM
        + AGREE_SEMANTIC.score(inputs.semantic) * W_AGREE_SEMANTIC
        + AGREE_PERPLEXITY.score(inputs.perplexity) * W_AGREE_PERPLEXITY
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Confidence {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Confidence {
    pub fn from_agreement(a: f64) -> Self {
        if a >= 0.85 {
            Confidence::VeryHigh
        } else if a >= 0.70 {
            Confidence::High
        } else if a >= 0.50 {
            Confidence::Medium
        } else if a >= 0.30 {
            Confidence::Low
        } else {
            Confidence::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::VeryLow => "Very Low",
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
            Confidence::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::signal::{SignalKind, SignalOutcome};

    fn records(scores: [f64; 8]) -> Vec<SignalRecord> {
        SignalKind::ALL
            .iter()
            .zip(scores)
            .map(|(k, s)| SignalRecord::new(*k, SignalOutcome::fixed(s)))
            .collect()
    }

    #[test]
    fn all_ones_is_one_hundred() {
        assert_eq!(percentage(&records([1.0; 8])), 100);
        assert_eq!(percentage(&records([0.0; 8])), 0);
    }

    #[test]
    fn percentage_rounds_weighted_sum() {
        // 0.25*1 + 0.20*0.95 + 0.15*0.5 + 0.10*0.5 + 0.10*0.5 + 0.10*0.35 + 0.05*0.5 + 0.05*0.5
        let r = records([1.0, 0.95, 0.5, 0.5, 0.5, 0.35, 0.5, 0.5]);
        assert_eq!(percentage(&r), 70);
    }

    #[test]
    fn percentage_is_monotone_per_signal() {
        let base = [0.3, 0.4, 0.5, 0.2, 0.6, 0.25, 0.45, 0.7];
        for i in 0..8 {
            let mut prev = 0u8;
            for step in 0..=20 {
                let mut s = base;
                s[i] = step as f64 / 20.0;
                let p = percentage(&records(s));
                assert!(p >= prev, "signal {i} step {step}: {p} < {prev}");
                prev = p;
            }
        }
    }

    #[test]
    fn agreement_extremes() {
        let strong = AgreementInputs {
            burstiness: 0.1,
            perplexity: 3.0,
            ngram: 0.9,
            semantic: 0.9,
        };
        assert!((agreement(&strong) - 1.0).abs() < 1e-12);
        assert_eq!(Confidence::from_agreement(agreement(&strong)), Confidence::VeryHigh);

        let weak = AgreementInputs {
            burstiness: 2.0,
            perplexity: 5.0,
            ngram: 0.1,
            semantic: 0.1,
        };
        assert_eq!(agreement(&weak), 0.0);
        assert_eq!(Confidence::from_agreement(0.0), Confidence::VeryLow);
    }

    #[test]
    fn agreement_half_credit() {
        let mid = AgreementInputs {
            burstiness: 0.8,
            perplexity: 3.7,
            ngram: 0.6,
            semantic: 0.5,
        };
        assert!((agreement(&mid) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn label_boundaries() {
        assert_eq!(Confidence::from_agreement(0.85), Confidence::VeryHigh);
        assert_eq!(Confidence::from_agreement(0.84), Confidence::High);
        assert_eq!(Confidence::from_agreement(0.70), Confidence::High);
        assert_eq!(Confidence::from_agreement(0.50), Confidence::Medium);
        assert_eq!(Confidence::from_agreement(0.30), Confidence::Low);
        assert_eq!(Confidence::from_agreement(0.29), Confidence::VeryLow);
        assert_eq!(Confidence::VeryHigh.to_string(), "Very High");
        assert_eq!(serde_json::to_string(&Confidence::VeryLow).unwrap(), "\"Very Low\"");
    }
}
