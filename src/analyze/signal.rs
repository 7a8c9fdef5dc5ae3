//! Signal identities and the per-signal record carried in the report.

use serde::Serialize;

use super::weights::WEIGHTS;

/// The eight signals, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Entropy,
    Burstiness,
    NGram,
    Semantic,
    Lexical,
    Repetition,
    Readability,
    Stopwords,
}

impl SignalKind {
    pub const ALL: [SignalKind; 8] = [
        SignalKind::Entropy,
        SignalKind::Burstiness,
        SignalKind::NGram,
        SignalKind::Semantic,
        SignalKind::Lexical,
        SignalKind::Repetition,
        SignalKind::Readability,
        SignalKind::Stopwords,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Entropy => "Entropy",
            SignalKind::Burstiness => "Burstiness",
            SignalKind::NGram => "N-gram",
            SignalKind::Semantic => "Semantic",
            SignalKind::Lexical => "Lexical",
            SignalKind::Repetition => "Repetition",
            SignalKind::Readability => "Readability",
            SignalKind::Stopwords => "Stopwords",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SignalKind::Entropy => "Shannon entropy of the word distribution; low entropy reads as generated",
            SignalKind::Burstiness => "Variation of sentence-level predictability; flat rhythm reads as generated",
            SignalKind::NGram => "Bigram entropy and trigram repetition of word transitions",
            SignalKind::Semantic => "Share of sentences carrying transition, qualifier, passive or formal markers",
            SignalKind::Lexical => "Type/token ratio; a narrow vocabulary reads as generated",
            SignalKind::Repetition => "Repeated bigrams and trigrams relative to distinct ones",
            SignalKind::Readability => "Flesch Reading Ease; dense, uniform prose reads as generated",
            SignalKind::Stopwords => "Share of function words against natural lexical balance",
        }
    }

    /// Ensemble weight in hundredths.
    pub fn weight_hundredths(self) -> u32 {
        WEIGHTS.hundredths(self)
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_hundredths()) / 100.0
    }
}

/// Raw statistic plus its normalized AI-likelihood in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalOutcome {
    pub raw: f64,
    pub score: f64,
}

impl SignalOutcome {
    pub fn new(raw: f64, score: f64) -> Self {
        Self {
            raw,
            score: score.clamp(0.0, 1.0),
        }
    }

    /// Fallback for degenerate input: the score doubles as the raw value.
    pub fn fixed(score: f64) -> Self {
        Self::new(score, score)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignalRecord {
    pub kind: SignalKind,
    pub name: &'static str,
    pub weight: f64,
    pub raw: f64,
    pub score: f64,
    pub description: &'static str,
}

impl SignalRecord {
    pub fn new(kind: SignalKind, outcome: SignalOutcome) -> Self {
        Self {
            kind,
            name: kind.name(),
            weight: kind.weight(),
            raw: outcome.raw,
            score: outcome.score,
            description: kind.description(),
        }
    }

    pub fn contribution(&self) -> f64 {
        self.weight * self.score
    }
}
