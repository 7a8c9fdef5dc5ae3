// src/analyze/mod.rs
//! Analysis pipeline entry: validates input, runs the eight signals and
//! assembles the report.
//!
//! Order:
//! 1) trim + length gate (`DetectError` before any signal runs)
//! 2) tokens and sentences
//! 3) eight independent signals (no signal reads another's output)
//! 4) weighted percentage + agreement-based confidence
//! 5) `AnalysisReport`

pub mod bands;
pub mod burstiness;
pub mod debug;
pub mod entropy;
pub mod lexical;
pub mod ngram;
pub mod readability;
pub mod repetition;
pub mod scoring;
pub mod semantic;
pub mod signal;
pub mod stopwords;
pub mod weights;

use tracing::debug;

use crate::error::{DetectError, DetectResult};
use crate::report::{AnalysisReport, Classification, TextStats};
use crate::text::{split_sentences, tokenize};

// Re-export convenient types.
pub use crate::analyze::scoring::{AgreementInputs, Confidence};
pub use crate::analyze::signal::{SignalKind, SignalOutcome, SignalRecord};
pub use crate::analyze::weights::{Weights, WEIGHTS};

/// Minimum trimmed length accepted by default.
pub const MIN_TEXT_CHARS: usize = 50;

/// Stateless detector; the only knob is the minimum input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detector {
    min_chars: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            min_chars: MIN_TEXT_CHARS,
        }
    }
}

impl Detector {
    /// `min_chars` is floored at 1 so empty input is always rejected.
    pub fn new(min_chars: usize) -> Self {
        Self {
            min_chars: min_chars.max(1),
        }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Check the length gate on the trimmed text and return it.
    pub fn validate<'a>(&self, text: &'a str) -> DetectResult<&'a str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DetectError::Empty);
        }
        let chars = trimmed.chars().count();
        if chars < self.min_chars {
            return Err(DetectError::TooShort {
                chars,
                min: self.min_chars,
            });
        }
        Ok(trimmed)
    }

    pub fn analyze(&self, text: &str) -> DetectResult<AnalysisReport> {
        let trimmed = self.validate(text)?;
        let report = run_pipeline(trimmed);
        debug!(
            id = %anon_hash(trimmed),
            percentage = report.percentage,
            confidence = %report.confidence,
            "analysis complete"
        );
        Ok(report)
    }
}

/// Analyze with the default 50-character gate.
pub fn analyze_text(text: &str) -> DetectResult<AnalysisReport> {
    Detector::default().analyze(text)
}

/// Run every signal on already-trimmed text. Never fails: degenerate input
/// falls back to each signal's fixed value.
pub fn run_pipeline(text: &str) -> AnalysisReport {
    let tokens = tokenize(text);
    let sentences = split_sentences(text);

    let entropy = entropy::evaluate(&tokens);
    let burst = burstiness::evaluate(&sentences);
    let ngram = ngram::evaluate(&tokens);
    let sem = semantic::evaluate(text, &sentences);
    let lexical = lexical::evaluate(&tokens);
    let repetition = repetition::evaluate(&tokens);
    let readability = readability::evaluate(&tokens, sentences.len());
    let stopwords = stopwords::evaluate(&tokens);

    let signals = vec![
        SignalRecord::new(SignalKind::Entropy, entropy),
        SignalRecord::new(SignalKind::Burstiness, burst.outcome),
        SignalRecord::new(SignalKind::NGram, ngram),
        SignalRecord::new(SignalKind::Semantic, sem.outcome),
        SignalRecord::new(SignalKind::Lexical, lexical),
        SignalRecord::new(SignalKind::Repetition, repetition),
        SignalRecord::new(SignalKind::Readability, readability),
        SignalRecord::new(SignalKind::Stopwords, stopwords),
    ];

    let percentage = scoring::percentage(&signals);
    let agreement = scoring::agreement(&AgreementInputs {
        burstiness: burst.outcome.raw,
        perplexity: burst.mean_perplexity,
        ngram: ngram.score,
        semantic: sem.consistency,
    });

    AnalysisReport {
        percentage,
        classification: Classification::from_percentage(percentage),
        confidence: Confidence::from_agreement(agreement),
        agreement,
        perplexity: burst.mean_perplexity,
        signals,
        stats: TextStats::compute(text, &tokens, sentences.len()),
    }
}

/// Short anonymized id for log lines; raw text is never logged.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
