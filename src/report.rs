// src/report.rs
//! Immutable analysis report returned to callers (and serialized by the API).

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::analyze::lexical::unique_count;
use crate::analyze::scoring::Confidence;
use crate::analyze::signal::{SignalKind, SignalRecord};
use crate::lexicon::PUNCTUATION;
use crate::text::whitespace_word_count;

/// Tier derived from the percentage, shown as the headline verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Classification {
    #[serde(rename = "Definitely Human")]
    DefinitelyHuman,
    #[serde(rename = "Likely Human")]
    LikelyHuman,
    #[serde(rename = "Mixed/Uncertain")]
    Mixed,
    #[serde(rename = "Likely AI")]
    LikelyAi,
    #[serde(rename = "Definitely AI")]
    DefinitelyAi,
}

impl Classification {
    pub fn from_percentage(p: u8) -> Self {
        match p {
            0..=19 => Classification::DefinitelyHuman,
            20..=39 => Classification::LikelyHuman,
            40..=59 => Classification::Mixed,
            60..=79 => Classification::LikelyAi,
            _ => Classification::DefinitelyAi,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::DefinitelyHuman => "Definitely Human",
            Classification::LikelyHuman => "Likely Human",
            Classification::Mixed => "Mixed/Uncertain",
            Classification::LikelyAi => "Likely AI",
            Classification::DefinitelyAi => "Definitely AI",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive counts over the analyzed text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub unique_words: usize,
    pub sentences: usize,
    pub avg_word_len: f64,
    pub avg_sentence_len: f64,
    pub punctuation_diversity: f64,
}

impl TextStats {
    pub fn compute(text: &str, tokens: &[String], sentence_count: usize) -> Self {
        let words = whitespace_word_count(text);
        let non_space = text.chars().filter(|c| !c.is_whitespace()).count();

        Self {
            chars: text.chars().count(),
            words,
            unique_words: unique_count(tokens),
            sentences: sentence_count,
            avg_word_len: ratio(non_space, words),
            avg_sentence_len: ratio(words, sentence_count),
            punctuation_diversity: punctuation_diversity(text),
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Distinct punctuation marks over total punctuation marks.
pub fn punctuation_diversity(text: &str) -> f64 {
    let marks: Vec<char> = text.chars().filter(|c| PUNCTUATION.contains(c)).collect();
    let distinct = marks.iter().collect::<HashSet<_>>().len();
    ratio(distinct, marks.len())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub percentage: u8,
    pub classification: Classification,
    pub confidence: Confidence,
    pub agreement: f64,
    /// Mean per-sentence perplexity proxy.
    pub perplexity: f64,
    pub signals: Vec<SignalRecord>,
    pub stats: TextStats,
}

impl AnalysisReport {
    pub fn signal(&self, kind: SignalKind) -> Option<&SignalRecord> {
        self.signals.iter().find(|r| r.kind == kind)
    }

    pub fn human_percentage(&self) -> u8 {
        100 - self.percentage
    }
}
