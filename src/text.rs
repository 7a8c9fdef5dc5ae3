// src/text.rs
//! Tokenizer primitives: lowercase word tokens and sentence splitting.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9_]+").expect("word regex"));
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence regex"));

/// Lowercase word tokens in order of appearance. Duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split on runs of `.`, `!`, `?`, trim, drop empties.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-delimited word count (counts punctuation-only chunks too).
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_lowercases_and_keeps_duplicates() {
        let toks = tokenize("The cat, the CAT_2 and the dog!");
        assert_eq!(toks, vec!["the", "cat", "the", "cat_2", "and", "the", "dog"]);
    }

    #[test]
    fn tokenizer_splits_contractions_and_ignores_symbols() {
        assert_eq!(tokenize("isn't it?"), vec!["isn", "t", "it"]);
        assert!(tokenize("~~~ --- !!!").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn sentences_split_on_punctuation_runs() {
        let s = split_sentences("Hello there!! How are you?  Fine... ok");
        assert_eq!(s, vec!["Hello there", "How are you", "Fine", "ok"]);
    }

    #[test]
    fn no_terminal_punctuation_is_one_sentence() {
        assert_eq!(split_sentences("  just one line  "), vec!["just one line"]);
        assert!(split_sentences("   \n\t ").is_empty());
        assert!(split_sentences("?!.").is_empty());
    }
}
