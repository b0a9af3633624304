use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EXCLAMATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"!+").expect("valid regex"));

static QUESTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?+").expect("valid regex"));

static CAPS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("valid regex"));

static ELLIPSIS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("valid regex"));

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Punctuation patterns found in a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationSignal {
    pub exclamations: usize,
    pub questions: usize,
    pub caps_words: usize,
    pub ellipsis: usize,
    pub repeated_chars: usize,
}

impl PunctuationSignal {
    pub fn any(&self) -> bool {
        self.exclamations + self.questions + self.caps_words + self.ellipsis + self.repeated_chars
            > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub word_count: usize,
    pub char_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
}

pub fn punctuation(text: &str) -> PunctuationSignal {
    PunctuationSignal {
        exclamations: EXCLAMATION_PATTERN.find_iter(text).count(),
        questions: QUESTION_PATTERN.find_iter(text).count(),
        caps_words: CAPS_PATTERN.find_iter(text).count(),
        ellipsis: ELLIPSIS_PATTERN.find_iter(text).count(),
        repeated_chars: repeated_runs(text),
    }
}

/// Counts maximal runs of three or more identical characters ("sooo", "!!!").
/// Newlines never start or extend a run.
pub fn repeated_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut prev: Option<char> = None;
    let mut len = 0usize;

    for ch in text.chars() {
        if ch != '\n' && prev == Some(ch) {
            len += 1;
            continue;
        }
        if len >= 3 {
            runs += 1;
        }
        if ch == '\n' {
            prev = None;
            len = 0;
        } else {
            prev = Some(ch);
            len = 1;
        }
    }
    if len >= 3 {
        runs += 1;
    }
    runs
}

pub fn statistics(text: &str) -> TextStatistics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let letters: usize = words
            .iter()
            .map(|w| {
                w.trim_matches(|c| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
                    .chars()
                    .count()
            })
            .sum();
        letters as f64 / words.len() as f64
    };

    let avg_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        words.len() as f64 / sentence_count as f64
    };

    TextStatistics {
        word_count: words.len(),
        char_count: text.chars().count(),
        sentence_count,
        avg_word_length,
        avg_sentence_length,
    }
}
