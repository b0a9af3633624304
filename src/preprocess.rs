use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("valid regex"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("valid regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprocessedText {
    pub original_text: String,
    pub cleaned_text: String,
    pub tokens: Vec<String>,
    pub processed_text: String,
}

pub struct TextPreprocessor {
    stop_words: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self {
            stop_words: STOPWORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Strips URLs and e-mail addresses and collapses whitespace.
    pub fn clean_text(&self, text: &str) -> String {
        let text = URL_PATTERN.replace_all(text, "");
        let text = EMAIL_PATTERN.replace_all(&text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        text.trim().to_string()
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Drops tokens made only of punctuation that appears contiguously in the
    /// ASCII punctuation set (so "!" and "()" go, "!!" stays).
    pub fn remove_punctuation(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !PUNCTUATION.contains(token.as_str()))
            .collect()
    }

    pub fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(token.to_lowercase().as_str()))
            .collect()
    }

    /// Lower-cases and reduces each token to its root form.
    pub fn lemmatize(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| self.stemmer.stem(&token.to_lowercase()).into_owned())
            .collect()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    pub fn preprocess(
        &self,
        text: &str,
        remove_stopwords: bool,
        lemmatize: bool,
    ) -> PreprocessedText {
        let cleaned_text = self.clean_text(text);
        let mut tokens = self.remove_punctuation(self.tokenize(&cleaned_text));

        if remove_stopwords {
            tokens = self.remove_stopwords(tokens);
        }
        if lemmatize {
            tokens = self.lemmatize(tokens);
        }

        let processed_text = tokens.join(" ");
        PreprocessedText {
            original_text: text.to_string(),
            cleaned_text,
            tokens,
            processed_text,
        }
    }
}

/// One-shot preprocessing with a fresh preprocessor.
pub fn preprocess_text(text: &str, remove_stopwords: bool, lemmatize: bool) -> PreprocessedText {
    TextPreprocessor::new().preprocess(text, remove_stopwords, lemmatize)
}
