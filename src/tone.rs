//! Lexical tone scoring.
//!
//! A text is scored against ten keyword lexicons, then nudged by punctuation
//! and length heuristics. The result carries raw and normalized scores, the
//! dominant tone with its confidence, and a one-line summary.

use std::collections::HashSet;
use std::fmt;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::lexicon::{title_case, ToneCategory};
use crate::signals::{self, PunctuationSignal, TextStatistics};

pub const EMPTY_SUMMARY: &str = "No valid input provided.";

const MATCHED_WORDS_LIMIT: usize = 5;
const REPORT_PREVIEW_CHARS: usize = 100;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// One automaton over every distinct lower-cased keyword of every lexicon.
struct KeywordMatcher {
    ac: AhoCorasick,
    keywords: Vec<String>,
    /// Per category, in lexicon order: (declared form, keyword id).
    entries: Vec<Vec<(&'static str, usize)>>,
}

static MATCHER: Lazy<KeywordMatcher> = Lazy::new(|| {
    let mut keywords: Vec<String> = Vec::new();
    let mut entries = Vec::with_capacity(ToneCategory::COUNT);

    for cat in ToneCategory::ALL {
        let mut cat_entries = Vec::with_capacity(cat.lexicon().len());
        for &word in cat.lexicon() {
            let lower = word.to_lowercase();
            let id = match keywords.iter().position(|k| *k == lower) {
                Some(id) => id,
                None => {
                    keywords.push(lower);
                    keywords.len() - 1
                }
            };
            cat_entries.push((word, id));
        }
        entries.push(cat_entries);
    }

    let ac = AhoCorasick::new(&keywords).expect("valid keyword automaton");
    KeywordMatcher {
        ac,
        keywords,
        entries,
    }
});

/// A value for each tone category, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerCategory<T>([T; ToneCategory::COUNT]);

impl<T> PerCategory<T> {
    pub fn get(&self, cat: ToneCategory) -> &T {
        &self.0[cat.index()]
    }

    pub fn get_mut(&mut self, cat: ToneCategory) -> &mut T {
        &mut self.0[cat.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToneCategory, &T)> {
        ToneCategory::ALL.into_iter().zip(self.0.iter())
    }
}

impl PerCategory<f64> {
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Categories by descending score; equal scores keep declaration order.
    pub fn ranked(&self) -> Vec<(ToneCategory, f64)> {
        let mut ranked: Vec<(ToneCategory, f64)> = self.iter().map(|(c, v)| (c, *v)).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl<T: Serialize> Serialize for PerCategory<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ToneCategory::COUNT))?;
        for (cat, value) in self.iter() {
            map.serialize_entry(cat.as_str(), value)?;
        }
        map.end()
    }
}

pub type ToneScores = PerCategory<f64>;
pub type MatchedWords = PerCategory<Vec<String>>;

/// The highest-scoring category, or `Neutral` when nothing scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantTone {
    Neutral,
    Tone(ToneCategory),
}

impl DominantTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DominantTone::Neutral => "neutral",
            DominantTone::Tone(cat) => cat.as_str(),
        }
    }

    pub fn category(&self) -> Option<ToneCategory> {
        match self {
            DominantTone::Neutral => None,
            DominantTone::Tone(cat) => Some(*cat),
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, DominantTone::Neutral)
    }
}

impl fmt::Display for DominantTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DominantTone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneAnalysis {
    pub raw_scores: ToneScores,
    pub normalized_scores: ToneScores,
    pub dominant_tone: DominantTone,
    /// Share of the dominant tone in the raw total, percent with 2 decimals.
    pub confidence_level: f64,
    pub punctuation_analysis: PunctuationSignal,
    pub text_statistics: TextStatistics,
    pub matched_words: MatchedWords,
    pub analysis_summary: String,
}

impl ToneAnalysis {
    /// Result for empty or non-text input.
    pub fn empty() -> Self {
        Self {
            raw_scores: ToneScores::default(),
            normalized_scores: ToneScores::default(),
            dominant_tone: DominantTone::Neutral,
            confidence_level: 0.0,
            punctuation_analysis: PunctuationSignal::default(),
            text_statistics: TextStatistics::default(),
            matched_words: MatchedWords::default(),
            analysis_summary: EMPTY_SUMMARY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToneAnalyzer;

impl ToneAnalyzer {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(skip_all)]
    pub fn analyze(&self, text: &str) -> ToneAnalysis {
        if text.is_empty() {
            return ToneAnalysis::empty();
        }

        let text_statistics = signals::statistics(text);
        let (mut scores, matched_words) = keyword_scores(text);
        let punct = signals::punctuation(text);

        apply_punctuation(&mut scores, &punct);
        apply_length(&mut scores, text_statistics.word_count);

        let dominant_tone = dominant(&scores);
        let total = scores.total();
        let confidence = match dominant_tone {
            DominantTone::Tone(cat) if total > 0.0 => scores.get(cat) / total * 100.0,
            _ => 0.0,
        };

        let mut normalized_scores = ToneScores::default();
        if total > 0.0 {
            for cat in ToneCategory::ALL {
                *normalized_scores.get_mut(cat) = round2(scores.get(cat) / total * 100.0);
            }
        }

        let analysis_summary = summarize(dominant_tone, confidence, &scores);
        debug!(dominant = %dominant_tone, confidence, total, "tone scored");

        ToneAnalysis {
            raw_scores: scores,
            normalized_scores,
            dominant_tone,
            confidence_level: round2(confidence),
            punctuation_analysis: punct,
            text_statistics,
            matched_words,
            analysis_summary,
        }
    }

    /// Non-string values score as empty input.
    pub fn analyze_value(&self, value: &serde_json::Value) -> ToneAnalysis {
        match value.as_str() {
            Some(text) => self.analyze(text),
            None => ToneAnalysis::empty(),
        }
    }

    /// Multi-section plain-text report for a single text.
    pub fn detailed_report(&self, text: &str) -> String {
        let analysis = self.analyze(text);
        let mut report = String::new();

        let preview: String = text.chars().take(REPORT_PREVIEW_CHARS).collect();
        let ellipsis = if text.chars().count() > REPORT_PREVIEW_CHARS {
            "..."
        } else {
            ""
        };

        report.push_str(&format!(
            "\n=== TONE ANALYSIS REPORT ===\n\nText: \"{}{}\"\n\n{}\n\n--- DETAILED BREAKDOWN ---\n",
            preview, ellipsis, analysis.analysis_summary
        ));

        for (cat, score) in analysis.normalized_scores.ranked().into_iter().take(3) {
            if score <= 0.0 {
                continue;
            }
            report.push_str(&format!(
                "\n{}: {}%",
                cat.as_str().to_uppercase(),
                share_text(score)
            ));
            let triggers = analysis.matched_words.get(cat);
            if !triggers.is_empty() {
                report.push_str(&format!(" (Triggered by: {})", triggers.join(", ")));
            }
        }

        let stats = &analysis.text_statistics;
        report.push_str(&format!(
            "\n\n--- TEXT STATISTICS ---\nWords: {} | Characters: {} | Sentences: {}\nAvg word length: {:.1} | Avg sentence length: {:.1}\n",
            stats.word_count,
            stats.char_count,
            stats.sentence_count,
            stats.avg_word_length,
            stats.avg_sentence_length
        ));

        let punct = &analysis.punctuation_analysis;
        if punct.any() {
            report.push_str("\n--- PUNCTUATION PATTERNS ---");
            let rows = [
                ("Exclamation marks", punct.exclamations),
                ("Question marks", punct.questions),
                ("ALL CAPS words", punct.caps_words),
                ("Ellipsis", punct.ellipsis),
                ("Repeated characters", punct.repeated_chars),
            ];
            for (label, count) in rows {
                if count > 0 {
                    report.push_str(&format!("\n{}: {}", label, count));
                }
            }
        }

        report
    }
}

/// Each distinct lexicon entry found in the text adds 1, however often it occurs.
fn keyword_scores(text: &str) -> (ToneScores, MatchedWords) {
    let matcher = &*MATCHER;
    let lower = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lower, " ");
    let tokens: HashSet<&str> = stripped.split_whitespace().collect();

    let mut found = vec![false; matcher.keywords.len()];
    for m in matcher.ac.find_overlapping_iter(lower.as_str()) {
        found[m.pattern().as_usize()] = true;
    }

    let mut scores = ToneScores::default();
    let mut matched = MatchedWords::default();
    for (cat, cat_entries) in ToneCategory::ALL.into_iter().zip(&matcher.entries) {
        for &(word, id) in cat_entries {
            if found[id] || tokens.contains(matcher.keywords[id].as_str()) {
                *scores.get_mut(cat) += 1.0;
                let words = matched.get_mut(cat);
                if words.len() < MATCHED_WORDS_LIMIT {
                    words.push(word.to_string());
                }
            }
        }
    }

    (scores, matched)
}

fn apply_punctuation(scores: &mut ToneScores, punct: &PunctuationSignal) {
    use ToneCategory::*;

    let mut bump = |cat: ToneCategory, count: usize, weight: f64| {
        *scores.get_mut(cat) += count as f64 * weight;
    };

    if punct.exclamations > 0 {
        bump(Emotional, punct.exclamations, 1.5);
        bump(Aggressive, punct.exclamations, 1.0);
        bump(Urgent, punct.exclamations, 0.8);
        bump(Supportive, punct.exclamations, 0.5);
    }
    if punct.caps_words > 0 {
        bump(Aggressive, punct.caps_words, 1.0);
        bump(Confident, punct.caps_words, 0.7);
        bump(Urgent, punct.caps_words, 0.8);
    }
    if punct.questions > 0 {
        bump(Tentative, punct.questions, 0.8);
        bump(Questioning, punct.questions, 1.2);
        bump(Analytical, punct.questions, 0.4);
    }
    if punct.ellipsis > 0 {
        bump(Tentative, punct.ellipsis, 0.6);
        bump(Emotional, punct.ellipsis, 0.3);
    }
    if punct.repeated_chars > 0 {
        bump(Casual, punct.repeated_chars, 0.5);
        bump(Emotional, punct.repeated_chars, 0.4);
    }
}

fn apply_length(scores: &mut ToneScores, word_count: usize) {
    if word_count > 100 {
        *scores.get_mut(ToneCategory::Analytical) += 1.0;
        *scores.get_mut(ToneCategory::Formal) += 0.7;
    } else if word_count > 50 {
        *scores.get_mut(ToneCategory::Analytical) += 0.5;
        *scores.get_mut(ToneCategory::Formal) += 0.3;
    }

    if word_count < 15 && *scores.get(ToneCategory::Casual) > 0.0 {
        *scores.get_mut(ToneCategory::Casual) += 1.0;
    }
}

fn dominant(scores: &ToneScores) -> DominantTone {
    let mut best = ToneCategory::ALL[0];
    for cat in ToneCategory::ALL {
        if scores.get(cat) > scores.get(best) {
            best = cat;
        }
    }
    if *scores.get(best) == 0.0 {
        DominantTone::Neutral
    } else {
        DominantTone::Tone(best)
    }
}

fn summarize(dominant: DominantTone, confidence: f64, scores: &ToneScores) -> String {
    let mut summary = format!(
        "Primary tone: {} ({:.1}% confidence)",
        title_case(dominant.as_str()),
        confidence
    );

    let secondary: Vec<String> = scores
        .ranked()
        .into_iter()
        .skip(1)
        .take(2)
        .filter(|(_, score)| *score > 0.0)
        .map(|(cat, _)| title_case(cat.as_str()))
        .collect();

    if !secondary.is_empty() {
        summary.push_str(" | Secondary tones: ");
        summary.push_str(&secondary.join(", "));
    }

    summary
}

/// Two decimals, ties resolved on the exact binary value (3.125 -> 3.12).
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Shortest form of a share, keeping one decimal for whole numbers ("50.0").
fn share_text(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_prefers_declaration_order_on_ties() {
        let mut scores = ToneScores::default();
        *scores.get_mut(ToneCategory::Casual) = 2.0;
        *scores.get_mut(ToneCategory::Confident) = 2.0;
        assert_eq!(dominant(&scores), DominantTone::Tone(ToneCategory::Confident));
    }

    #[test]
    fn dominant_is_neutral_when_nothing_scored() {
        assert_eq!(dominant(&ToneScores::default()), DominantTone::Neutral);
    }

    #[test]
    fn short_text_casual_boost_needs_a_casual_score() {
        let mut scores = ToneScores::default();
        apply_length(&mut scores, 3);
        assert_eq!(*scores.get(ToneCategory::Casual), 0.0);

        *scores.get_mut(ToneCategory::Casual) = 1.0;
        apply_length(&mut scores, 3);
        assert_eq!(*scores.get(ToneCategory::Casual), 2.0);
    }

    #[test]
    fn length_bands_are_exclusive() {
        let mut mid = ToneScores::default();
        apply_length(&mut mid, 100);
        assert_eq!(*mid.get(ToneCategory::Analytical), 0.5);
        assert_eq!(*mid.get(ToneCategory::Formal), 0.3);

        let mut long = ToneScores::default();
        apply_length(&mut long, 101);
        assert_eq!(*long.get(ToneCategory::Analytical), 1.0);
        assert_eq!(*long.get(ToneCategory::Formal), 0.7);
    }

    #[test]
    fn keyword_matching_ignores_case() {
        let (upper, upper_words) = keyword_scores("I HATE it");
        let (lower, lower_words) = keyword_scores("i hate it");
        assert_eq!(upper, lower);
        assert_eq!(upper_words, lower_words);
        assert_eq!(*upper.get(ToneCategory::Aggressive), 1.0);
    }

    #[test]
    fn round2_breaks_exact_ties_like_decimal_rounding() {
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(21.875), 21.88);
        assert_eq!(round2(15.625), 15.62);
        assert_eq!(round2(25.641025641), 25.64);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn share_text_keeps_a_decimal() {
        assert_eq!(share_text(50.0), "50.0");
        assert_eq!(share_text(100.0), "100.0");
        assert_eq!(share_text(33.33), "33.33");
    }

    #[test]
    fn keyword_counted_once_per_entry() {
        let (scores, matched) = keyword_scores("hate hate hate");
        assert_eq!(*scores.get(ToneCategory::Aggressive), 1.0);
        assert_eq!(matched.get(ToneCategory::Aggressive), &vec!["hate".to_string()]);
    }

    #[test]
    fn summary_lists_up_to_two_secondary_tones() {
        let mut scores = ToneScores::default();
        *scores.get_mut(ToneCategory::Urgent) = 3.0;
        *scores.get_mut(ToneCategory::Formal) = 2.0;
        *scores.get_mut(ToneCategory::Casual) = 2.0;
        *scores.get_mut(ToneCategory::Supportive) = 1.0;
        let summary = summarize(DominantTone::Tone(ToneCategory::Urgent), 37.5, &scores);
        assert_eq!(
            summary,
            "Primary tone: Urgent (37.5% confidence) | Secondary tones: Formal, Casual"
        );
    }
}
