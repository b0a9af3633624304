//! Rule-based sentiment polarity.
//!
//! Scores each token against a valence lexicon (-4..=4), then applies the
//! usual intensity rules: booster words, negation within three tokens,
//! ALL-CAPS emphasis, the contrastive "but", and trailing `!`/`?`
//! amplification. The summed valence is squashed into a compound score in
//! [-1, 1]; negative/neutral/positive shares are reported alongside it.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_THRESHOLD: f64 = 0.05;

const BOOST_INCR: f64 = 0.293;
const BOOST_DECR: f64 = -0.293;
const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| VALENCES.iter().copied().collect());

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, f64> = INCREMENTS.iter().map(|w| (*w, BOOST_INCR)).collect();
    map.extend(DECREMENTS.iter().map(|w| (*w, BOOST_DECR)));
    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity shares (summing to 1 for scored text) and compound score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

pub trait SentimentSource: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

/// Thresholds a compound score into a three-way label.
pub fn label(compound: f64, threshold: f64) -> SentimentLabel {
    if compound >= threshold {
        SentimentLabel::Positive
    } else if compound <= -threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentSource for LexiconSentiment {
    #[tracing::instrument(skip_all)]
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        if text.is_empty() {
            return SentimentScores::default();
        }

        let words: Vec<&str> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return SentimentScores::default();
        }

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mixed_case = words.iter().any(|w| !is_shouting(w));

        let mut sentiments: Vec<f64> = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            if BOOSTERS.contains_key(word.as_str()) {
                sentiments.push(0.0);
                continue;
            }
            let Some(&base) = LEXICON.get(word.as_str()) else {
                sentiments.push(0.0);
                continue;
            };

            let mut valence = base;
            if mixed_case && is_shouting(words[i]) {
                valence += CAPS_INCR.copysign(valence);
            }
            for back in 1..=3 {
                if i < back {
                    break;
                }
                let prev = lowered[i - back].as_str();
                if let Some(&boost) = BOOSTERS.get(prev) {
                    let damp = match back {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    let signed = if valence < 0.0 { -boost } else { boost };
                    let mut scalar = signed * damp;
                    if mixed_case && is_shouting(words[i - back]) {
                        scalar += CAPS_INCR.copysign(valence);
                    }
                    valence += scalar;
                }
                if is_negation(prev) {
                    valence *= NEGATION_SCALAR;
                }
            }
            sentiments.push(valence);
        }

        apply_but(&lowered, &mut sentiments);

        let sum: f64 = sentiments.iter().sum();
        let amplifier = punctuation_emphasis(text);
        let sum = if sum > 0.0 {
            sum + amplifier
        } else if sum < 0.0 {
            sum - amplifier
        } else {
            sum
        };
        let compound = normalize(sum);

        let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
        for s in &sentiments {
            if *s > 0.0 {
                pos_sum += s + 1.0;
            } else if *s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += amplifier;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= amplifier;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        let scores = SentimentScores {
            neg: round3((neg_sum / total).abs()),
            neu: round3((neu_count / total).abs()),
            pos: round3((pos_sum / total).abs()),
            compound: round4(compound),
        };
        debug!(compound = scores.compound, "sentiment scored");
        scores
    }
}

fn is_shouting(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Valence before "but" is halved, valence after it is boosted by half.
fn apply_but(words: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = words.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let bangs = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    bangs * 0.292 + question_amp
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZE_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "aint", "dont", "cant", "wont", "isnt", "wasnt", "didnt", "doesnt",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
    "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "uber", "unbelievably", "unusually", "utterly",
    "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

const VALENCES: &[(&str, f64)] = &[
    ("abandoned", -1.9), ("abuse", -3.2), ("acceptable", 1.3), ("admire", 2.1),
    ("adorable", 2.2), ("afraid", -2.0), ("aggressive", -0.6), ("amazing", 2.8),
    ("angry", -2.3), ("annoyed", -1.6), ("anxious", -1.0), ("appreciate", 1.7),
    ("awesome", 3.1), ("awful", -2.0), ("bad", -2.5), ("beautiful", 2.9),
    ("best", 3.2), ("better", 1.9), ("bitter", -1.8), ("blessed", 2.9),
    ("boring", -1.3), ("brave", 2.4), ("brilliant", 2.8), ("broken", -1.9),
    ("calm", 1.3), ("care", 2.2), ("cheerful", 2.5), ("confident", 2.2),
    ("confused", -1.3), ("cool", 1.3), ("crap", -1.6), ("crazy", -1.4),
    ("cruel", -2.8), ("damn", -1.7), ("dead", -3.3), ("delighted", 2.8),
    ("depressed", -2.3), ("despise", -2.7), ("destroy", -2.5), ("disappointed", -1.9),
    ("disgusting", -2.4), ("dumb", -2.3), ("enjoy", 2.2), ("excellent", 2.7),
    ("excited", 2.2), ("fail", -2.5), ("failure", -2.3), ("fantastic", 2.6),
    ("fear", -2.2), ("fine", 0.8), ("fun", 2.3), ("furious", -2.7),
    ("glad", 2.0), ("good", 1.9), ("gorgeous", 3.0), ("grateful", 2.0),
    ("great", 3.1), ("happy", 2.7), ("hate", -2.7), ("hell", -3.6),
    ("helpful", 1.8), ("hope", 1.9), ("horrible", -2.5), ("hurt", -2.4),
    ("idiot", -2.3), ("jerk", -2.0), ("joy", 2.8), ("kill", -3.7),
    ("kind", 2.4), ("lonely", -1.5), ("lost", -1.3), ("love", 3.2),
    ("lovely", 2.8), ("lucky", 1.8), ("mad", -2.2), ("miserable", -2.2),
    ("nasty", -2.6), ("nice", 1.8), ("ok", 0.9), ("okay", 0.9),
    ("pathetic", -2.2), ("peaceful", 2.2), ("perfect", 2.7), ("pleasant", 2.3),
    ("proud", 2.1), ("rage", -2.6), ("ridiculous", -1.5), ("sad", -2.1),
    ("scared", -1.9), ("stupid", -2.4), ("success", 2.7), ("successful", 2.8),
    ("sucks", -1.5), ("super", 2.9), ("support", 1.7), ("terrible", -2.1),
    ("terrified", -3.0), ("thank", 1.5), ("thanks", 1.9), ("thrilled", 2.8),
    ("trust", 2.3), ("ugly", -2.3), ("unacceptable", -2.0), ("unhappy", -1.8),
    ("upset", -1.6), ("useless", -1.8), ("violence", -3.1), ("warm", 0.9),
    ("weak", -1.9), ("win", 2.8), ("wonderful", 2.7), ("worried", -1.2),
    ("worse", -2.1), ("worst", -3.1), ("worthless", -1.9), ("wrong", -2.1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_bounded() {
        assert!(normalize(1000.0) <= 1.0);
        assert!(normalize(-1000.0) >= -1.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn but_reweights_both_sides() {
        let words: Vec<String> = ["good", "but", "bad"].iter().map(|w| w.to_string()).collect();
        let mut s = vec![2.0, 0.0, -2.0];
        apply_but(&words, &mut s);
        assert_eq!(s, vec![1.0, 0.0, -3.0]);
    }

    #[test]
    fn shouting_requires_letters() {
        assert!(is_shouting("HATE"));
        assert!(!is_shouting("Hate"));
        assert!(!is_shouting("123"));
    }
}
