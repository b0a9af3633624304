use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Sadness,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-matching emotion and its confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub label: Emotion,
    pub score: f64,
}

pub trait EmotionSource: Send + Sync {
    /// `None` when there is nothing to classify.
    fn classify(&self, text: &str) -> Option<EmotionResult>;
}

/// Emoji for an emotion label; unknown labels fall back to the neutral face.
pub fn emoji(label: &str) -> &'static str {
    match label {
        "joy" => "😊",
        "anger" => "😠",
        "fear" => "😨",
        "sadness" => "😢",
        "surprise" => "😮",
        "disgust" => "🤢",
        _ => "😐",
    }
}

static CUES: Lazy<HashMap<&'static str, (Emotion, f64)>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (emotion, words) in CUE_WORDS {
        for (word, weight) in *words {
            map.insert(*word, (*emotion, *weight));
        }
    }
    map
});

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconEmotion;

impl LexiconEmotion {
    pub fn new() -> Self {
        Self
    }
}

impl EmotionSource for LexiconEmotion {
    #[tracing::instrument(skip_all)]
    fn classify(&self, text: &str) -> Option<EmotionResult> {
        if text.is_empty() {
            return None;
        }

        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut weights = [0.0_f64; Emotion::ALL.len()];
        for (i, token) in tokens.iter().enumerate() {
            let Some(&(emotion, weight)) = CUES.get(token.as_str()) else {
                continue;
            };
            let negated = i > 0 && is_negator(&tokens[i - 1]);
            if !negated {
                weights[emotion as usize] += weight;
            }
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Some(EmotionResult {
                label: Emotion::Neutral,
                score: 1.0,
            });
        }

        let mut best = 0;
        for (i, w) in weights.iter().enumerate() {
            if *w > weights[best] {
                best = i;
            }
        }
        let result = EmotionResult {
            label: Emotion::ALL[best],
            score: weights[best] / total,
        };
        debug!(label = %result.label, score = result.score, "emotion classified");
        Some(result)
    }
}

fn is_negator(token: &str) -> bool {
    matches!(token, "not" | "no" | "never" | "hardly") || token.ends_with("n't")
}

type CueList = &'static [(&'static str, f64)];

const CUE_WORDS: &[(Emotion, CueList)] = &[
    (
        Emotion::Joy,
        &[
            ("happy", 1.0), ("happiness", 1.0), ("joy", 1.0), ("joyful", 1.0), ("glad", 0.8),
            ("excited", 0.9), ("exciting", 0.8), ("delighted", 1.0), ("love", 0.9),
            ("loved", 0.9), ("wonderful", 0.8), ("amazing", 0.8), ("great", 0.6),
            ("awesome", 0.7), ("fantastic", 0.8), ("thrilled", 1.0), ("cheerful", 0.9),
            ("grateful", 0.7), ("proud", 0.7), ("fun", 0.6), ("enjoy", 0.7), ("smile", 0.7),
            ("laugh", 0.7), ("confident", 0.5), ("opportunity", 0.3), ("excellent", 0.6),
        ],
    ),
    (
        Emotion::Anger,
        &[
            ("angry", 1.0), ("anger", 1.0), ("furious", 1.0), ("rage", 1.0), ("mad", 0.8),
            ("hate", 1.0), ("hatred", 1.0), ("annoyed", 0.7), ("irritated", 0.7),
            ("frustrated", 0.8), ("frustrating", 0.8), ("outraged", 1.0), ("livid", 1.0),
            ("stupid", 0.7), ("idiot", 0.8), ("destroy", 0.7), ("unacceptable", 0.6),
            ("pissed", 0.9), ("hostile", 0.8), ("resent", 0.8),
        ],
    ),
    (
        Emotion::Fear,
        &[
            ("scared", 1.0), ("afraid", 1.0), ("fear", 1.0), ("frightened", 1.0),
            ("terrified", 1.0), ("anxious", 0.8), ("nervous", 0.7), ("worried", 0.7),
            ("worry", 0.7), ("panic", 0.9), ("dread", 0.9), ("fail", 0.4), ("threat", 0.6),
            ("danger", 0.7), ("unsafe", 0.7),
        ],
    ),
    (
        Emotion::Sadness,
        &[
            ("sad", 1.0), ("sadness", 1.0), ("unhappy", 0.9), ("depressed", 1.0),
            ("miserable", 1.0), ("lonely", 0.9), ("cry", 0.8), ("crying", 0.8),
            ("heartbroken", 1.0), ("grief", 1.0), ("sorrow", 1.0), ("lost", 0.5),
            ("hopeless", 0.9), ("disappointed", 0.8), ("regret", 0.7), ("hurt", 0.7),
        ],
    ),
    (
        Emotion::Surprise,
        &[
            ("surprise", 1.0), ("surprised", 1.0), ("surprising", 0.9), ("shocked", 0.9),
            ("astonished", 1.0), ("amazed", 0.8), ("unexpected", 0.8), ("wow", 0.9),
            ("whoa", 0.9), ("sudden", 0.6), ("suddenly", 0.6),
        ],
    ),
    (
        Emotion::Disgust,
        &[
            ("disgusting", 1.0), ("disgusted", 1.0), ("gross", 0.9), ("nasty", 0.8),
            ("revolting", 1.0), ("repulsive", 1.0), ("sick", 0.5), ("vile", 1.0),
            ("awful", 0.6), ("terrible", 0.5), ("horrible", 0.6), ("yuck", 1.0),
        ],
    ),
];
