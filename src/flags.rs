use std::fmt;

use serde::{Serialize, Serializer};

use crate::sentiment::SentimentLabel;

const NEGATIVE_SENTIMENT: &str = "Overall negative sentiment detected.";
const POSITIVE_SENTIMENT: &str = "Overall positive sentiment detected.";
const ANGER_EMOTION: &str = "Strong emotion of 'anger' detected.";
const JOY_EMOTION: &str = "Emotion of 'joy' detected.";
const AGGRESSIVE_TONE: &str = "Aggressive tone detected.";
const CONFIDENT_TONE: &str = "Confident tone detected.";
const TENTATIVE_TONE: &str = "Tentative tone detected, indicating uncertainty or hesitation.";
const EMOTIONAL_TONE: &str = "Highly emotional tone detected.";
const CRITICAL_COMBINATION: &str =
    "Critical combination: Negative sentiment, anger, and aggressive tone.";
const EXCELLENT_COMBINATION: &str =
    "Excellent combination: Positive sentiment, joy, and confident tone.";

const RED_EMOTIONS: &[&str] = &["anger", "fear", "disgust", "sadness"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagStatus {
    Neutral,
    RedFlag,
    GreenFlag,
    Mixed,
}

impl FlagStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagStatus::Neutral => "Neutral",
            FlagStatus::RedFlag => "Red Flag",
            FlagStatus::GreenFlag => "Green Flag",
            FlagStatus::Mixed => "Mixed (Both Red and Green Flags)",
        }
    }

    /// First word of the status, e.g. "Red".
    pub fn short(&self) -> &'static str {
        self.as_str().split_whitespace().next().unwrap_or("")
    }
}

impl fmt::Display for FlagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FlagStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagVerdict {
    pub overall_status: FlagStatus,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlagDetector;

impl FlagDetector {
    pub fn new() -> Self {
        Self
    }

    /// Rule table over the three upstream labels. Emotion and tone are plain
    /// labels so any source vocabulary can be fed in.
    pub fn detect_flags(
        &self,
        sentiment: SentimentLabel,
        emotion: &str,
        dominant_tone: &str,
    ) -> FlagVerdict {
        let mut red: Vec<String> = Vec::new();
        let mut green: Vec<String> = Vec::new();

        match sentiment {
            SentimentLabel::Negative => push_unique(&mut red, NEGATIVE_SENTIMENT.to_string()),
            SentimentLabel::Positive => push_unique(&mut green, POSITIVE_SENTIMENT.to_string()),
            SentimentLabel::Neutral => {}
        }

        if RED_EMOTIONS.contains(&emotion) {
            push_unique(&mut red, format!("Strong emotion of '{}' detected.", emotion));
        } else if emotion == "joy" {
            push_unique(&mut green, JOY_EMOTION.to_string());
        }

        match dominant_tone {
            "aggressive" => push_unique(&mut red, AGGRESSIVE_TONE.to_string()),
            "confident" => push_unique(&mut green, CONFIDENT_TONE.to_string()),
            "tentative" => push_unique(&mut red, TENTATIVE_TONE.to_string()),
            "emotional" => push_unique(&mut red, EMOTIONAL_TONE.to_string()),
            _ => {}
        }

        if has(&red, NEGATIVE_SENTIMENT) && has(&red, ANGER_EMOTION) && has(&red, AGGRESSIVE_TONE)
        {
            push_unique(&mut red, CRITICAL_COMBINATION.to_string());
        }
        if has(&green, POSITIVE_SENTIMENT) && has(&green, JOY_EMOTION) && has(&green, CONFIDENT_TONE)
        {
            push_unique(&mut green, EXCELLENT_COMBINATION.to_string());
        }

        let overall_status = match (red.is_empty(), green.is_empty()) {
            (false, true) => FlagStatus::RedFlag,
            (true, false) => FlagStatus::GreenFlag,
            (false, false) => FlagStatus::Mixed,
            (true, true) => FlagStatus::Neutral,
        };

        FlagVerdict {
            overall_status,
            red_flags: red,
            green_flags: green,
        }
    }
}

fn has(flags: &[String], msg: &str) -> bool {
    flags.iter().any(|f| f == msg)
}

fn push_unique(flags: &mut Vec<String>, msg: String) {
    if !flags.contains(&msg) {
        flags.push(msg);
    }
}

/// Advice shown under the verdict.
pub fn recommendations(status: FlagStatus) -> &'static [&'static str] {
    match status {
        FlagStatus::RedFlag => &[
            "Consider professional counseling or support",
            "Practice stress management techniques",
            "Engage in positive communication exercises",
            "Seek feedback from trusted friends or colleagues",
        ],
        FlagStatus::GreenFlag => &[
            "Continue with this positive communication style",
            "You're expressing yourself clearly and positively",
            "This type of communication builds trust and rapport",
        ],
        FlagStatus::Neutral | FlagStatus::Mixed => &[
            "Communication appears balanced",
            "Consider adding more positive elements if appropriate",
            "Monitor for any changes in communication patterns",
        ],
    }
}
