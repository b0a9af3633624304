//! One text in, one composite assessment out.
//!
//! The text is cleaned first; sentiment, emotion and tone all read the
//! cleaned form, and their labels feed the flag rules.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::info;

use crate::emotion::{EmotionResult, EmotionSource, LexiconEmotion};
use crate::flags::{FlagDetector, FlagVerdict};
use crate::preprocess::{PreprocessedText, TextPreprocessor};
use crate::sentiment::{self, LexiconSentiment, SentimentLabel, SentimentScores, SentimentSource};
use crate::tone::{ToneAnalysis, ToneAnalyzer};

const DEFAULT_EMOTION: &str = "neutral";

static SHARED: Lazy<Analyzers> = Lazy::new(|| {
    info!("loading analyzers");
    Analyzers::new()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessOptions {
    pub remove_stopwords: bool,
    pub lemmatize: bool,
}

impl Default for AssessOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            lemmatize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub input_text: String,
    pub preprocessing: PreprocessedText,
    pub sentiment: SentimentScores,
    pub sentiment_label: SentimentLabel,
    pub emotion: Option<EmotionResult>,
    /// The detected emotion, or "neutral" when none was found.
    pub emotion_label: String,
    pub tone: ToneAnalysis,
    pub flags: FlagVerdict,
}

pub struct Analyzers {
    pub preprocessor: TextPreprocessor,
    pub sentiment: Box<dyn SentimentSource>,
    pub emotion: Box<dyn EmotionSource>,
    pub tone: ToneAnalyzer,
    pub flags: FlagDetector,
}

impl Default for Analyzers {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzers {
    pub fn new() -> Self {
        Self::with_sources(Box::new(LexiconSentiment::new()), Box::new(LexiconEmotion::new()))
    }

    pub fn with_sources(
        sentiment: Box<dyn SentimentSource>,
        emotion: Box<dyn EmotionSource>,
    ) -> Self {
        Self {
            preprocessor: TextPreprocessor::new(),
            sentiment,
            emotion,
            tone: ToneAnalyzer::new(),
            flags: FlagDetector::new(),
        }
    }

    /// Process-wide analyzers, built on first use.
    pub fn shared() -> &'static Analyzers {
        &SHARED
    }

    pub fn assess(&self, text: &str) -> Assessment {
        self.assess_with(text, AssessOptions::default())
    }

    #[tracing::instrument(skip_all, fields(len = text.len()))]
    pub fn assess_with(&self, text: &str, opts: AssessOptions) -> Assessment {
        let preprocessing = self
            .preprocessor
            .preprocess(text, opts.remove_stopwords, opts.lemmatize);
        let cleaned = preprocessing.cleaned_text.as_str();

        let scores = self.sentiment.polarity_scores(cleaned);
        let sentiment_label = sentiment::label(scores.compound, sentiment::DEFAULT_THRESHOLD);

        let emotion = self.emotion.classify(cleaned);
        let emotion_label = emotion
            .map(|e| e.label.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_EMOTION.to_string());

        let tone = self.tone.analyze(cleaned);
        let flags = self
            .flags
            .detect_flags(sentiment_label, &emotion_label, tone.dominant_tone.as_str());

        info!(
            sentiment = %sentiment_label,
            emotion = %emotion_label,
            tone = %tone.dominant_tone,
            status = %flags.overall_status,
            "assessment complete"
        );

        Assessment {
            input_text: text.to_string(),
            preprocessing,
            sentiment: scores,
            sentiment_label,
            emotion,
            emotion_label,
            tone,
            flags,
        }
    }
}

/// Assessment with the shared analyzers.
pub fn assess(text: &str) -> Assessment {
    Analyzers::shared().assess(text)
}
