use brave_haven::flags::{self, FlagDetector, FlagStatus};
use brave_haven::sentiment::SentimentLabel;

#[test]
fn negative_anger_aggressive_is_critical() {
    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Negative, "anger", "aggressive");
    assert_eq!(verdict.overall_status, FlagStatus::RedFlag);
    assert_eq!(
        verdict.red_flags,
        vec![
            "Overall negative sentiment detected.",
            "Strong emotion of 'anger' detected.",
            "Aggressive tone detected.",
            "Critical combination: Negative sentiment, anger, and aggressive tone.",
        ]
    );
    assert!(verdict.green_flags.is_empty());
}

#[test]
fn positive_joy_confident_is_excellent() {
    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Positive, "joy", "confident");
    assert_eq!(verdict.overall_status, FlagStatus::GreenFlag);
    assert_eq!(verdict.green_flags.len(), 4);
    assert_eq!(
        verdict.green_flags.last().map(String::as_str),
        Some("Excellent combination: Positive sentiment, joy, and confident tone.")
    );
}

#[test]
fn conflicting_signals_are_mixed() {
    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Positive, "fear", "analytical");
    assert_eq!(verdict.overall_status, FlagStatus::Mixed);
    assert_eq!(verdict.red_flags, vec!["Strong emotion of 'fear' detected."]);
    assert_eq!(verdict.green_flags, vec!["Overall positive sentiment detected."]);
    assert_eq!(verdict.overall_status.as_str(), "Mixed (Both Red and Green Flags)");
    assert_eq!(verdict.overall_status.short(), "Mixed");
}

#[test]
fn nothing_notable_is_neutral() {
    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Neutral, "neutral", "neutral");
    assert_eq!(verdict.overall_status, FlagStatus::Neutral);
    assert!(verdict.red_flags.is_empty() && verdict.green_flags.is_empty());

    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Neutral, "surprise", "formal");
    assert_eq!(verdict.overall_status, FlagStatus::Neutral);
}

#[test]
fn hesitant_and_emotional_tones_are_red() {
    let d = FlagDetector::new();
    let tentative = d.detect_flags(SentimentLabel::Neutral, "neutral", "tentative");
    assert_eq!(
        tentative.red_flags,
        vec!["Tentative tone detected, indicating uncertainty or hesitation."]
    );
    let emotional = d.detect_flags(SentimentLabel::Neutral, "neutral", "emotional");
    assert_eq!(emotional.red_flags, vec!["Highly emotional tone detected."]);
}

#[test]
fn anger_without_aggression_is_not_critical() {
    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Negative, "anger", "urgent");
    assert_eq!(verdict.red_flags.len(), 2);
}

#[test]
fn recommendations_per_status() {
    assert_eq!(flags::recommendations(FlagStatus::RedFlag).len(), 4);
    assert_eq!(flags::recommendations(FlagStatus::GreenFlag).len(), 3);
    assert_eq!(
        flags::recommendations(FlagStatus::Mixed),
        flags::recommendations(FlagStatus::Neutral)
    );
}

#[test]
fn verdict_serializes_status_text() {
    let verdict = FlagDetector::new().detect_flags(SentimentLabel::Negative, "sadness", "neutral");
    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["overall_status"], "Red Flag");
}
