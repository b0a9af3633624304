//! Plain-text rendering of an [`Assessment`], section by section.

use crate::emotion;
use crate::flags::{self, FlagStatus};
use crate::lexicon::title_case;
use crate::pipeline::Assessment;
use crate::viz;

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(format!("== {} ==", title));
}

pub fn preprocessing(a: &Assessment, lines: &mut Vec<String>) {
    heading(lines, "Preprocessing");
    lines.push(format!("[text] original: {}", a.preprocessing.original_text));
    lines.push(format!("[text] cleaned:  {}", a.preprocessing.cleaned_text));
    lines.push(format!("[text] tokens:   {:?}", a.preprocessing.tokens));
}

pub fn sentiment(a: &Assessment, lines: &mut Vec<String>) {
    heading(lines, "Sentiment");
    lines.push(format!(
        "[sentiment] {} (score: {:.2})",
        a.sentiment_label, a.sentiment.compound
    ));
    lines.push(format!(
        "[sentiment] positive={:.2} neutral={:.2} negative={:.2}",
        a.sentiment.pos, a.sentiment.neu, a.sentiment.neg
    ));
}

pub fn emotion(a: &Assessment, lines: &mut Vec<String>) {
    heading(lines, "Emotion");
    match a.emotion {
        Some(result) => {
            let label = result.label.as_str();
            lines.push(format!(
                "[emotion] {} {} (confidence: {:.2})",
                emotion::emoji(label),
                title_case(label),
                result.score
            ));
            lines.push(format!(
                "[emotion] {}",
                viz::bar(result.score as f32, 20)
            ));
        }
        None => lines.push("[emotion] could not detect emotion".to_string()),
    }
}

pub fn tone(a: &Assessment, lines: &mut Vec<String>) {
    heading(lines, "Tone");
    let dominant = a.tone.dominant_tone.as_str();
    lines.push(format!(
        "[tone] {} {}",
        viz::tone_marker(dominant),
        title_case(dominant)
    ));
    lines.push(format!("[tone] {}", a.tone.analysis_summary));
    lines.extend(viz::tone_table(&a.tone));

    let punct = &a.tone.punctuation_analysis;
    lines.push(format!(
        "[tone] exclamations={} questions={} caps_words={}",
        punct.exclamations, punct.questions, punct.caps_words
    ));
}

pub fn flags(a: &Assessment, lines: &mut Vec<String>) {
    heading(lines, "Flags");
    let status = a.flags.overall_status;
    let banner = match status {
        FlagStatus::RedFlag => "🚩 Red Flag - Potential concerns detected",
        FlagStatus::GreenFlag => "✅ Green Flag - Positive indicators detected",
        FlagStatus::Mixed => "⚠️ Mixed (Both Red and Green Flags) - Mixed signals detected",
        FlagStatus::Neutral => "ℹ️ Neutral - No significant flags detected",
    };
    lines.push(format!("[flags] {}", banner));
    for flag in &a.flags.red_flags {
        lines.push(format!("[flags] red: {}", flag));
    }
    for flag in &a.flags.green_flags {
        lines.push(format!("[flags] green: {}", flag));
    }
}

pub fn summary(a: &Assessment, lines: &mut Vec<String>) {
    heading(lines, "Summary");
    lines.push(format!("[summary] input: {}", a.input_text));
    lines.push(format!(
        "[summary] sentiment={} emotion={} tone={} assessment={}",
        a.sentiment_label,
        title_case(&a.emotion_label),
        title_case(a.tone.dominant_tone.as_str()),
        a.flags.overall_status.short()
    ));

    let title = match a.flags.overall_status {
        FlagStatus::RedFlag => "Recommendations for Red Flag Detection:",
        FlagStatus::GreenFlag => "Great Communication Detected:",
        FlagStatus::Neutral | FlagStatus::Mixed => "Neutral Communication:",
    };
    lines.push(format!("[advice] {}", title));
    for item in flags::recommendations(a.flags.overall_status) {
        lines.push(format!("[advice] - {}", item));
    }
}

pub fn render(a: &Assessment) -> Vec<String> {
    let mut lines = Vec::new();
    preprocessing(a, &mut lines);
    sentiment(a, &mut lines);
    emotion(a, &mut lines);
    tone(a, &mut lines);
    flags(a, &mut lines);
    summary(a, &mut lines);
    lines
}

pub fn print(a: &Assessment) {
    for line in render(a) {
        println!("{}", line);
    }
}
