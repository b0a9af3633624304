use crate::metrics;
use crate::tone::ToneAnalysis;

const LABEL_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 30;
const BAR_WIDTH: usize = 20;

pub static GLYPHS: &[char] = &[' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn bar(value_0_1: f32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let clamped = metrics::clamp01(value_0_1);
    if clamped <= 0.0 {
        return String::new();
    }
    let filled = (clamped * width as f32).round() as usize;
    "#".repeat(filled.min(width))
}

/// One glyph per value in [0, 1].
pub fn sparkline(values: &[f32]) -> String {
    let max_index = (GLYPHS.len() - 1) as f32;
    values
        .iter()
        .map(|v| {
            let idx = (metrics::clamp01(*v) * max_index).round() as usize;
            GLYPHS[idx.min(GLYPHS.len() - 1)]
        })
        .collect()
}

/// Colored marker for a dominant tone label; unlisted labels get a white circle.
pub fn tone_marker(tone: &str) -> &'static str {
    match tone {
        "aggressive" => "🔴",
        "confident" => "🟢",
        "tentative" => "🟡",
        "analytical" => "🔵",
        "emotional" => "🟠",
        _ => "⚪",
    }
}

/// Normalized tone scores as a bordered table, highest first.
pub fn tone_table(analysis: &ToneAnalysis) -> Vec<String> {
    let border = format!(
        "+{}+{}+",
        "-".repeat(LABEL_WIDTH + 2),
        "-".repeat(VALUE_WIDTH + 2)
    );
    let mut lines = vec![
        border.clone(),
        format_row("Tone", "Share"),
        border.clone(),
    ];

    for (cat, share) in analysis.normalized_scores.ranked() {
        lines.push(format_row(cat.as_str(), &format_bar_entry(share)));
    }
    lines.push(border);
    lines
}

pub fn print_table(analysis: &ToneAnalysis) -> Vec<String> {
    let lines = tone_table(analysis);
    for line in &lines {
        println!("{}", line);
    }
    lines
}

fn format_bar_entry(percent: f64) -> String {
    let bar = bar((percent / 100.0) as f32, BAR_WIDTH);
    if bar.is_empty() {
        format!("{:>6.2}%", percent)
    } else {
        format!("{:>6.2}%  {:<width$}", percent, bar, width = BAR_WIDTH)
    }
}

fn format_row(label: &str, value: &str) -> String {
    format!(
        "| {:<label$} | {:<value$} |",
        label,
        value,
        label = LABEL_WIDTH,
        value = VALUE_WIDTH
    )
}
