use crate::flags::FlagStatus;
use crate::lexicon::ToneCategory;
use crate::pipeline::Assessment;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlagStats {
    pub red: usize,
    pub green: usize,
    pub mixed: usize,
    pub neutral: usize,
    pub total: usize,
    /// Largest normalized aggressive share seen, in percent.
    pub max_aggressive: f64,
    pub min_compound: f64,
}

pub fn update(stats: &mut FlagStats, assessment: &Assessment) {
    stats.total += 1;
    match assessment.flags.overall_status {
        FlagStatus::RedFlag => stats.red += 1,
        FlagStatus::GreenFlag => stats.green += 1,
        FlagStatus::Mixed => stats.mixed += 1,
        FlagStatus::Neutral => stats.neutral += 1,
    }

    let aggressive = *assessment
        .tone
        .normalized_scores
        .get(ToneCategory::Aggressive);
    if aggressive > stats.max_aggressive {
        stats.max_aggressive = aggressive;
    }
    let compound = assessment.sentiment.compound;
    if stats.total == 1 || compound < stats.min_compound {
        stats.min_compound = compound;
    }
}

/// Inputs that raised at least one red flag.
pub fn flagged(stats: &FlagStats) -> usize {
    stats.red + stats.mixed
}

pub fn summary_lines(stats: &FlagStats) -> Vec<String> {
    if stats.total == 0 {
        return Vec::new();
    }

    let counts = format!(
        "[health] verdicts: red={}, green={}, mixed={}, neutral={}, total={}",
        stats.red, stats.green, stats.mixed, stats.neutral, stats.total
    );
    let worst = format!(
        "[health] worst: aggressive_max={:.2}%, compound_min={:.2}",
        stats.max_aggressive, stats.min_compound
    );
    let ok = flagged(stats) == 0;
    let status = format!(
        "[health] status: {}",
        if ok { "OK ✅" } else { "ATTENTION ⚠️" }
    );

    vec![counts, worst, status]
}

pub fn print_summary(stats: &FlagStats) {
    let lines = summary_lines(stats);
    if lines.is_empty() {
        return;
    }
    println!();
    for line in lines {
        println!("{}", line);
    }
}
