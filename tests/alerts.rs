use brave_haven::alerts::{self, FlagStats};
use brave_haven::dialog;
use brave_haven::pipeline::assess;

#[test]
fn update_counts_verdicts() {
    let mut stats = FlagStats::default();
    for text in [dialog::sample("aggressive").unwrap(), "", "Blue sky over the river bank."] {
        alerts::update(&mut stats, &assess(text));
    }

    assert_eq!(stats.total, 3);
    assert_eq!(stats.red, 1);
    assert_eq!(stats.neutral, 2);
    assert_eq!(alerts::flagged(&stats), 1);
    assert!(stats.max_aggressive > 0.0);
    assert!(stats.min_compound < 0.0);
}

#[test]
fn print_summary_includes_status() {
    let mut stats = FlagStats::default();
    alerts::update(&mut stats, &assess(dialog::sample("aggressive").unwrap()));

    alerts::print_summary(&stats);
    let lines = alerts::summary_lines(&stats);
    assert!(lines.iter().any(|line| line.contains("status: ATTENTION")));
}

#[test]
fn calm_batch_is_ok() {
    let mut stats = FlagStats::default();
    alerts::update(&mut stats, &assess(""));
    let lines = alerts::summary_lines(&stats);
    assert_eq!(lines.last().map(String::as_str), Some("[health] status: OK ✅"));
}

#[test]
fn empty_batch_has_no_summary() {
    assert!(alerts::summary_lines(&FlagStats::default()).is_empty());
}
