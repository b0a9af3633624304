use brave_haven::flags;
use brave_haven::pipeline::assess;
use brave_haven::report;

#[test]
fn render_has_every_section_in_order() {
    let lines = report::render(&assess("I hate this stupid thing!"));
    let headings: Vec<&String> = lines.iter().filter(|l| l.starts_with("== ")).collect();
    assert_eq!(
        headings,
        vec![
            "== Preprocessing ==",
            "== Sentiment ==",
            "== Emotion ==",
            "== Tone ==",
            "== Flags ==",
            "== Summary ==",
        ]
    );
}

#[test]
fn recommendations_follow_the_verdict() {
    let a = assess("I hate this stupid thing!");
    let lines = report::render(&a);
    for item in flags::recommendations(a.flags.overall_status) {
        assert!(lines.iter().any(|l| l == &format!("[advice] - {}", item)));
    }
}

#[test]
fn red_flags_are_listed() {
    let a = assess("You are an IDIOT! I'm going to DESTROY you!");
    let lines = report::render(&a);
    assert!(lines.iter().any(|l| l.starts_with("[flags] 🚩 Red Flag")));
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("[flags] red: ")).count(),
        a.flags.red_flags.len()
    );
}

#[test]
fn missing_emotion_is_reported() {
    let lines = report::render(&assess(""));
    assert!(lines.contains(&"[emotion] could not detect emotion".to_string()));
    assert!(lines.iter().any(|l| l.starts_with("[tone] ⚪ Neutral")));
}

#[test]
fn summary_line_uses_short_status() {
    let lines = report::render(&assess("yeah that's cool dude"));
    let summary = lines
        .iter()
        .find(|l| l.starts_with("[summary] sentiment="))
        .unwrap();
    assert!(summary.contains("tone=Casual"));
}
