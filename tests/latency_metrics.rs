use brave_haven::metrics;

#[test]
fn timed_returns_the_value() {
    let (value, ms) = metrics::timed(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(ms < 1_000);
}

#[test]
fn finish_records_total() {
    let mut sm = metrics::start();
    sm.stt_ms = 5;
    sm.analysis_ms = 2;
    metrics::finish(&mut sm);
    assert!(sm.total_ms < 1_000);
    assert!(metrics::line(&sm).starts_with("[metrics] stt=5ms analysis=2ms total="));
}

#[test]
fn clamp01_bounds() {
    assert_eq!(metrics::clamp01(-0.5), 0.0);
    assert_eq!(metrics::clamp01(1.5), 1.0);
    assert_eq!(metrics::clamp01(0.25), 0.25);
}
