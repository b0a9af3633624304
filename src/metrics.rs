use std::time::Instant;

#[derive(Debug)]
pub struct StageMetrics {
    pub start_ts: Instant,
    pub stt_ms: u128,
    pub analysis_ms: u128,
    pub total_ms: u128,
}

pub fn start() -> StageMetrics {
    StageMetrics {
        start_ts: Instant::now(),
        stt_ms: 0,
        analysis_ms: 0,
        total_ms: 0,
    }
}

/// Runs `f` and returns its output with the elapsed milliseconds.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, u128) {
    let t0 = Instant::now();
    let out = f();
    (out, t0.elapsed().as_millis())
}

pub fn finish(sm: &mut StageMetrics) {
    sm.total_ms = sm.start_ts.elapsed().as_millis();
}

pub fn line(sm: &StageMetrics) -> String {
    format!(
        "[metrics] stt={}ms analysis={}ms total={}ms",
        sm.stt_ms, sm.analysis_ms, sm.total_ms
    )
}

pub fn print(sm: &StageMetrics) {
    println!("{}", line(sm));
}

pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
