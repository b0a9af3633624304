//! Speech-to-text front end.
//!
//! Audio arrives as raw little-endian 16-bit PCM. It is cut into chunks at
//! stretches of silence, each chunk goes to a [`SpeechToText`] recognizer,
//! and the recognized pieces are joined into one transcript. Failures are
//! reported as readable strings in place of the transcript.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AudioError, RecognitionError};

pub const NO_SPEECH: &str = "Error: No speech detected or audio too short.";

const MAX_AMPLITUDE: f64 = 32768.0;

const FAILURE_PREFIXES: &[&str] = &[
    "Error: ",
    "Error processing audio file: ",
    "Could not request results from speech recognition service; ",
];

/// Whether a transcript is one of the readable failure strings.
pub fn is_failure(transcript: &str) -> bool {
    FAILURE_PREFIXES.iter().any(|p| transcript.starts_with(p))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilenceCfg {
    /// Shortest pause that splits two chunks.
    pub min_silence_ms: u32,
    /// Windows at or below this level (dBFS) count as silence.
    pub silence_thresh_db: f32,
    /// Silence kept on both sides of every chunk.
    pub keep_silence_ms: u32,
}

impl Default for SilenceCfg {
    fn default() -> Self {
        Self {
            min_silence_ms: 500,
            silence_thresh_db: -40.0,
            keep_silence_ms: 200,
        }
    }
}

impl SilenceCfg {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            min_silence_ms: cfg.min_silence_ms,
            silence_thresh_db: cfg.silence_thresh_db,
            keep_silence_ms: cfg.keep_silence_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub index: usize,
    pub start_ms: u64,
    pub end_ms: u64,
    pub sample_rate: u32,
    pub samples: Vec<i16>,
}

pub trait SpeechToText {
    fn recognize(&self, chunk: &AudioChunk) -> Result<String, RecognitionError>;
}

/// Recognizer that replays one scripted line per chunk.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTranscriber {
    lines: Vec<String>,
}

impl ScriptedTranscriber {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// `"first chunk;second chunk"`
    pub fn from_script(script: &str) -> Self {
        Self::new(
            script
                .split(';')
                .map(|part| part.trim().to_string())
                .collect(),
        )
    }
}

impl SpeechToText for ScriptedTranscriber {
    fn recognize(&self, chunk: &AudioChunk) -> Result<String, RecognitionError> {
        match self.lines.get(chunk.index) {
            Some(line) if !line.is_empty() => Ok(line.clone()),
            _ => Err(RecognitionError::Unintelligible),
        }
    }
}

/// Interleaved PCM16LE frames, downmixed to mono by averaging channels.
pub fn decode_pcm16(bytes: &[u8], channels: u16) -> Result<Vec<i16>, AudioError> {
    if channels == 0 {
        return Err(AudioError::ZeroChannels);
    }
    let frame = 2 * channels as usize;
    if bytes.len() % frame != 0 {
        return Err(AudioError::TruncatedFrame {
            len: bytes.len(),
            frame,
        });
    }

    let samples = bytes
        .chunks_exact(frame)
        .map(|frame_bytes| {
            let sum: i32 = frame_bytes
                .chunks_exact(2)
                .map(|b| i16::from_le_bytes([b[0], b[1]]) as i32)
                .sum();
            (sum / channels as i32) as i16
        })
        .collect();
    Ok(samples)
}

fn ms_to_index(ms: u64, sample_rate: u32, len: usize) -> usize {
    let idx = ms * sample_rate as u64 / 1000;
    (idx as usize).min(len)
}

/// Silent ranges in milliseconds, scanning one window per millisecond.
fn detect_silence(samples: &[i16], sample_rate: u32, cfg: &SilenceCfg) -> Vec<(u64, u64)> {
    let len = samples.len();
    let seg_ms = len as u64 * 1000 / sample_rate as u64;
    let min_silence = cfg.min_silence_ms as u64;
    if seg_ms < min_silence {
        return Vec::new();
    }

    let mut prefix = Vec::with_capacity(len + 1);
    prefix.push(0.0_f64);
    for s in samples {
        let v = *s as f64;
        let last = prefix[prefix.len() - 1];
        prefix.push(last + v * v);
    }

    let threshold = 10f64.powf(cfg.silence_thresh_db as f64 / 20.0) * MAX_AMPLITUDE;
    let last_start = seg_ms - min_silence;

    let mut starts: Vec<u64> = Vec::new();
    for start in 0..=last_start {
        let a = ms_to_index(start, sample_rate, len);
        let b = ms_to_index(start + min_silence, sample_rate, len);
        let n = b.saturating_sub(a);
        let rms = if n == 0 {
            0.0
        } else {
            ((prefix[b] - prefix[a]) / n as f64).sqrt()
        };
        if rms <= threshold {
            starts.push(start);
        }
    }

    let Some(&first) = starts.first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut range_start = first;
    let mut prev = first;
    for &start in &starts[1..] {
        let continuous = start == prev + 1;
        let has_gap = start > prev + min_silence;
        if !continuous && has_gap {
            ranges.push((range_start, prev + min_silence));
            range_start = start;
        }
        prev = start;
    }
    ranges.push((range_start, prev + min_silence));
    ranges
}

fn detect_nonsilent(samples: &[i16], sample_rate: u32, cfg: &SilenceCfg) -> Vec<(u64, u64)> {
    let seg_ms = samples.len() as u64 * 1000 / sample_rate as u64;
    let silent = detect_silence(samples, sample_rate, cfg);
    if silent.is_empty() {
        return vec![(0, seg_ms)];
    }
    if silent[0] == (0, seg_ms) {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut prev_end = 0;
    for &(start, end) in &silent {
        ranges.push((prev_end, start));
        prev_end = end;
    }
    if prev_end != seg_ms {
        ranges.push((prev_end, seg_ms));
    }
    if ranges.first() == Some(&(0, 0)) {
        ranges.remove(0);
    }
    ranges
}

/// Splits audio at silences of at least `min_silence_ms`, padding each
/// chunk with up to `keep_silence_ms` of the surrounding silence.
pub fn split_on_silence(samples: &[i16], sample_rate: u32, cfg: &SilenceCfg) -> Vec<AudioChunk> {
    if samples.is_empty() || sample_rate == 0 {
        return Vec::new();
    }

    let keep = cfg.keep_silence_ms as i64;
    let mut ranges: Vec<(i64, i64)> = detect_nonsilent(samples, sample_rate, cfg)
        .into_iter()
        .map(|(start, end)| (start as i64 - keep, end as i64 + keep))
        .collect();

    // Overlapping padding is split at the midpoint.
    for i in 1..ranges.len() {
        let last_end = ranges[i - 1].1;
        let next_start = ranges[i].0;
        if next_start < last_end {
            let mid = (last_end + next_start).div_euclid(2);
            ranges[i - 1].1 = mid;
            ranges[i].0 = mid;
        }
    }

    let seg_ms = samples.len() as i64 * 1000 / sample_rate as i64;
    ranges
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            let start_ms = start.clamp(0, seg_ms) as u64;
            let end_ms = end.clamp(0, seg_ms) as u64;
            let a = ms_to_index(start_ms, sample_rate, samples.len());
            let b = ms_to_index(end_ms, sample_rate, samples.len());
            AudioChunk {
                index,
                start_ms,
                end_ms,
                sample_rate,
                samples: samples[a..b.max(a)].to_vec(),
            }
        })
        .collect()
}

/// Full transcript of a PCM stream, or a readable error string.
pub fn convert_audio_to_text(
    stt: &dyn SpeechToText,
    bytes: &[u8],
    sample_rate: u32,
    channels: u16,
    cfg: &SilenceCfg,
) -> String {
    if sample_rate == 0 {
        return format!("Error processing audio file: {}", AudioError::ZeroSampleRate);
    }
    let samples = match decode_pcm16(bytes, channels) {
        Ok(samples) => samples,
        Err(err) => return format!("Error processing audio file: {}", err),
    };

    let chunks = split_on_silence(&samples, sample_rate, cfg);
    info!(chunks = chunks.len(), "audio split on silence");
    if chunks.is_empty() {
        return NO_SPEECH.to_string();
    }

    let mut full_text = String::new();
    for chunk in &chunks {
        match stt.recognize(chunk) {
            Ok(text) => {
                full_text.push_str(&text);
                full_text.push(' ');
            }
            Err(RecognitionError::Unintelligible) => {
                debug!(chunk = chunk.index, "chunk not understood");
            }
            Err(RecognitionError::Request(err)) => {
                warn!(chunk = chunk.index, %err, "recognizer request failed");
                return format!(
                    "Could not request results from speech recognition service; {}",
                    err
                );
            }
        }
    }

    full_text.trim().to_string()
}

/// Reads a PCM file and transcribes it with the configured audio layout.
pub fn transcribe_audio(stt: &dyn SpeechToText, path: &Path, cfg: &Config) -> String {
    info!(path = %path.display(), sr = cfg.sample_rate, ch = cfg.channels, "transcribing audio");
    match fs::read(path) {
        Ok(bytes) => convert_audio_to_text(
            stt,
            &bytes,
            cfg.sample_rate,
            cfg.channels,
            &SilenceCfg::from_config(cfg),
        ),
        Err(err) => format!("Error processing audio file: {}", err),
    }
}
