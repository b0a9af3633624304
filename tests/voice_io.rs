use std::fs;

use brave_haven::config::Config;
use brave_haven::error::{AudioError, RecognitionError};
use brave_haven::voice_io::{
    self, AudioChunk, NO_SPEECH, ScriptedTranscriber, SilenceCfg, SpeechToText,
};

const RATE: u32 = 1000;

fn tone(ms: usize) -> Vec<i16> {
    vec![10_000; ms * RATE as usize / 1000]
}

fn silence(ms: usize) -> Vec<i16> {
    vec![0; ms * RATE as usize / 1000]
}

fn pcm(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

fn speech_pause_speech() -> Vec<i16> {
    [tone(1000), silence(1000), tone(1000)].concat()
}

struct Offline;

impl SpeechToText for Offline {
    fn recognize(&self, _chunk: &AudioChunk) -> Result<String, RecognitionError> {
        Err(RecognitionError::Request("service offline".to_string()))
    }
}

#[test]
fn splits_at_long_pause_and_pads_chunks() {
    let chunks = voice_io::split_on_silence(&speech_pause_speech(), RATE, &SilenceCfg::default());
    assert_eq!(chunks.len(), 2);
    assert_eq!((chunks[0].start_ms, chunks[0].end_ms), (0, 1200));
    assert_eq!((chunks[1].start_ms, chunks[1].end_ms), (1800, 3000));
    assert_eq!(chunks[0].samples.len(), 1200);
    assert_eq!(chunks[1].index, 1);
}

#[test]
fn overlapping_padding_meets_in_the_middle() {
    let samples = [tone(600), silence(500), tone(600)].concat();
    let cfg = SilenceCfg {
        keep_silence_ms: 300,
        ..SilenceCfg::default()
    };
    let chunks = voice_io::split_on_silence(&samples, RATE, &cfg);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].end_ms, 850);
    assert_eq!(chunks[1].start_ms, 850);
    assert_eq!(chunks[1].end_ms, 1700);
}

#[test]
fn short_pause_does_not_split() {
    let samples = [tone(700), silence(300), tone(700)].concat();
    let chunks = voice_io::split_on_silence(&samples, RATE, &SilenceCfg::default());
    assert_eq!(chunks.len(), 1);
}

#[test]
fn chunks_are_transcribed_in_order() {
    let stt = ScriptedTranscriber::from_script("hello there; how are you");
    let text = voice_io::convert_audio_to_text(
        &stt,
        &pcm(&speech_pause_speech()),
        RATE,
        1,
        &SilenceCfg::default(),
    );
    assert_eq!(text, "hello there how are you");
}

#[test]
fn unintelligible_chunks_are_skipped() {
    let stt = ScriptedTranscriber::from_script("hello;");
    let text = voice_io::convert_audio_to_text(
        &stt,
        &pcm(&speech_pause_speech()),
        RATE,
        1,
        &SilenceCfg::default(),
    );
    assert_eq!(text, "hello");
}

#[test]
fn silence_and_empty_audio_report_no_speech() {
    let stt = ScriptedTranscriber::from_script("never used");
    let cfg = SilenceCfg::default();
    assert_eq!(
        voice_io::convert_audio_to_text(&stt, &pcm(&silence(2000)), RATE, 1, &cfg),
        NO_SPEECH
    );
    assert_eq!(voice_io::convert_audio_to_text(&stt, &[], RATE, 1, &cfg), NO_SPEECH);
}

#[test]
fn recognizer_failure_is_reported() {
    let text = voice_io::convert_audio_to_text(
        &Offline,
        &pcm(&tone(300)),
        RATE,
        1,
        &SilenceCfg::default(),
    );
    assert_eq!(
        text,
        "Could not request results from speech recognition service; service offline"
    );
    assert!(voice_io::is_failure(&text));
}

#[test]
fn malformed_pcm_is_reported() {
    let stt = ScriptedTranscriber::default();
    let text = voice_io::convert_audio_to_text(&stt, &[1, 2, 3], RATE, 1, &SilenceCfg::default());
    assert!(text.starts_with("Error processing audio file: "));
    assert!(voice_io::is_failure(&text));
    assert!(!voice_io::is_failure("hello there"));
}

#[test]
fn decode_downmixes_channels() {
    let bytes = pcm(&[100, 300, -50, -150]);
    assert_eq!(voice_io::decode_pcm16(&bytes, 2), Ok(vec![200, -100]));
    assert_eq!(voice_io::decode_pcm16(&bytes, 0), Err(AudioError::ZeroChannels));
    assert_eq!(
        voice_io::decode_pcm16(&bytes[..6], 2),
        Err(AudioError::TruncatedFrame { len: 6, frame: 4 })
    );
}

#[test]
fn transcribe_audio_reads_file() -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!("brave_haven_audio_{}.pcm", std::process::id()));
    fs::write(&path, pcm(&speech_pause_speech()))?;

    let cfg = Config {
        sample_rate: RATE,
        ..Config::default()
    };
    let stt = ScriptedTranscriber::from_script("first;second");
    let text = voice_io::transcribe_audio(&stt, &path, &cfg);
    assert_eq!(text, "first second");

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn missing_audio_file_is_reported() {
    let path = std::env::temp_dir().join("brave_haven_no_such_audio.pcm");
    let text = voice_io::transcribe_audio(&ScriptedTranscriber::default(), &path, &Config::default());
    assert!(text.starts_with("Error processing audio file: "));
}
