use std::fs;
use std::io::Write;
use std::path::PathBuf;

use brave_haven::config::Config;
use brave_haven::dialog::{self, SAMPLE_TEXTS, load_inputs};
use brave_haven::error::HavenError;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn load_inputs_from_script() {
    let mut cfg = Config::default();
    cfg.script = Some("a;b; ;c".to_string());

    let items = load_inputs(&cfg);
    assert_eq!(items, vec!["a", "b", "c"]);
}

#[test]
fn script_belongs_to_the_recognizer_when_audio_is_given() {
    let mut cfg = Config::default();
    cfg.script = Some("a;b".to_string());
    cfg.audio = Some(PathBuf::from("speech.pcm"));

    assert!(load_inputs(&cfg).is_empty());
}

#[test]
fn load_inputs_from_file_trims_empty_lines() {
    let mut cfg = Config::default();
    let path = std::env::temp_dir().join(format!(
        "brave_haven_dialog_{}_{}.txt",
        std::process::id(),
        unique_suffix()
    ));
    let mut file = fs::File::create(&path).expect("create temp file");
    writeln!(file, "first").unwrap();
    writeln!(file).unwrap();
    writeln!(file, " second ").unwrap();
    file.sync_all().unwrap();

    cfg.inputs_path = Some(path.to_string_lossy().to_string());
    cfg.script = Some("ignored".to_string());

    let items = load_inputs(&cfg);
    assert_eq!(items, vec!["first", "second"]);

    let _ = fs::remove_file(path);
}

#[test]
fn unreadable_inputs_file_falls_back_to_script() {
    let mut cfg = Config::default();
    cfg.inputs_path = Some("/nonexistent/brave_haven_inputs.txt".to_string());
    cfg.script = Some("fallback".to_string());

    assert_eq!(load_inputs(&cfg), vec!["fallback"]);
}

#[test]
fn nothing_configured_yields_nothing() {
    assert!(load_inputs(&Config::default()).is_empty());
}

#[test]
fn samples_by_name() {
    assert_eq!(SAMPLE_TEXTS.len(), 5);
    assert!(dialog::sample("Mixed").unwrap().contains("scared that I might fail"));
    assert_eq!(dialog::sample("Positive Example"), dialog::sample("positive"));
    assert!(dialog::sample("sarcastic").is_none());
    assert_eq!(
        dialog::sample_names().collect::<Vec<_>>(),
        vec!["positive", "negative", "neutral", "mixed", "aggressive"]
    );
}

#[test]
fn random_sample_is_a_builtin() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let text = dialog::random_sample(&mut rng);
        assert!(SAMPLE_TEXTS.iter().any(|(_, t)| *t == text));
    }
    assert!(dialog::resolve_sample("random").is_ok());
}

#[test]
fn unknown_sample_is_an_error() {
    assert!(matches!(
        dialog::resolve_sample("sarcastic"),
        Err(HavenError::UnknownSample(name)) if name == "sarcastic"
    ));
}

fn unique_suffix() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}
