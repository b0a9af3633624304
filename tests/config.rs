use std::path::PathBuf;

use brave_haven::config::{self, Config};

#[test]
fn no_arguments_match_defaults() {
    let cfg = config::from_args(["brave-haven"]).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(cfg.enable_metrics);
    assert_eq!(cfg.sample_rate, 16_000);
    assert_eq!(cfg.log_dir, "logs");
}

#[test]
fn flags_and_options_parse() {
    let cfg = config::from_args([
        "brave-haven",
        "--audio",
        "speech.pcm",
        "--script",
        "one;two",
        "--sample-rate",
        "8000",
        "--channels",
        "2",
        "--silence-thresh-db",
        "-35",
        "--inputs",
        "batch.txt",
        "--no-metrics",
        "--log",
        "--json",
        "-vv",
    ])
    .unwrap();

    assert_eq!(cfg.audio, Some(PathBuf::from("speech.pcm")));
    assert_eq!(cfg.script.as_deref(), Some("one;two"));
    assert_eq!(cfg.sample_rate, 8000);
    assert_eq!(cfg.channels, 2);
    assert_eq!(cfg.silence_thresh_db, -35.0);
    assert_eq!(cfg.inputs_path.as_deref(), Some("batch.txt"));
    assert!(!cfg.enable_metrics);
    assert!(cfg.enable_logging);
    assert!(cfg.json);
    assert_eq!(cfg.verbose, 2);
    assert_eq!(cfg.log_filter(), "debug");
}

#[test]
fn bad_numbers_are_rejected() {
    assert!(config::from_args(["brave-haven", "--sample-rate", "fast"]).is_err());
}
