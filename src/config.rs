use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line and environment settings. Every option can also be set
/// through its `BRAVE_HAVEN_*` variable; flags given on the command line win.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "brave-haven", version)]
#[command(about = "Sentiment, emotion, tone and red/green flag analysis for text or voice input")]
pub struct Config {
    /// Text to analyze
    #[arg(long, env = "BRAVE_HAVEN_TEXT")]
    pub text: Option<String>,

    /// Read the text to analyze from a file
    #[arg(long, env = "BRAVE_HAVEN_FILE")]
    pub file: Option<PathBuf>,

    /// Raw little-endian 16-bit PCM audio to transcribe and analyze
    #[arg(long, env = "BRAVE_HAVEN_AUDIO")]
    pub audio: Option<PathBuf>,

    #[arg(long, env = "BRAVE_HAVEN_SAMPLE_RATE", default_value_t = 16_000)]
    pub sample_rate: u32,

    #[arg(long, env = "BRAVE_HAVEN_CHANNELS", default_value_t = 1)]
    pub channels: u16,

    /// Scripted recognizer output, one `;`-separated line per audio chunk
    #[arg(long, env = "BRAVE_HAVEN_SCRIPT")]
    pub script: Option<String>,

    /// Batch mode: analyze every non-empty line of this file
    #[arg(long = "inputs", env = "BRAVE_HAVEN_INPUTS")]
    pub inputs_path: Option<String>,

    /// Built-in sample text by name (positive, negative, neutral, mixed, aggressive) or `random`
    #[arg(long, env = "BRAVE_HAVEN_SAMPLE")]
    pub sample: Option<String>,

    #[arg(long, env = "BRAVE_HAVEN_MIN_SILENCE_MS", default_value_t = 500)]
    pub min_silence_ms: u32,

    #[arg(
        long,
        env = "BRAVE_HAVEN_SILENCE_THRESH_DB",
        default_value_t = -40.0,
        allow_negative_numbers = true
    )]
    pub silence_thresh_db: f32,

    #[arg(long, env = "BRAVE_HAVEN_KEEP_SILENCE_MS", default_value_t = 200)]
    pub keep_silence_ms: u32,

    /// Keep stopwords in the preprocessed tokens
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Skip root-form reduction of the preprocessed tokens
    #[arg(long)]
    pub no_lemmatize: bool,

    /// Print assessments as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Append the detailed tone report
    #[arg(long)]
    pub report: bool,

    #[arg(long = "no-metrics", action = ArgAction::SetFalse)]
    pub enable_metrics: bool,

    /// Write every assessment to a JSONL session log
    #[arg(long = "log")]
    pub enable_logging: bool,

    #[arg(long, env = "BRAVE_HAVEN_LOG_DIR", default_value = "logs")]
    pub log_dir: String,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            file: None,
            audio: None,
            sample_rate: 16_000,
            channels: 1,
            script: None,
            inputs_path: None,
            sample: None,
            min_silence_ms: 500,
            silence_thresh_db: -40.0,
            keep_silence_ms: 200,
            keep_stopwords: false,
            no_lemmatize: false,
            json: false,
            report: false,
            enable_metrics: true,
            enable_logging: false,
            log_dir: "logs".to_string(),
            verbose: 0,
        }
    }
}

impl Config {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn from_env_or_args() -> Config {
    Config::parse()
}

pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Config::try_parse_from(args)
}
