use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HavenError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session file not opened")]
    SessionNotOpened,

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("no input text: pass --text, --file, --audio, --inputs or --sample")]
    NoInput,

    #[error("unknown sample '{0}'")]
    UnknownSample(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    #[error("channel count must be positive")]
    ZeroChannels,

    #[error("pcm stream of {len} bytes is not a whole number of {frame}-byte frames")]
    TruncatedFrame { len: usize, frame: usize },
}

/// Per-chunk recognizer failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("speech was not intelligible")]
    Unintelligible,

    #[error("{0}")]
    Request(String),
}

pub type Result<T> = std::result::Result<T, HavenError>;
