use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HavenError, Result};
use crate::pipeline::Assessment;

pub struct Session {
    pub id: String,
    pub log_dir: String,
    file: Option<BufWriter<File>>,
}

/// One JSONL record per assessed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ts: String,
    pub idx: usize,
    pub input: String,
    pub sentiment: String,
    pub compound: f64,
    pub emotion: String,
    pub tone: String,
    pub confidence: f64,
    pub status: String,
    pub red_flags: usize,
    pub green_flags: usize,
    pub analysis_ms: u128,
}

impl Snapshot {
    pub fn from_assessment(idx: usize, assessment: &Assessment, analysis_ms: u128) -> Self {
        Self {
            ts: now_ts(),
            idx,
            input: assessment.input_text.clone(),
            sentiment: assessment.sentiment_label.as_str().to_string(),
            compound: assessment.sentiment.compound,
            emotion: assessment.emotion_label.clone(),
            tone: assessment.tone.dominant_tone.as_str().to_string(),
            confidence: assessment.tone.confidence_level,
            status: assessment.flags.overall_status.as_str().to_string(),
            red_flags: assessment.flags.red_flags.len(),
            green_flags: assessment.flags.green_flags.len(),
            analysis_ms,
        }
    }
}

pub fn start(log_dir: &str) -> Session {
    Session {
        id: generate_id(),
        log_dir: log_dir.to_string(),
        file: None,
    }
}

pub fn open_file(sess: &mut Session) -> Result<()> {
    let path = session_path(sess);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!(path = %path.display(), "session log opened");
    sess.file = Some(BufWriter::new(File::create(path)?));
    Ok(())
}

pub fn write(sess: &mut Session, snap: &Snapshot) -> Result<()> {
    let file = sess.file.as_mut().ok_or(HavenError::SessionNotOpened)?;
    serde_json::to_writer(&mut *file, snap)?;
    writeln!(file)?;
    Ok(())
}

pub fn close(mut sess: Session) -> Result<()> {
    if let Some(mut file) = sess.file.take() {
        file.flush()?;
    }
    Ok(())
}

pub fn session_path(sess: &Session) -> PathBuf {
    Path::new(&sess.log_dir).join(format!("session-{}.jsonl", sess.id))
}

/// Seconds since the epoch with millisecond precision, e.g. `1700000000.123`.
pub fn now_ts() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn generate_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let hex = format!("{:016x}", now.as_nanos());
    let len = hex.len();
    hex[len.saturating_sub(8)..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_eight_hex_digits() {
        let id = generate_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn timestamp_has_millis() {
        let ts = now_ts();
        let (_, millis) = ts.split_once('.').unwrap();
        assert_eq!(millis.len(), 3);
    }
}
