use std::fs;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::config::Config;
use crate::error::{HavenError, Result};

/// Built-in demo texts, by name.
pub const SAMPLE_TEXTS: &[(&str, &str)] = &[
    (
        "positive",
        "I am so happy and excited about this wonderful opportunity! This is absolutely amazing and I feel confident about the future!",
    ),
    (
        "negative",
        "I hate this stupid thing! It's absolutely terrible and makes me furious! This is completely unacceptable!",
    ),
    (
        "neutral",
        "The weather is nice today. I went to the store and bought some groceries. Everything seems normal.",
    ),
    (
        "mixed",
        "I'm really excited about this project, but I'm also scared that I might fail. It's a wonderful opportunity though!",
    ),
    (
        "aggressive",
        "You are an IDIOT! I can't believe how STUPID this is! I'm going to DESTROY anyone who gets in my way!",
    ),
];

pub fn sample_names() -> impl Iterator<Item = &'static str> {
    SAMPLE_TEXTS.iter().map(|(name, _)| *name)
}

/// Sample by name, case-insensitive; "Positive Example" also matches.
pub fn sample(name: &str) -> Option<&'static str> {
    let key = name.trim().to_lowercase();
    let key = key.strip_suffix(" example").unwrap_or(&key);
    SAMPLE_TEXTS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, text)| *text)
}

pub fn random_sample<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_TEXTS
        .choose(rng)
        .map(|(_, text)| *text)
        .unwrap_or(SAMPLE_TEXTS[0].1)
}

/// `random` picks one at random; anything else is looked up by name.
pub fn resolve_sample(name: &str) -> Result<&'static str> {
    if name.eq_ignore_ascii_case("random") {
        return Ok(random_sample(&mut rand::thread_rng()));
    }
    sample(name).ok_or_else(|| HavenError::UnknownSample(name.to_string()))
}

/// Batch inputs: the inputs file, one text per line, or else the `;`
/// script when no audio is given. Empty when neither yields anything.
pub fn load_inputs(cfg: &Config) -> Vec<String> {
    if let Some(path) = cfg.inputs_path.as_deref() {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let lines: Vec<String> = contents
                    .lines()
                    .map(|line| line.trim())
                    .filter(|line| !line.is_empty())
                    .map(|line| line.to_string())
                    .collect();
                if !lines.is_empty() {
                    return lines;
                }
            }
            Err(err) => {
                warn!(path, %err, "failed to read inputs file");
            }
        }
    }

    if cfg.audio.is_none() {
        if let Some(script) = cfg.script.as_ref() {
            return script
                .split(';')
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .map(|part| part.to_string())
                .collect();
        }
    }

    Vec::new()
}
