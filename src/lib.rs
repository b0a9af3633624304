pub mod alerts;
pub mod config;
pub mod dialog;
pub mod emotion;
pub mod error;
pub mod flags;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod sentiment;
pub mod session;
pub mod signals;
pub mod tone;
pub mod viz;
pub mod voice_io;

pub use error::{HavenError, Result};
pub use pipeline::{Analyzers, Assessment, assess};
pub use tone::{ToneAnalysis, ToneAnalyzer};
