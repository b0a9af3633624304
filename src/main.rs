use std::fs;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use brave_haven::config::{self, Config};
use brave_haven::error::{HavenError, Result};
use brave_haven::pipeline::{Analyzers, AssessOptions};
use brave_haven::voice_io::{self, ScriptedTranscriber};
use brave_haven::{alerts, dialog, metrics, report, session, viz};

fn main() -> ExitCode {
    let cfg = config::from_env_or_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("[error] {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &Config) -> Result<()> {
    let mut sm = metrics::start();

    let inputs = match cfg.audio.as_deref() {
        Some(path) => {
            let stt = ScriptedTranscriber::from_script(cfg.script.as_deref().unwrap_or(""));
            let (transcript, ms) = metrics::timed(|| voice_io::transcribe_audio(&stt, path, cfg));
            sm.stt_ms = ms;
            if voice_io::is_failure(&transcript) {
                println!("[stt] {}", transcript);
                return Ok(());
            }
            println!("[stt] transcribed: {}", transcript);
            vec![transcript]
        }
        None => text_inputs(cfg)?,
    };
    info!(count = inputs.len(), "inputs loaded");

    let analyzers = Analyzers::shared();
    let opts = AssessOptions {
        remove_stopwords: !cfg.keep_stopwords,
        lemmatize: !cfg.no_lemmatize,
    };

    let mut sess = if cfg.enable_logging {
        let mut sess = session::start(&cfg.log_dir);
        session::open_file(&mut sess)?;
        Some(sess)
    } else {
        None
    };

    let mut stats = alerts::FlagStats::default();
    let mut confidences = Vec::with_capacity(inputs.len());

    for (idx, text) in inputs.iter().enumerate() {
        let (assessment, ms) = metrics::timed(|| analyzers.assess_with(text, opts));
        sm.analysis_ms += ms;

        if cfg.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        } else {
            if inputs.len() > 1 {
                println!("\n[input {}/{}]", idx + 1, inputs.len());
            }
            report::print(&assessment);
        }
        if cfg.report {
            println!(
                "{}",
                analyzers
                    .tone
                    .detailed_report(&assessment.preprocessing.cleaned_text)
            );
        }

        if let Some(sess) = sess.as_mut() {
            let snap = session::Snapshot::from_assessment(idx, &assessment, ms);
            session::write(sess, &snap)?;
        }

        alerts::update(&mut stats, &assessment);
        confidences.push((assessment.tone.confidence_level / 100.0) as f32);
    }

    if let Some(sess) = sess.take() {
        let path = session::session_path(&sess);
        session::close(sess)?;
        println!("[session] log written to {}", path.display());
    }

    if inputs.len() > 1 {
        alerts::print_summary(&stats);
        println!("[trend] confidence {}", viz::sparkline(&confidences));
    }

    metrics::finish(&mut sm);
    if cfg.enable_metrics {
        metrics::print(&sm);
    }
    Ok(())
}

fn text_inputs(cfg: &Config) -> Result<Vec<String>> {
    if let Some(text) = cfg.text.as_ref() {
        return Ok(vec![text.clone()]);
    }
    if let Some(path) = cfg.file.as_ref() {
        return Ok(vec![fs::read_to_string(path)?]);
    }
    if let Some(name) = cfg.sample.as_deref() {
        let text = dialog::resolve_sample(name)?;
        println!("[sample] {}", text);
        return Ok(vec![text.to_string()]);
    }

    let inputs = dialog::load_inputs(cfg);
    if inputs.is_empty() {
        return Err(HavenError::NoInput);
    }
    Ok(inputs)
}
