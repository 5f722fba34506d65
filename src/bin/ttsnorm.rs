//! ttsnorm CLI: normalise text for TTS and run the evaluation corpus.
//!
//! ```text
//! ttsnorm normalize "Dr. Smith paid $1,299.50" [--config cfg.json]
//! echo "On 01/02/23, Mr. Jones arrived." | ttsnorm normalize --keep-going
//! ttsnorm eval [--json]
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ttsnorm::{
    eval::{evaluate, render_markdown, summarize, BUILTIN_SAMPLES},
    NormalizerConfig, TextNormalizer,
};

/// ttsnorm: text normalisation for speech synthesis
#[derive(Parser)]
#[command(name = "ttsnorm", version, about)]
struct Cli {
    /// JSON pipeline config (pass toggles, century_pivot)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalise each argument, or each stdin line when none are given
    Normalize {
        /// Text to normalise
        text: Vec<String>,
        /// Skip inputs that fail instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,
    },
    /// Run the built-in evaluation corpus
    Eval {
        /// Print rows and summary as JSON instead of a markdown table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => NormalizerConfig::load(path)?,
        None => NormalizerConfig::default(),
    };
    let normalizer = TextNormalizer::with_config(config);

    match cli.command {
        Command::Normalize { text, keep_going } => normalize_inputs(&normalizer, text, keep_going),
        Command::Eval { json } => run_eval(&normalizer, json),
    }
}

fn normalize_inputs(normalizer: &TextNormalizer, text: Vec<String>, keep_going: bool) -> Result<ExitCode> {
    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if text.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(text.into_iter().map(Ok))
    };

    let mut stdout = io::stdout().lock();
    let mut failed = 0usize;
    for (lineno, input) in inputs.enumerate() {
        let input = input.context("Failed to read stdin")?;
        match normalizer.process(&input) {
            Ok(out) => writeln!(stdout, "{}", out)?,
            Err(e) if keep_going => {
                warn!(input = lineno + 1, "skipping: {}", e);
                failed += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("input {}", lineno + 1)),
        }
    }

    if failed > 0 {
        info!(failed, "some inputs were skipped");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_eval(normalizer: &TextNormalizer, json: bool) -> Result<ExitCode> {
    let rows = evaluate(normalizer, BUILTIN_SAMPLES);
    let summary = summarize(&rows);

    if json {
        let doc = serde_json::json!({ "rows": rows, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("\nTest-set results\n");
        print!("{}", render_markdown(&rows, &summary));
    }

    if rows.iter().all(|r| r.correct) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
