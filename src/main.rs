//! cloudsub - cloud-hosted subdomain discovery
//!
//! Usage: cloudsub <company_name>

use cloudsub::{CandidateGenerator, CloudSubError, EnumConfig, HitRecorder, ProbeEngine, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::io::{self, Write};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = cloudsub::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args).await {
        match e {
            CloudSubError::Usage { .. } => println!("{}", e.user_message()),
            _ => eprintln!("{}", e.user_message()),
        }
        process::exit(1);
    }
}

/// Read the company token, generate every candidate, then sweep them
async fn run(args: &[String]) -> Result<()> {
    let company = cloudsub::cli::company_arg(args)?;
    let config = EnumConfig::from_env();

    let generator = CandidateGenerator::from_config(&config, company)?;
    let candidates = generator.generate();
    tracing::debug!(
        company = %generator.company(),
        words = generator.word_count(),
        candidates = candidates.len(),
        "Candidates generated"
    );

    let engine = ProbeEngine::new(&config)?;

    let bar = ProgressBar::new(candidates.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, eta {eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );

    let mut recorder = HitRecorder::new(BarConsole(bar.clone()), &config.output_file);
    let summary = engine
        .run(&candidates, &mut recorder, |progress| {
            bar.set_position(progress.completed);
            bar.set_message(format!("{} valid", progress.valid));
        })
        .await;
    bar.finish_and_clear();

    tracing::info!(
        valid = summary.valid,
        output = %config.output_file.display(),
        "Done"
    );

    Ok(())
}

/// Stdout writer that hides the progress bar while a line is printed
struct BarConsole(ProgressBar);

impl Write for BarConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stdout().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
