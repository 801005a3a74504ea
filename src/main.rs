// src/main.rs
mod extractors;
mod report;
mod utils;

use clap::Parser;
use std::path::PathBuf;
use utils::AppError;

/// Extract bold-defined terms from an HTML rulebook and print a grouped report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the HTML file to scan
    #[arg(allow_hyphen_values = true)]
    html_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var, writes to stderr)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match run(&args) {
        Err(e) if e.is_usage() => {
            println!("{}", e);
            std::process::exit(1);
        }
        other => other,
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let html_file = args.html_file.as_ref().ok_or(AppError::MissingArgument)?;

    if !html_file.exists() {
        tracing::warn!("Input file does not exist: {}", html_file.display());
        return Err(AppError::FileNotFound(html_file.clone()));
    }

    // 3. Load the whole document; the handle is closed before scanning starts
    let html_content = std::fs::read_to_string(html_file)?;
    tracing::info!("Loaded {} ({} bytes)", html_file.display(), html_content.len());

    // 4. Extract and report
    let terms = extractors::extract_terms(&html_content);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &terms)?;

    Ok(())
}
