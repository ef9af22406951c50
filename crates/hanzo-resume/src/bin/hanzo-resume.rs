//! CLI for extracting resume text, contacts and links
//!
//! Usage:
//!   hanzo-resume resume.pdf
//!   hanzo-resume --compact --config resume.toml resume.docx
//!
//! The result is always printed to stdout as JSON. Only a missing path or an
//! unreadable config exits non-zero; extraction failures are reported in the
//! `success` field.

use anyhow::Result;
use clap::Parser;
use hanzo_resume::{extract_resume_with, ErrorKind, ExtractionResult, ExtractorConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "hanzo-resume", version)]
#[command(about = "Extract text, emails, phones and links from PDF, DOCX and TXT resumes")]
struct Args {
    /// Resume file to process
    #[arg(allow_hyphen_values = true)]
    file: Option<PathBuf>,

    /// Arguments after the file are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,

    /// TOML configuration file
    #[arg(short, long, env = "HANZO_RESUME_CONFIG")]
    config: Option<PathBuf>,

    /// Print single-line JSON instead of indented output
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.ignored.is_empty() {
        debug!(ignored = ?args.ignored, "ignoring extra arguments");
    }

    let Some(file) = args.file else {
        let result = ExtractionResult::failure(ErrorKind::MissingArgument, "No file path provided");
        return finish(&result, args.compact, ExitCode::FAILURE);
    };

    let config = match args.config {
        Some(path) => match ExtractorConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                let result: ExtractionResult = e.into();
                return finish(&result, args.compact, ExitCode::FAILURE);
            }
        },
        None => ExtractorConfig::default(),
    };
    debug!(?config, "loaded configuration");

    let result = extract_resume_with(&file, &config);
    finish(&result, args.compact, ExitCode::SUCCESS)
}

fn finish(result: &ExtractionResult, compact: bool, code: ExitCode) -> ExitCode {
    match print_json(result, compact) {
        Ok(()) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json(result: &ExtractionResult, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
