//! textnorm - interactive text normalization tool.
//!
//! Collects raw text (interactively or from a file), walks the user
//! through the pipeline options, runs the normalizer once, and prints
//! the original and normalized text. Optionally persists the result.
//!
//! stdout carries the payload; all prompts and logs go to stderr.

mod error;
mod prompt;

use clap::Parser;
use error::{CliError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tn_core::{NormalizeConfig, Normalizer};
use tracing_subscriber::EnvFilter;

/// Interactive text normalization tool
#[derive(Parser, Debug)]
#[command(name = "textnorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read the text from a file instead of interactive entry
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Write the normalized text to a file without prompting
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Accept every default option without prompting
    #[arg(long, short = 'y')]
    yes: bool,

    /// Replacement token for URLs
    #[arg(long, default_value = tn_core::DEFAULT_URL_TOKEN)]
    url_token: String,

    /// Replacement token for email addresses
    #[arg(long, default_value = tn_core::DEFAULT_EMAIL_TOKEN)]
    email_token: String,

    /// Replacement token for phone numbers
    #[arg(long, default_value = tn_core::DEFAULT_PHONE_TOKEN)]
    phone_token: String,

    /// Disable URL, email, and phone redaction entirely
    #[arg(long)]
    no_redaction: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "textnorm failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut term = std::io::stderr();

    let text = collect_text(cli, &mut input, &mut term)?;
    if text.trim().is_empty() {
        eprintln!("No text entered. Exiting.");
        return Ok(());
    }

    let config = collect_config(cli, &mut input, &mut term)?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&config) {
            Ok(json) => tracing::debug!(config = %json, "effective configuration"),
            Err(err) => tracing::debug!(error = %err, "config not serializable"),
        }
    }

    let normalizer = Normalizer::new();
    let normalized = normalizer.normalize(&text, &config);

    println!("=== Original Text ===");
    println!("{text}");
    println!();
    println!("=== Normalized Text ===");
    println!("{normalized}");

    persist_result(cli, &normalized, &mut input, &mut term)?;
    Ok(())
}

/// Read the text either from `--input` or via interactive capture.
fn collect_text<R: BufRead, W: Write>(cli: &Cli, input: &mut R, term: &mut W) -> Result<String> {
    if let Some(path) = &cli.input {
        tracing::debug!(path = %path.display(), "reading input file");
        return std::fs::read_to_string(path).map_err(CliError::Input);
    }
    writeln!(term, "=== Text Normalization Tool ===").map_err(CliError::Prompt)?;
    writeln!(term, "Enter your text to normalize (press Enter twice when done):")
        .map_err(CliError::Prompt)?;
    prompt::read_multiline(input)
}

/// Build the config, prompting for each boolean unless `--yes` is set.
fn collect_config<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    term: &mut W,
) -> Result<NormalizeConfig> {
    let mut config = NormalizeConfig {
        replace_urls: Some(cli.url_token.clone()),
        replace_emails: Some(cli.email_token.clone()),
        replace_phone_numbers: Some(cli.phone_token.clone()),
        ..NormalizeConfig::default()
    };
    if cli.no_redaction {
        config.replace_urls = None;
        config.replace_emails = None;
        config.replace_phone_numbers = None;
    }
    if cli.yes {
        return Ok(config);
    }

    writeln!(term, "\nChoose normalization options:").map_err(CliError::Prompt)?;
    config.lowercase = prompt::ask_yes_no(input, term, "Convert to lowercase?", true)?;
    config.remove_accents = prompt::ask_yes_no(input, term, "Remove accents?", true)?;
    config.expand_contractions =
        prompt::ask_yes_no(input, term, "Expand contractions?", true)?;
    config.expand_abbreviations =
        prompt::ask_yes_no(input, term, "Expand abbreviations?", false)?;
    config.remove_punctuation =
        prompt::ask_yes_no(input, term, "Remove punctuation?", false)?;
    config.remove_numbers = prompt::ask_yes_no(input, term, "Remove numbers?", false)?;
    config.remove_extra_whitespace =
        prompt::ask_yes_no(input, term, "Remove extra whitespace?", true)?;
    Ok(config)
}

/// Save the result if requested. Write failures are reported but never
/// abort: the normalized text has already been displayed.
fn persist_result<R: BufRead, W: Write>(
    cli: &Cli,
    normalized: &str,
    input: &mut R,
    term: &mut W,
) -> Result<()> {
    let path = if let Some(path) = &cli.output {
        path.clone()
    } else {
        if cli.yes {
            return Ok(());
        }
        let save = prompt::ask_yes_no(input, term, "\nSave normalized text to file?", false)?;
        if !save {
            return Ok(());
        }
        PathBuf::from(prompt::ask_filename(
            input,
            term,
            "Enter filename",
            "normalized.txt",
        )?)
    };

    match std::fs::write(&path, normalized) {
        Ok(()) => {
            writeln!(term, "Text saved to {}", path.display()).map_err(CliError::Prompt)?;
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "save failed");
            writeln!(term, "Error saving file: {err}").map_err(CliError::Prompt)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
