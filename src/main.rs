use std::fs::read_to_string;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rlox::reporter::ConsoleReporter;
use rlox::repl::Prompt;
use rlox::scanner::tokenize;

#[derive(Parser)]
#[command(name = "rlox", about = "Scan Lox source and print its tokens", version)]
struct Cli {
    /// Lox script to scan, starts an interactive prompt when omitted
    script: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CLIError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("file does not seem to exist {0}")]
    FileDoesNotExist(String),
}

fn main() -> Result<(), color_eyre::eyre::Error> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.script {
        Some(path) => {
            debug!(path = %path.display(), "running file");
            if run_file(&path)? {
                // data format error, same as sysexits EX_DATAERR
                exit(65);
            }
        }
        None => {
            debug!("running prompt");
            run_prompt()?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rlox=debug" } else { "rlox=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns whether any lexical error was reported.
fn run_file(path: &Path) -> Result<bool, CLIError> {
    if !path.try_exists()? {
        return Err(CLIError::FileDoesNotExist(path.display().to_string()));
    }
    let source = read_to_string(path)?;
    let mut reporter = ConsoleReporter::new(io::stderr());
    run(&source, &mut reporter);
    Ok(reporter.had_error())
}

fn run_prompt() -> Result<(), CLIError> {
    let stdin = io::stdin();
    let mut reporter = ConsoleReporter::new(io::stderr());
    for line in Prompt::new(stdin.lock(), io::stdout()) {
        run(&line?, &mut reporter);
        reporter.reset();
    }
    Ok(())
}

fn run<W: Write>(source: &str, reporter: &mut ConsoleReporter<W>) {
    for token in tokenize(source, |err| reporter.report(&err)) {
        println!("{token}");
    }
}
