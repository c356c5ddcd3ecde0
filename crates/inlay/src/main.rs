//! inlay CLI - asset-inlining preprocessor.
//!
//! Reads source text from stdin, replaces `/*! include FILE */` directives
//! with line-wrapped base64 literals of the referenced files (minifying SVG
//! assets first), and streams the result to stdout. Asset paths resolve
//! against the current working directory.

mod error;
mod output;

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use error::CliError;
use inlay_assets::{AssetRenderer, expand};
use output::Output;

/// inlay - inline file assets as base64 literals.
#[derive(Parser)]
#[command(name = "inlay", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr; stdout is the expanded text.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Read stdin fully, expand directives, stream to stdout, flush.
fn run() -> Result<(), CliError> {
    let input = io::read_to_string(io::stdin())?;
    let renderer = AssetRenderer::new(std::env::current_dir()?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    expand(&input, &renderer, &mut out)?;
    out.flush()?;
    Ok(())
}
