//! Widgetry: calculator and notes from the terminal
//!
//! ## Usage
//!
//! ```bash
//! widgetry calc "2+3*4"            # Prints 14
//! widgetry calc                    # Terminal calculator
//! widgetry notes add "Groceries"   # Add a heading/content note
//! widgetry notes                   # Terminal notes app
//! widgetry sticky list --json      # Sticky notes as JSON
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use widgetry_cli::{dispatch, Cli, CliResult, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));
    dispatch(&cli)
}

/// Logs to stderr; `RUST_LOG` overrides the level picked from `-q`/`-v`
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
