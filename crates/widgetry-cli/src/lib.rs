//! Widgetry CLI library
//!
//! Argument parsing, configuration and command handlers for the `widgetry`
//! binary. The binary itself only parses, installs logging and dispatches.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod output;

pub use commands::{
    CalcArgs, Cli, ColorArg, Commands, ListArgs, NotesArgs, NotesCommand, NotesEditArgs,
    StickyArgs, StickyCommand,
};
pub use config::{CliConfig, ColorChoice, Verbosity, DEFAULT_DATA_FILE};
pub use error::{CliError, CliResult};
pub use output::OutputWriter;

/// Folds the parsed flags into a [`CliConfig`]
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_data_file(&cli.data_file)
}

/// Runs the parsed command
pub fn dispatch(cli: &Cli) -> CliResult<()> {
    let config = build_config(cli);
    match &cli.command {
        Commands::Calc(args) => handlers::execute_calc(&config, args),
        Commands::Notes(args) => handlers::execute_notes(&config, args),
        Commands::Sticky(args) => handlers::execute_sticky(&config, args),
    }
}
