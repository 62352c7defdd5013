//! Calc command handler

use std::io::{self, Write};

use tracing::debug;
use widgetry::calc::{evaluate_expression, format_number, ERROR_DISPLAY};

use crate::commands::CalcArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Execute the calc command
pub fn execute_calc(_config: &CliConfig, args: &CalcArgs) -> CliResult<()> {
    match args.expression.as_deref() {
        Some(expr) => evaluate_line(expr, &mut io::stdout().lock()),
        None => launch_calculator(),
    }
}

/// Prints what the display would show for `expr`
///
/// A failed evaluation still prints the error display, then reports the
/// reason so the exit status is non-zero.
pub fn evaluate_line(expr: &str, out: &mut impl Write) -> CliResult<()> {
    match evaluate_expression(expr) {
        Ok(value) => {
            writeln!(out, "{}", format_number(value))?;
            Ok(())
        }
        Err(e) => {
            debug!(expr, error = %e, "expression rejected");
            writeln!(out, "{ERROR_DISPLAY}")?;
            Err(CliError::calc(e.to_string()))
        }
    }
}

#[cfg(feature = "tui")]
fn launch_calculator() -> CliResult<()> {
    widgetry::tui::run_calculator()?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn launch_calculator() -> CliResult<()> {
    Err(CliError::config(
        "the terminal calculator needs the `tui` feature; pass an expression instead",
    ))
}
