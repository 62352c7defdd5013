//! Command handlers
//!
//! Each handler module contains the `execute_*` entry point for a command
//! plus the pure pieces it is built from, tested in place.

pub mod calc;
pub mod notes;
pub mod sticky;

pub use calc::{evaluate_line, execute_calc};
pub use notes::{apply_notes_command, execute_notes};
pub use sticky::{apply_sticky_command, execute_sticky};

use crate::error::{CliError, CliResult};

/// Turns a 1-based position into an index into a list of `len`
pub fn resolve_position(position: usize, len: usize) -> CliResult<usize> {
    if position == 0 || position > len {
        return Err(CliError::no_such_note(position, len));
    }
    Ok(position - 1)
}

/// Drops one trailing line ending from piped input
#[must_use]
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
