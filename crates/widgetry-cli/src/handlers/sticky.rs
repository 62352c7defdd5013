//! Sticky command handler

use std::io::{self, Write};

use tracing::debug;
use widgetry::notes::StickyBoard;
use widgetry::storage::{FileStore, KeyValueStore};

use super::resolve_position;
use crate::commands::{StickyArgs, StickyCommand};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{list_row, OutputWriter};

/// Execute the sticky command
pub fn execute_sticky(config: &CliConfig, args: &StickyArgs) -> CliResult<()> {
    let mut board = StickyBoard::open(FileStore::new(&config.data_file))?;
    debug!(
        path = %config.data_file.display(),
        notes = board.len(),
        "sticky board opened"
    );

    let status = OutputWriter::from_config(config);
    apply_sticky_command(&mut board, &args.command, &mut io::stdout().lock(), &status)
}

/// Runs one sticky action against `board`
pub fn apply_sticky_command<S: KeyValueStore>(
    board: &mut StickyBoard<S>,
    command: &StickyCommand,
    out: &mut impl Write,
    status: &OutputWriter,
) -> CliResult<()> {
    match command {
        StickyCommand::Add { title } => {
            let index = board.add_note(title)?;
            status.success(&format!("Added sticky #{}", index + 1));
        }
        StickyCommand::List(list) => {
            if list.json {
                writeln!(out, "{}", serde_json::to_string_pretty(board.notes())?)?;
            } else if board.is_empty() {
                status.info("No sticky notes yet");
            } else {
                for (i, title) in board.titles().into_iter().enumerate() {
                    writeln!(out, "{}", list_row(i + 1, title))?;
                }
            }
        }
        StickyCommand::Edit { position, content } => {
            let index = resolve_position(*position, board.len())?;
            board.open_popup(index);
            board.save_popup(content)?;
            status.success(&format!("Saved sticky #{position}"));
        }
        StickyCommand::Delete { position } => {
            let index = resolve_position(*position, board.len())?;
            let removed = board
                .delete_note(index)?
                .ok_or_else(|| CliError::no_such_note(*position, board.len()))?;
            status.success(&format!("Deleted \"{}\"", removed.title));
        }
    }
    Ok(())
}
