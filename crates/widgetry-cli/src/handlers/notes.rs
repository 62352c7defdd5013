//! Notes command handler

use std::io::{self, Read, Write};

use tracing::debug;
use widgetry::notes::{BoardConfig, NoteBoard};
use widgetry::storage::{FileStore, KeyValueStore};

use super::{resolve_position, strip_trailing_newline};
use crate::commands::{NotesArgs, NotesCommand};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{list_row, OutputWriter};

/// Execute the notes command
pub fn execute_notes(config: &CliConfig, args: &NotesArgs) -> CliResult<()> {
    let board_config = BoardConfig::default().with_seed_samples(!args.no_samples);
    let mut board = NoteBoard::open(FileStore::new(&config.data_file), board_config)?;
    debug!(
        path = %config.data_file.display(),
        notes = board.len(),
        "notes board opened"
    );

    let Some(command) = &args.command else {
        return launch_notes(board);
    };

    let status = OutputWriter::from_config(config);
    apply_notes_command(
        &mut board,
        command,
        &mut io::stdout().lock(),
        io::stdin().lock(),
        &status,
    )
}

/// Runs one notes action against `board`
///
/// Results go to `out`; `input` is only read by `edit --stdin`.
pub fn apply_notes_command<S: KeyValueStore>(
    board: &mut NoteBoard<S>,
    command: &NotesCommand,
    out: &mut impl Write,
    mut input: impl Read,
    status: &OutputWriter,
) -> CliResult<()> {
    match command {
        NotesCommand::Add { heading } => {
            let index = board.add_note(heading)?;
            status.success(&format!("Added note #{}", index + 1));
        }
        NotesCommand::List(list) => {
            if list.json {
                writeln!(out, "{}", serde_json::to_string_pretty(board.notes())?)?;
            } else if board.is_empty() {
                status.info("No notes yet");
            } else {
                for (i, note) in board.notes().iter().enumerate() {
                    writeln!(out, "{}", list_row(i + 1, &note.heading))?;
                }
            }
        }
        NotesCommand::Show { position } => {
            let index = resolve_position(*position, board.len())?;
            let note = board
                .get(index)
                .ok_or_else(|| CliError::no_such_note(*position, board.len()))?;
            writeln!(out, "{}", note.heading)?;
            if !note.content.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", note.content)?;
            }
        }
        NotesCommand::Edit(edit) => {
            let index = resolve_position(edit.position, board.len())?;
            let content = if edit.stdin {
                let mut buf = String::new();
                input.read_to_string(&mut buf)?;
                strip_trailing_newline(&buf).to_string()
            } else {
                edit.content.clone().unwrap_or_default()
            };

            board.open_edit_session(index);
            board.save_edit_session(&content)?;
            status.success(&format!("Saved note #{}", edit.position));
        }
        NotesCommand::Delete { position } => {
            let index = resolve_position(*position, board.len())?;
            let removed = board
                .delete_note(index)?
                .ok_or_else(|| CliError::no_such_note(*position, board.len()))?;
            status.success(&format!("Deleted \"{}\"", removed.heading));
        }
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn launch_notes<S: KeyValueStore>(board: NoteBoard<S>) -> CliResult<()> {
    widgetry::tui::run_notes(board)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn launch_notes<S: KeyValueStore>(_board: NoteBoard<S>) -> CliResult<()> {
    Err(CliError::config(
        "the terminal notes app needs the `tui` feature; pass a subcommand instead",
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::{ListArgs, NotesEditArgs};
    use tempfile::TempDir;
    use widgetry::notes::NotesError;
    use widgetry::storage::MemoryStore;

    fn quiet() -> OutputWriter {
        OutputWriter::new(false, true)
    }

    fn empty_board() -> NoteBoard<MemoryStore> {
        NoteBoard::open(MemoryStore::new(), BoardConfig::empty()).unwrap()
    }

    fn run(board: &mut NoteBoard<MemoryStore>, command: NotesCommand) -> (String, CliResult<()>) {
        run_with_input(board, command, "")
    }

    fn run_with_input(
        board: &mut NoteBoard<MemoryStore>,
        command: NotesCommand,
        input: &str,
    ) -> (String, CliResult<()>) {
        let mut out = Vec::new();
        let result = apply_notes_command(board, &command, &mut out, input.as_bytes(), &quiet());
        (String::from_utf8(out).unwrap(), result)
    }

    fn add(board: &mut NoteBoard<MemoryStore>, heading: &str) {
        run(board, NotesCommand::Add { heading: heading.to_string() })
            .1
            .unwrap();
    }

    mod add_tests {
        use super::*;

        #[test]
        fn test_add_trims_heading() {
            let mut board = empty_board();
            add(&mut board, "  Groceries  ");
            assert_eq!(board.headings(), vec!["Groceries"]);
        }

        #[test]
        fn test_add_blank_is_rejected() {
            let mut board = empty_board();
            let (_, result) = run(&mut board, NotesCommand::Add { heading: "   ".into() });
            let err = result.unwrap_err();
            assert!(matches!(err, CliError::Notes(NotesError::EmptyHeading)));
            assert_eq!(err.to_string(), "Please enter a note heading!");
            assert!(board.is_empty());
        }
    }

    mod list_tests {
        use super::*;

        #[test]
        fn test_list_rows() {
            let mut board = empty_board();
            add(&mut board, "First");
            add(&mut board, "Second");
            let (out, _) = run(&mut board, NotesCommand::List(ListArgs::default()));
            assert_eq!(out, "  1. First\n  2. Second\n");
        }

        #[test]
        fn test_list_never_shows_content() {
            let mut board = empty_board();
            add(&mut board, "Plans");
            board.open_edit_session(0);
            board.save_edit_session("secret body").unwrap();
            let (out, _) = run(&mut board, NotesCommand::List(ListArgs::default()));
            assert!(!out.contains("secret body"));
        }

        #[test]
        fn test_list_json() {
            let mut board = empty_board();
            add(&mut board, "Plans");
            let (out, _) = run(&mut board, NotesCommand::List(ListArgs { json: true }));
            let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert_eq!(parsed[0]["heading"], "Plans");
            assert_eq!(parsed[0]["content"], "");
        }

        #[test]
        fn test_list_empty_prints_nothing() {
            let mut board = empty_board();
            let (out, result) = run(&mut board, NotesCommand::List(ListArgs::default()));
            assert!(result.is_ok());
            assert!(out.is_empty());
        }
    }

    mod show_tests {
        use super::*;

        #[test]
        fn test_show_heading_and_content() {
            let mut board = empty_board();
            add(&mut board, "Plans");
            board.open_edit_session(0);
            board.save_edit_session("go hiking").unwrap();
            let (out, _) = run(&mut board, NotesCommand::Show { position: 1 });
            assert_eq!(out, "Plans\n\ngo hiking\n");
        }

        #[test]
        fn test_show_out_of_range() {
            let mut board = empty_board();
            let (_, result) = run(&mut board, NotesCommand::Show { position: 1 });
            assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
        }
    }

    mod edit_tests {
        use super::*;

        fn edit(position: usize, content: Option<&str>, stdin: bool) -> NotesCommand {
            NotesCommand::Edit(NotesEditArgs {
                position,
                content: content.map(str::to_string),
                stdin,
            })
        }

        #[test]
        fn test_edit_with_content() {
            let mut board = empty_board();
            add(&mut board, "A");
            add(&mut board, "B");
            run(&mut board, edit(2, Some("bee"), false)).1.unwrap();
            assert_eq!(board.get(0).unwrap().content, "");
            assert_eq!(board.get(1).unwrap().content, "bee");
            assert!(!board.is_editing());
        }

        #[test]
        fn test_edit_from_stdin() {
            let mut board = empty_board();
            add(&mut board, "A");
            run_with_input(&mut board, edit(1, None, true), "line one\nline two\n")
                .1
                .unwrap();
            assert_eq!(board.get(0).unwrap().content, "line one\nline two");
        }

        #[test]
        fn test_edit_out_of_range() {
            let mut board = empty_board();
            add(&mut board, "A");
            let (_, result) = run(&mut board, edit(2, Some("x"), false));
            assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
            assert_eq!(board.get(0).unwrap().content, "");
        }
    }

    mod delete_tests {
        use super::*;

        #[test]
        fn test_delete_shifts() {
            let mut board = empty_board();
            for h in ["A", "B", "C"] {
                add(&mut board, h);
            }
            run(&mut board, NotesCommand::Delete { position: 2 }).1.unwrap();
            assert_eq!(board.headings(), vec!["A", "C"]);
        }

        #[test]
        fn test_delete_out_of_range() {
            let mut board = empty_board();
            add(&mut board, "A");
            let (_, result) = run(&mut board, NotesCommand::Delete { position: 0 });
            assert!(result.is_err());
            assert_eq!(board.len(), 1);
        }
    }

    mod execute_tests {
        use super::*;

        fn args(no_samples: bool, command: NotesCommand) -> NotesArgs {
            NotesArgs {
                no_samples,
                command: Some(command),
            }
        }

        #[test]
        fn test_execute_persists_to_data_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("storage.json");
            let config = CliConfig::new().with_data_file(&path);

            execute_notes(
                &config,
                &args(true, NotesCommand::Add { heading: "Persisted".into() }),
            )
            .unwrap();

            let store = FileStore::new(&path);
            let board = NoteBoard::open(store, BoardConfig::empty()).unwrap();
            assert_eq!(board.headings(), vec!["Persisted"]);
        }

        #[test]
        fn test_execute_seeds_samples_on_first_add() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("storage.json");
            let config = CliConfig::new().with_data_file(&path);

            execute_notes(&config, &args(false, NotesCommand::Add { heading: "Mine".into() }))
                .unwrap();

            let board = NoteBoard::open(FileStore::new(&path), BoardConfig::empty()).unwrap();
            assert_eq!(board.len(), 5);
            assert_eq!(board.headings().last(), Some(&"Mine"));
        }
    }
}
