//! Terminal setup and event loops
//!
//! The loops take the next event from a closure so they can run against a
//! `TestBackend` with scripted input.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::notes_app::NotesApp;
use super::notes_ui::render_notes;
use super::ui::render;
use crate::notes::NoteBoard;
use crate::storage::KeyValueStore;

/// Runs `f` on a raw-mode alternate-screen terminal, restoring it afterwards
fn with_terminal<T>(
    f: impl FnOnce(&mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<T>,
) -> io::Result<T> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = f(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Runs the calculator until the user quits
pub fn run_calculator() -> io::Result<()> {
    info!("starting terminal calculator");
    let mut app = CalculatorApp::new();
    with_terminal(|terminal| drive_calculator(terminal, &mut app, event::read))
}

/// Runs the notes app until the user quits, returning the board
pub fn run_notes<S: KeyValueStore>(board: NoteBoard<S>) -> io::Result<NoteBoard<S>> {
    info!(notes = board.len(), "starting terminal notes");
    let mut app = NotesApp::new(board);
    with_terminal(|terminal| drive_notes(terminal, &mut app, event::read))?;
    Ok(app.into_board())
}

/// Calculator loop: draw, read one event, repeat until quit
pub fn drive_calculator<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> io::Result<()> {
    while !app.should_quit() {
        let screen = terminal.draw(|f| render(app, f))?.area;

        match next_event()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, screen),
            _ => {}
        }
    }
    Ok(())
}

/// Notes loop: draw, read one event, repeat until quit
///
/// Storage failures are shown in the footer and do not end the loop.
pub fn drive_notes<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut NotesApp<S>,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| render_notes(app, f))?;

        if let Event::Key(key) = next_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Err(e) = app.handle_key(key) {
                debug!(error = %e, "notes key failed");
            }
        }
    }
    Ok(())
}
