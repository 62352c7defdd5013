//! Terminal notes state
//!
//! The heading input and list selection live here. Everything persisted goes
//! through the wrapped [`NoteBoard`].

use crossterm::event::KeyEvent;
use tracing::debug;

use super::input::{InputHandler, NotesKeyAction, NotesMode};
use crate::notes::{NoteBoard, NotesResult};
use crate::storage::KeyValueStore;

/// Notes application state
#[derive(Debug)]
pub struct NotesApp<S> {
    board: NoteBoard<S>,
    handler: InputHandler,
    /// Heading being typed
    input: String,
    selected: usize,
    /// Last storage failure, shown in the footer
    status: Option<String>,
    should_quit: bool,
}

impl<S: KeyValueStore> NotesApp<S> {
    /// Creates an app over a loaded board
    pub fn new(board: NoteBoard<S>) -> Self {
        Self {
            board,
            handler: InputHandler::new(),
            input: String::new(),
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Returns the board
    #[must_use]
    pub fn board(&self) -> &NoteBoard<S> {
        &self.board
    }

    /// Returns the board mutably
    pub fn board_mut(&mut self) -> &mut NoteBoard<S> {
        &mut self.board
    }

    /// Consumes the app, returning the board
    pub fn into_board(self) -> NoteBoard<S> {
        self.board
    }

    /// Heading typed so far
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the heading input
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Selected list index, if the list has any notes
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (!self.board.is_empty()).then_some(self.selected)
    }

    /// Last storage failure message
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Which layer currently takes keys
    #[must_use]
    pub fn mode(&self) -> NotesMode {
        if self.board.alert().is_some() {
            NotesMode::Alert
        } else if self.board.is_editing() {
            NotesMode::Editing
        } else {
            NotesMode::List
        }
    }

    /// Adds the typed heading and selects the new note
    ///
    /// The input is kept when the heading is rejected.
    pub fn submit_input(&mut self) -> NotesResult<()> {
        let index = self.board.add_note(&self.input)?;
        self.input.clear();
        self.selected = index;
        Ok(())
    }

    /// Selects a note, clamped to the list
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.board.len().saturating_sub(1));
    }

    /// Moves the selection down one row
    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    /// Moves the selection up one row
    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    /// Opens the edit modal on a note; out-of-range indices are ignored
    pub fn open_at(&mut self, index: usize) -> bool {
        let opened = self.board.open_edit_session(index);
        if opened {
            self.selected = index;
        }
        opened
    }

    /// Opens the edit modal on the selected note
    pub fn open_selected(&mut self) -> bool {
        match self.selected() {
            Some(index) => self.open_at(index),
            None => false,
        }
    }

    /// Saves the draft into the open note
    pub fn save_draft(&mut self) -> NotesResult<()> {
        self.board.save_draft()?;
        Ok(())
    }

    /// Deletes a note and keeps the selection inside the list
    pub fn delete_at(&mut self, index: usize) -> NotesResult<()> {
        self.board.delete_note(index)?;
        self.select(self.selected);
        Ok(())
    }

    /// Deletes the selected note
    pub fn delete_selected(&mut self) -> NotesResult<()> {
        match self.selected() {
            Some(index) => self.delete_at(index),
            None => Ok(()),
        }
    }

    /// Handles a key press
    ///
    /// A rejected heading shows up as the board alert. Storage failures are
    /// kept in [`NotesApp::status`] and returned.
    pub fn handle_key(&mut self, event: KeyEvent) -> NotesResult<()> {
        let action = self.handler.handle_notes_key(event, self.mode());
        let result = self.apply(action);
        match result {
            Err(e) if e.is_validation() => {
                debug!(error = %e, "input rejected");
                Ok(())
            }
            Err(e) => {
                self.status = Some(e.to_string());
                Err(e)
            }
            Ok(()) => Ok(()),
        }
    }

    fn apply(&mut self, action: NotesKeyAction) -> NotesResult<()> {
        match action {
            NotesKeyAction::InsertChar(c) => match self.board.draft_mut() {
                Some(draft) => draft.push(c),
                None => self.input.push(c),
            },
            NotesKeyAction::Backspace => match self.board.draft_mut() {
                Some(draft) => {
                    draft.pop();
                }
                None => {
                    self.input.pop();
                }
            },
            NotesKeyAction::Submit => self.submit_input()?,
            NotesKeyAction::SelectPrev => self.select_prev(),
            NotesKeyAction::SelectNext => self.select_next(),
            NotesKeyAction::Open => {
                self.open_selected();
            }
            NotesKeyAction::Delete => self.delete_selected()?,
            NotesKeyAction::Save => self.save_draft()?,
            NotesKeyAction::Cancel => self.board.cancel_edit_session(),
            NotesKeyAction::Dismiss => self.board.dismiss_alert(),
            NotesKeyAction::Quit => self.quit(),
            NotesKeyAction::None => {}
        }
        Ok(())
    }
}
