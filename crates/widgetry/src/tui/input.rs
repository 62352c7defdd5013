//! Keyboard input handling
//!
//! Key events are mapped to typed actions before they reach the apps, so the
//! apps never see raw key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calc::{Keypad, KeypadAction};

/// Actions the calculator app responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKeyAction {
    /// Press a keypad action
    Press(KeypadAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Which layer of the notes app has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesMode {
    /// Heading input and list
    List,
    /// Edit modal over the list
    Editing,
    /// Error modal over everything
    Alert,
}

/// Actions the notes app responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesKeyAction {
    /// Type a character into the focused text
    InsertChar(char),
    /// Remove the last character of the focused text
    Backspace,
    /// Add the typed heading
    Submit,
    /// Move the selection up
    SelectPrev,
    /// Move the selection down
    SelectNext,
    /// Open the selected note
    Open,
    /// Delete the selected note
    Delete,
    /// Save the draft
    Save,
    /// Discard the draft
    Cancel,
    /// Dismiss the error modal
    Dismiss,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_quit(event: &KeyEvent) -> bool {
        event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('c' | 'q'))
    }

    /// Maps a key event to a calculator action
    #[must_use]
    pub fn handle_calc_key(&self, event: KeyEvent) -> CalcKeyAction {
        if Self::is_quit(&event) {
            return CalcKeyAction::Quit;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return CalcKeyAction::None;
        }

        let action = match event.code {
            KeyCode::Char('o' | 'O') => Some(KeypadAction::PowerOn),
            KeyCode::Char('f' | 'F') => Some(KeypadAction::PowerOff),
            KeyCode::Char(c) => Keypad::key_to_action(&c.to_string()),
            KeyCode::Enter => Some(KeypadAction::Equals),
            KeyCode::Esc => Some(KeypadAction::AllClear),
            KeyCode::Backspace => Some(KeypadAction::Delete),
            _ => None,
        };
        action.map_or(CalcKeyAction::None, CalcKeyAction::Press)
    }

    /// Maps a key event to a notes action for the given mode
    #[must_use]
    pub fn handle_notes_key(&self, event: KeyEvent, mode: NotesMode) -> NotesKeyAction {
        if Self::is_quit(&event) {
            return NotesKeyAction::Quit;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

        match mode {
            NotesMode::Alert => match event.code {
                KeyCode::Enter | KeyCode::Esc => NotesKeyAction::Dismiss,
                _ => NotesKeyAction::None,
            },
            NotesMode::Editing => match event.code {
                KeyCode::Char('s') if ctrl => NotesKeyAction::Save,
                KeyCode::Char(_) if ctrl => NotesKeyAction::None,
                KeyCode::Char(c) => NotesKeyAction::InsertChar(c),
                KeyCode::Enter => NotesKeyAction::InsertChar('\n'),
                KeyCode::Backspace => NotesKeyAction::Backspace,
                KeyCode::Esc => NotesKeyAction::Cancel,
                _ => NotesKeyAction::None,
            },
            NotesMode::List => match event.code {
                KeyCode::Char(_) if ctrl => NotesKeyAction::None,
                KeyCode::Char(c) => NotesKeyAction::InsertChar(c),
                KeyCode::Backspace => NotesKeyAction::Backspace,
                KeyCode::Enter => NotesKeyAction::Submit,
                KeyCode::Up => NotesKeyAction::SelectPrev,
                KeyCode::Down => NotesKeyAction::SelectNext,
                KeyCode::Tab => NotesKeyAction::Open,
                KeyCode::Delete => NotesKeyAction::Delete,
                _ => NotesKeyAction::None,
            },
        }
    }
}
