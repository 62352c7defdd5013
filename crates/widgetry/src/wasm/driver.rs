//! Driver implementations for the mock DOM pages
//!
//! Every interaction goes through a DOM event, the same path a browser
//! click or key press takes.

use super::calculator::WasmCalculator;
use super::dom::DomEvent;
use super::notes::{self, WasmNoteBoard};
use super::sticky::{self, WasmStickyBoard};
use crate::calc::KeypadAction;
use crate::driver::{CalculatorDriver, NotesDriver};
use crate::notes::NotesResult;
use crate::storage::KeyValueStore;

impl CalculatorDriver for WasmCalculator {
    fn press(&mut self, action: KeypadAction) -> bool {
        let id = action.element_id();
        if self.keypad().find_button_by_id(&id).is_some() {
            return self.click(&id);
        }
        match action.to_char() {
            Some(c) => self.dispatch(DomEvent::key_press(&c.to_string())),
            None => self.press_action(action),
        }
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn is_on(&self) -> bool {
        self.pad().is_on()
    }
}

impl<S: KeyValueStore> NotesDriver for WasmNoteBoard<S> {
    fn add_note(&mut self, heading: &str) -> NotesResult<()> {
        self.add(heading)
    }

    fn open_note(&mut self, index: usize) -> NotesResult<()> {
        self.dispatch(DomEvent::click(&notes::row_id(index)))
    }

    fn type_draft(&mut self, text: &str) -> NotesResult<()> {
        self.dispatch(DomEvent::input(notes::TEXTAREA_ID, text))
    }

    fn save_note(&mut self) -> NotesResult<()> {
        self.dispatch(DomEvent::click(notes::SAVE_ID))
    }

    fn cancel_note(&mut self) -> NotesResult<()> {
        self.dispatch(DomEvent::click(notes::CANCEL_ID))
    }

    fn delete_note(&mut self, index: usize) -> NotesResult<()> {
        self.dispatch(DomEvent::click(&notes::delete_id(index)))
    }

    fn headings(&self) -> Vec<String> {
        self.rendered_headings()
    }

    fn content(&self, index: usize) -> Option<String> {
        self.board().get(index).map(|n| n.content.clone())
    }

    fn alert(&self) -> Option<String> {
        self.error_message().map(String::from)
    }

    fn is_editing(&self) -> bool {
        self.is_modal_open()
    }
}

impl<S: KeyValueStore> NotesDriver for WasmStickyBoard<S> {
    fn add_note(&mut self, heading: &str) -> NotesResult<()> {
        self.add(heading)
    }

    fn open_note(&mut self, index: usize) -> NotesResult<()> {
        self.dispatch(DomEvent::click(&sticky::note_id(index)))
    }

    fn type_draft(&mut self, text: &str) -> NotesResult<()> {
        self.dispatch(DomEvent::input(sticky::TEXT_ID, text))
    }

    fn save_note(&mut self) -> NotesResult<()> {
        self.dispatch(DomEvent::click(sticky::SAVE_ID))
    }

    fn cancel_note(&mut self) -> NotesResult<()> {
        self.dispatch(DomEvent::click(sticky::CLOSE_ID))
    }

    fn delete_note(&mut self, index: usize) -> NotesResult<()> {
        self.dispatch(DomEvent::click(&sticky::delete_id(index)))
    }

    fn headings(&self) -> Vec<String> {
        self.rendered_titles()
    }

    fn content(&self, index: usize) -> Option<String> {
        self.board().get(index).map(|n| n.content.clone())
    }

    fn alert(&self) -> Option<String> {
        self.board().alert().map(String::from)
    }

    fn is_editing(&self) -> bool {
        self.is_popup_open()
    }
}
