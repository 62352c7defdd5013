//! Heading/content notes page over the mock DOM
//!
//! Every handled event ends with a full render: the list is rebuilt from the
//! board in order and the two overlays are shown or hidden from board state.

use tracing::warn;

use super::dom::{DomElement, DomEvent, MockDom};
use crate::notes::{NoteBoard, NotesResult};
use crate::storage::KeyValueStore;

/// Heading input
pub const INPUT_ID: &str = "note-input";
/// Add button
pub const ADD_BUTTON_ID: &str = "add-note-btn";
/// List container rebuilt on every render
pub const LIST_ID: &str = "notes-list";
/// Edit modal overlay
pub const MODAL_ID: &str = "modal-overlay";
/// Edit modal textarea
pub const TEXTAREA_ID: &str = "modal-textarea";
/// Edit modal save button
pub const SAVE_ID: &str = "modal-save-btn";
/// Edit modal cancel button
pub const CANCEL_ID: &str = "modal-cancel-btn";
/// Edit modal close button
pub const CLOSE_ID: &str = "modal-close-btn";
/// Error modal overlay
pub const ERROR_MODAL_ID: &str = "error-modal-overlay";
/// Error modal message
pub const ERROR_MESSAGE_ID: &str = "error-modal-message";
/// Error modal OK button
pub const ERROR_OK_ID: &str = "error-modal-ok-btn";
/// Error modal close button
pub const ERROR_CLOSE_ID: &str = "error-modal-close-btn";

/// Element ID of the row for the note at `index`
#[must_use]
pub fn row_id(index: usize) -> String {
    format!("note-{index}")
}

/// Element ID of the delete button on the row at `index`
#[must_use]
pub fn delete_id(index: usize) -> String {
    format!("note-{index}-delete")
}

/// What a click on an element means to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Add,
    Row(usize),
    Delete(usize),
    Save,
    CloseModal,
    DismissError,
}

fn parse_target(id: &str) -> Option<Target> {
    match id {
        ADD_BUTTON_ID => return Some(Target::Add),
        SAVE_ID => return Some(Target::Save),
        CANCEL_ID | CLOSE_ID | MODAL_ID => return Some(Target::CloseModal),
        ERROR_OK_ID | ERROR_CLOSE_ID | ERROR_MODAL_ID => return Some(Target::DismissError),
        _ => {}
    }
    let rest = id.strip_prefix("note-")?;
    match rest.strip_suffix("-delete") {
        Some(index) => index.parse().ok().map(Target::Delete),
        None => rest.parse().ok().map(Target::Row),
    }
}

/// Heading/content notes widget hosted in a [`MockDom`]
#[derive(Debug)]
pub struct WasmNoteBoard<S> {
    board: NoteBoard<S>,
    dom: MockDom,
}

impl<S: KeyValueStore> WasmNoteBoard<S> {
    /// Builds the page around a loaded board and renders it
    pub fn new(board: NoteBoard<S>) -> Self {
        let mut host = Self {
            board,
            dom: MockDom::from_root(Self::page()),
        };
        host.render();
        host
    }

    fn page() -> DomElement {
        DomElement::new("div")
            .with_id("notes-app")
            .with_child(
                DomElement::new("input")
                    .with_id(INPUT_ID)
                    .with_attr("placeholder", "Enter note heading"),
            )
            .with_child(DomElement::new("button").with_id(ADD_BUTTON_ID).with_text("Add"))
            .with_child(DomElement::new("div").with_id(LIST_ID).with_class("notes-list"))
            .with_child(
                DomElement::new("div")
                    .with_id(MODAL_ID)
                    .with_class("modal-overlay")
                    .with_child(DomElement::new("h2").with_id("modal-heading"))
                    .with_child(DomElement::new("textarea").with_id(TEXTAREA_ID))
                    .with_child(DomElement::new("button").with_id(SAVE_ID).with_text("Save"))
                    .with_child(DomElement::new("button").with_id(CANCEL_ID).with_text("Cancel"))
                    .with_child(DomElement::new("button").with_id(CLOSE_ID).with_text("×")),
            )
            .with_child(
                DomElement::new("div")
                    .with_id(ERROR_MODAL_ID)
                    .with_class("modal-overlay")
                    .with_child(DomElement::new("p").with_id(ERROR_MESSAGE_ID))
                    .with_child(DomElement::new("button").with_id(ERROR_OK_ID).with_text("OK"))
                    .with_child(DomElement::new("button").with_id(ERROR_CLOSE_ID).with_text("×")),
            )
    }

    /// Routes one event and re-renders
    ///
    /// Blank headings surface through the error modal rather than as an
    /// `Err`; storage failures are returned after the page is re-rendered.
    pub fn dispatch(&mut self, event: DomEvent) -> NotesResult<()> {
        let result = self.route(&event);
        self.dom.dispatch_event(event);
        self.render();

        match result {
            Err(e) if e.is_validation() => Ok(()),
            Err(e) => {
                warn!(error = %e, "notes page event failed");
                Err(e)
            }
            Ok(()) => Ok(()),
        }
    }

    fn route(&mut self, event: &DomEvent) -> NotesResult<()> {
        match event {
            DomEvent::Click { element_id } => match parse_target(element_id) {
                Some(target) => self.activate(target),
                None => Ok(()),
            },
            DomEvent::Input { element_id, value } if element_id == TEXTAREA_ID => {
                self.board.set_draft(value);
                Ok(())
            }
            DomEvent::KeyPress { .. } if event.is_save_shortcut() => {
                if self.board.is_editing() {
                    self.save()?;
                }
                Ok(())
            }
            DomEvent::KeyPress { key, .. } if key == "Escape" => {
                if self.board.is_editing() {
                    self.board.close_edit_session();
                } else {
                    self.board.dismiss_alert();
                }
                Ok(())
            }
            DomEvent::KeyPress { key, .. }
                if key == "Enter" && self.dom.focused_element() == Some(INPUT_ID) =>
            {
                self.activate(Target::Add)
            }
            _ => Ok(()),
        }
    }

    fn activate(&mut self, target: Target) -> NotesResult<()> {
        match target {
            Target::Add => {
                let heading = self.dom.element_value(INPUT_ID).unwrap_or_default().to_string();
                self.board.add_note(&heading)?;
                self.dom.set_element_value(INPUT_ID, "");
            }
            Target::Row(index) => {
                self.board.open_edit_session(index);
            }
            Target::Delete(index) => {
                self.board.delete_note(index)?;
            }
            Target::Save => self.save()?,
            Target::CloseModal => self.board.close_edit_session(),
            Target::DismissError => self.board.dismiss_alert(),
        }
        Ok(())
    }

    fn save(&mut self) -> NotesResult<()> {
        let content = self.dom.element_value(TEXTAREA_ID).unwrap_or_default().to_string();
        self.board.save_edit_session(&content)?;
        Ok(())
    }

    /// Rebuilds the list and syncs both overlays from board state
    pub fn render(&mut self) {
        self.dom.clear_children(LIST_ID);
        let rows: Vec<DomElement> = self
            .board
            .notes()
            .iter()
            .enumerate()
            .map(|(i, note)| {
                DomElement::new("div")
                    .with_id(&row_id(i))
                    .with_class("note-item")
                    .with_text(&note.heading)
                    .with_child(
                        DomElement::new("button")
                            .with_id(&delete_id(i))
                            .with_class("delete-btn")
                            .with_text("x"),
                    )
            })
            .collect();
        for row in rows {
            self.dom.append_child(LIST_ID, row);
        }

        let session = self
            .board
            .session()
            .map(|s| (s.draft().to_string(), s.index()));
        match session {
            Some((draft, index)) => {
                let heading = self
                    .board
                    .get(index)
                    .map(|n| n.heading.clone())
                    .unwrap_or_default();
                self.dom.set_element_text("modal-heading", &heading);
                self.dom.set_element_value(TEXTAREA_ID, &draft);
                self.dom.set_active(MODAL_ID, true);
            }
            None => {
                self.dom.set_element_value(TEXTAREA_ID, "");
                self.dom.set_active(MODAL_ID, false);
            }
        }

        let alert = self.board.alert().map(str::to_string);
        self.dom.set_active(ERROR_MODAL_ID, alert.is_some());
        self.dom
            .set_element_text(ERROR_MESSAGE_ID, alert.as_deref().unwrap_or_default());
    }

    /// Headings as rendered in the list
    #[must_use]
    pub fn rendered_headings(&self) -> Vec<String> {
        self.dom.children_text(LIST_ID)
    }

    /// Returns true while the edit modal is shown
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.dom.is_active(MODAL_ID)
    }

    /// Message in the error modal while it is shown
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.dom.is_active(ERROR_MODAL_ID) {
            self.dom.get_element_text(ERROR_MESSAGE_ID)
        } else {
            None
        }
    }

    /// The board behind the page
    #[must_use]
    pub fn board(&self) -> &NoteBoard<S> {
        &self.board
    }

    /// The rendered page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Consumes the page, returning the board
    pub fn into_board(self) -> NoteBoard<S> {
        self.board
    }

    /// Types `heading` into the input and clicks Add
    pub fn add(&mut self, heading: &str) -> NotesResult<()> {
        self.dispatch(DomEvent::input(INPUT_ID, heading))?;
        self.dispatch(DomEvent::click(ADD_BUTTON_ID))
    }
}
