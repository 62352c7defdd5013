//! Title/content sticky notes page over the mock DOM

use tracing::warn;

use super::dom::{DomElement, DomEvent, MockDom};
use crate::notes::{NotesResult, StickyBoard, POPUP_PLACEHOLDER};
use crate::storage::KeyValueStore;

/// Title input
pub const INPUT_ID: &str = "sticky-input";
/// Add button
pub const ADD_BUTTON_ID: &str = "sticky-add-btn";
/// Container holding one `.note` per sticky note
pub const CONTAINER_ID: &str = "notes-container";
/// Content popup
pub const POPUP_ID: &str = "popup";
/// Popup textarea
pub const TEXT_ID: &str = "note-text";
/// Popup save button
pub const SAVE_ID: &str = "save-note";
/// Popup close button
pub const CLOSE_ID: &str = "close-popup";

/// Element ID of the sticky note at `index`
#[must_use]
pub fn note_id(index: usize) -> String {
    format!("sticky-{index}")
}

/// Element ID of the delete button on the sticky note at `index`
#[must_use]
pub fn delete_id(index: usize) -> String {
    format!("sticky-{index}-delete")
}

fn index_of(id: &str) -> Option<(usize, bool)> {
    let rest = id.strip_prefix("sticky-")?;
    match rest.strip_suffix("-delete") {
        Some(index) => Some((index.parse().ok()?, true)),
        None => Some((rest.parse().ok()?, false)),
    }
}

/// Sticky notes widget hosted in a [`MockDom`]
#[derive(Debug)]
pub struct WasmStickyBoard<S> {
    board: StickyBoard<S>,
    dom: MockDom,
}

impl<S: KeyValueStore> WasmStickyBoard<S> {
    /// Builds the page around a loaded board and renders it
    pub fn new(board: StickyBoard<S>) -> Self {
        let page = DomElement::new("div")
            .with_id("sticky-app")
            .with_child(
                DomElement::new("input")
                    .with_id(INPUT_ID)
                    .with_class("note-input"),
            )
            .with_child(
                DomElement::new("button")
                    .with_id(ADD_BUTTON_ID)
                    .with_class("add-note-btn")
                    .with_text("+"),
            )
            .with_child(
                DomElement::new("div")
                    .with_id(CONTAINER_ID)
                    .with_class("notes-container"),
            )
            .with_child(
                DomElement::new("div")
                    .with_id(POPUP_ID)
                    .with_child(
                        DomElement::new("textarea")
                            .with_id(TEXT_ID)
                            .with_attr("placeholder", POPUP_PLACEHOLDER),
                    )
                    .with_child(DomElement::new("button").with_id(SAVE_ID).with_text("Save"))
                    .with_child(DomElement::new("button").with_id(CLOSE_ID).with_text("Close")),
            );

        let mut host = Self {
            board,
            dom: MockDom::from_root(page),
        };
        host.render();
        host
    }

    /// Routes one event and re-renders
    pub fn dispatch(&mut self, event: DomEvent) -> NotesResult<()> {
        let result = self.route(&event);
        self.dom.dispatch_event(event);
        self.render();

        match result {
            Err(e) if e.is_validation() => Ok(()),
            Err(e) => {
                warn!(error = %e, "sticky page event failed");
                Err(e)
            }
            Ok(()) => Ok(()),
        }
    }

    fn route(&mut self, event: &DomEvent) -> NotesResult<()> {
        match event {
            DomEvent::Click { element_id } if element_id == ADD_BUTTON_ID => self.add_from_input(),
            DomEvent::Click { element_id } if element_id == SAVE_ID => {
                let text = self.dom.element_value(TEXT_ID).unwrap_or_default().to_string();
                self.board.save_popup(&text)?;
                Ok(())
            }
            DomEvent::Click { element_id } if element_id == CLOSE_ID => {
                self.board.close_popup();
                Ok(())
            }
            DomEvent::Click { element_id } => {
                match index_of(element_id) {
                    Some((index, true)) => {
                        self.board.delete_note(index)?;
                    }
                    Some((index, false)) => {
                        if self.board.open_popup(index) {
                            let content = self
                                .board
                                .get(index)
                                .map(|n| n.content.clone())
                                .unwrap_or_default();
                            self.dom.set_element_value(TEXT_ID, &content);
                        }
                    }
                    None => {}
                }
                Ok(())
            }
            DomEvent::KeyPress { key, .. }
                if key == "Enter" && self.dom.focused_element() == Some(INPUT_ID) =>
            {
                self.add_from_input()
            }
            _ => Ok(()),
        }
    }

    fn add_from_input(&mut self) -> NotesResult<()> {
        let title = self.dom.element_value(INPUT_ID).unwrap_or_default().to_string();
        self.board.add_note(&title)?;
        self.dom.set_element_value(INPUT_ID, "");
        Ok(())
    }

    /// Rebuilds the container and shows or hides the popup
    pub fn render(&mut self) {
        self.dom.clear_children(CONTAINER_ID);
        let notes: Vec<DomElement> = self
            .board
            .notes()
            .iter()
            .enumerate()
            .map(|(i, note)| {
                DomElement::new("div")
                    .with_id(&note_id(i))
                    .with_class("note")
                    .with_text(&note.title)
                    .with_attr("data-content", &note.content)
                    .with_child(
                        DomElement::new("button")
                            .with_id(&delete_id(i))
                            .with_class("delete-btn")
                            .with_text("×"),
                    )
            })
            .collect();
        for note in notes {
            self.dom.append_child(CONTAINER_ID, note);
        }

        let open = self.board.is_popup_open();
        self.dom.set_active(POPUP_ID, open);
        if !open {
            self.dom.set_element_value(TEXT_ID, "");
        }
    }

    /// Titles as rendered in the container
    #[must_use]
    pub fn rendered_titles(&self) -> Vec<String> {
        self.dom.children_text(CONTAINER_ID)
    }

    /// Returns true while the popup is shown
    #[must_use]
    pub fn is_popup_open(&self) -> bool {
        self.dom.is_active(POPUP_ID)
    }

    /// The board behind the page
    #[must_use]
    pub fn board(&self) -> &StickyBoard<S> {
        &self.board
    }

    /// The rendered page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Types `title` into the input and clicks the add button
    pub fn add(&mut self, title: &str) -> NotesResult<()> {
        self.dispatch(DomEvent::input(INPUT_ID, title))?;
        self.dispatch(DomEvent::click(ADD_BUTTON_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{StickyNote, STICKY_KEY};
    use crate::storage::MemoryStore;

    fn page_with(titles: &[&str]) -> WasmStickyBoard<MemoryStore> {
        let mut page = WasmStickyBoard::new(StickyBoard::new(MemoryStore::new()));
        for t in titles {
            page.add(t).unwrap();
        }
        page
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("sticky-2"), Some((2, false)));
        assert_eq!(index_of("sticky-2-delete"), Some((2, true)));
        assert_eq!(index_of("sticky-"), None);
        assert_eq!(index_of(SAVE_ID), None);
    }

    #[test]
    fn test_loaded_notes_render_once() {
        let store = MemoryStore::with_entry(
            STICKY_KEY,
            r#"[{"title":"Gym","content":"legs"},{"title":"Read","content":""}]"#,
        );
        let mut board = StickyBoard::with_notes(store, vec![StickyNote::new("Gym")]);
        board.load().unwrap();
        let page = WasmStickyBoard::new(board);
        assert_eq!(page.rendered_titles(), vec!["Gym", "Read"]);
    }

    #[test]
    fn test_add_and_blank_add() {
        let mut page = page_with(&["one"]);
        page.add("  ").unwrap();
        assert_eq!(page.rendered_titles(), vec!["one"]);
        assert_eq!(page.board().alert(), Some("Please enter a note!"));
        assert_eq!(page.dom().element_value(INPUT_ID), Some("  "));
    }

    #[test]
    fn test_enter_in_input_adds() {
        let mut page = page_with(&[]);
        page.dispatch(DomEvent::focus(INPUT_ID)).unwrap();
        page.dispatch(DomEvent::input(INPUT_ID, "typed")).unwrap();
        page.dispatch(DomEvent::key_press("Enter")).unwrap();
        assert_eq!(page.rendered_titles(), vec!["typed"]);
    }

    #[test]
    fn test_note_click_opens_popup_with_placeholder() {
        let mut page = page_with(&["a"]);
        page.dispatch(DomEvent::click(&note_id(0))).unwrap();
        assert!(page.is_popup_open());
        let text = page.dom().get_element(TEXT_ID).unwrap();
        assert_eq!(text.value(), "");
        assert_eq!(text.get_attr("placeholder"), Some("Write a note here..."));
    }

    #[test]
    fn test_popup_save_persists_and_closes() {
        let mut page = page_with(&["a"]);
        page.dispatch(DomEvent::click(&note_id(0))).unwrap();
        page.dispatch(DomEvent::input(TEXT_ID, "details")).unwrap();
        page.dispatch(DomEvent::click(SAVE_ID)).unwrap();

        assert!(!page.is_popup_open());
        let note = page.dom().get_element(&note_id(0)).unwrap();
        assert_eq!(note.get_attr("data-content"), Some("details"));
        let raw = page.board().store().get(STICKY_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"title":"a","content":"details"}]"#);
    }

    #[test]
    fn test_popup_reopens_with_saved_content() {
        let mut page = page_with(&["a"]);
        page.dispatch(DomEvent::click(&note_id(0))).unwrap();
        page.dispatch(DomEvent::input(TEXT_ID, "kept")).unwrap();
        page.dispatch(DomEvent::click(SAVE_ID)).unwrap();
        page.dispatch(DomEvent::click(&note_id(0))).unwrap();
        assert_eq!(page.dom().element_value(TEXT_ID), Some("kept"));
    }

    #[test]
    fn test_popup_close_discards() {
        let mut page = page_with(&["a"]);
        page.dispatch(DomEvent::click(&note_id(0))).unwrap();
        page.dispatch(DomEvent::input(TEXT_ID, "nope")).unwrap();
        page.dispatch(DomEvent::click(CLOSE_ID)).unwrap();
        assert!(!page.is_popup_open());
        assert_eq!(page.board().get(0).unwrap().content, "");
    }

    #[test]
    fn test_delete_button() {
        let mut page = page_with(&["a", "b"]);
        page.dispatch(DomEvent::click(&delete_id(0))).unwrap();
        assert!(!page.is_popup_open());
        assert_eq!(page.rendered_titles(), vec!["b"]);
        let raw = page.board().store().get(STICKY_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"title":"b","content":""}]"#);
    }
}
