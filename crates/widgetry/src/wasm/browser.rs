//! wasm-bindgen exports for the real page
//!
//! The page script forwards clicks and key presses here and re-renders from
//! the returned state. Notes persist to `window.localStorage`.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::calc::{CalculatorPad, Keypad};
use crate::notes::{BoardConfig, NoteBoard, StickyBoard, StickyNote};
use crate::storage::LocalStorage;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Calculator exported to the page
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    pad: CalculatorPad,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator that starts switched off
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            pad: CalculatorPad::new(),
            keypad: Keypad::new(),
        }
    }

    /// Text for the display element
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.pad.display()
    }

    /// Whether the pad is on
    #[wasm_bindgen(getter, js_name = isOn)]
    pub fn is_on(&self) -> bool {
        self.pad.is_on()
    }

    /// Handle a click on the button with this element ID
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        self.keypad
            .handle_click(button_id)
            .is_some_and(|action| self.pad.press(action))
    }

    /// Handle a keyboard key
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        Keypad::key_to_action(key).is_some_and(|action| self.pad.press(action))
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading/content notes exported to the page
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserNotes {
    board: NoteBoard<LocalStorage>,
}

#[wasm_bindgen]
impl BrowserNotes {
    /// Load the board from local storage, seeding the samples on first visit
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserNotes, JsValue> {
        console_error_panic_hook::set_once();
        let store = LocalStorage::open().map_err(to_js)?;
        let board = NoteBoard::open(store, BoardConfig::default()).map_err(to_js)?;
        Ok(Self { board })
    }

    /// Notes as a JSON array of `{heading, content}`
    #[wasm_bindgen(js_name = notesJson)]
    pub fn notes_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.board.notes()).map_err(to_js)
    }

    /// Add a note; returns the alert text when the heading is blank
    pub fn add(&mut self, heading: &str) -> Result<Option<String>, JsValue> {
        match self.board.add_note(heading) {
            Ok(_) => Ok(None),
            Err(e) if e.is_validation() => Ok(Some(e.to_string())),
            Err(e) => Err(to_js(e)),
        }
    }

    /// Open the edit modal on a note
    pub fn open(&mut self, index: usize) -> bool {
        self.board.open_edit_session(index)
    }

    /// Text to load into the modal textarea
    pub fn draft(&self) -> Option<String> {
        self.board.session().map(|s| s.draft().to_string())
    }

    /// Save the modal text into the open note
    pub fn save(&mut self, content: &str) -> Result<bool, JsValue> {
        self.board.save_edit_session(content).map_err(to_js)
    }

    /// Close the modal without saving
    pub fn cancel(&mut self) {
        self.board.cancel_edit_session();
    }

    /// Whether the modal is open
    #[wasm_bindgen(js_name = isEditing)]
    pub fn is_editing(&self) -> bool {
        self.board.is_editing()
    }

    /// Delete a note
    pub fn delete(&mut self, index: usize) -> Result<bool, JsValue> {
        self.board
            .delete_note(index)
            .map(|removed| removed.is_some())
            .map_err(to_js)
    }

    /// Dismiss the error modal
    #[wasm_bindgen(js_name = dismissAlert)]
    pub fn dismiss_alert(&mut self) {
        self.board.dismiss_alert();
    }
}

/// Sticky notes exported to the page
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserStickyNotes {
    board: StickyBoard<LocalStorage>,
}

#[wasm_bindgen]
impl BrowserStickyNotes {
    /// Load stored sticky notes, skipping titles already shown on the page
    #[wasm_bindgen(constructor)]
    pub fn new(present_titles: Vec<String>) -> Result<BrowserStickyNotes, JsValue> {
        console_error_panic_hook::set_once();
        let store = LocalStorage::open().map_err(to_js)?;
        let preset = present_titles
            .into_iter()
            .map(StickyNote::new)
            .collect();
        let mut board = StickyBoard::with_notes(store, preset);
        board.load().map_err(to_js)?;
        Ok(Self { board })
    }

    /// Notes as a JSON array of `{title, content}`
    #[wasm_bindgen(js_name = notesJson)]
    pub fn notes_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.board.notes()).map_err(to_js)
    }

    /// Add a note; returns the alert text when the title is blank
    pub fn add(&mut self, title: &str) -> Result<Option<String>, JsValue> {
        match self.board.add_note(title) {
            Ok(_) => Ok(None),
            Err(e) if e.is_validation() => Ok(Some(e.to_string())),
            Err(e) => Err(to_js(e)),
        }
    }

    /// Open the popup; returns the stored content for the textarea
    ///
    /// Empty content is shown through the textarea's placeholder, see
    /// [`BrowserStickyNotes::placeholder`].
    pub fn open(&mut self, index: usize) -> Option<String> {
        if self.board.open_popup(index) {
            self.board.get(index).map(|n| n.content.clone())
        } else {
            None
        }
    }

    /// Placeholder or content label for the open popup
    pub fn placeholder(&self) -> Option<String> {
        self.board.popup_text().map(String::from)
    }

    /// Save the popup text; the popup closes either way
    pub fn save(&mut self, text: &str) -> Result<bool, JsValue> {
        self.board.save_popup(text).map_err(to_js)
    }

    /// Close the popup without saving
    pub fn close(&mut self) {
        self.board.close_popup();
    }

    /// Delete a note
    pub fn delete(&mut self, index: usize) -> Result<bool, JsValue> {
        self.board
            .delete_note(index)
            .map(|removed| removed.is_some())
            .map_err(to_js)
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"widgetry initialized".into());
}
