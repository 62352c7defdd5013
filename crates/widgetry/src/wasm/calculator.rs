//! Calculator page over the mock DOM
//!
//! Clicks on keypad buttons and page-level key presses are routed into a
//! [`CalculatorPad`]; after every event the display element is resynced.

use tracing::debug;

use super::dom::{DomElement, DomEvent, MockDom};
use crate::calc::{CalculatorPad, Keypad, KeypadAction, KeypadButton};

/// Element ID of the calculator display
pub const DISPLAY_ID: &str = "calc-display";

/// Class set on the display while the pad is off
pub const OFF_CLASS: &str = "off";

/// Calculator widget hosted in a [`MockDom`]
#[derive(Debug)]
pub struct WasmCalculator {
    pad: CalculatorPad,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates the page with the pad switched off
    #[must_use]
    pub fn new() -> Self {
        Self::with_pad(CalculatorPad::new())
    }

    /// Creates the page around an existing pad
    #[must_use]
    pub fn with_pad(pad: CalculatorPad) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::from_root(Self::page(&keypad));
        let mut calc = Self { pad, keypad, dom };
        calc.sync_display();
        calc
    }

    fn page(keypad: &Keypad) -> DomElement {
        let buttons = |list: &[KeypadButton], id: &str| {
            list.iter().fold(
                DomElement::new("div").with_id(id),
                |parent, btn| {
                    parent.with_child(
                        DomElement::new("button")
                            .with_id(&btn.id)
                            .with_class("btn")
                            .with_text(&btn.label()),
                    )
                },
            )
        };

        DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(DomElement::new("div").with_id(DISPLAY_ID).with_class("display"))
            .with_child(buttons(keypad.power_buttons(), "power-row"))
            .with_child(buttons(keypad.buttons(), "keypad"))
    }

    /// Routes one event, returning true when it changed the pad
    pub fn dispatch(&mut self, event: DomEvent) -> bool {
        let action = match &event {
            DomEvent::Click { element_id } => self.keypad.handle_click(element_id),
            DomEvent::KeyPress { key, ctrl, meta } if !ctrl && !meta => Keypad::key_to_action(key),
            _ => None,
        };
        self.dom.dispatch_event(event);

        let Some(action) = action else {
            return false;
        };
        self.press_action(action)
    }

    /// Presses a keypad action without going through an event
    pub fn press_action(&mut self, action: KeypadAction) -> bool {
        let applied = self.pad.press(action);
        if applied {
            debug!(?action, buffer = self.pad.buffer(), "calculator press");
        }
        self.sync_display();
        applied
    }

    /// Clicks the button with the given element ID
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dispatch(DomEvent::click(element_id))
    }

    fn sync_display(&mut self) {
        let text = self.pad.display();
        let off = !self.pad.is_on();
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_text(&text);
            display.toggle_class(OFF_CLASS, off);
        }
    }

    /// Text currently shown in the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// The pad state
    #[must_use]
    pub fn pad(&self) -> &CalculatorPad {
        &self.pad
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The rendered page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }
}
