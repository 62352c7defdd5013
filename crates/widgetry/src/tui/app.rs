//! Terminal calculator state
//!
//! Wraps a [`CalculatorPad`] with the bits only the terminal needs: the
//! highlighted button and the quit flag.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

use super::input::{CalcKeyAction, InputHandler};
use super::keypad::KeypadWidget;
use super::ui::keypad_area;
use crate::calc::{CalculatorPad, Keypad, KeypadAction};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    pad: CalculatorPad,
    keypad: Keypad,
    input: InputHandler,
    /// Last pressed action, highlighted on the keypad
    pressed: Option<KeypadAction>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator that starts switched off
    #[must_use]
    pub fn new() -> Self {
        Self::with_pad(CalculatorPad::new())
    }

    /// Creates an app around an existing pad
    #[must_use]
    pub fn with_pad(pad: CalculatorPad) -> Self {
        Self {
            pad,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// Returns the pad
    #[must_use]
    pub fn pad(&self) -> &CalculatorPad {
        &self.pad
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the highlighted action
    #[must_use]
    pub fn pressed(&self) -> Option<KeypadAction> {
        self.pressed
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

    /// Presses an action on the pad and highlights its button
    ///
    /// Returns false when the pad ignored it.
    pub fn press_action(&mut self, action: KeypadAction) -> bool {
        self.pressed = Some(action);
        let handled = self.pad.press(action);
        trace!(?action, handled, display = %self.pad.display(), "keypad press");
        handled
    }

    /// Handles a key press
    pub fn handle_key(&mut self, event: KeyEvent) {
        match self.input.handle_calc_key(event) {
            CalcKeyAction::Press(action) => {
                self.press_action(action);
            }
            CalcKeyAction::Quit => self.quit(),
            CalcKeyAction::None => {}
        }
    }

    /// Handles a mouse event against a frame of size `screen`
    ///
    /// A left click on a keypad button presses it.
    pub fn handle_mouse(&mut self, event: MouseEvent, screen: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let area = keypad_area(screen);
        let hit = KeypadWidget::new(&self.keypad).hit_test(area, event.column, event.row);
        if let Some(action) = hit {
            self.press_action(action);
        }
    }
}
