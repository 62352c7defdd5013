//! Calculator pad state: the expression buffer and the power flag

use tracing::debug;

use crate::calc::{
    evaluate_expression, evaluate_to_display, format_number, CalcResult, Calculator, KeypadAction,
    ERROR_DISPLAY,
};

/// Text buffer plus power flag behind every calculator host
///
/// While off, every press except [`KeypadAction::PowerOn`] is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorPad {
    buffer: String,
    powered: bool,
}

impl CalculatorPad {
    /// Creates a pad that starts switched off with an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pad that is already switched on
    #[must_use]
    pub fn powered_on() -> Self {
        Self {
            buffer: String::new(),
            powered: true,
        }
    }

    /// Returns the raw expression buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns whether the pad is on
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.powered
    }

    /// Text for the display: the buffer or `0` while on, nothing while off
    #[must_use]
    pub fn display(&self) -> String {
        if !self.powered {
            String::new()
        } else if self.buffer.is_empty() {
            "0".to_string()
        } else {
            self.buffer.clone()
        }
    }

    /// Applies a keypad action, returning false when it was ignored
    pub fn press(&mut self, action: KeypadAction) -> bool {
        match action {
            KeypadAction::PowerOn => {
                self.power_on();
                return true;
            }
            KeypadAction::PowerOff => {
                self.power_off();
                return true;
            }
            _ if !self.powered => {
                debug!(?action, "press ignored while off");
                return false;
            }
            _ => {}
        }

        match action {
            KeypadAction::AllClear => self.all_clear(),
            KeypadAction::Delete => self.delete_last(),
            KeypadAction::Percent => self.percent(),
            KeypadAction::SquareRoot => self.square_root(),
            KeypadAction::Equals => self.equals(),
            other => {
                if let Some(c) = other.to_char() {
                    self.append(c);
                }
            }
        }
        true
    }

    /// Turns the pad on, keeping the buffer
    pub fn power_on(&mut self) {
        self.powered = true;
    }

    /// Turns the pad off and empties the buffer
    pub fn power_off(&mut self) {
        self.powered = false;
        self.buffer.clear();
    }

    /// Appends a literal character
    pub fn append(&mut self, c: char) {
        if self.powered {
            self.buffer.push(c);
        }
    }

    /// Appends a string of literal characters
    pub fn append_str(&mut self, s: &str) {
        if self.powered {
            self.buffer.push_str(s);
        }
    }

    /// Empties the buffer (AC)
    pub fn all_clear(&mut self) {
        if self.powered {
            self.buffer.clear();
        }
    }

    /// Removes the last character (DE)
    pub fn delete_last(&mut self) {
        if self.powered {
            self.buffer.pop();
        }
    }

    /// Replaces the buffer with its evaluated result
    pub fn equals(&mut self) {
        if self.powered {
            self.buffer = evaluate_to_display(&self.buffer);
        }
    }

    /// Replaces the buffer with the square root of its value
    pub fn square_root(&mut self) {
        self.transform(Calculator::square_root);
    }

    /// Replaces the buffer with its value divided by 100
    pub fn percent(&mut self) {
        self.transform(Calculator::percent);
    }

    fn transform(&mut self, f: fn(f64) -> CalcResult<f64>) {
        if !self.powered {
            return;
        }
        self.buffer = match evaluate_expression(&self.buffer).and_then(f) {
            Ok(value) => format_number(value),
            Err(e) => {
                debug!(buffer = %self.buffer, error = %e, "transform failed");
                ERROR_DISPLAY.to_string()
            }
        };
    }
}
