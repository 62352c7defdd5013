//! Unified widget drivers
//!
//! Every host (terminal app, mock DOM page) implements the same small driver
//! traits, so each behavioural check is written once as a `verify_*` function
//! and run against all of them.
//!
//! ```rust
//! use widgetry::driver::{verify_calculator_examples, CalculatorDriver};
//! use widgetry::wasm::WasmCalculator;
//!
//! let mut page = WasmCalculator::new();
//! verify_calculator_examples(&mut page);
//! ```

use crate::calc::{Keypad, KeypadAction, ERROR_DISPLAY};
use crate::notes::NotesResult;

/// Interactions shared by every calculator host
pub trait CalculatorDriver {
    /// Presses one keypad action, returning false when it was ignored
    fn press(&mut self, action: KeypadAction) -> bool;

    /// Text currently shown on the display
    fn display(&self) -> String;

    /// Whether the pad is powered
    fn is_on(&self) -> bool;

    /// Presses the key for every character of `keys`
    ///
    /// Characters without a key (letters, spaces) are skipped.
    fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            if let Some(action) = Keypad::key_to_action(&c.to_string()) {
                self.press(action);
            }
        }
    }
}

/// Interactions shared by every notes host
///
/// Indices are positions in the rendered list. A blank heading is reported
/// through [`NotesDriver::alert`]; hosts may return either `Ok` or a
/// validation error for it.
pub trait NotesDriver {
    /// Adds a note with the given heading
    fn add_note(&mut self, heading: &str) -> NotesResult<()>;

    /// Opens the note at `index` for editing
    fn open_note(&mut self, index: usize) -> NotesResult<()>;

    /// Replaces the text being edited
    fn type_draft(&mut self, text: &str) -> NotesResult<()>;

    /// Saves the text being edited
    fn save_note(&mut self) -> NotesResult<()>;

    /// Discards the text being edited
    fn cancel_note(&mut self) -> NotesResult<()>;

    /// Deletes the note at `index`
    fn delete_note(&mut self, index: usize) -> NotesResult<()>;

    /// Headings (or titles) in display order
    fn headings(&self) -> Vec<String>;

    /// Content of the note at `index`
    fn content(&self, index: usize) -> Option<String>;

    /// The pending validation message, if any
    fn alert(&self) -> Option<String>;

    /// Whether an edit modal or popup is open
    fn is_editing(&self) -> bool;
}

/// Terminal host drivers
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, NotesDriver};
    use crate::calc::KeypadAction;
    use crate::notes::NotesResult;
    use crate::storage::KeyValueStore;
    use crate::tui::{CalculatorApp, NotesApp};

    impl CalculatorDriver for CalculatorApp {
        fn press(&mut self, action: KeypadAction) -> bool {
            self.press_action(action)
        }

        fn display(&self) -> String {
            self.pad().display()
        }

        fn is_on(&self) -> bool {
            self.pad().is_on()
        }
    }

    impl<S: KeyValueStore> NotesDriver for NotesApp<S> {
        fn add_note(&mut self, heading: &str) -> NotesResult<()> {
            self.set_input(heading);
            self.submit_input()
        }

        fn open_note(&mut self, index: usize) -> NotesResult<()> {
            self.open_at(index);
            Ok(())
        }

        fn type_draft(&mut self, text: &str) -> NotesResult<()> {
            self.board_mut().set_draft(text);
            Ok(())
        }

        fn save_note(&mut self) -> NotesResult<()> {
            self.save_draft()
        }

        fn cancel_note(&mut self) -> NotesResult<()> {
            self.board_mut().cancel_edit_session();
            Ok(())
        }

        fn delete_note(&mut self, index: usize) -> NotesResult<()> {
            self.delete_at(index)
        }

        fn headings(&self) -> Vec<String> {
            self.board().headings().into_iter().map(String::from).collect()
        }

        fn content(&self, index: usize) -> Option<String> {
            self.board().get(index).map(|n| n.content.clone())
        }

        fn alert(&self) -> Option<String> {
            self.board().alert().map(String::from)
        }

        fn is_editing(&self) -> bool {
            self.board().is_editing()
        }
    }
}

// ===== Unified checks =====
// Each runs against any driver; calculator checks expect a fresh host,
// notes checks expect an empty board.

/// Worked examples: `2+2`, `10%`, root of 16, incomplete input
pub fn verify_calculator_examples<D: CalculatorDriver>(driver: &mut D) {
    driver.press(KeypadAction::PowerOn);
    assert_eq!(driver.display(), "0");

    driver.type_keys("2+2=");
    assert_eq!(driver.display(), "4");
    driver.press(KeypadAction::AllClear);

    driver.type_keys("10%=");
    assert_eq!(driver.display(), "0.1");
    driver.press(KeypadAction::AllClear);

    driver.type_keys("16");
    driver.press(KeypadAction::SquareRoot);
    assert_eq!(driver.display(), "4");
    driver.press(KeypadAction::AllClear);

    driver.type_keys("2+=");
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.press(KeypadAction::AllClear);
}

/// Precedence, parentheses and unary minus
pub fn verify_calculator_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.press(KeypadAction::PowerOn);

    driver.type_keys("2+3*4=");
    assert_eq!(driver.display(), "14");
    driver.press(KeypadAction::AllClear);

    driver.type_keys("(2+3)*4=");
    assert_eq!(driver.display(), "20");
    driver.press(KeypadAction::AllClear);

    driver.type_keys("-3*-3=");
    assert_eq!(driver.display(), "9");
    driver.press(KeypadAction::AllClear);

    driver.type_keys("7%4=");
    assert_eq!(driver.display(), "3");
    driver.press(KeypadAction::AllClear);
}

/// Errors show `Error` and the pad stays usable
pub fn verify_calculator_errors<D: CalculatorDriver>(driver: &mut D) {
    driver.press(KeypadAction::PowerOn);

    for keys in ["1/0=", "5%0=", "(1+2=", "1+2)="] {
        driver.type_keys(keys);
        assert_eq!(driver.display(), ERROR_DISPLAY, "keys: {keys}");
        driver.press(KeypadAction::AllClear);
    }

    driver.type_keys("9");
    driver.press(KeypadAction::PowerOff);
    driver.press(KeypadAction::PowerOn);
    driver.type_keys("0-9");
    driver.press(KeypadAction::SquareRoot);
    assert_eq!(driver.display(), ERROR_DISPLAY);

    driver.press(KeypadAction::AllClear);
    driver.type_keys("12");
    driver.press(KeypadAction::Delete);
    driver.type_keys("=");
    assert_eq!(driver.display(), "1");
    driver.press(KeypadAction::AllClear);
}

/// While off every press except ON is ignored and the display is blank
pub fn verify_power_gate<D: CalculatorDriver>(driver: &mut D) {
    driver.press(KeypadAction::PowerOn);
    driver.type_keys("42");
    driver.press(KeypadAction::PowerOff);
    assert!(!driver.is_on());
    assert_eq!(driver.display(), "");

    for action in [
        KeypadAction::Digit(7),
        KeypadAction::Equals,
        KeypadAction::SquareRoot,
        KeypadAction::AllClear,
    ] {
        assert!(!driver.press(action));
        assert_eq!(driver.display(), "");
    }

    driver.press(KeypadAction::PowerOn);
    assert!(driver.is_on());
    assert_eq!(driver.display(), "0");
}

/// Runs every calculator check on one driver
pub fn run_calculator_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_calculator_examples(driver);
    verify_calculator_precedence(driver);
    verify_calculator_errors(driver);
    verify_power_gate(driver);
}

/// Blank headings raise the alert and never change the list
pub fn verify_blank_heading_rejected<D: NotesDriver>(driver: &mut D) {
    assert!(driver.add_note("kept").is_ok());
    let before = driver.headings();

    for blank in ["", "   ", "\t\n"] {
        let result = driver.add_note(blank);
        assert!(result.as_ref().map_or_else(|e| e.is_validation(), |_| true));
        assert!(driver.alert().is_some());
        assert_eq!(driver.headings(), before);
    }
}

/// Editing one note changes only that note's content
pub fn verify_edit_isolation<D: NotesDriver>(driver: &mut D) {
    for heading in ["first", "second", "third"] {
        assert!(driver.add_note(heading).is_ok());
    }
    let headings = driver.headings();

    assert!(driver.open_note(1).is_ok());
    assert!(driver.is_editing());
    assert!(driver.type_draft("long body").is_ok());
    assert!(driver.save_note().is_ok());
    assert!(!driver.is_editing());

    assert_eq!(driver.headings(), headings);
    assert_eq!(driver.content(1).as_deref(), Some("long body"));
    assert_eq!(driver.content(0).as_deref(), Some(""));
    assert_eq!(driver.content(2).as_deref(), Some(""));
}

/// Cancelling discards the draft
pub fn verify_cancel_discards<D: NotesDriver>(driver: &mut D) {
    assert!(driver.add_note("note").is_ok());
    assert!(driver.open_note(0).is_ok());
    assert!(driver.type_draft("unsaved").is_ok());
    assert!(driver.cancel_note().is_ok());
    assert!(!driver.is_editing());
    assert_eq!(driver.content(0).as_deref(), Some(""));
}

/// Deleting shifts later notes down by one
pub fn verify_delete_shift<D: NotesDriver>(driver: &mut D) {
    for heading in ["a", "b", "c", "d"] {
        assert!(driver.add_note(heading).is_ok());
    }
    assert!(driver.delete_note(1).is_ok());
    assert_eq!(driver.headings(), vec!["a", "c", "d"]);
    assert!(driver.delete_note(9).is_ok());
    assert_eq!(driver.headings().len(), 3);
}

/// Opening out of range is a no-op; deleting the open note closes it
pub fn verify_session_edges<D: NotesDriver>(driver: &mut D) {
    assert!(driver.add_note("only").is_ok());
    assert!(driver.open_note(5).is_ok());
    assert!(!driver.is_editing());

    assert!(driver.open_note(0).is_ok());
    assert!(driver.delete_note(0).is_ok());
    assert!(!driver.is_editing());
    assert!(driver.headings().is_empty());
}
