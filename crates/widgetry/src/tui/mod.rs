//! Terminal hosts for the calculator and heading/content notes
//!
//! Built on ratatui with the crossterm backend.

mod app;
mod input;
mod keypad;
mod notes_app;
mod notes_ui;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{CalcKeyAction, InputHandler, NotesKeyAction, NotesMode};
pub use keypad::KeypadWidget;
pub use notes_app::NotesApp;
pub use notes_ui::{render_notes, NotesUI};
pub use terminal::{drive_calculator, drive_notes, run_calculator, run_notes};
pub use ui::{keypad_area, render, CalculatorUI};
