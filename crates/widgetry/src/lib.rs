//! Widgetry - a calculator and two note boards, hosted three ways
//!
//! The widget logic lives in [`calc`] and [`notes`] and knows nothing about
//! where it is drawn. Hosts wrap it:
//!
//! - [`tui`]: ratatui terminal apps (feature `tui`, on by default)
//! - [`wasm`]: a mock DOM for native tests, plus wasm-bindgen exports for the
//!   real page (feature `wasm`)
//!
//! [`driver`] runs the same behavioural checks against every host.
//!
//! # Example
//!
//! ```rust
//! use widgetry::prelude::*;
//!
//! let mut pad = CalculatorPad::new();
//! assert!(!pad.press(KeypadAction::Digit(4))); // still off
//!
//! pad.press(KeypadAction::PowerOn);
//! pad.append_str("2+3*4");
//! pad.press(KeypadAction::Equals);
//! assert_eq!(pad.display(), "14");
//!
//! let mut board = NoteBoard::open(MemoryStore::new(), BoardConfig::empty()).unwrap();
//! board.add_note("Groceries").unwrap();
//! assert_eq!(board.headings(), vec!["Groceries"]);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calc;
pub mod driver;
pub mod notes;
pub mod storage;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser hosts
///
/// The mock DOM is always compiled so the page logic is testable natively.
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calc::evaluator::Evaluator;
    pub use crate::calc::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::calc::{
        evaluate_to_display, CalcError, CalcResult, Calculator, CalculatorPad, Keypad,
        KeypadAction, Operation, ERROR_DISPLAY,
    };
    pub use crate::driver::{CalculatorDriver, NotesDriver};
    pub use crate::notes::{
        BoardConfig, Note, NoteBoard, NotesError, NotesResult, StickyBoard, StickyNote,
    };
    pub use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, NotesApp};

    pub use crate::wasm::{
        DomElement, DomEvent, MockDom, WasmCalculator, WasmNoteBoard, WasmStickyBoard,
    };
}
