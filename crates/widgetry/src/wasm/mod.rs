//! Browser hosts
//!
//! The mock DOM pages run everywhere and carry the full event routing and
//! rendering contract; the `wasm` feature adds the wasm-bindgen exports used
//! by the real page.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
pub mod notes;
pub mod sticky;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, BrowserNotes, BrowserStickyNotes};
pub use calculator::{WasmCalculator, DISPLAY_ID};
pub use dom::{DomElement, DomEvent, MockDom, ACTIVE_CLASS};
pub use notes::WasmNoteBoard;
pub use sticky::WasmStickyBoard;
