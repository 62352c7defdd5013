//! Notes widgets
//!
//! Two boards share the same external contract (add, edit content in a
//! modal, delete, persist) but differ in shape and storage key:
//!
//! - [`NoteBoard`]: heading/content notes under `"notes"`, reads the legacy
//!   bare-string format.
//! - [`StickyBoard`]: title/content notes under `"notes_app_data"`, merges a
//!   stored snapshot into notes already on the page without duplicating titles.

mod board;
mod note;
mod sticky;

pub use board::{BoardConfig, EditSession, NoteBoard};
pub use note::{Note, StickyNote, StoredNote, SAMPLE_HEADINGS};
pub use sticky::StickyBoard;

use thiserror::Error;

use crate::storage::StorageError;

/// Storage key of the heading/content board
pub const NOTES_KEY: &str = "notes";

/// Storage key of the title/content board
pub const STICKY_KEY: &str = "notes_app_data";

/// Alert raised when adding a note with a blank heading
pub const EMPTY_HEADING_MESSAGE: &str = "Please enter a note heading!";

/// Alert raised when adding a sticky note with a blank title
pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a note!";

/// Popup text shown for a sticky note without content
pub const POPUP_PLACEHOLDER: &str = "Write a note here...";

/// Result type for notes operations
pub type NotesResult<T> = Result<T, NotesError>;

/// Errors raised by the notes boards
#[derive(Debug, Error)]
pub enum NotesError {
    /// Heading was empty after trimming
    #[error("{}", EMPTY_HEADING_MESSAGE)]
    EmptyHeading,

    /// Sticky title was empty after trimming
    #[error("{}", EMPTY_TITLE_MESSAGE)]
    EmptyTitle,

    /// The persisted snapshot could not be decoded
    #[error("Stored notes under '{key}' are unreadable: {source}")]
    CorruptSnapshot {
        /// Storage key holding the snapshot
        key: String,
        /// Decoder failure
        source: serde_json::Error,
    },

    /// The working list could not be encoded
    #[error("Failed to encode notes: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl NotesError {
    /// Returns true for blank-input validation failures
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyHeading | Self::EmptyTitle)
    }
}
