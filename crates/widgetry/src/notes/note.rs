//! Note records and their persisted shapes

use serde::{Deserialize, Serialize};

/// Sample headings a fresh board starts with
pub const SAMPLE_HEADINGS: [&str; 4] = [
    "Buy groceries for the week",
    "Finish the project report",
    "Call the dentist for an appointment",
    "Read a new book",
];

/// A heading/content note
///
/// The heading is fixed at creation; only the content changes, through an
/// edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Short label shown in the list
    pub heading: String,
    /// Long-form body, edited in the modal
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Creates a note with empty content
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: String::new(),
        }
    }

    /// Sets the content
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// One entry of a heading/content snapshot as it may appear on disk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredNote {
    /// Older snapshots stored bare heading strings
    Legacy(String),
    /// Current object form
    Current(Note),
}

impl From<StoredNote> for Note {
    fn from(stored: StoredNote) -> Self {
        match stored {
            StoredNote::Legacy(heading) => Self::new(heading),
            StoredNote::Current(note) => note,
        }
    }
}

/// A title/content sticky note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickyNote {
    /// Label shown on the note
    pub title: String,
    /// Body edited in the popup; missing in snapshots written for static notes
    #[serde(default)]
    pub content: String,
}

impl StickyNote {
    /// Creates a sticky note with empty content
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
        }
    }

    /// Sets the content
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
