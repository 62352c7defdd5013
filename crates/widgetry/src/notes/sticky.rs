//! Title/content sticky notes board

use std::collections::HashSet;

use tracing::{debug, info};

use super::{
    NotesError, NotesResult, StickyNote, EMPTY_TITLE_MESSAGE, POPUP_PLACEHOLDER, STICKY_KEY,
};
use crate::storage::KeyValueStore;

/// Sticky notes with a content popup
///
/// The in-memory list drives rendering and is the only source of every
/// persisted snapshot.
#[derive(Debug)]
pub struct StickyBoard<S> {
    store: S,
    notes: Vec<StickyNote>,
    selected: Option<usize>,
    alert: Option<String>,
}

impl<S: KeyValueStore> StickyBoard<S> {
    /// Creates an empty board without touching the store
    pub fn new(store: S) -> Self {
        Self::with_notes(store, Vec::new())
    }

    /// Creates a board with notes that are already on the page
    pub fn with_notes(store: S, preset: Vec<StickyNote>) -> Self {
        Self {
            store,
            notes: preset,
            selected: None,
            alert: None,
        }
    }

    /// Creates an empty board and merges the stored snapshot into it
    pub fn open(store: S) -> NotesResult<Self> {
        let mut board = Self::new(store);
        board.load()?;
        Ok(board)
    }

    /// Appends stored notes whose title is not already present
    ///
    /// Present titles are captured once, before merging, so repeated titles
    /// inside the snapshot itself are all kept. Returns how many were added.
    pub fn load(&mut self) -> NotesResult<usize> {
        let Some(raw) = self.store.get(STICKY_KEY)? else {
            return Ok(0);
        };
        let stored: Vec<StickyNote> =
            serde_json::from_str(&raw).map_err(|source| NotesError::CorruptSnapshot {
                key: STICKY_KEY.to_string(),
                source,
            })?;

        let existing: HashSet<String> = self.notes.iter().map(|n| n.title.clone()).collect();
        let before = self.notes.len();
        self.notes
            .extend(stored.into_iter().filter(|n| !existing.contains(&n.title)));

        let added = self.notes.len() - before;
        debug!(added, skipped_existing = existing.len(), "sticky notes loaded");
        Ok(added)
    }

    /// Overwrites the snapshot with the current list
    pub fn persist(&mut self) -> NotesResult<()> {
        let json = serde_json::to_string(&self.notes).map_err(NotesError::Encode)?;
        self.store.set(STICKY_KEY, &json)?;
        debug!(count = self.notes.len(), "sticky notes persisted");
        Ok(())
    }

    /// Notes in display order
    #[must_use]
    pub fn notes(&self) -> &[StickyNote] {
        &self.notes
    }

    /// Note at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StickyNote> {
        self.notes.get(index)
    }

    /// Number of notes
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true when there are no notes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Titles in display order
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.title.as_str()).collect()
    }

    /// Appends a note and persists, returning its index
    pub fn add_note(&mut self, title: &str) -> NotesResult<usize> {
        let title = title.trim();
        if title.is_empty() {
            self.alert = Some(EMPTY_TITLE_MESSAGE.to_string());
            return Err(NotesError::EmptyTitle);
        }

        self.notes.push(StickyNote::new(title));
        self.persist()?;
        info!(title, "sticky note added");
        Ok(self.notes.len() - 1)
    }

    /// Selects `index` and opens the popup; out of range is a no-op
    pub fn open_popup(&mut self, index: usize) -> bool {
        if index >= self.notes.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Returns true while the popup is open
    #[must_use]
    pub fn is_popup_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Index of the note open in the popup
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Text the popup shows: the content, or the placeholder when empty
    #[must_use]
    pub fn popup_text(&self) -> Option<&str> {
        let note = self.notes.get(self.selected?)?;
        if note.content.is_empty() {
            Some(POPUP_PLACEHOLDER)
        } else {
            Some(&note.content)
        }
    }

    /// Stores `text` on the selected note and persists; the popup always closes
    ///
    /// Returns false when nothing was selected.
    pub fn save_popup(&mut self, text: &str) -> NotesResult<bool> {
        let Some(index) = self.selected.take() else {
            return Ok(false);
        };
        let Some(note) = self.notes.get_mut(index) else {
            return Ok(false);
        };
        note.content = text.to_string();
        self.persist()?;
        debug!(index, "sticky content saved");
        Ok(true)
    }

    /// Closes the popup without saving
    pub fn close_popup(&mut self) {
        self.selected = None;
    }

    /// Removes the note at `index` and persists
    ///
    /// Removing the selected note closes the popup.
    pub fn delete_note(&mut self, index: usize) -> NotesResult<Option<StickyNote>> {
        if index >= self.notes.len() {
            return Ok(None);
        }
        let removed = self.notes.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        self.persist()?;
        info!(title = %removed.title, "sticky note deleted");
        Ok(Some(removed))
    }

    /// The pending alert message, if any
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Dismisses the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// The backing store
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the board, returning its store
    pub fn into_store(self) -> S {
        self.store
    }
}
