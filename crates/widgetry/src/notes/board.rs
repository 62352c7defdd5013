//! Heading/content notes board with a single modal edit session

use tracing::{debug, info};

use super::{
    Note, NotesError, NotesResult, StoredNote, EMPTY_HEADING_MESSAGE, NOTES_KEY, SAMPLE_HEADINGS,
};
use crate::storage::KeyValueStore;

/// Options applied when a board loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Start with the sample notes when nothing has been stored yet
    pub seed_samples: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { seed_samples: true }
    }
}

impl BoardConfig {
    /// Configuration that starts from an empty list
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            seed_samples: false,
        }
    }

    /// Set sample seeding
    #[must_use]
    pub const fn with_seed_samples(mut self, seed: bool) -> Self {
        self.seed_samples = seed;
        self
    }
}

/// The note currently open in the edit modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    index: usize,
    draft: String,
}

impl EditSession {
    /// Position of the note being edited
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Unsaved content in the edit surface
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

/// Ordered heading/content notes kept in sync with a persisted snapshot
///
/// Identity is positional. At most one [`EditSession`] exists; it is
/// cleared by save, cancel and close, and follows its note when an earlier
/// note is deleted.
#[derive(Debug)]
pub struct NoteBoard<S> {
    store: S,
    notes: Vec<Note>,
    session: Option<EditSession>,
    alert: Option<String>,
}

impl<S: KeyValueStore> NoteBoard<S> {
    /// Creates an empty board without touching the store
    pub fn new(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
            session: None,
            alert: None,
        }
    }

    /// Creates a board and loads it from the store
    pub fn open(store: S, config: BoardConfig) -> NotesResult<Self> {
        let mut board = Self::new(store);
        board.load(config)?;
        Ok(board)
    }

    /// Replaces the working list with the persisted snapshot
    ///
    /// Bare strings from older snapshots become notes with empty content.
    /// Without a snapshot the list is empty, or the samples when seeding.
    pub fn load(&mut self, config: BoardConfig) -> NotesResult<()> {
        self.session = None;
        self.notes = match self.store.get(NOTES_KEY)? {
            Some(raw) => {
                let stored: Vec<StoredNote> =
                    serde_json::from_str(&raw).map_err(|source| NotesError::CorruptSnapshot {
                        key: NOTES_KEY.to_string(),
                        source,
                    })?;
                stored.into_iter().map(Note::from).collect()
            }
            None if config.seed_samples => SAMPLE_HEADINGS.iter().map(|h| Note::new(*h)).collect(),
            None => Vec::new(),
        };
        debug!(count = self.notes.len(), "notes loaded");
        Ok(())
    }

    /// Overwrites the snapshot with the whole working list
    pub fn persist(&mut self) -> NotesResult<()> {
        let json = serde_json::to_string(&self.notes).map_err(NotesError::Encode)?;
        self.store.set(NOTES_KEY, &json)?;
        debug!(count = self.notes.len(), "notes persisted");
        Ok(())
    }

    /// Notes in display order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Note at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Note> {
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

    /// Headings in display order
    #[must_use]
    pub fn headings(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.heading.as_str()).collect()
    }

    /// Appends a note with empty content and persists, returning its index
    ///
    /// A heading that is blank after trimming raises the alert and leaves
    /// the list untouched.
    pub fn add_note(&mut self, heading: &str) -> NotesResult<usize> {
        let heading = heading.trim();
        if heading.is_empty() {
            self.alert = Some(EMPTY_HEADING_MESSAGE.to_string());
            return Err(NotesError::EmptyHeading);
        }

        self.notes.push(Note::new(heading));
        self.persist()?;
        info!(heading, "note added");
        Ok(self.notes.len() - 1)
    }

    /// Opens the edit session on `index`, loading its content as the draft
    ///
    /// Out of range is a silent no-op. An open session is replaced.
    pub fn open_edit_session(&mut self, index: usize) -> bool {
        let Some(note) = self.notes.get(index) else {
            return false;
        };
        self.session = Some(EditSession {
            index,
            draft: note.content.clone(),
        });
        debug!(index, "edit session opened");
        true
    }

    /// The active edit session
    #[must_use]
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Returns true while the edit modal is open
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Replaces the draft of the active session
    pub fn set_draft(&mut self, text: &str) {
        if let Some(session) = &mut self.session {
            session.draft = text.to_string();
        }
    }

    /// Mutable access to the draft of the active session
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.session.as_mut().map(|s| &mut s.draft)
    }

    /// Writes `content` into the edited note, persists, and ends the session
    ///
    /// Returns false when no session is open.
    pub fn save_edit_session(&mut self, content: &str) -> NotesResult<bool> {
        let Some(session) = self.session.take() else {
            return Ok(false);
        };
        let Some(note) = self.notes.get_mut(session.index) else {
            return Ok(false);
        };
        note.content = content.to_string();
        self.persist()?;
        debug!(index = session.index, "edit session saved");
        Ok(true)
    }

    /// Saves the session's own draft
    pub fn save_draft(&mut self) -> NotesResult<bool> {
        match self.session.as_ref().map(|s| s.draft.clone()) {
            Some(draft) => self.save_edit_session(&draft),
            None => Ok(false),
        }
    }

    /// Ends the session, discarding the draft
    pub fn cancel_edit_session(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(index = session.index, "edit session discarded");
        }
    }

    /// Ends the session, discarding the draft (close button, overlay, Escape)
    pub fn close_edit_session(&mut self) {
        self.cancel_edit_session();
    }

    /// Removes the note at `index` and persists
    ///
    /// Deleting the note being edited closes the session; deleting an
    /// earlier note moves the session index down with its note.
    pub fn delete_note(&mut self, index: usize) -> NotesResult<Option<Note>> {
        if index >= self.notes.len() {
            return Ok(None);
        }
        let removed = self.notes.remove(index);

        self.session = match self.session.take() {
            Some(session) if session.index == index => {
                debug!(index, "edited note deleted, closing session");
                None
            }
            Some(mut session) => {
                if session.index > index {
                    session.index -= 1;
                }
                Some(session)
            }
            None => None,
        };

        self.persist()?;
        info!(heading = %removed.heading, "note deleted");
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
