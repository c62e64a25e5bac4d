//! Browsing/editing session state.
//!
//! # Responsibility
//! - Hold search text, category selector and the current edit draft.
//! - Drive `Browsing -> Editing -> {Saved | Deleted | Discarded} -> Browsing`.
//!
//! # Invariants
//! - Draft edits are invisible to the store until `save`.
//! - Every terminal action returns the session to `Browsing`, including
//!   a failed save.

use crate::model::note::{Note, NoteDraft, NoteId, ALL_CATEGORY};
use crate::repo::note_store::{NoteRepository, StoreError, StoreResult};
use crate::service::note_service::{NoteCard, NoteService};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for session actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Save/delete requested while no note is open.
    NotEditing,
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEditing => write!(f, "no note is open for editing"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotEditing => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Browsing,
    Editing { note_id: NoteId, draft: NoteDraft },
}

/// Terminal action of one edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Saved(Note),
    Deleted(NoteId),
    Discarded(NoteId),
}

/// Caller-owned view state for the list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotepadSession {
    query: String,
    category: String,
    state: EditState,
}

impl NotepadSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORY.to_string(),
            state: EditState::Browsing,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn editing_id(&self) -> Option<NoteId> {
        match &self.state {
            EditState::Editing { note_id, .. } => Some(*note_id),
            EditState::Browsing => None,
        }
    }

    pub fn draft(&self) -> Option<&NoteDraft> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Browsing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut NoteDraft> {
        match &mut self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Browsing => None,
        }
    }

    /// Notes visible under the current query and category.
    pub fn visible<R: NoteRepository>(&self, service: &NoteService<R>) -> Vec<Note> {
        service.filter_notes(&self.query, &self.category)
    }

    /// Card projections of [`Self::visible`].
    pub fn visible_cards<R: NoteRepository>(&self, service: &NoteService<R>) -> Vec<NoteCard> {
        service.list_cards(&self.query, &self.category)
    }

    /// Creates a note and opens it for editing.
    ///
    /// Any draft already open is discarded.
    pub fn add_note<R: NoteRepository>(&mut self, service: &mut NoteService<R>) -> Note {
        let note = service.create_note();
        self.begin_editing(&note);
        note
    }

    /// Opens an existing note for editing and returns the initial draft.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `note_id` is unknown; the session stays
    ///   browsing.
    pub fn open<R: NoteRepository>(
        &mut self,
        service: &NoteService<R>,
        note_id: NoteId,
    ) -> StoreResult<NoteDraft> {
        match service.get_note(note_id) {
            Ok(note) => {
                let draft = note.to_draft();
                self.begin_editing(&note);
                Ok(draft)
            }
            Err(err) => {
                self.state = EditState::Browsing;
                Err(err)
            }
        }
    }

    /// Commits the open draft through the service.
    pub fn save<R: NoteRepository>(
        &mut self,
        service: &mut NoteService<R>,
    ) -> Result<SessionOutcome, SessionError> {
        let EditState::Editing { note_id, draft } = self.take_state() else {
            return Err(SessionError::NotEditing);
        };
        let note = service.save_note(note_id, &draft)?;
        Ok(SessionOutcome::Saved(note))
    }

    /// Deletes the open note.
    pub fn delete<R: NoteRepository>(
        &mut self,
        service: &mut NoteService<R>,
    ) -> Result<SessionOutcome, SessionError> {
        let EditState::Editing { note_id, .. } = self.take_state() else {
            return Err(SessionError::NotEditing);
        };
        service.delete_note(note_id);
        Ok(SessionOutcome::Deleted(note_id))
    }

    /// Leaves the detail screen without saving.
    ///
    /// Returns `None` when nothing was open.
    pub fn back(&mut self) -> Option<SessionOutcome> {
        match self.take_state() {
            EditState::Editing { note_id, .. } => {
                debug!("event=edit_discarded module=session note_id={note_id}");
                Some(SessionOutcome::Discarded(note_id))
            }
            EditState::Browsing => None,
        }
    }

    fn begin_editing(&mut self, note: &Note) {
        debug!("event=edit_opened module=session note_id={}", note.id);
        self.state = EditState::Editing {
            note_id: note.id,
            draft: note.to_draft(),
        };
    }

    fn take_state(&mut self) -> EditState {
        std::mem::replace(&mut self.state, EditState::Browsing)
    }
}

impl Default for NotepadSession {
    fn default() -> Self {
        Self::new()
    }
}
