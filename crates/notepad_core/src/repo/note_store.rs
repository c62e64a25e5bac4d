//! In-memory note store.
//!
//! # Responsibility
//! - Own the canonical ordered collection of notes.
//! - Provide create/get/update/delete/filter as the only mutation and query path.
//!
//! # Invariants
//! - Ids are unique within one store.
//! - New notes are inserted at index 0; otherwise insertion order is kept.
//! - `update` trims all three fields and either fully applies or does nothing.
//! - `delete` of an unknown id is a successful no-op.

use crate::model::note::{Note, NoteId, NoteValidationError, ALL_CATEGORY};
use crate::search::filter::NoteFilter;
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note lookups and explicit-id construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No note in the store has this id.
    NotFound(NoteId),
    /// Two notes supplied to `from_notes` share an id.
    DuplicateId(NoteId),
    Validation(NoteValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface consumed by the presentation layer.
///
/// A storage adapter may implement this to load on start and save on
/// mutation without changing the contract.
pub trait NoteRepository {
    /// Full collection in list order.
    fn list(&self) -> Vec<Note>;
    /// Inserts a blank note at the front and returns it.
    fn create(&mut self) -> Note;
    fn get(&self, id: NoteId) -> StoreResult<Note>;
    /// Replaces the editable fields with their trimmed values.
    fn update(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        category: &str,
    ) -> StoreResult<Note>;
    /// Removes the note if present.
    fn delete(&mut self, id: NoteId);
    /// Derived view of notes matching `query` and `category`, in list order.
    fn filter(&self, query: &str, category: &str) -> Vec<Note>;

    /// Distinct category labels in first-seen order, without `"All"`.
    fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.list()
            .into_iter()
            .map(|note| note.category)
            .filter(|category| category != ALL_CATEGORY && seen.insert(category.clone()))
            .collect()
    }
}

/// Authoritative in-memory note collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the three starter notes.
    pub fn with_seed_notes() -> Self {
        Self {
            notes: vec![
                Note::with_fields("Buy groceries", "Milk, Eggs, Bread", "Personal"),
                Note::with_fields("Read docs", "Jetpack Compose + Kotlin DSL", "Work"),
                Note::with_fields("Plan vacation", "Hawaii, July", "Personal"),
            ],
        }
    }

    /// Creates a store from existing notes, keeping their order.
    ///
    /// # Errors
    /// - `Validation(NilId)` when a note carries the nil id.
    /// - `DuplicateId` when two notes share an id.
    pub fn from_notes(notes: Vec<Note>) -> StoreResult<Self> {
        let mut ids = HashSet::with_capacity(notes.len());
        for note in &notes {
            note.validate()?;
            if !ids.insert(note.id) {
                return Err(StoreError::DuplicateId(note.id));
            }
        }
        Ok(Self { notes })
    }

    /// Borrowed view of the collection in list order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.position(id).is_some()
    }

    /// Applies a prepared filter without cloning the whole collection first.
    pub fn filter_with(&self, filter: &NoteFilter) -> Vec<Note> {
        filter.apply(&self.notes)
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for NoteStore {
    fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn create(&mut self) -> Note {
        let note = Note::new();
        self.notes.insert(0, note.clone());
        debug!(
            "event=note_create module=store status=ok note_id={} count={}",
            note.id,
            self.notes.len()
        );
        note
    }

    fn get(&self, id: NoteId) -> StoreResult<Note> {
        self.position(id)
            .map(|index| self.notes[index].clone())
            .ok_or(StoreError::NotFound(id))
    }

    fn update(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        category: &str,
    ) -> StoreResult<Note> {
        let Some(index) = self.position(id) else {
            debug!("event=note_update module=store status=not_found note_id={id}");
            return Err(StoreError::NotFound(id));
        };

        let note = &mut self.notes[index];
        note.apply_trimmed(title, content, category);
        debug!("event=note_update module=store status=ok note_id={id}");
        Ok(note.clone())
    }

    fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let status = if self.notes.len() < before {
            "ok"
        } else {
            "noop"
        };
        debug!("event=note_delete module=store status={status} note_id={id}");
    }

    fn filter(&self, query: &str, category: &str) -> Vec<Note> {
        self.filter_with(&NoteFilter::new(query, category))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteRepository, NoteStore, StoreError};
    use crate::model::note::{Note, NoteValidationError};
    use uuid::Uuid;

    #[test]
    fn seed_notes_keep_reference_order() {
        let store = NoteStore::with_seed_notes();
        let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Buy groceries", "Read docs", "Plan vacation"]);
    }

    #[test]
    fn from_notes_rejects_duplicate_and_nil_ids() {
        let note = Note::with_fields("a", "", "Work");
        let err = NoteStore::from_notes(vec![note.clone(), note.clone()]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(note.id));

        let mut nil = Note::new();
        nil.id = Uuid::nil();
        let err = NoteStore::from_notes(vec![nil]).unwrap_err();
        assert_eq!(err, StoreError::Validation(NoteValidationError::NilId));
    }

    #[test]
    fn categories_skip_sentinel_and_duplicates() {
        let mut store = NoteStore::with_seed_notes();
        store.create();
        assert_eq!(store.categories(), ["Personal", "Work"]);
    }
}
