//! Note use-case service.
//!
//! # Responsibility
//! - Provide note create/get/save/delete/list APIs over any `NoteRepository`.
//! - Derive list-card projections (`preview`) for the browsing screen.
//!
//! # Invariants
//! - Service APIs never bypass the repository mutation path.
//! - Card order equals filtered list order.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::note_store::{NoteRepository, StoreResult};
use log::{debug, info, warn};

const PREVIEW_MAX_CHARS: usize = 100;

/// List-row projection of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub note_id: NoteId,
    pub title: String,
    /// Single-line content summary; `None` when content is blank.
    pub preview: Option<String>,
    pub category: String,
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        Self {
            note_id: note.id,
            title: note.title.clone(),
            preview: derive_preview(&note.content),
            category: note.category.clone(),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Creates one blank note at the top of the list.
    pub fn create_note(&mut self) -> Note {
        let note = self.repo.create();
        info!(
            "event=note_created module=service status=ok note_id={}",
            note.id
        );
        note
    }

    pub fn get_note(&self, note_id: NoteId) -> StoreResult<Note> {
        self.repo.get(note_id)
    }

    /// Commits a draft onto an existing note.
    pub fn save_note(&mut self, note_id: NoteId, draft: &NoteDraft) -> StoreResult<Note> {
        match self
            .repo
            .update(note_id, &draft.title, &draft.content, &draft.category)
        {
            Ok(note) => {
                info!("event=note_saved module=service status=ok note_id={note_id}");
                Ok(note)
            }
            Err(err) => {
                warn!("event=note_saved module=service status=error note_id={note_id} error={err}");
                Err(err)
            }
        }
    }

    /// Removes a note; unknown ids are ignored.
    pub fn delete_note(&mut self, note_id: NoteId) {
        self.repo.delete(note_id);
        info!("event=note_deleted module=service status=ok note_id={note_id}");
    }

    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list()
    }

    pub fn filter_notes(&self, query: &str, category: &str) -> Vec<Note> {
        self.repo.filter(query, category)
    }

    /// Filtered list projected into cards.
    pub fn list_cards(&self, query: &str, category: &str) -> Vec<NoteCard> {
        let cards: Vec<NoteCard> = self
            .repo
            .filter(query, category)
            .iter()
            .map(NoteCard::from)
            .collect();
        debug!(
            "event=notes_listed module=service status=ok category={category} count={}",
            cards.len()
        );
        cards
    }

    pub fn categories(&self) -> Vec<String> {
        self.repo.categories()
    }
}

/// Derives the card summary from note content.
///
/// Blank content yields `None`; otherwise the first 100 chars are kept verbatim,
/// line breaks included.
pub fn derive_preview(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return None;
    }
    Some(content.chars().take(PREVIEW_MAX_CHARS).collect())
}
