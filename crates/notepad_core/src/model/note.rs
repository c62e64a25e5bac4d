//! Note record and draft.
//!
//! # Responsibility
//! - Provide the single domain entity held by the store.
//! - Provide the caller-owned draft used while a note is being edited.
//!
//! # Invariants
//! - `id` is generated once and never changes.
//! - A note always carries exactly one free-form category label.
//! - `ALL_CATEGORY` doubles as the default label and the "no filter" selector.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Category selector that disables category filtering.
///
/// Also the category assigned to freshly created notes.
pub const ALL_CATEGORY: &str = "All";

/// Title given to notes created from the add action.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Validation failure for caller-supplied note identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    NilId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "note id must not be nil"),
        }
    }
}

impl Error for NoteValidationError {}

/// A titled, categorized block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
}

impl Note {
    /// Creates a blank note with a generated id.
    ///
    /// Defaults: `title = "Untitled"`, empty content, category `"All"`.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            category: ALL_CATEGORY.to_string(),
        }
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used by import paths where identity already exists.
    ///
    /// # Errors
    /// - `NoteValidationError::NilId` when `id` is the nil uuid.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        let note = Self {
            id,
            title: title.into(),
            content: content.into(),
            category: category.into(),
        };
        note.validate()?;
        Ok(note)
    }

    /// Checks identity invariants for notes arriving from outside the store.
    ///
    /// # Errors
    /// - `NoteValidationError::NilId` when `id` is the nil uuid.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.is_nil() {
            return Err(NoteValidationError::NilId);
        }
        Ok(())
    }

    /// Creates a note with a generated id and the given fields.
    pub fn with_fields(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    /// Copies the editable fields into a detached draft.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
        }
    }

    /// Overwrites the editable fields with trimmed draft values.
    ///
    /// Crate-private so that only the store can commit edits.
    pub(crate) fn apply_trimmed(&mut self, title: &str, content: &str, category: &str) {
        self.title = title.trim().to_string();
        self.content = content.trim().to_string();
        self.category = category.trim().to_string();
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

/// In-progress edits held by the caller until saved.
///
/// Values are stored untrimmed; trimming happens on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}
