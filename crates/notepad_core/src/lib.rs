//! Core domain logic for the notepad.
//! This crate is the single source of truth for note invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_with_config, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::note::{
    Note, NoteDraft, NoteId, NoteValidationError, ALL_CATEGORY, DEFAULT_TITLE,
};
pub use repo::note_store::{NoteRepository, NoteStore, StoreError, StoreResult};
pub use search::filter::NoteFilter;
pub use service::note_service::{derive_preview, NoteCard, NoteService};
pub use service::session::{EditState, NotepadSession, SessionError, SessionOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
