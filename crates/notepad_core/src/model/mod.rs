//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its editable draft shape.
//! - Own the category sentinel and default field values.
//!
//! # Invariants
//! - Every note is identified by a stable, non-nil `NoteId`.
//! - Notes are mutated only through the store, never by presentation code.

pub mod note;
