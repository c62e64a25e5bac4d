//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Model the edit-session flow without binding to a UI toolkit.

pub mod note_service;
pub mod session;
