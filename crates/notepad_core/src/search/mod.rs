//! Live list filtering.
//!
//! # Responsibility
//! - Derive the visible note list from search text and category selector.
//! - Keep filtering pure so callers can re-run it on every keystroke.

pub mod filter;
