//! Text + category filter over in-memory notes.
//!
//! # Responsibility
//! - Match notes by case-insensitive substring on title or content.
//! - Restrict by exact category unless the `"All"` selector is active.
//!
//! # Invariants
//! - Filtering never mutates or reorders its input.
//! - An empty query matches every note.
//! - Case folding compares one `char` at a time, so `"İ"` matches `"i"`.

use crate::model::note::{Note, ALL_CATEGORY};

/// Search options for the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Raw search text, used as-is.
    pub query: String,
    /// Exact category label, or `"All"` for no restriction.
    pub category: String,
}

impl NoteFilter {
    /// Creates a filter from query text and category selector.
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Filter that matches every note.
    pub fn all() -> Self {
        Self::new("", ALL_CATEGORY)
    }

    /// Returns whether `note` is visible under this filter.
    pub fn matches(&self, note: &Note) -> bool {
        self.matcher().matches(note)
    }

    /// Returns matching notes in input order.
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        let matcher = self.matcher();
        notes
            .iter()
            .filter(|note| matcher.matches(note))
            .cloned()
            .collect()
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.query.chars().collect(),
            category: self.category.as_str(),
        }
    }
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Decoded view of a filter, reused across one pass.
struct Matcher<'a> {
    needle: Vec<char>,
    category: &'a str,
}

impl Matcher<'_> {
    fn matches(&self, note: &Note) -> bool {
        self.matches_text(note) && self.matches_category(note)
    }

    fn matches_text(&self, note: &Note) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        contains_ignore_case(&note.title, &self.needle)
            || contains_ignore_case(&note.content, &self.needle)
    }

    fn matches_category(&self, note: &Note) -> bool {
        self.category == ALL_CATEGORY || note.category == self.category
    }
}

/// Substring test with per-char case folding; `needle` must be non-empty.
fn contains_ignore_case(haystack: &str, needle: &[char]) -> bool {
    let chars: Vec<char> = haystack.chars().collect();
    chars.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(left, right)| chars_eq_ignore_case(*left, *right))
    })
}

fn chars_eq_ignore_case(left: char, right: char) -> bool {
    if left == right {
        return true;
    }
    let (left, right) = (simple_upper(left), simple_upper(right));
    left == right || simple_lower(left) == simple_lower(right)
}

/// Single-char uppercase mapping; multi-char expansions (`ß` -> `SS`) keep the input.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

/// Single-char lowercase mapping; `İ` maps to `i` without the combining dot.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
