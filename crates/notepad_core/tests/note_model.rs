use notepad_core::{Note, NoteValidationError, ALL_CATEGORY, DEFAULT_TITLE};
use uuid::Uuid;

#[test]
fn note_new_sets_defaults() {
    let note = Note::new();

    assert!(!note.id.is_nil());
    assert_eq!(note.title, DEFAULT_TITLE);
    assert!(note.content.is_empty());
    assert_eq!(note.category, ALL_CATEGORY);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Note::with_id(Uuid::nil(), "t", "c", "Work").unwrap_err();
    assert_eq!(err, NoteValidationError::NilId);
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note::with_id(note_id, "Read docs", "Kotlin DSL", "Work").unwrap();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["title"], "Read docs");
    assert_eq!(json["content"], "Kotlin DSL");
    assert_eq!(json["category"], "Work");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
