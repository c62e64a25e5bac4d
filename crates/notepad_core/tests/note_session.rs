use notepad_core::{
    EditState, NoteCard, NoteService, NoteStore, NotepadSession, SessionError,
    SessionOutcome, StoreError, DEFAULT_TITLE,
};
use uuid::Uuid;

fn seeded() -> (NoteService<NoteStore>, NotepadSession) {
    (
        NoteService::new(NoteStore::with_seed_notes()),
        NotepadSession::new(),
    )
}

#[test]
fn add_note_opens_new_note_at_top() {
    let (mut service, mut session) = seeded();

    let created = session.add_note(&mut service);
    assert_eq!(session.editing_id(), Some(created.id));
    assert_eq!(session.draft().unwrap().title, DEFAULT_TITLE);
    assert_eq!(session.visible(&service)[0].id, created.id);
}

#[test]
fn save_commits_trimmed_draft_and_returns_to_browsing() {
    let (mut service, mut session) = seeded();
    let target = service.list_notes()[1].clone();

    session.open(&service, target.id).unwrap();
    let draft = session.draft_mut().unwrap();
    draft.title = "  Read more docs ".to_string();
    draft.category = " Work\n".to_string();

    let outcome = session.save(&mut service).unwrap();
    let SessionOutcome::Saved(saved) = outcome else {
        panic!("expected saved outcome");
    };
    assert_eq!(saved.title, "Read more docs");
    assert_eq!(saved.category, "Work");
    assert_eq!(service.get_note(target.id).unwrap(), saved);
    assert_eq!(session.state(), &EditState::Browsing);
}

#[test]
fn back_discards_draft_without_touching_store() {
    let (mut service, mut session) = seeded();
    let before = service.list_notes();
    let target = before[0].clone();

    session.open(&service, target.id).unwrap();
    session.draft_mut().unwrap().content = "scribbles".to_string();

    assert_eq!(session.back(), Some(SessionOutcome::Discarded(target.id)));
    assert_eq!(service.list_notes(), before);
    assert_eq!(session.back(), None);
    assert!(session.save(&mut service).is_err());
}

#[test]
fn delete_removes_open_note() {
    let (mut service, mut session) = seeded();
    let target = service.list_notes()[2].clone();

    session.open(&service, target.id).unwrap();
    assert_eq!(
        session.delete(&mut service).unwrap(),
        SessionOutcome::Deleted(target.id)
    );
    assert_eq!(
        service.get_note(target.id).unwrap_err(),
        StoreError::NotFound(target.id)
    );
    assert_eq!(service.list_notes().len(), 2);
}

#[test]
fn open_missing_note_stays_browsing() {
    let (service, mut session) = seeded();
    let missing = Uuid::new_v4();

    assert_eq!(
        session.open(&service, missing).unwrap_err(),
        StoreError::NotFound(missing)
    );
    assert_eq!(session.state(), &EditState::Browsing);
}

#[test]
fn save_after_concurrent_delete_reports_not_found() {
    let (mut service, mut session) = seeded();
    let target = service.list_notes()[0].clone();

    session.open(&service, target.id).unwrap();
    service.delete_note(target.id);

    let err = session.save(&mut service).unwrap_err();
    assert_eq!(err, SessionError::Store(StoreError::NotFound(target.id)));
    assert_eq!(session.editing_id(), None);
}

#[test]
fn save_or_delete_without_open_note_is_rejected() {
    let (mut service, mut session) = seeded();
    assert_eq!(session.save(&mut service), Err(SessionError::NotEditing));
    assert_eq!(session.delete(&mut service), Err(SessionError::NotEditing));
}

#[test]
fn query_and_category_drive_visible_cards() {
    let (service, mut session) = seeded();

    session.set_category("Personal");
    let titles: Vec<_> = session
        .visible_cards(&service)
        .into_iter()
        .map(|card: NoteCard| card.title)
        .collect();
    assert_eq!(titles, ["Buy groceries", "Plan vacation"]);

    session.set_query("EGGS");
    let cards = session.visible_cards(&service);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].preview.as_deref(), Some("Milk, Eggs, Bread"));
    assert_eq!(cards[0].category, "Personal");
}

#[test]
fn new_note_card_has_no_preview_and_categories_skip_sentinel() {
    let (mut service, mut session) = seeded();
    session.add_note(&mut service);
    session.back();

    let cards = session.visible_cards(&service);
    assert_eq!(cards[0].preview, None);
    assert_eq!(service.categories(), ["Personal", "Work"]);
    assert_eq!(service.repo().len(), 4);
}
