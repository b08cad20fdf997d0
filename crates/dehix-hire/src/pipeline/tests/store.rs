use super::common::*;
use crate::pipeline::domain::{HireRequestId, HireRequestStatus, StatusPatch};
use crate::pipeline::memory::InMemoryHireRequestStore;
use crate::pipeline::store::{HireRequestStore, Precondition, StoreError};

#[test]
fn insert_then_fetch_round_trips() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(&store, "req-1", Vec::new(), Vec::new());

    let fetched = store
        .fetch(&request.id)
        .expect("fetch succeeds")
        .expect("request present");
    assert_eq!(fetched, request);
}

#[test]
fn insert_rejects_duplicate_ids() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(&store, "req-1", Vec::new(), Vec::new());

    match store.insert(request) {
        Err(StoreError::Conflict) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn update_replaces_scalars_and_keeps_lists() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(
        &store,
        "req-1",
        vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)],
        Vec::new(),
    );

    let updated = store.update(&request.id, update()).expect("update applies");
    assert_eq!(updated.description, "Staff engineer for the payments rework");
    assert_eq!(updated.freelancer_required, 1);
    assert_eq!(updated.freelancer_in_lobby.len(), 1, "lists are untouched");
}

#[test]
fn delete_removes_the_document() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(&store, "req-1", Vec::new(), Vec::new());

    store.delete(&request.id).expect("delete succeeds");
    assert!(store.fetch(&request.id).expect("fetch succeeds").is_none());
    match store.delete(&request.id) {
        Err(StoreError::NotFound) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn list_by_business_filters_ownership() {
    let store = InMemoryHireRequestStore::new();
    insert_raw(&store, "req-1", Vec::new(), Vec::new());
    insert_raw(&store, "req-2", Vec::new(), Vec::new());

    let mine = store.list_by_business(BUSINESS).expect("list succeeds");
    assert_eq!(mine.len(), 2);

    let theirs = store
        .list_by_business("biz-other")
        .expect("list succeeds");
    assert!(theirs.is_empty());
}

#[test]
fn set_status_applies_only_present_fields() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(&store, "req-1", Vec::new(), Vec::new());

    let patched = store
        .set_status(
            &request.id,
            StatusPatch {
                status: Some(HireRequestStatus::Approved),
                visible: None,
            },
        )
        .expect("patch applies");
    assert_eq!(patched.status, HireRequestStatus::Approved);
    assert!(patched.visible, "absent visible keeps stored value");

    let patched = store
        .set_status(
            &request.id,
            StatusPatch {
                status: None,
                visible: Some(false),
            },
        )
        .expect("patch applies");
    assert_eq!(patched.status, HireRequestStatus::Approved);
    assert!(!patched.visible);
}

#[test]
fn append_to_lobby_keeps_duplicates() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(&store, "req-1", Vec::new(), Vec::new());

    store
        .append_to_lobby(&request.id, vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)])
        .expect("first append");
    let after = store
        .append_to_lobby(&request.id, vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)])
        .expect("second append");

    assert_eq!(after.freelancer_in_lobby.len(), 2, "appends never dedupe");
}

#[test]
fn invited_append_requires_lobby_membership() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(&store, "req-1", Vec::new(), Vec::new());

    match store.append_invited_if_in_lobby(&request.id, invited_entry(FREELANCER_ONE, TALENT_ONE))
    {
        Err(StoreError::PreconditionFailed(Precondition::InLobby)) => {}
        other => panic!("expected lobby precondition failure, got {other:?}"),
    }

    store
        .append_to_lobby(&request.id, vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)])
        .expect("lobby seed");
    let after = store
        .append_invited_if_in_lobby(&request.id, invited_entry(FREELANCER_ONE, TALENT_ONE))
        .expect("invite append");
    assert_eq!(after.freelancer_invited.len(), 1);
    assert_eq!(after.freelancer_in_lobby.len(), 1, "lobby entry is retained");
}

#[test]
fn invited_append_matches_on_freelancer_only() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(
        &store,
        "req-1",
        vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)],
        Vec::new(),
    );

    let after = store
        .append_invited_if_in_lobby(&request.id, invited_entry(FREELANCER_ONE, TALENT_TWO))
        .expect("talent id is not part of the membership check");
    assert_eq!(after.freelancer_invited[0].dehix_talent_id, TALENT_TWO);
}

#[test]
fn selected_append_requires_invitation() {
    let store = InMemoryHireRequestStore::new();
    let request = insert_raw(
        &store,
        "req-1",
        vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)],
        Vec::new(),
    );

    match store.append_selected_if_invited(&request.id, selection_entry(FREELANCER_ONE, TALENT_ONE))
    {
        Err(StoreError::PreconditionFailed(Precondition::Invited)) => {}
        other => panic!("expected invited precondition failure, got {other:?}"),
    }
}

#[test]
fn rejected_append_reports_the_missing_list() {
    let store = InMemoryHireRequestStore::new();

    // Invited but never in the lobby: staged directly, the managers cannot
    // produce this state.
    let request = insert_raw(
        &store,
        "req-1",
        Vec::new(),
        vec![invited_entry(FREELANCER_ONE, TALENT_ONE)],
    );
    match store.append_rejected_if_in_lobby_and_invited(
        &request.id,
        selection_entry(FREELANCER_ONE, TALENT_ONE),
    ) {
        Err(StoreError::PreconditionFailed(Precondition::InLobby)) => {}
        other => panic!("expected lobby precondition failure, got {other:?}"),
    }

    // In the lobby but never invited.
    let request = insert_raw(
        &store,
        "req-2",
        vec![lobby_entry(FREELANCER_ONE, TALENT_ONE)],
        Vec::new(),
    );
    match store.append_rejected_if_in_lobby_and_invited(
        &request.id,
        selection_entry(FREELANCER_ONE, TALENT_ONE),
    ) {
        Err(StoreError::PreconditionFailed(Precondition::Invited)) => {}
        other => panic!("expected invited precondition failure, got {other:?}"),
    }
}

#[test]
fn conditional_appends_miss_unknown_requests() {
    let store = InMemoryHireRequestStore::new();
    let id = HireRequestId("missing".to_string());

    match store.append_invited_if_in_lobby(&id, invited_entry(FREELANCER_ONE, TALENT_ONE)) {
        Err(StoreError::NotFound) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}
