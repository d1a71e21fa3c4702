use super::*;
use crate::test_helpers::{product, sample_catalog};
use crate::validation::Field;

fn loaded() -> CatalogState {
    let mut state = CatalogState::default();
    state.finish_reload(Ok(sample_catalog())).unwrap();
    state
}

fn valid_draft() -> ProductDraft {
    ProductDraft {
        name: "Headset".to_owned(),
        description: "Som surround 7.1".to_owned(),
        price: 249.9,
        category_id: "audio".to_owned(),
        stock_quantity: 8,
    }
}

// =============================================================
// Reload
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = CatalogState::default();
    assert!(state.products.is_empty());
    assert_eq!(state.list, ListStatus::Idle);
    assert_eq!(state.session, EditSession::Closed);
    assert_eq!(state.view, ViewMode::All);
}

#[test]
fn begin_reload_marks_loading() {
    let mut state = CatalogState::default();
    state.begin_reload();
    assert!(state.is_loading());
}

#[test]
fn finish_reload_replaces_list_wholesale() {
    let mut state = loaded();
    state.begin_reload();
    let count = state.finish_reload(Ok(vec![product("9", "Webcam", "video", 199.0, 2)])).unwrap();
    assert_eq!(count, 1);
    assert_eq!(state.products[0].id, "9");
    assert_eq!(state.list, ListStatus::Idle);
}

#[test]
fn failed_reload_keeps_previous_list_and_reports() {
    let mut state = loaded();
    state.begin_reload();
    let err = state
        .finish_reload(Err(BackendError::Network("refused".to_owned())))
        .unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));
    assert_eq!(state.products.len(), 4);
    assert_eq!(state.list, ListStatus::Error("could not reach server".to_owned()));
    assert_eq!(state.notice, Some(Notice::Error("could not reach server".to_owned())));
}

#[test]
fn successful_reload_clears_error_notice() {
    let mut state = loaded();
    let _ = state.finish_reload(Err(BackendError::Network("refused".to_owned())));
    state.finish_reload(Ok(sample_catalog())).unwrap();
    assert_eq!(state.list, ListStatus::Idle);
    assert_eq!(state.notice, None);
}

#[test]
fn successful_reload_keeps_success_notice() {
    let mut state = loaded();
    state.open_create();
    let request = state.begin_save(&valid_draft()).unwrap();
    state.finish_save(&request, Ok(())).unwrap();
    state.finish_reload(Ok(sample_catalog())).unwrap();
    assert_eq!(state.notice, Some(Notice::Success("product created".to_owned())));
}

#[test]
fn later_reload_response_wins() {
    let mut state = CatalogState::default();
    state.begin_reload();
    state.begin_reload();
    state.finish_reload(Ok(vec![product("a", "Older", "c", 1.0, 1)])).unwrap();
    state.finish_reload(Ok(vec![product("b", "Newer", "c", 1.0, 1)])).unwrap();
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.products[0].id, "b");
}

#[test]
fn reload_drops_duplicate_ids() {
    let mut state = CatalogState::default();
    state
        .finish_reload(Ok(vec![
            product("1", "First", "c", 1.0, 1),
            product("1", "Second", "c", 1.0, 1),
            product("2", "Other", "c", 1.0, 1),
        ]))
        .unwrap();
    assert_eq!(state.products.len(), 2);
    assert_eq!(state.products[0].name, "First");
}

// =============================================================
// View
// =============================================================

#[test]
fn search_term_drives_filtered_view() {
    let mut state = loaded();
    state.set_search_term("mouse");
    let shown: Vec<&str> = state.filtered().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(shown, vec!["2"]);
    state.set_search_term("");
    assert_eq!(state.filtered().len(), 4);
}

#[test]
fn low_stock_view_is_independent_of_search_text() {
    let mut state = loaded();
    state.set_view(ViewMode::LowStockOnly);
    assert_eq!(state.filtered().len(), 2);
    state.set_search_term("low stock");
    assert_eq!(state.view, ViewMode::Search("low stock".to_owned()));
    assert!(state.filtered().is_empty());
}

// =============================================================
// Edit session
// =============================================================

#[test]
fn open_create_from_closed() {
    let mut state = loaded();
    assert!(state.open_create());
    assert_eq!(state.session, EditSession::Creating);
    assert!(!state.open_create());
}

#[test]
fn open_edit_carries_target_product() {
    let mut state = loaded();
    assert!(state.open_edit("3").unwrap());
    match &state.session {
        EditSession::Editing(p) => assert_eq!(p.name, "Monitor 27"),
        other => panic!("unexpected session {other:?}"),
    }
    assert_eq!(state.session_draft().name, "Monitor 27");
}

#[test]
fn open_edit_unknown_product_fails() {
    let mut state = loaded();
    assert_eq!(state.open_edit("nope"), Err(CatalogError::UnknownProduct("nope".to_owned())));
    assert_eq!(state.session, EditSession::Closed);
}

#[test]
fn open_edit_while_creating_is_ignored() {
    let mut state = loaded();
    state.open_create();
    assert!(!state.open_edit("1").unwrap());
    assert_eq!(state.session, EditSession::Creating);
}

#[test]
fn close_session_clears_field_errors() {
    let mut state = loaded();
    state.open_create();
    let _ = state.begin_save(&ProductDraft::default());
    assert!(!state.field_errors.is_empty());
    state.close_session();
    assert_eq!(state.session, EditSession::Closed);
    assert!(state.field_errors.is_empty());
}

#[test]
fn create_draft_is_blank() {
    let mut state = loaded();
    state.open_create();
    assert_eq!(state.session_draft(), ProductDraft::default());
}

// =============================================================
// Save
// =============================================================

#[test]
fn begin_save_without_session_fails() {
    let mut state = loaded();
    assert_eq!(state.begin_save(&valid_draft()), Err(CatalogError::SessionClosed));
}

#[test]
fn begin_save_while_creating_builds_create_request() {
    let mut state = loaded();
    state.open_create();
    match state.begin_save(&valid_draft()).unwrap() {
        SaveRequest::Create(input) => assert_eq!(input.name(), "Headset"),
        other @ SaveRequest::Update { .. } => panic!("unexpected request {other:?}"),
    }
}

#[test]
fn begin_save_while_editing_targets_product_id() {
    let mut state = loaded();
    state.open_edit("2").unwrap();
    match state.begin_save(&valid_draft()).unwrap() {
        SaveRequest::Update { id, .. } => assert_eq!(id, "2"),
        other @ SaveRequest::Create(_) => panic!("unexpected request {other:?}"),
    }
}

#[test]
fn invalid_draft_keeps_session_open_with_field_errors() {
    let mut state = loaded();
    state.open_create();
    let mut draft = valid_draft();
    draft.price = 0.0;
    let err = state.begin_save(&draft).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(state.session, EditSession::Creating);
    assert!(state.field_errors.message_for(Field::Price).is_some());
}

#[test]
fn successful_save_closes_session() {
    let mut state = loaded();
    state.open_edit("1").unwrap();
    let request = state.begin_save(&valid_draft()).unwrap();
    state.finish_save(&request, Ok(())).unwrap();
    assert_eq!(state.session, EditSession::Closed);
    assert_eq!(state.notice, Some(Notice::Success("product updated".to_owned())));
}

#[test]
fn rejected_save_keeps_session_open_and_shows_body() {
    let mut state = loaded();
    state.open_create();
    let request = state.begin_save(&valid_draft()).unwrap();
    let result =
        state.finish_save(&request, Err(BackendError::Rejected { status: 409, body: "duplicate name".to_owned() }));
    assert!(result.is_err());
    assert_eq!(state.session, EditSession::Creating);
    assert_eq!(state.notice, Some(Notice::Error("duplicate name".to_owned())));
}

#[test]
fn update_finishing_after_cancel_leaves_new_form_open() {
    let mut state = loaded();
    state.open_edit("1").unwrap();
    let request = state.begin_save(&valid_draft()).unwrap();

    state.close_session();
    assert!(state.open_create());
    state.finish_save(&request, Ok(())).unwrap();

    assert_eq!(state.session, EditSession::Creating);
    assert_eq!(state.notice, Some(Notice::Success("product updated".to_owned())));
}

#[test]
fn update_finishing_while_other_product_is_edited_keeps_that_form() {
    let mut state = loaded();
    state.open_edit("1").unwrap();
    let request = state.begin_save(&valid_draft()).unwrap();

    state.close_session();
    state.open_edit("2").unwrap();
    state.finish_save(&request, Ok(())).unwrap();

    assert!(matches!(&state.session, EditSession::Editing(p) if p.id == "2"));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn request_then_cancel_delete_leaves_list() {
    let mut state = loaded();
    assert_eq!(state.request_delete("4").unwrap().name, "Cabo HDMI");
    assert_eq!(state.pending_delete_product().map(|p| p.id.as_str()), Some("4"));
    state.cancel_delete();
    assert!(state.pending_delete.is_none());
    assert_eq!(state.products.len(), 4);
}

#[test]
fn confirm_delete_takes_pending_id() {
    let mut state = loaded();
    state.request_delete("4").unwrap();
    assert_eq!(state.confirm_delete().as_deref(), Some("4"));
    assert!(state.confirm_delete().is_none());
}

#[test]
fn request_delete_unknown_product_fails() {
    let mut state = loaded();
    assert!(state.request_delete("missing").is_err());
    assert!(state.pending_delete.is_none());
}

#[test]
fn failed_delete_reports_and_keeps_list() {
    let mut state = loaded();
    let result = state.finish_delete(Err(BackendError::Rejected { status: 403, body: "forbidden".to_owned() }));
    assert!(result.is_err());
    assert_eq!(state.products.len(), 4);
    assert_eq!(state.notice, Some(Notice::Error("forbidden".to_owned())));
}

#[test]
fn reload_clears_pending_delete_for_vanished_product() {
    let mut state = loaded();
    state.request_delete("4").unwrap();
    state.finish_reload(Ok(vec![product("1", "Only", "c", 1.0, 1)])).unwrap();
    assert!(state.pending_delete.is_none());
}
