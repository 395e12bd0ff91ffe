use super::*;
use crate::net::types::ModelStatus;

fn model(id: &str, name: &str, prompt: &str) -> BBModel {
    BBModel {
        id: id.to_owned(),
        name: name.to_owned(),
        prompt: prompt.to_owned(),
        created_at: "2024-05-01T10:00:00".to_owned(),
        user_id: "u1".to_owned(),
        status: ModelStatus::Completed,
        preview_url: None,
    }
}

fn numbered(count: usize) -> Vec<BBModel> {
    (1..=count)
        .map(|i| model(&format!("m{i}"), &format!("Model {i}"), "a blocky thing"))
        .collect()
}

fn loaded(models: Vec<BBModel>) -> DashboardState {
    let mut state = DashboardState::default();
    state.set_models(models);
    state
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn blank_query_matches_everything() {
    let mut state = loaded(numbered(3));
    state.set_query("   ".to_owned());
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn query_matches_name_or_prompt_case_insensitively() {
    let mut state = loaded(vec![
        model("a", "Robot", "steel walker"),
        model("b", "Cat", "a ROBOTIC cat"),
        model("c", "Tree", "oak"),
    ]);
    state.set_query("robot".to_owned());
    let ids: Vec<&str> = state.filtered().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn query_change_resets_page() {
    let mut state = loaded(numbered(20));
    state.set_page(3);
    assert_eq!(state.page, 3);
    state.set_query("model".to_owned());
    assert_eq!(state.page, 1);
}

#[test]
fn unchanged_query_keeps_page() {
    let mut state = loaded(numbered(20));
    state.set_page(2);
    state.set_query(String::new());
    assert_eq!(state.page, 2);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_is_ceiling_of_filtered_over_six() {
    assert_eq!(loaded(Vec::new()).page_count(), 0);
    assert_eq!(loaded(numbered(6)).page_count(), 1);
    assert_eq!(loaded(numbered(7)).page_count(), 2);
    assert_eq!(loaded(numbered(13)).page_count(), 3);
}

#[test]
fn page_items_slice_in_order() {
    let mut state = loaded(numbered(13));
    assert_eq!(state.page_items().len(), 6);
    assert_eq!(state.page_items()[0].id, "m1");
    state.set_page(3);
    let ids: Vec<String> = state.page_items().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["m13".to_owned()]);
}

#[test]
fn set_page_clamps_into_range() {
    let mut state = loaded(numbered(7));
    state.set_page(9);
    assert_eq!(state.page, 2);
    state.set_page(0);
    assert_eq!(state.page, 1);
}

// =============================================================
// Deletion
// =============================================================

#[test]
fn delete_requires_confirmation() {
    let mut state = loaded(numbered(2));
    state.request_delete("m1".to_owned());
    state.cancel_delete();
    state.confirm_delete();
    assert_eq!(state.models.len(), 2);

    state.request_delete("m1".to_owned());
    state.confirm_delete();
    assert_eq!(state.models.len(), 1);
    assert_eq!(state.models[0].id, "m2");
    assert_eq!(state.pending_delete, None);
}

#[test]
fn deleting_last_item_on_last_page_clamps_page() {
    let mut state = loaded(numbered(7));
    state.set_page(2);
    state.request_delete("m7".to_owned());
    state.confirm_delete();
    assert_eq!(state.page, 1);
    assert_eq!(state.page_items().len(), 6);
}

// =============================================================
// Empty states
// =============================================================

#[test]
fn empty_state_distinguishes_no_models_from_no_matches() {
    let state = loaded(Vec::new());
    assert_eq!(state.empty_state(), Some(EmptyState::NoModels));

    let mut state = loaded(numbered(2));
    assert_eq!(state.empty_state(), None);
    state.set_query("zebra".to_owned());
    assert_eq!(state.empty_state(), Some(EmptyState::NoMatches));
}

#[test]
fn no_empty_state_while_loading() {
    assert_eq!(DashboardState::default().empty_state(), None);
}

#[test]
fn error_stops_loading() {
    let mut state = DashboardState::default();
    state.set_error("Failed to get models".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to get models"));
}
