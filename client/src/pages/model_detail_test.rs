use super::*;

fn model(id: &str) -> BBModel {
    BBModel {
        id: id.to_owned(),
        name: format!("Model {id}"),
        prompt: "a blocky robot".to_owned(),
        created_at: String::new(),
        user_id: "u1".to_owned(),
        status: ModelStatus::Completed,
        preview_url: None,
    }
}

#[test]
fn find_model_picks_matching_id() {
    let found = find_model(vec![model("a"), model("b")], "b").unwrap();
    assert_eq!(found.id, "b");
}

#[test]
fn find_model_reports_missing_id() {
    assert_eq!(find_model(vec![model("a")], "z"), Err("Model not found".to_owned()));
    assert_eq!(find_model(Vec::new(), "a"), Err("Model not found".to_owned()));
}

#[test]
fn preview_document_reads_cubes() {
    let bytes = br#"{"name":"robot","elements":[{"type":"cube","from":[0,0,0],"to":[1,1,1]}]}"#;
    let file = preview_document(bytes).unwrap();
    assert_eq!(file.cubes().count(), 1);
}

#[test]
fn preview_document_ignores_unparseable_bytes() {
    assert_eq!(preview_document(b"not json"), None);
}

#[test]
fn responses_for_the_current_route_are_kept() {
    assert!(still_requested(Some("m1".to_owned()), "m1"));
}

#[test]
fn responses_for_an_earlier_route_are_dropped() {
    assert!(!still_requested(Some("m2".to_owned()), "m1"));
    assert!(!still_requested(None, "m1"));
}
