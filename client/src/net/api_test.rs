use super::*;

#[test]
fn api_url_prefixes_proxy_path() {
    assert_eq!(api_url("/users/me"), "/api/users/me");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn model_endpoints_format_expected_paths() {
    assert_eq!(model_status_endpoint("m1"), "/api/models/status/m1");
    assert_eq!(model_download_endpoint("m1"), "/api/models/m1/download");
    assert_eq!(model_list_endpoint(0, MODEL_LIST_LIMIT), "/api/models/?skip=0&limit=100");
}

#[test]
fn error_detail_uses_string_detail() {
    assert_eq!(
        error_detail(r#"{"detail":"Incorrect username or password"}"#, LOGIN_FAILED),
        "Incorrect username or password"
    );
}

#[test]
fn error_detail_joins_validation_entries() {
    let body = r#"{"detail":[{"loc":["body","prompt"],"msg":"field required"},{"msg":"too short"}]}"#;
    assert_eq!(error_detail(body, GENERATION_FAILED), "field required; too short");
}

#[test]
fn error_detail_falls_back_on_unusable_bodies() {
    assert_eq!(error_detail("", LIST_FAILED), "Failed to get models");
    assert_eq!(error_detail("<html>502</html>", LIST_FAILED), "Failed to get models");
    assert_eq!(error_detail(r#"{"detail":""}"#, STATUS_FAILED), "Failed to get model status");
    assert_eq!(error_detail(r#"{"detail":[]}"#, DOWNLOAD_FAILED), "Failed to download model");
    assert_eq!(error_detail(r#"{"error":"nope"}"#, REGISTRATION_FAILED), "Registration failed");
}
