use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8000", "/api/analyze"), "http://localhost:8000/api/analyze");
    assert_eq!(endpoint("https://dig.test/", "/api/chat"), "https://dig.test/api/chat");
}

#[test]
fn analysis_request_uses_fixed_file_budget() {
    let req = analysis_request("https://github.com/facebook/react");
    assert_eq!(req.repo_url, "https://github.com/facebook/react");
    assert_eq!(req.max_files, Some(15));
    assert_eq!(req.file_extensions, None);
}

#[test]
fn chat_request_carries_question_without_context() {
    let req = chat_request("https://github.com/a/b", "Where is auth?");
    assert_eq!(req.repo_url, "https://github.com/a/b");
    assert_eq!(req.question, "Where is auth?");
    assert!(req.context.is_none());
}

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_reads_string_detail() {
    let body = r#"{"detail": "Analysis failed: repository not found"}"#;
    assert_eq!(error_detail(body), Some("Analysis failed: repository not found".to_owned()));
}

#[test]
fn error_detail_reads_first_validation_message() {
    let body = r#"{"detail": [{"loc": ["body", "repo_url"], "msg": "field required", "type": "missing"}]}"#;
    assert_eq!(error_detail(body), Some("field required".to_owned()));
}

#[test]
fn error_detail_rejects_other_shapes() {
    assert_eq!(error_detail("Internal Server Error"), None);
    assert_eq!(error_detail(r#"{"error": "boom"}"#), None);
    assert_eq!(error_detail(r#"{"detail": 42}"#), None);
    assert_eq!(error_detail(r#"{"detail": []}"#), None);
    assert_eq!(error_detail(r#"{"detail": "   "}"#), None);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::Status { status: 400, detail: Some("Invalid GitHub URL".to_owned()) };
    assert_eq!(err.user_message(), "Invalid GitHub URL");
}

#[test]
fn user_message_falls_back_to_generic_text() {
    let cases = [
        ApiError::Status { status: 502, detail: None },
        ApiError::Network("offline".to_owned()),
        ApiError::Decode("missing field".to_owned()),
        ApiError::Unavailable,
    ];
    for err in cases {
        assert_eq!(err.user_message(), ANALYZE_FALLBACK_MESSAGE);
    }
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.to_string(), "backend returned status 500");
}
