use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn analyze_request_omits_unset_optionals() {
    let req = AnalyzeRequest {
        repo_url: "https://github.com/a/b".to_owned(),
        max_files: None,
        file_extensions: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "repo_url": "https://github.com/a/b" }));
}

#[test]
fn analyze_request_serializes_set_optionals() {
    let req = AnalyzeRequest {
        repo_url: "https://github.com/a/b".to_owned(),
        max_files: Some(15),
        file_extensions: Some(vec![".rs".to_owned()]),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["max_files"], 15);
    assert_eq!(json["file_extensions"], serde_json::json!([".rs"]));
}

#[test]
fn chat_request_omits_missing_context() {
    let req = ChatRequest {
        repo_url: "https://github.com/a/b".to_owned(),
        question: "where is main?".to_owned(),
        context: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("context").is_none());
    assert_eq!(json["question"], "where is main?");
}

// =============================================================
// AnalyzeResponse
// =============================================================

#[test]
fn analyze_response_decodes_full_payload() {
    let body = r#"{
        "repo_name": "react",
        "total_files": 15,
        "mermaid_graph": "graph TD\nA-->B",
        "summary": "UI library",
        "files_analyzed": ["src/a.js", "src/b.js"],
        "tech_stack": {"languages": ["JavaScript"], "frameworks": ["React"], "tools": ["npm"]},
        "tech_stack_analysis": "Built with JavaScript.",
        "repo_summary": "react is a software repository."
    }"#;
    let resp: AnalyzeResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.repo_name, "react");
    assert_eq!(resp.total_files, 15);
    assert_eq!(resp.files_analyzed.len(), 2);
    assert_eq!(resp.visible_tech_stack().map(|s| s.frameworks.clone()), Some(vec!["React".to_owned()]));
    assert_eq!(resp.tech_commentary(), Some("Built with JavaScript."));
    assert_eq!(resp.overview(), Some("react is a software repository."));
}

#[test]
fn analyze_response_tolerates_missing_and_null_sections() {
    let body = r#"{
        "repo_name": "tiny",
        "total_files": 1,
        "mermaid_graph": "graph TD",
        "summary": "",
        "files_analyzed": null,
        "tech_stack": null
    }"#;
    let resp: AnalyzeResponse = serde_json::from_str(body).unwrap();
    assert!(resp.files_analyzed.is_empty());
    assert!(resp.tech_stack.is_none());
    assert!(resp.visible_tech_stack().is_none());
    assert!(resp.overview().is_none());
    assert!(resp.tech_commentary().is_none());
}

#[test]
fn analyze_response_hides_blank_text_sections() {
    let body = r#"{
        "repo_name": "tiny",
        "total_files": 1,
        "mermaid_graph": "graph TD",
        "summary": "s",
        "files_analyzed": [],
        "tech_stack_analysis": "   ",
        "repo_summary": "\n"
    }"#;
    let resp: AnalyzeResponse = serde_json::from_str(body).unwrap();
    assert!(resp.overview().is_none());
    assert!(resp.tech_commentary().is_none());
}

#[test]
fn analyze_response_hides_tech_stack_with_all_categories_empty() {
    let body = r#"{
        "repo_name": "tiny",
        "total_files": 1,
        "mermaid_graph": "graph TD",
        "summary": "s",
        "tech_stack": {"languages": [], "frameworks": null}
    }"#;
    let resp: AnalyzeResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.tech_stack, Some(TechStack::default()));
    assert!(resp.visible_tech_stack().is_none());
}

// =============================================================
// TechStack
// =============================================================

#[test]
fn tech_stack_categories_keep_display_order() {
    let stack = TechStack {
        languages: vec!["Rust".to_owned()],
        frameworks: vec![],
        tools: vec!["Docker".to_owned(), "Make".to_owned()],
    };
    let labels: Vec<_> = stack.categories().iter().map(|(label, items)| (*label, items.len())).collect();
    assert_eq!(labels, vec![("Languages", 1), ("Frameworks", 0), ("Tools", 2)]);
    assert!(!stack.is_empty());
}

// =============================================================
// ChatResponse
// =============================================================

#[test]
fn chat_response_defaults_missing_lists() {
    let resp: ChatResponse = serde_json::from_str(r#"{"answer": "It lives in main.rs"}"#).unwrap();
    assert_eq!(resp.answer, "It lives in main.rs");
    assert!(resp.relevant_files.is_empty());
    assert!(resp.code_snippets.is_empty());
}

#[test]
fn chat_response_decodes_snippets_with_numeric_lines() {
    let body = r#"{
        "answer": "See below",
        "relevant_files": ["src/auth.py"],
        "code_snippets": [
            {"file": "src/auth.py", "lines": "10-20", "snippet": "def login(): ...", "explanation": "entry"},
            {"file": "src/db.py", "lines": 7, "snippet": "conn = open()"}
        ]
    }"#;
    let resp: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.relevant_files, vec!["src/auth.py".to_owned()]);
    assert_eq!(resp.code_snippets.len(), 2);
    assert_eq!(resp.code_snippets[0].lines, "10-20");
    assert_eq!(resp.code_snippets[1].lines, "7");
    assert_eq!(resp.code_snippets[1].explanation, "");
}
