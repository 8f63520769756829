use super::*;

const REPO: &str = "https://github.com/facebook/react";

fn answer(text: &str) -> ChatResponse {
    ChatResponse {
        answer: text.to_owned(),
        relevant_files: vec!["packages/react/index.js".to_owned()],
        code_snippets: vec![CodeSnippet {
            file: "packages/react/index.js".to_owned(),
            lines: "1-5".to_owned(),
            snippet: "export * from './src/React';".to_owned(),
            explanation: "Public entry point".to_owned(),
        }],
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    assert_eq!(state.epoch, 0);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_user_turn_immediately() {
    let mut state = ChatState::default();
    let pending = state.begin_send("Where is the auth logic?", REPO).unwrap();
    assert_eq!(state.messages, vec![ChatMessage::user("Where is the auth logic?")]);
    assert!(state.loading);
    assert_eq!(pending.epoch, 0);
    assert_eq!(pending.request.repo_url, REPO);
    assert_eq!(pending.request.question, "Where is the auth logic?");
}

#[test]
fn begin_send_ignores_blank_input() {
    let mut state = ChatState::default();
    assert!(state.begin_send("   ", REPO).is_none());
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_ignores_input_while_waiting() {
    let mut state = ChatState::default();
    state.begin_send("first", REPO);
    assert!(state.begin_send("second", REPO).is_none());
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_success_appends_exactly_one_assistant_turn() {
    let mut state = ChatState::default();
    let pending = state.begin_send("What does index.js do?", REPO).unwrap();
    assert!(state.finish(pending.epoch, Ok(answer("It re-exports React."))));

    assert_eq!(state.messages.len(), 2);
    let reply = &state.messages[1];
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, "It re-exports React.");
    assert_eq!(reply.relevant_files, vec!["packages/react/index.js".to_owned()]);
    assert_eq!(reply.code_snippets.len(), 1);
    assert!(!state.loading);
}

#[test]
fn finish_failure_appends_fallback_turn() {
    let mut state = ChatState::default();
    let pending = state.begin_send("Any bugs?", REPO).unwrap();
    assert!(state.finish(pending.epoch, Err(ApiError::Status { status: 500, detail: Some("Chat failed".to_owned()) })));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1], ChatMessage::fallback());
    assert_eq!(state.messages[1].content, CHAT_FALLBACK_MESSAGE);
    assert!(!state.loading);
}

#[test]
fn transcript_keeps_turn_order() {
    let mut state = ChatState::default();
    let first = state.begin_send("one", REPO).unwrap();
    state.finish(first.epoch, Ok(answer("1")));
    let second = state.begin_send("two", REPO).unwrap();
    state.finish(second.epoch, Err(ApiError::Network("offline".to_owned())));

    let roles: Vec<_> = state.messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
    assert_eq!(state.messages[2].content, "two");
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_empties_transcript_and_bumps_epoch() {
    let mut state = ChatState::default();
    state.begin_send("hello", REPO);
    state.clear();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    assert_eq!(state.epoch, 1);
}

#[test]
fn finish_after_clear_is_dropped() {
    let mut state = ChatState::default();
    let pending = state.begin_send("hello", REPO).unwrap();
    state.clear();
    assert!(!state.finish(pending.epoch, Ok(answer("late"))));
    assert!(state.messages.is_empty());
}
