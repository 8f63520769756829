use leptos::reactive::owner::Owner;

use super::*;
use crate::net::types::ChatResponse;

#[test]
fn transcript_memo_ignores_loading_toggles() {
    let owner = Owner::new();
    owner.set();

    let chat = RwSignal::new(ChatState::default());
    let transcript = transcript_memo(chat);
    let rebuilds = Memo::new(move |prev: Option<&usize>| {
        transcript.track();
        prev.map_or(0, |n| n + 1)
    });
    assert_eq!(rebuilds.get_untracked(), 0);

    chat.update(|c| c.loading = true);
    assert_eq!(rebuilds.get_untracked(), 0);
    chat.update(|c| c.loading = false);
    assert_eq!(rebuilds.get_untracked(), 0);

    chat.update(|c| {
        c.begin_send("Where is main?", "https://github.com/a/b");
    });
    assert_eq!(rebuilds.get_untracked(), 1);
    assert_eq!(transcript.with_untracked(Vec::len), 1);
}

#[test]
fn transcript_memo_follows_answers_and_clear() {
    let owner = Owner::new();
    owner.set();

    let chat = RwSignal::new(ChatState::default());
    let transcript = transcript_memo(chat);

    let mut pending = None;
    chat.update(|c| pending = c.begin_send("What does it do?", "https://github.com/a/b"));
    let pending = pending.expect("send accepted");
    chat.update(|c| {
        c.finish(
            pending.epoch,
            Ok(ChatResponse { answer: "It digs.".into(), relevant_files: vec![], code_snippets: vec![] }),
        );
    });

    let roles: Vec<ChatRole> = transcript.with_untracked(|m| m.iter().map(|msg| msg.role).collect());
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);

    chat.update(ChatState::clear);
    assert!(transcript.with_untracked(Vec::is_empty));
}
