//! "Ask About the Code" chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends questions to `POST /api/chat` for the repository in
//! `AnalysisState` and renders the transcript held in `ChatState`.
//! Failures never surface as an error state; they become one fallback
//! assistant turn.

use leptos::prelude::*;

use crate::components::code_snippet::CodeSnippetCard;
use crate::state::analysis::AnalysisState;
use crate::state::chat::{ChatMessage, ChatRole, ChatState};

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

const SUGGESTIONS: [&str; 3] = [
    "Where is the authentication logic?",
    "Explain the data flow in this application",
    "Are there any potential bugs or issues?",
];

#[component]
pub fn ChatPanel() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let transcript = transcript_memo(chat);
    let loading = Memo::new(move |_| chat.with(|c| c.loading));

    Effect::new(move || {
        let _ = (transcript.with(Vec::len), loading.get());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let repo_url = analysis.with_untracked(|s| s.repo_url.clone());
        let mut pending = None;
        chat.update(|c| pending = c.begin_send(&text, &repo_url));
        let Some(pending) = pending else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::chat_about_code(&pending.request).await;
            if let Err(e) = &result {
                log::error!("chat error: {e}");
            }
            chat.update(|c| {
                c.finish(pending.epoch, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = pending;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !loading.get();

    view! {
        <section class="card chat-panel">
            <h2 class="chat-panel__title">"Ask About the Code"</h2>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = transcript.get();
                    if messages.is_empty() {
                        return view! { <ChatEmptyState/> }.into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <ChatBubble message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    loading
                        .get()
                        .then(|| {
                            view! {
                                <div class="chat-panel__row">
                                    <div class="chat-panel__bubble chat-panel__bubble--pending">
                                        <span class="spinner spinner--small"></span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="input chat-panel__input"
                    type="text"
                    placeholder="Ask a question about the code..."
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// Transcript view of the chat state. Toggling `loading` alone leaves it
/// unchanged, so existing bubbles are not rebuilt while an answer is pending.
pub fn transcript_memo(chat: RwSignal<ChatState>) -> Memo<Vec<ChatMessage>> {
    Memo::new(move |_| chat.with(|c| c.messages.clone()))
}

#[component]
fn ChatEmptyState() -> impl IntoView {
    view! {
        <div class="chat-panel__empty">
            <p class="chat-panel__empty-title">"Start exploring the codebase!"</p>
            <p>"Try asking:"</p>
            <ul class="chat-panel__suggestions">
                {SUGGESTIONS.iter().map(|s| view! { <li>{format!("• \"{s}\"")}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    let ChatMessage { content, relevant_files, code_snippets, .. } = message;

    let files = (!relevant_files.is_empty()).then(|| {
        view! {
            <div class="chat-panel__files">
                <p class="chat-panel__files-title">"Relevant Files:"</p>
                <div class="chat-panel__chips">
                    {relevant_files.into_iter().map(|file| view! { <span class="chip">{file}</span> }).collect_view()}
                </div>
            </div>
        }
    });

    let snippets = (!code_snippets.is_empty()).then(|| {
        view! {
            <div class="chat-panel__snippets">
                {code_snippets
                    .into_iter()
                    .map(|snippet| view! { <CodeSnippetCard snippet=snippet/> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="chat-panel__row" class:chat-panel__row--user=is_user>
            <div class="chat-panel__bubble" class:chat-panel__bubble--user=is_user>
                <p class="chat-panel__text">{content}</p>
                {files}
                {snippets}
            </div>
        </div>
    }
}
