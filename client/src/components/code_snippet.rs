//! Highlighted code excerpt attached to a chat answer.

#[cfg(test)]
#[path = "code_snippet_test.rs"]
mod code_snippet_test;

use leptos::prelude::*;

use crate::net::types::CodeSnippet;
use crate::util::highlight::{code_class, language_for_path};

/// Card heading, e.g. `src/auth.py (Lines 10-24)`.
#[must_use]
pub fn snippet_title(snippet: &CodeSnippet) -> String {
    let file = if snippet.file.trim().is_empty() { "snippet" } else { snippet.file.as_str() };
    let lines = snippet.lines.trim();
    if lines.is_empty() {
        file.to_owned()
    } else {
        format!("{file} (Lines {lines})")
    }
}

#[component]
pub fn CodeSnippetCard(snippet: CodeSnippet) -> impl IntoView {
    let title = snippet_title(&snippet);
    let class = code_class(language_for_path(&snippet.file));
    let code_ref = NodeRef::<leptos::html::Code>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = code_ref.get() {
            crate::util::highlight::highlight(&el);
        }
    });

    let CodeSnippet { snippet: code, explanation, .. } = snippet;
    let explanation = (!explanation.trim().is_empty()).then_some(explanation);

    view! {
        <div class="snippet">
            <p class="snippet__title">{title}</p>
            <pre class="snippet__pre">
                <code class=class node_ref=code_ref>{code}</code>
            </pre>
            {explanation.map(|text| view! { <p class="snippet__explanation">{text}</p> })}
        </div>
    }
}
