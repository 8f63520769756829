//! Repository URL form with example shortcuts.

#[cfg(test)]
#[path = "repo_input_test.rs"]
mod repo_input_test;

use leptos::prelude::*;

/// Label and URL for the "Try examples" shortcuts.
pub const EXAMPLE_REPOS: [(&str, &str); 2] = [
    ("facebook/react", "https://github.com/facebook/react"),
    ("vercel/next.js", "https://github.com/vercel/next.js"),
];

/// Trimmed URL to submit, or `None` for blank input.
#[must_use]
pub fn submitted_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    (!url.is_empty()).then(|| url.to_owned())
}

#[component]
pub fn RepoInput(on_submit: Callback<String>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    let repo_url = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        if let Some(url) = submitted_url(&repo_url.get_untracked()) {
            on_submit.run(url);
        }
    };

    let can_submit = move || !loading.get() && submitted_url(&repo_url.get()).is_some();

    view! {
        <div class="card card--glow repo-input">
            <div class="repo-input__header">
                <h2 class="repo-input__title gradient-text">"Legacy Code Archaeologist"</h2>
                <p class="repo-input__subtitle">
                    "Unearth the secrets of any codebase with AI-powered visualization"
                </p>
            </div>
            <form class="repo-input__form" on:submit=on_form_submit>
                <label for="repo-url" class="repo-input__label">"GitHub Repository URL"</label>
                <div class="repo-input__row">
                    <input
                        id="repo-url"
                        class="input repo-input__field"
                        type="text"
                        placeholder="https://github.com/username/repository"
                        disabled=move || loading.get()
                        prop:value=move || repo_url.get()
                        on:input=move |ev| repo_url.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary repo-input__submit" type="submit" disabled=move || !can_submit()>
                        {move || {
                            if loading.get() {
                                view! {
                                    <span class="spinner spinner--small"></span>
                                    "Excavating..."
                                }
                                    .into_any()
                            } else {
                                view! { "Analyze" }.into_any()
                            }
                        }}
                    </button>
                </div>
                <p class="repo-input__examples">
                    "Try examples:"
                    {EXAMPLE_REPOS
                        .iter()
                        .enumerate()
                        .map(|(i, &(label, url))| {
                            view! {
                                {(i > 0).then_some(" • ")}
                                <button
                                    type="button"
                                    class="link-button"
                                    disabled=move || loading.get()
                                    on:click=move |_| repo_url.set(url.to_owned())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </p>
            </form>
        </div>
    }
}
