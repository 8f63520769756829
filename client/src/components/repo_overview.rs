//! Free-text repository overview card.

use leptos::prelude::*;

#[component]
pub fn RepoOverview(text: String) -> impl IntoView {
    view! {
        <section class="card repo-overview">
            <h3 class="repo-overview__title gradient-text">
                <span class="repo-overview__icon">"📚"</span>
                "Repository Overview"
            </h3>
            <div class="repo-overview__body">{text}</div>
        </section>
    }
}
