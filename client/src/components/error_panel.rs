//! Analysis failure panel with a retry affordance.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h3 class="error-panel__title">"Analysis Failed"</h3>
            <p class="error-panel__message">{message}</p>
            <button class="link-button" on:click=move |_| on_retry.run(())>
                "Try another repository"
            </button>
        </div>
    }
}
