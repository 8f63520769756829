//! Decorative loading indicator shown while an analysis runs.

use leptos::prelude::*;

const STEPS: [&str; 3] = ["Fetching files from GitHub", "Analyzing code structure", "Generating visualization"];

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state" role="status" aria-live="polite">
            <div class="loading-state__orb">
                <span class="spinner spinner--large"></span>
                <span class="loading-state__glow"></span>
            </div>
            <div class="loading-state__text">
                <h3 class="loading-state__title gradient-text">"Excavating Repository..."</h3>
                <div class="loading-state__steps">
                    {STEPS.iter().map(|step| view! { <p>{*step}</p> }).collect_view()}
                </div>
            </div>
            <div class="loading-state__dots">
                <span class="loading-state__dot"></span>
                <span class="loading-state__dot"></span>
                <span class="loading-state__dot"></span>
            </div>
        </div>
    }
}
