//! Footer summarizing which files the backend analyzed.

#[cfg(test)]
#[path = "analyzed_files_test.rs"]
mod analyzed_files_test;

use leptos::prelude::*;

#[must_use]
pub fn analyzed_caption(total_files: u64, repo_name: &str) -> String {
    format!("Analyzed {total_files} files from {repo_name}")
}

#[must_use]
pub fn paths_toggle_label(count: usize) -> String {
    if count == 1 { "Show 1 analyzed path".to_owned() } else { format!("Show {count} analyzed paths") }
}

#[component]
pub fn AnalyzedFiles(total_files: u64, repo_name: String, files: Vec<String>) -> impl IntoView {
    let caption = analyzed_caption(total_files, &repo_name);
    let listing = (!files.is_empty()).then(|| {
        let label = paths_toggle_label(files.len());
        view! {
            <details class="analyzed-files__list">
                <summary>{label}</summary>
                <ul>{files.into_iter().map(|path| view! { <li><code>{path}</code></li> }).collect_view()}</ul>
            </details>
        }
    });

    view! {
        <div class="analyzed-files">
            <p>{caption}</p>
            {listing}
        </div>
    }
}
