//! Architecture diagram card with PNG export.
//!
//! SYSTEM CONTEXT
//! ==============
//! The graph text is opaque here: Mermaid.js turns it into SVG inside the
//! diagram container after hydration. On SSR the container stays empty.
//!
//! ERROR HANDLING
//! ==============
//! A Mermaid failure (bad syntax, library not loaded) replaces the diagram
//! with the escaped raw graph text. Export failures are only logged.

use leptos::prelude::*;

use crate::util::export::export_file_name;

/// Shown instead of a diagram when the backend sent no graph.
pub const EMPTY_DIAGRAM_HTML: &str = "<p class=\"graph-viewer__empty\">No diagram was generated for this repository.</p>";

#[component]
pub fn GraphViewer(mermaid_graph: String, repo_name: String, summary: String) -> impl IntoView {
    let diagram_ref = NodeRef::<leptos::html::Div>::new();
    let exporting = RwSignal::new(false);
    let file_name = export_file_name(&repo_name);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::mermaid::{fallback_html, next_diagram_id, render_svg};

        let graph = mermaid_graph.clone();
        Effect::new(move || {
            let Some(el) = diagram_ref.get() else {
                return;
            };
            if graph.trim().is_empty() {
                el.set_inner_html(EMPTY_DIAGRAM_HTML);
                return;
            }
            let graph = graph.clone();
            leptos::task::spawn_local(async move {
                match render_svg(&next_diagram_id(), &graph).await {
                    Ok(svg) => el.set_inner_html(&svg),
                    Err(e) => {
                        log::error!("mermaid render failed: {e}");
                        el.set_inner_html(&fallback_html(&graph));
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &mermaid_graph;

    let on_export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = diagram_ref.get_untracked() else {
                return;
            };
            exporting.set(true);
            let file_name = file_name.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::util::export::export_png(&el, &file_name).await {
                    log::error!("diagram export failed: {e}");
                }
                exporting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &file_name;
    };

    view! {
        <section class="card graph-viewer">
            <div class="graph-viewer__header">
                <div>
                    <h2 class="graph-viewer__title">
                        <span class="gradient-text">{repo_name}</span>
                        <span class="graph-viewer__kind">"Architecture"</span>
                    </h2>
                    <p class="graph-viewer__summary">{summary}</p>
                </div>
                <button
                    class="btn btn--outline graph-viewer__export"
                    on:click=on_export
                    disabled=move || exporting.get()
                >
                    {move || if exporting.get() { "Exporting..." } else { "Export PNG" }}
                </button>
            </div>
            <div class="graph-viewer__canvas">
                <div class="graph-viewer__diagram" node_ref=diagram_ref></div>
            </div>
        </section>
    }
}
