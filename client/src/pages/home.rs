//! Home page: URL form, loading and error panels, analysis results.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the analyze flow (submit -> loading ->
//! results or error) and delegates each panel to `components`. Chat requests
//! are issued by the chat panel itself.

use leptos::prelude::*;

use crate::components::analyzed_files::AnalyzedFiles;
use crate::components::chat_panel::ChatPanel;
use crate::components::error_panel::ErrorPanel;
use crate::components::graph_viewer::GraphViewer;
use crate::components::loading_state::LoadingState;
use crate::components::repo_input::RepoInput;
use crate::components::repo_overview::RepoOverview;
use crate::components::tech_stack::TechStackPanel;
use crate::net::types::AnalyzeResponse;
use crate::state::analysis::{AnalysisPhase, AnalysisState};
use crate::state::chat::ChatState;

#[component]
pub fn HomePage() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let phase = Memo::new(move |_| analysis.with(AnalysisState::phase));
    let data = Memo::new(move |_| analysis.with(|s| s.data.clone()));
    let error = Memo::new(move |_| analysis.with(|s| s.error.clone()));
    let loading = Signal::derive(move || phase.get() == AnalysisPhase::Loading);

    let on_analyze = Callback::new(move |raw_url: String| {
        let mut request = None;
        analysis.update(|state| request = state.begin(&raw_url));
        let Some(request) = request else {
            return;
        };
        chat.update(ChatState::clear);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::analyze_repository(&request).await {
                Ok(response) => {
                    log::info!("analyzed {} ({} files)", response.repo_name, response.total_files);
                    analysis.update(|state| state.succeed(response));
                }
                Err(e) => {
                    log::error!("analysis error: {e}");
                    analysis.update(|state| state.fail(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    let on_reset = Callback::new(move |()| {
        analysis.update(AnalysisState::reset);
        chat.update(ChatState::clear);
    });

    view! {
        <main class="home">
            <div class="home__backdrop"></div>
            <div class="home__container">
                <header class="home__header">
                    <h1 class="home__title gradient-text">"Legacy Code Archaeologist"</h1>
                    <p class="home__subtitle">
                        "Unearth the secrets of legacy codebases with AI-powered analysis"
                    </p>
                </header>

                <div class="home__content">
                    <Show when=move || matches!(phase.get(), AnalysisPhase::Idle | AnalysisPhase::Failed)>
                        <div class="home__centered">
                            <RepoInput on_submit=on_analyze loading=loading/>
                        </div>
                    </Show>

                    <Show when=move || loading.get()>
                        <LoadingState/>
                    </Show>

                    {move || error.get().map(|message| view! { <ErrorPanel message=message on_retry=on_reset/> })}

                    {move || data.get().map(|data| view! { <AnalysisResults data=data on_reset=on_reset/> })}
                </div>

                <footer class="home__footer">
                    <p>"Powered by Gemini • Built for developers who love archaeology"</p>
                </footer>
            </div>
        </main>
    }
}

/// Everything shown after a successful analysis.
#[component]
fn AnalysisResults(data: AnalyzeResponse, on_reset: Callback<()>) -> impl IntoView {
    let overview = data.overview().map(str::to_owned);
    let commentary = data.tech_commentary().map(str::to_owned);
    let stack = data.visible_tech_stack().cloned();
    let AnalyzeResponse { repo_name, total_files, mermaid_graph, summary, files_analyzed, .. } = data;

    view! {
        <div class="home__reset-row">
            <button class="link-button link-button--muted" on:click=move |_| on_reset.run(())>
                "← Analyze another repository"
            </button>
        </div>

        {overview.map(|text| view! { <RepoOverview text=text/> })}

        {stack.map(|stack| view! { <TechStackPanel stack=stack commentary=commentary/> })}

        <GraphViewer mermaid_graph=mermaid_graph repo_name=repo_name.clone() summary=summary/>

        <ChatPanel/>

        <AnalyzedFiles total_files=total_files repo_name=repo_name files=files_analyzed/>
    }
}
