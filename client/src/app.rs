//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_URL_META_NAME, ApiConfig};
use crate::pages::home::HomePage;
use crate::state::{analysis::AnalysisState, chat::ChatState};

const MERMAID_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/mermaid@10.9.1/dist/mermaid.min.js";
const HIGHLIGHT_SCRIPT: &str = "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@11.9.0/build/highlight.min.js";
const HIGHLIGHT_THEME: &str = "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@11.9.0/build/styles/vs2015.min.css";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL comes from the `ApiConfig` context the host binary
/// provides; it is written into a `<meta>` tag for the browser to pick up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api = use_context::<ApiConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META_NAME content=api.base_url/>
                <script src=MERMAID_SCRIPT></script>
                <script src=HIGHLIGHT_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the analysis and chat state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let analysis = RwSignal::new(AnalysisState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(analysis);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/archaeologist.css"/>
        <Link rel="stylesheet" href=HIGHLIGHT_THEME/>
        <Title text="Legacy Code Archaeologist"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
