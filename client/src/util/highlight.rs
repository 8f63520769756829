//! Syntax highlighting for chat code snippets via highlight.js.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// highlight.js language id for a file path, from its extension.
#[must_use]
pub fn language_for_path(path: &str) -> &'static str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let Some((stem, ext)) = file_name.rsplit_once('.') else {
        return language_for_file_name(file_name);
    };
    if stem.is_empty() {
        return "plaintext";
    }
    match ext.to_ascii_lowercase().as_str() {
        "py" | "pyw" => "python",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "java" => "java",
        "go" => "go",
        "rs" => "rust",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "scala" => "scala",
        "sh" | "bash" | "zsh" => "bash",
        "json" => "json",
        "yml" | "yaml" => "yaml",
        "toml" | "ini" | "cfg" => "ini",
        "html" | "htm" | "xml" | "svg" | "vue" => "xml",
        "css" | "scss" | "less" => "css",
        "sql" => "sql",
        "md" | "markdown" => "markdown",
        _ => "plaintext",
    }
}

fn language_for_file_name(file_name: &str) -> &'static str {
    match file_name {
        "Dockerfile" => "dockerfile",
        "Makefile" | "makefile" | "GNUmakefile" => "makefile",
        _ => "plaintext",
    }
}

/// `class` attribute for a `<code>` block in the given language.
#[must_use]
pub fn code_class(language: &str) -> String {
    format!("hljs language-{language}")
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightElement)]
        pub fn highlight_element(el: &web_sys::HtmlElement) -> Result<(), JsValue>;
    }
}

/// Highlight a mounted `<code>` element in place.
///
/// Leaves the plain text untouched if highlight.js is unavailable.
#[cfg(feature = "hydrate")]
pub fn highlight(el: &web_sys::HtmlElement) {
    if let Err(e) = bindings::highlight_element(el) {
        log::warn!("syntax highlight skipped: {}", super::js_error(e));
    }
}
