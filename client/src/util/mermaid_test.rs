use super::*;

#[test]
fn next_diagram_id_is_unique() {
    let a = next_diagram_id();
    let b = next_diagram_id();
    assert!(a.starts_with("mermaid-"));
    assert_ne!(a, b);
}

#[test]
fn mermaid_config_disables_auto_start_and_html_labels() {
    let config = mermaid_config();
    assert_eq!(config["startOnLoad"], false);
    assert_eq!(config["theme"], "dark");
    assert_eq!(config["flowchart"]["htmlLabels"], false);
    assert_eq!(config["themeVariables"]["primaryColor"], "#3b82f6");
}

#[test]
fn escape_html_escapes_markup_characters() {
    assert_eq!(escape_html(r#"A-->B["<b>x</b> & 'y'"]"#), "A--&gt;B[&quot;&lt;b&gt;x&lt;/b&gt; &amp; &#39;y&#39;&quot;]");
}

#[test]
fn fallback_html_wraps_escaped_graph_in_pre() {
    let html = fallback_html("graph TD\nA-->B");
    assert_eq!(html, "<pre class=\"graph-viewer__fallback\">graph TD\nA--&gt;B</pre>");
}

#[test]
fn fallback_html_cannot_inject_script() {
    let html = fallback_html("</pre><script>alert(1)</script>");
    assert!(!html.contains("<script>"));
}
