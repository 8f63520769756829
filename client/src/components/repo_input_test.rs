use super::*;

#[test]
fn submitted_url_trims_input() {
    assert_eq!(
        submitted_url("  https://github.com/vercel/next.js \n"),
        Some("https://github.com/vercel/next.js".to_owned())
    );
}

#[test]
fn submitted_url_rejects_blank_input() {
    assert_eq!(submitted_url(""), None);
    assert_eq!(submitted_url("   \t"), None);
}

#[test]
fn example_repos_are_github_urls() {
    for (label, url) in EXAMPLE_REPOS {
        assert_eq!(url, format!("https://github.com/{label}"));
    }
}
