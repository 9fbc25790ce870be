use std::sync::LazyLock;

use regex::Regex;

static X_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:https?://)?(?:www\.)?(?:twitter\.com|x\.com)/[^\s<>"']*"#).unwrap()
});

/// Scan free-form text for anything that looks like an X/Twitter URL.
///
/// Matches run left to right and never overlap. Scheme and host are matched
/// case-insensitively but the captured slice keeps the input's casing.
pub fn find_links(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    X_LINK_RE.find_iter(text).map(|m| m.as_str()).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_plain_text() {
        assert!(find_links("").is_empty());
        assert!(find_links("   \n\t").is_empty());
        assert!(find_links("hello world").is_empty());
    }

    #[test]
    fn bare_and_schemed_hosts() {
        let text = "see x.com/alice, www.twitter.com/bob and http://X.COM/Carol/status/1";
        assert_eq!(
            find_links(text),
            vec!["x.com/alice,", "www.twitter.com/bob", "http://X.COM/Carol/status/1"]
        );
    }

    #[test]
    fn stops_at_quotes_and_angle_brackets() {
        let html = r#"<a href="https://x.com/dave/status/7">x</a> <https://twitter.com/erin>"#;
        assert_eq!(
            find_links(html),
            vec!["https://x.com/dave/status/7", "https://twitter.com/erin"]
        );
        assert_eq!(find_links("'x.com/frank'"), vec!["x.com/frank"]);
    }

    #[test]
    fn adjacent_links_do_not_overlap() {
        let found = find_links("x.com/a x.com/b\nx.com/c");
        assert_eq!(found, vec!["x.com/a", "x.com/b", "x.com/c"]);
    }

    #[test]
    fn host_without_slash_is_not_a_link() {
        assert!(find_links("mail me at someone@x.com today").is_empty());
    }

    #[test]
    fn keeps_trailing_punctuation_for_normalizer() {
        assert_eq!(find_links("(x.com/bob/lists/tech)"), vec!["x.com/bob/lists/tech)"]);
    }
}
