use std::collections::HashSet;

/// Closing punctuation that prose tends to glue onto the end of a link.
const TRAILING_PUNCT: &[char] = &[')', '}', ']', ',', '.', ';', '!', '?'];

/// Canonical form of a single raw match: trimmed, trailing punctuation
/// stripped, `https://` added when no scheme is present, and the first
/// `twitter.com` rewritten to `x.com`.
pub fn normalize_link(raw: &str) -> String {
    let cleaned = raw.trim().trim_end_matches(TRAILING_PUNCT);

    let with_scheme = if cleaned.starts_with("http") {
        cleaned.to_string()
    } else {
        format!("https://{}", cleaned)
    };

    with_scheme.replacen("twitter.com", "x.com", 1)
}

/// Normalize every raw match and drop exact duplicates, keeping the first
/// occurrence of each link in input order.
pub fn canonicalize<'a, I>(raw_matches: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for raw in raw_matches {
        let link = normalize_link(raw);
        if seen.contains(&link) {
            continue;
        }
        seen.insert(link.clone());
        links.push(link);
    }

    links
}

// ── Tests ──
