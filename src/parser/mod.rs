pub mod classify;
pub mod lines;
pub mod matcher;
pub mod normalize;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use classify::{tweet_links, AccountProfile, LinkRecord, LinkType};
pub use lines::lines_to_array;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub links: Vec<String>,
    pub profiles: IndexMap<String, AccountProfile>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Three-pass pipeline: raw text → matches → canonical links → account profiles.
pub fn extract(text: &str) -> ExtractionResult {
    let matches = matcher::find_links(text);
    if matches.is_empty() {
        return ExtractionResult::default();
    }
    let links = normalize::canonicalize(matches);
    let profiles = classify::group_links(&links);
    tracing::debug!(links = links.len(), accounts = profiles.len(), "Extracted links");

    ExtractionResult { links, profiles }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn types_of(profile: &AccountProfile) -> Vec<LinkType> {
        profile.links.iter().map(|l| l.link_type).collect()
    }

    #[test]
    fn profile_and_tweet_for_same_account() {
        let r = extract("check https://twitter.com/alice and https://x.com/alice/status/42!");
        assert_eq!(r.links, vec!["https://x.com/alice", "https://x.com/alice/status/42"]);
        assert_eq!(r.profiles.len(), 1);
        assert_eq!(types_of(&r.profiles["alice"]), vec![LinkType::Profile, LinkType::Tweet]);
    }

    #[test]
    fn list_inside_parentheses() {
        let r = extract("(x.com/bob/lists/tech)");
        assert_eq!(r.links, vec!["https://x.com/bob/lists/tech"]);
        assert_eq!(types_of(&r.profiles["bob"]), vec![LinkType::List]);
    }

    #[test]
    fn no_links() {
        let r = extract("hello world");
        assert!(r.links.is_empty());
        assert!(r.profiles.is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn exact_duplicates_collapse() {
        let r = extract("https://x.com/carol https://x.com/carol");
        assert_eq!(r.links.len(), 1);
        assert_eq!(r.profiles["carol"].links.len(), 1);
    }

    #[test]
    fn twitter_and_x_forms_collapse() {
        let r = extract("twitter.com/dan, https://twitter.com/dan. x.com/dan");
        assert_eq!(r.links, vec!["https://x.com/dan"]);
    }

    #[test]
    fn bare_host_stays_in_flat_list_only() {
        let r = extract("home page: x.com/ and x.com/erin");
        assert_eq!(r.links, vec!["https://x.com/", "https://x.com/erin"]);
        let accounts: Vec<&str> = r.profiles.keys().map(|k| k.as_str()).collect();
        assert_eq!(accounts, vec!["erin"]);
    }

    #[test]
    fn fixture_invariants() {
        let text = std::fs::read_to_string("tests/fixtures/thread.txt").unwrap();
        let r = extract(&text);
        assert!(!r.links.is_empty());

        // No duplicates in the flat list.
        let mut unique = r.links.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), r.links.len());

        // Every grouped link is also in the flat list.
        for profile in r.profiles.values() {
            for record in &profile.links {
                assert!(r.links.contains(&record.url), "{} missing", record.url);
            }
        }

        // Re-running on the output gives the same links back.
        assert_eq!(extract(&r.links.join("\n")).links, r.links);
    }

    #[test]
    fn fixture_thread_accounts() {
        let text = std::fs::read_to_string("tests/fixtures/thread.txt").unwrap();
        let r = extract(&text);
        let accounts: Vec<&str> = r.profiles.keys().map(|k| k.as_str()).collect();
        assert_eq!(accounts, vec!["rustlang", "ferris", "Ferris", "i"]);
        assert_eq!(
            tweet_links(&r.links),
            vec![
                "https://x.com/rustlang/status/1790000000000000001",
                "https://x.com/ferris/status/42",
                "https://x.com/i/web/status/1234567890",
            ]
        );
    }

    #[test]
    fn serializes_with_camel_case_profile_url() {
        let r = extract("x.com/alice");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["profiles"]["alice"]["profileUrl"], "https://x.com/alice");
        assert_eq!(v["profiles"]["alice"]["links"][0]["type"], "profile");
    }
}
