use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

static TWEET_PERMALINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/status/\d+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Profile,
    Tweet,
    List,
    Other,
}

impl LinkType {
    /// Capitalized label used in exported sheets.
    pub fn label(self) -> &'static str {
        match self {
            LinkType::Profile => "Profile",
            LinkType::Tweet => "Tweet",
            LinkType::List => "List",
            LinkType::Other => "Other",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LinkType::Profile => "profile",
            LinkType::Tweet => "tweet",
            LinkType::List => "list",
            LinkType::Other => "other",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub account: String,
    pub profile_url: String,
    pub links: Vec<LinkRecord>,
}

impl AccountProfile {
    fn new(account: &str) -> Self {
        AccountProfile {
            account: account.to_string(),
            profile_url: format!("https://x.com/{}", account),
            links: Vec::new(),
        }
    }
}

/// Resource type from the non-empty path segments of a link.
/// A single segment is a profile; otherwise `status` beats `lists`.
pub fn classify_path(segments: &[&str]) -> LinkType {
    match segments {
        [_] => LinkType::Profile,
        s if s.contains(&"status") => LinkType::Tweet,
        s if s.contains(&"lists") => LinkType::List,
        _ => LinkType::Other,
    }
}

/// Group canonical links under the account named by their first path segment.
///
/// Links that fail URL parsing, or that have no path segments at all, are not
/// attributed to any account. Accounts keep the order they were first seen in.
pub fn group_links(links: &[String]) -> IndexMap<String, AccountProfile> {
    let mut profiles: IndexMap<String, AccountProfile> = IndexMap::new();

    for link in links {
        let parsed = match Url::parse(link) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!(url = %link, error = %e, "Could not parse URL");
                continue;
            }
        };

        let path = parsed.path();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(&first) = segments.first() else {
            tracing::debug!(url = %link, "Link has no account segment");
            continue;
        };
        let account = first.strip_prefix('@').unwrap_or(first);

        profiles
            .entry(account.to_string())
            .or_insert_with(|| AccountProfile::new(account))
            .links
            .push(LinkRecord {
                url: link.clone(),
                link_type: classify_path(&segments),
                path: path.to_string(),
            });
    }

    profiles
}

/// Links that point at a specific tweet (`/status/<id>`), in their original order.
pub fn tweet_links(links: &[String]) -> Vec<String> {
    links
        .iter()
        .filter(|l| TWEET_PERMALINK_RE.is_match(l))
        .cloned()
        .collect()
}

// ── Tests ──
