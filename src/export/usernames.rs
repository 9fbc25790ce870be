use crate::parser::ExtractionResult;

/// Account names in first-seen order, one per line.
pub fn usernames_text(result: &ExtractionResult) -> Option<String> {
    if result.profiles.is_empty() {
        return None;
    }
    Some(
        result
            .profiles
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

// ── Tests ──
