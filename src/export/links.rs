use crate::parser::ExtractionResult;

/// Every canonical link, one per line, in first-seen order.
/// Includes links that could not be attributed to an account.
pub fn links_text(result: &ExtractionResult) -> Option<String> {
    if result.links.is_empty() {
        return None;
    }
    Some(result.links.join("\n"))
}

// ── Tests ──
