use serde::Serialize;

/// Pretty JSON array block, two-space indent, one element per line.
/// Nothing to render gives an empty string rather than `[]`.
pub fn render_json_array<T: Serialize>(items: &[T]) -> String {
    if items.is_empty() {
        return String::new();
    }
    serde_json::to_string_pretty(items).unwrap_or_default()
}

// ── Tests ──
