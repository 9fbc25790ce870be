/// Split text into its non-blank lines.
///
/// `\r\n` and lone `\r` count as line breaks. Kept lines are returned exactly
/// as written, surrounding whitespace included.
pub fn lines_to_array(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect()
}

// ── Tests ──
