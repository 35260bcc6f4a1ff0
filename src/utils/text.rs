// Character-aware string helpers

/// Longest prefix of `text` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, so the cut never lands inside a multi-byte
/// character. No attempt is made to end on a word or sentence boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
