const ELLIPSIS: &str = "...";

/// Default preview length for post content, in characters.
pub const MAX_PREVIEW_CHARS: usize = 150;

/// Truncates `text` to at most `max_chars` characters for a card preview,
/// appending an ellipsis marker when truncation occurred. Counts `char`s,
/// so a cut never lands inside a UTF-8 scalar.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    }
}
