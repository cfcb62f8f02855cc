// ============================================================
// Layer 4 — Text Preview
// ============================================================
// Shortens extracted text for display after a document loads.
// Counts characters, not bytes, so a multi-byte character is
// never split in half.

use std::borrow::Cow;

/// How many characters of extracted text the preview shows
pub const PREVIEW_CHARS: usize = 1000;

/// Appended when the preview is shorter than the full text
pub const ELLIPSIS: &str = "...";

/// First `limit` characters of `text`, followed by "..." when
/// anything was cut off. Short text is returned unchanged.
pub fn preview(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None           => Cow::Borrowed(text),
    }
}
