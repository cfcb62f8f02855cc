// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents the text of a single uploaded document.
// By the time a Document exists, the PDF has already been
// parsed and every page's text joined into one string.
//
// A Document is never mutated. Loading a new file produces a
// new Document and the old one is simply dropped.

use serde::{Deserialize, Serialize};

/// The extracted plain text of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename the text came from, kept for display
    pub source: String,

    /// Every page's text joined with '\n', trimmed at both ends
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("biology.pdf", "Cells divide by mitosis...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Number of characters (not bytes) in the text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
