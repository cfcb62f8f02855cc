// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// A generated quiz question. There are three shapes:
//
//   FillInBlank — a sentence with one noun replaced by a blank
//     Q: The quick brown _____ jumps over the lazy dog.
//     A: fox
//
//   MainIdea — a sentence with no usable noun
//     Q: What is the main idea of the following?
//     A: <the whole sentence>
//
//   Placeholder — the document had no sentence long enough
//     No valid sentences found for question generation.
//
// The placeholder is rendered like any other question so the
// caller never has to special-case an empty result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker that replaces the answer inside a fill-in-the-blank prompt
pub const BLANK: &str = "_____";

/// Fixed prompt used when a sentence has no keyword candidate
pub const MAIN_IDEA_PROMPT: &str = "What is the main idea of the following?";

/// Fixed message returned when no sentence qualifies
pub const PLACEHOLDER_MESSAGE: &str = "No valid sentences found for question generation.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    FillInBlank { prompt: String, answer: String },
    MainIdea { sentence: String },
    Placeholder,
}

impl Question {
    /// Blank out the first occurrence of `keyword` in `sentence`.
    ///
    /// Later occurrences are left alone, so a keyword repeated in
    /// the same sentence can still be read off the prompt.
    pub fn fill_in_blank(sentence: &str, keyword: &str) -> Self {
        Question::FillInBlank {
            prompt: sentence.replacen(keyword, BLANK, 1),
            answer: keyword.to_string(),
        }
    }

    pub fn main_idea(sentence: impl Into<String>) -> Self {
        Question::MainIdea { sentence: sentence.into() }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::FillInBlank { prompt, .. } => prompt,
            Question::MainIdea { .. }            => MAIN_IDEA_PROMPT,
            Question::Placeholder                => PLACEHOLDER_MESSAGE,
        }
    }

    /// The expected answer; the placeholder has none
    pub fn answer(&self) -> Option<&str> {
        match self {
            Question::FillInBlank { answer, .. } => Some(answer),
            Question::MainIdea { sentence }      => Some(sentence),
            Question::Placeholder                => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Question::Placeholder)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.answer() {
            Some(answer) => write!(f, "Q: {}\nA: {}", self.prompt(), answer),
            None         => write!(f, "{}", self.prompt()),
        }
    }
}
