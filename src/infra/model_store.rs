// ============================================================
// Layer 6 — Model Store
// ============================================================
// Builds the English pipeline once per process.
//
// With a treebank the lexicon is built from thousands of
// CoNLL-U sentences, so every later lookup reuses the first
// instance instead of parsing the file again:
//
//   init(treebank)  → builds on first call, then returns it
//
// The first successful init decides the treebank; a later
// call with a different path gets the existing pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;

use crate::nlp::pipeline::EnglishPipeline;

static PIPELINE: OnceCell<EnglishPipeline> = OnceCell::new();

pub fn init(treebank: Option<&Path>) -> Result<&'static EnglishPipeline> {
    PIPELINE.get_or_try_init(|| {
        match treebank {
            Some(path) => tracing::info!("Loading language model with treebank {}", path.display()),
            None       => tracing::info!("Loading built-in language model"),
        }
        EnglishPipeline::load(treebank).context("Failed to load language model")
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_returns_same_instance() {
        let first  = init(None).unwrap();
        let second = init(None).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.vocabulary_size() > 0);
    }
}
