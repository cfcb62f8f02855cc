// ============================================================
// Layer 5 — English Pipeline
// ============================================================
// The concrete LanguageModel: segmenter + tokenizer + tagger.
//
//   segment(text)     → SentenceSegmenter
//   tag(sentence)     → tokenize → Tagger → Vec<TaggedToken>
//
// Building one is not free when a treebank is involved, so the
// binary builds it once through infra::model_store.

use std::path::Path;

use anyhow::Result;

use crate::domain::traits::{LanguageModel, TaggedToken};
use crate::nlp::lexicon::Lexicon;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::tagger::Tagger;
use crate::nlp::tokenizer::tokenize;

pub struct EnglishPipeline {
    segmenter: SentenceSegmenter,
    tagger:    Tagger,
}

impl EnglishPipeline {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
            tagger:    Tagger::new(lexicon),
        }
    }

    /// Built-in vocabulary only
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// Built-in vocabulary, enriched from a CoNLL-U treebank if given
    pub fn load(treebank: Option<&Path>) -> Result<Self> {
        let mut lexicon = Lexicon::builtin();
        if let Some(path) = treebank {
            lexicon.merge_treebank(path)?;
        }
        let pipeline = Self::new(lexicon);
        tracing::info!("Language model ready ({} word forms)", pipeline.vocabulary_size());
        Ok(pipeline)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.tagger.lexicon().word_forms()
    }
}

impl LanguageModel for EnglishPipeline {
    fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        let tokens = tokenize(sentence);
        let tags   = self.tagger.tag(&tokens);
        tokens
            .into_iter()
            .zip(tags)
            .map(|(text, pos)| TaggedToken::new(text, pos))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::PosTag;

    #[test]
    fn test_tag_keeps_token_text() {
        let model  = EnglishPipeline::builtin();
        let tagged = model.tag("The river floods.");
        let words: Vec<&str> = tagged.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["The", "river", "floods", "."]);
        assert_eq!(tagged[0].pos, PosTag::Det);
        assert!(tagged[1].is_noun());
        assert_eq!(tagged[3].pos, PosTag::Punct);
    }

    #[test]
    fn test_segment_delegates_to_segmenter() {
        let model = EnglishPipeline::builtin();
        assert_eq!(model.segment("One here. Two there."), vec!["One here.", "Two there."]);
    }

    #[test]
    fn test_load_without_treebank_is_builtin() {
        let model = EnglishPipeline::load(None).unwrap();
        assert_eq!(model.vocabulary_size(), EnglishPipeline::builtin().vocabulary_size());
    }
}
