// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external capabilities the quiz generator relies on:
//
//   TextExtractor — turns raw document bytes into plain text
//                   (implemented by PdfLoader in Layer 4)
//
//   LanguageModel — splits text into sentences and tags words
//                   with their part of speech
//                   (implemented by EnglishPipeline in Layer 5)
//
// The application layer only sees these traits, so tests can
// drive the generator with a stub model and a seeded RNG.

use serde::{Deserialize, Serialize};

// ─── TextExtractor ────────────────────────────────────────────────────────────
/// Anything that can turn the bytes of one document into text.
pub trait TextExtractor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the text of every page joined with '\n' and trimmed.
    /// Returns an error if nothing could be extracted.
    fn extract(&self, bytes: &[u8]) -> Result<String, Self::Error>;
}

// ─── LanguageModel ────────────────────────────────────────────────────────────
/// Universal Dependencies part-of-speech tags.
/// Names follow the UPOS inventory (NOUN, PROPN, VERB, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    #[serde(rename = "PROPN")]
    PropNoun,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    #[serde(rename = "CCONJ")]
    CConj,
    #[serde(rename = "SCONJ")]
    SConj,
    Num,
    Part,
    Intj,
    Punct,
    Sym,
    X,
}

/// One word of a tagged sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token exactly as it appears in the sentence
    pub text: String,

    /// Universal part-of-speech tag
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self { text: text.into(), pos }
    }

    /// Common or proper noun
    pub fn is_noun(&self) -> bool {
        matches!(self.pos, PosTag::Noun | PosTag::PropNoun)
    }
}

/// Sentence segmentation and part-of-speech tagging.
pub trait LanguageModel {
    /// Split text into sentences, in document order
    fn segment(&self, text: &str) -> Vec<String>;

    /// Tag every token of a single sentence
    fn tag(&self, sentence: &str) -> Vec<TaggedToken>;
}

impl<M: LanguageModel + ?Sized> LanguageModel for &M {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }

    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        (**self).tag(sentence)
    }
}
