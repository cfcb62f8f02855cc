// ============================================================
// Layer 5 — Language Model
// ============================================================
// Sentence segmentation and part-of-speech tagging for English.
// Only this layer imports regex and rs-conllu.
//
//   segmenter.rs — splits document text into sentences
//   tokenizer.rs — splits a sentence into word/punct tokens
//   lexicon.rs   — word → tag counts (built-in + treebank)
//   tagger.rs    — lexicon lookup, suffix and context rules
//   pipeline.rs  — ties them together as a LanguageModel

pub mod segmenter;

pub mod tokenizer;

pub mod lexicon;

pub mod tagger;

/// EnglishPipeline — the LanguageModel the binary uses
pub mod pipeline;
