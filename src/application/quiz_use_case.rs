// ============================================================
// Layer 2 — Quiz Use Case
// ============================================================
// Wires the PDF loader, the question generator and the quiz
// settings together:
//
//   load(path)       → Document          (Layer 4 loader)
//   preview(doc)     → first N characters
//   generate(doc, n) → n questions       (QuestionGenerator)
//   report(doc)      → everything above, serialisable
//
// The use case owns the random source. Seeding it makes a
// whole session reproducible, not just one generate call.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::application::question_generator::QuestionGenerator;
use crate::data::loader::PdfLoader;
use crate::data::preview::{preview, PREVIEW_CHARS};
use crate::domain::document::Document;
use crate::domain::question::Question;
use crate::domain::traits::LanguageModel;

pub const MIN_QUESTIONS: u16 = 3;
pub const MAX_QUESTIONS: u16 = 15;
pub const DEFAULT_QUESTIONS: u16 = 5;

/// Shown whenever a document yields no text, whatever the cause.
pub const EXTRACTION_FAILED: &str = "Could not extract text from the uploaded PDF.";

/// Settings for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions per generate action
    pub count: u16,

    /// Fixed seed for reproducible quizzes; entropy when None
    pub seed: Option<u64>,

    /// Characters of extracted text shown after loading
    pub preview_chars: usize,

    /// Optional CoNLL-U treebank to enrich the tagger's lexicon
    pub treebank: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            count:         DEFAULT_QUESTIONS,
            seed:          None,
            preview_chars: PREVIEW_CHARS,
            treebank:      None,
        }
    }
}

/// Everything one `generate` run produced, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub source:     String,
    pub characters: usize,
    pub preview:    String,
    pub questions:  Vec<Question>,
}

/// Load a PDF, mapping every failure to the user-facing message.
pub fn load_document(loader: &PdfLoader, path: &Path) -> Result<Document> {
    loader.load(path).context(EXTRACTION_FAILED)
}

pub struct QuizUseCase<M> {
    loader:    PdfLoader,
    generator: QuestionGenerator<M>,
    config:    QuizConfig,
    rng:       StdRng,
}

impl<M: LanguageModel> QuizUseCase<M> {
    pub fn new(model: M, config: QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                tracing::info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            loader: PdfLoader::new(),
            generator: QuestionGenerator::new(model),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn load(&self, path: &Path) -> Result<Document> {
        load_document(&self.loader, path)
    }

    pub fn preview<'a>(&self, doc: &'a Document) -> Cow<'a, str> {
        preview(&doc.text, self.config.preview_chars)
    }

    /// A fresh set of `count` questions from the document.
    pub fn generate(&mut self, doc: &Document, count: u16) -> Vec<Question> {
        tracing::info!("Generating {} questions from '{}'", count, doc.source);
        let questions = self.generator.generate(&doc.text, usize::from(count), &mut self.rng);
        if questions.first().map_or(false, Question::is_placeholder) {
            tracing::warn!("'{}' has no sentence long enough for a question", doc.source);
        }
        questions
    }

    /// Generate with the configured count and bundle the result.
    pub fn report(&mut self, doc: &Document) -> QuizReport {
        let questions = self.generate(doc, self.config.count);
        QuizReport {
            source:     doc.source.clone(),
            characters: doc.char_count(),
            preview:    self.preview(doc).into_owned(),
            questions,
        }
    }
}
