// ============================================================
// Layer 1 — Interactive Session
// ============================================================
// A prompt loop standing in for an upload form:
//
//   PDF path:  notes.pdf          → extract + preview
//   Questions: <Enter>            → generate with current count
//   Questions: 8                  → set count to 8, generate
//   Questions: open other.pdf     → replace the document
//   Questions: q                  → end (EOF does the same)
//
// Each generate action produces a new, independent set.
// Generic over BufRead/Write so tests can drive it with a
// Cursor and capture the output in a Vec<u8>.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::application::quiz_use_case::{QuizUseCase, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::cli::render;
use crate::domain::document::Document;
use crate::domain::traits::LanguageModel;

pub struct Session<M, R, W> {
    quiz:     QuizUseCase<M>,
    input:    R,
    output:   W,
    document: Option<Document>,
    count:    u16,
}

impl<M: LanguageModel, R: BufRead, W: Write> Session<M, R, W> {
    pub fn new(quiz: QuizUseCase<M>, input: R, output: W) -> Self {
        let count = quiz.config().count;
        Self { quiz, input, output, document: None, count }
    }

    #[cfg(test)]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    #[cfg(test)]
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Load a PDF and show its preview. A failed load is reported
    /// to the user and keeps the current document.
    pub fn open(&mut self, path: &Path) -> Result<bool> {
        match self.quiz.load(path) {
            Ok(doc) => {
                writeln!(self.output, "Text successfully extracted!")?;
                render::write_preview(&mut self.output, &doc, &self.quiz.preview(&doc))?;
                self.document = Some(doc);
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("Load of {} failed: {:#}", path.display(), e);
                writeln!(self.output, "Error: {:#}", e)?;
                Ok(false)
            }
        }
    }

    pub fn run(&mut self) -> Result<()> {
        while self.document.is_none() {
            write!(self.output, "PDF path (q to quit): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else { return Ok(()) };
            match line.as_str() {
                "" => continue,
                "q" | "quit" => return Ok(()),
                path => {
                    self.open(Path::new(path))?;
                }
            }
        }

        loop {
            write!(
                self.output,
                "\nNumber of questions ({}-{}) [{}], 'open <path>' or 'q': ",
                MIN_QUESTIONS, MAX_QUESTIONS, self.count
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else { break };
            match line.as_str() {
                "q" | "quit" => break,
                "" => self.generate()?,
                cmd if cmd.starts_with("open ") => {
                    self.open(Path::new(cmd["open ".len()..].trim()))?;
                }
                other => match other.parse::<u16>() {
                    Ok(n) if (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&n) => {
                        self.count = n;
                        self.generate()?;
                    }
                    _ => writeln!(
                        self.output,
                        "Please enter a number between {} and {}.",
                        MIN_QUESTIONS, MAX_QUESTIONS
                    )?,
                },
            }
        }
        Ok(())
    }

    fn generate(&mut self) -> Result<()> {
        if let Some(doc) = &self.document {
            let questions = self.quiz.generate(doc, self.count);
            writeln!(self.output, "Questions Generated Successfully!")?;
            render::write_questions(&mut self.output, &questions)?;
        }
        Ok(())
    }

    /// Next trimmed input line, or None at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::quiz_use_case::{QuizConfig, EXTRACTION_FAILED};
    use crate::data::loader::tests::build_pdf;
    use crate::nlp::pipeline::EnglishPipeline;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn pdf_file() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&build_pdf(&[
            "Mitochondria produce most of the energy a cell needs to survive.",
            "The nucleus stores the genetic material of the organism.",
        ]))
        .unwrap();
        file
    }

    fn run_script(script: &str) -> String {
        let config = QuizConfig { seed: Some(1), ..QuizConfig::default() };
        let quiz = QuizUseCase::new(EnglishPipeline::builtin(), config);
        let mut out = Vec::new();
        Session::new(quiz, Cursor::new(script.to_string()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn question_count(output: &str) -> usize {
        output
            .lines()
            .filter(|l| {
                l.split_once(". ")
                    .map_or(false, |(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            })
            .count()
    }

    #[test]
    fn test_eof_before_upload_ends_quietly() {
        let out = run_script("");
        assert_eq!(out, "PDF path (q to quit): ");
    }

    #[test]
    fn test_bad_path_reports_error_and_asks_again() {
        let out = run_script("/no/such/file.pdf\nq\n");
        assert!(out.contains(EXTRACTION_FAILED));
        assert_eq!(out.matches("PDF path").count(), 2);
    }

    #[test]
    fn test_upload_then_generate_default_count() {
        let pdf = pdf_file();
        let out = run_script(&format!("{}\n\nq\n", pdf.path().display()));
        assert!(out.contains("Text successfully extracted!"));
        assert!(out.contains("Extracted Text Preview"));
        assert!(out.contains("Questions Generated Successfully!"));
        assert_eq!(question_count(&out), 5);
    }

    #[test]
    fn test_count_change_and_rejection() {
        let pdf = pdf_file();
        let out = run_script(&format!("{}\n3\n20\nabc\n", pdf.path().display()));
        assert_eq!(out.matches("Please enter a number between 3 and 15.").count(), 2);
        assert_eq!(out.matches("Questions Generated Successfully!").count(), 1);
        assert_eq!(question_count(&out), 3);
        assert!(out.contains("[3]"));
    }

    #[test]
    fn test_open_failure_keeps_document() {
        let pdf = pdf_file();
        let config = QuizConfig { seed: Some(1), ..QuizConfig::default() };
        let quiz = QuizUseCase::new(EnglishPipeline::builtin(), config);
        let script = format!("{}\nopen missing.pdf\n", pdf.path().display());
        let mut out = Vec::new();
        let mut session = Session::new(quiz, Cursor::new(script), &mut out);
        session.run().unwrap();
        assert!(session.document().is_some());
        assert_eq!(session.count(), 5);
    }
}
