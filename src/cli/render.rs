// ============================================================
// Layer 1 — Output Rendering
// ============================================================
// Formats documents and questions for the terminal:
//
//   Extracted Text Preview (notes.pdf, 1234 characters):
//   <first 1000 characters>...
//
//   1. Q: The quick brown _____ jumps over the lazy dog.
//      A: fox
//
// Writes to any io::Write so tests can capture the output.

use std::io::{self, Write};

use crate::application::quiz_use_case::QuizReport;
use crate::domain::document::Document;
use crate::domain::question::Question;

pub fn write_preview<W: Write>(out: &mut W, doc: &Document, preview: &str) -> io::Result<()> {
    writeln!(
        out,
        "Extracted Text Preview ({}, {} characters):",
        doc.source,
        doc.char_count()
    )?;
    writeln!(out, "{}", preview)?;
    writeln!(out)
}

pub fn write_questions<W: Write>(out: &mut W, questions: &[Question]) -> io::Result<()> {
    for (i, q) in questions.iter().enumerate() {
        match q.answer() {
            Some(answer) => {
                writeln!(out, "{}. Q: {}", i + 1, q.prompt())?;
                writeln!(out, "   A: {}", answer)?;
            }
            None => writeln!(out, "{}. {}", i + 1, q.prompt())?,
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &QuizReport) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
