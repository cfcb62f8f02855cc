// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Extracts plain text from a PDF using the lopdf crate.
//
// A PDF is a graph of objects. lopdf gives us the page tree
// in page order and can decode the text-showing operators
// (Tj / TJ) of a page's content stream back into a string:
//
//   Document
//     └── get_pages(): BTreeMap<page number, ObjectId>
//           └── extract_text(&[page]) → String
//
// Every page goes through the Preprocessor, then the pages
// are joined with '\n' and the whole result trimmed.
//
// Reference: lopdf crate documentation

use std::{fs, path::Path};

use thiserror::Error;

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::Document;
use crate::domain::traits::TextExtractor;

/// Why a document produced no text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("'{0}' is not a .pdf file")]
    NotPdf(String),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse PDF: {0}")]
    Parse(String),

    #[error("PDF is encrypted")]
    Encrypted,

    #[error("no text found in the document")]
    EmptyText,
}

/// Loads one PDF and extracts the text of all its pages.
/// Implements the TextExtractor trait from Layer 3.
pub struct PdfLoader {
    preprocessor: Preprocessor,
}

impl PdfLoader {
    pub fn new() -> Self {
        Self { preprocessor: Preprocessor::new() }
    }

    /// Read a .pdf file from disk and return its Document.
    pub fn load(&self, path: &Path) -> Result<Document, ExtractError> {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(ExtractError::NotPdf(path.display().to_string()));
        }

        let bytes = fs::read(path).map_err(|source| ExtractError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let text = self.extract(&bytes)?;

        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::info!("Extracted {} chars from '{}'", text.chars().count(), source);
        Ok(Document::new(source, text))
    }
}

impl Default for PdfLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfLoader {
    type Error = ExtractError;

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(ExtractError::Encrypted);
        }

        let pages = doc.get_pages();
        tracing::debug!("PDF has {} pages", pages.len());

        let mut page_texts = Vec::with_capacity(pages.len());
        for &page_num in pages.keys() {
            match doc.extract_text(&[page_num]) {
                Ok(raw) => page_texts.push(self.preprocessor.clean(&raw)),
                // Undecodable page: keep its slot, contribute no text
                Err(e) => {
                    tracing::warn!("Skipping text of page {}: {}", page_num, e);
                    page_texts.push(String::new());
                }
            }
        }

        let text = page_texts.join("\n").trim().to_string();
        if text.is_empty() {
            return Err(ExtractError::EmptyText);
        }
        Ok(text)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Write;

    /// Build a minimal PDF with one Courier text line per page.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let bytes = build_pdf(&["First page text", "Second page text"]);
        let text = PdfLoader::new().extract(&bytes).unwrap();

        let first = text.find("First page text").expect("page 1 missing");
        let second = text.find("Second page text").expect("page 2 missing");
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_blank_document_is_empty_text() {
        let bytes = build_pdf(&[""]);
        let err = PdfLoader::new().extract(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyText));
    }

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let err = PdfLoader::new().extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_other_extensions() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = PdfLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::NotPdf(_)));
    }

    #[test]
    fn test_load_reads_pdf_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
        file.write_all(&build_pdf(&["Hello from disk"])).unwrap();

        let doc = PdfLoader::new().load(file.path()).unwrap();
        assert!(doc.text.contains("Hello from disk"));
        assert!(doc.source.ends_with(".PDF"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = PdfLoader::new()
            .load(Path::new("/definitely/not/here.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
    }
}
