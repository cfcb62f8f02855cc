// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the PDF on disk and the Document text
// the question generator reads:
//
//   .pdf file
//       │
//       ▼
//   PdfLoader         → parses the PDF, extracts page text
//       │
//       ▼
//   Preprocessor      → cleans each page (ligatures, spaces)
//       │
//       ▼
//   Document          → pages joined with '\n', trimmed
//
// preview.rs shortens the text for display.

/// Loads a .pdf file and extracts its text using lopdf
pub mod loader;

/// Cleans the raw text of one PDF page
pub mod preprocessor;

/// Truncated text preview shown after extraction
pub mod preview;
