// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to turn a PDF into a quiz.
//
// Rules for this layer:
//   - No parsing, tagging or PDF code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

/// Sentence selection and question building
pub mod question_generator;

/// Load → preview → generate workflow and its config
pub mod quiz_use_case;
