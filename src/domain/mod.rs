// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the quiz generator.
//
// Rules for this layer:
//   - NO lopdf or rs-conllu types allowed here
//   - NO file I/O
//   - NO printing
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.

// The extracted text of one uploaded document
pub mod document;

// Quiz questions: fill-in-the-blank, main idea, placeholder
pub mod question;

// Core abstractions (traits) that other layers implement
pub mod traits;
