// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Process-wide resources that don't belong to any one layer.
//
//   model_store.rs — builds the language model once and hands
//                    out a &'static reference to it
//
// Reference: once_cell crate documentation

/// One-time language model initialisation
pub mod model_store;
