// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the G2P
// toolkit's core concepts:
//
//   record.rs — the JSON-lines manifest records shared by
//               the splitter, tokenizer trainer and model
//   traits.rs — capability interfaces for the two external
//               collaborators (tokenizer trainer, G2P model)
//   error.rs  — the typed error taxonomy of the model side
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizers / ONNX Runtime types
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Manifest record types
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Model error taxonomy
pub mod error;
