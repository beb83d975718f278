// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw TSV corpus and the JSON-lines
// manifests the model tooling consumes.
//
//   armenian_g2p_dataset.txt
//       │
//       ▼
//   TsvDatasetLoader   → skips header, parses lines
//       │
//       ▼
//   Preprocessor       → drops malformed lines, strips
//       │                whitespace from phonemes
//       ▼
//   split_train_val_test → seeded shuffle, 80/10/10 cut
//       │
//       ▼
//   manifest::write_manifest → train / val / test .json
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the tab-separated dataset file
pub mod loader;

/// Cleans and validates individual dataset lines
pub mod preprocessor;

/// Shuffles and splits records into train/val/test
pub mod splitter;

/// JSON-lines manifest reading and writing
pub mod manifest;
