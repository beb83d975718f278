// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The heavy lifting in this toolkit (BPE training, the CTC
// model) belongs to external libraries. Each one sits behind
// a trait here so the application layer only sees the
// capability, never the library:
//
//   DatasetSource    — TsvDatasetLoader (data/loader.rs)
//   TokenizerTrainer — BpeTokenizerTrainer (infra/tokenizer_store.rs)
//   G2pModel         — OnnxCtcG2p (ml/model.rs)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::domain::error::G2pError;
use crate::domain::record::ManifestRecord;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce labelled grapheme/phoneme records.
pub trait DatasetSource {
    /// Load every valid record, in source order.
    fn load_all(&self) -> Result<Vec<ManifestRecord>>;
}

// ─── TokenizerTrainer ─────────────────────────────────────────────────────────
/// Trains a subword tokenizer from a plain-text corpus
/// (one utterance per line) and returns the model file path.
pub trait TokenizerTrainer {
    fn train(&self, corpus: &Path) -> Result<PathBuf>;
}

// ─── G2pModel ─────────────────────────────────────────────────────────────────
/// Batch grapheme-to-phoneme conversion.
///
/// Returns one phoneme string per input word, in input order.
/// `&mut self` because runtime sessions need exclusive access
/// while they run.
pub trait G2pModel {
    fn convert(&mut self, words: &[String], batch_size: usize) -> Result<Vec<String>, G2pError>;
}
