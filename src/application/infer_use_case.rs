// ============================================================
// Layer 2 — Inference Use Cases
// ============================================================
// Two workflows share a loaded G2P model:
//
//   InferUseCase   — words in, phoneme strings out
//                    (batch mode; the interactive loop in
//                    Layer 1 drives it one request at a time)
//
//   ConvertUseCase — the model's manifest conversion routine:
//                    reads a grapheme manifest, writes one
//                    prediction record per input line
//
// Model loading is split out so the caller can decide how to
// react to a fatal load error (exit 1) before any work starts.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::split_use_case::TEST_MANIFEST;
use crate::data::manifest::{read_manifest, write_manifest};
use crate::domain::error::G2pError;
use crate::domain::record::{GraphemeRecord, PredictionRecord};
use crate::domain::traits::G2pModel;
use crate::ml::inferencer::Inferencer;
use crate::ml::model::load_checkpoint;

pub const DEFAULT_MODEL_PATH: &str = "checkpoints/G2P-Conformer-CTC";
pub const DEFAULT_BATCH_SIZE: usize = 32;
pub const PREDICTIONS_MANIFEST: &str = "armenian_g2p_test_predictions.json";

// ─── Inference Configuration ─────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferConfig {
    pub model:      PathBuf,
    pub words:      Vec<String>,
    pub batch_size: usize,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            model:      PathBuf::from(DEFAULT_MODEL_PATH),
            words:      Vec::new(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

// ─── InferUseCase ────────────────────────────────────────────────────────────
pub struct InferUseCase {
    config: InferConfig,
}

impl InferUseCase {
    pub fn new(config: InferConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferConfig {
        &self.config
    }

    /// No words on the command line means interactive mode.
    pub fn is_interactive(&self) -> bool {
        self.config.words.is_empty()
    }

    pub fn load_model(&self) -> Result<Box<dyn G2pModel>, G2pError> {
        load_checkpoint(&self.config.model)
    }

    /// Convert the configured words in one call. `None` when the
    /// prediction failed (already reported).
    pub fn predict_words(&self, model: &mut dyn G2pModel) -> Option<Vec<String>> {
        Inferencer::new(model, self.config.batch_size).predict(&self.config.words)
    }
}

// ─── Conversion Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub model:           PathBuf,
    pub input_manifest:  PathBuf,
    pub output_manifest: PathBuf,
    pub batch_size:      usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            model:           PathBuf::from(DEFAULT_MODEL_PATH),
            input_manifest:  PathBuf::from(TEST_MANIFEST),
            output_manifest: PathBuf::from(PREDICTIONS_MANIFEST),
            batch_size:      DEFAULT_BATCH_SIZE,
        }
    }
}

// ─── ConvertUseCase ──────────────────────────────────────────────────────────
pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn load_model(&self) -> Result<Box<dyn G2pModel>, G2pError> {
        load_checkpoint(&self.config.model)
    }

    /// Convert every record of the input manifest. Any failure is
    /// fatal here. Returns the number of records written.
    pub fn execute(&self, model: &mut dyn G2pModel) -> Result<usize> {
        let cfg = &self.config;

        let inputs: Vec<GraphemeRecord> = read_manifest(&cfg.input_manifest)?;
        let words: Vec<String> = inputs.iter().map(|r| r.text_graphemes.clone()).collect();

        let phonemes = Inferencer::new(model, cfg.batch_size).try_predict(&words)?;

        let outputs: Vec<PredictionRecord> = inputs
            .into_iter()
            .zip(phonemes)
            .map(|(input, pred)| PredictionRecord::from_input(input, pred))
            .collect();

        let written = write_manifest(&cfg.output_manifest, &outputs)?;
        tracing::info!(
            "Wrote {} predictions to '{}'",
            written,
            cfg.output_manifest.display()
        );
        Ok(written)
    }
}
