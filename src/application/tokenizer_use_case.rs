// ============================================================
// Layer 2 — TrainTokenizerUseCase
// ============================================================
// Orchestrates tokenizer training:
//
//   Step 1: Extract text_graphemes into a corpus file (Layer 6)
//   Step 2: Train BPE on the corpus                   (Layer 6)
//   Step 3: Optional self-test on sample words        (Layer 6)
//
// The trainer is an external collaborator reached through the
// TokenizerTrainer trait; this use case only stages its input
// and surfaces the output path.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::traits::TokenizerTrainer;
use crate::infra::tokenizer_store::{
    encode_samples, extract_corpus, load_tokenizer, BpeSettings, BpeTokenizerTrainer,
    EncodedSample,
};

/// Words encoded by the self-test.
pub const SELF_TEST_SAMPLES: [&str; 3] = ["աբա", "Աբադան", "հայաստան"];

// ─── Tokenizer Configuration ─────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub manifest:    PathBuf,
    pub corpus_file: PathBuf,
    pub output_dir:  PathBuf,
    pub prefix:      String,
    pub vocab_size:  usize,
    pub self_test:   bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            manifest:    PathBuf::from("armenian_g2p_train_manifest.json"),
            corpus_file: PathBuf::from("armenian_tokenizer_input.txt"),
            output_dir:  PathBuf::from("tokenizer"),
            prefix:      "armenian_g2p".to_string(),
            vocab_size:  BpeSettings::default().vocab_size,
            self_test:   true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenizerReport {
    pub corpus_lines: usize,
    pub model_path:   PathBuf,
    pub samples:      Vec<EncodedSample>,
}

// ─── TrainTokenizerUseCase ───────────────────────────────────────────────────
pub struct TrainTokenizerUseCase {
    config: TokenizerConfig,
}

impl TrainTokenizerUseCase {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<TokenizerReport> {
        let cfg = &self.config;

        // ── Step 1: Stage corpus ─────────────────────────────────────────────
        let corpus_lines = extract_corpus(&cfg.manifest, &cfg.corpus_file)?;

        // ── Step 2: Train ────────────────────────────────────────────────────
        let settings = BpeSettings {
            vocab_size: cfg.vocab_size,
            ..BpeSettings::default()
        };
        let trainer    = BpeTokenizerTrainer::new(&cfg.output_dir, &cfg.prefix, settings);
        let model_path = trainer.train(&cfg.corpus_file)?;

        // ── Step 3: Self-test ────────────────────────────────────────────────
        let samples = if cfg.self_test {
            let tokenizer = load_tokenizer(&model_path)?;
            encode_samples(&tokenizer, &SELF_TEST_SAMPLES)?
        } else {
            Vec::new()
        };

        Ok(TokenizerReport { corpus_lines, model_path, samples })
    }
}
