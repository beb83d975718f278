// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates the dataset → manifests pipeline:
//
//   Step 1: Load + clean the TSV dataset   (Layer 4 - data)
//   Step 2: Seeded shuffle, 80/10/10 cut   (Layer 4 - data)
//   Step 3: Write three JSON-lines files   (Layer 4 - data)
//   Step 4: Read back the first lines      (Layer 4 - data)
//
// Returns a SplitReport; printing is Layer 1's job.
// Any I/O failure is fatal and propagates.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::{
    loader::TsvDatasetLoader,
    manifest::{preview, write_manifest},
    splitter::{split_train_val_test, SplitRatios, DEFAULT_SEED},
};
use crate::domain::traits::DatasetSource;

pub const TRAIN_MANIFEST: &str = "armenian_g2p_train_manifest.json";
pub const VAL_MANIFEST:   &str = "armenian_g2p_val_manifest.json";
pub const TEST_MANIFEST:  &str = "armenian_g2p_test_manifest.json";

/// Lines shown per output file for manual verification.
const PREVIEW_LINES: usize = 3;

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input:      PathBuf,
    pub output_dir: PathBuf,
    pub seed:       u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input:      PathBuf::from("armenian_g2p_dataset.txt"),
            output_dir: PathBuf::from("."),
            seed:       DEFAULT_SEED,
        }
    }
}

// ─── Report ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    pub name:    &'static str,
    pub path:    PathBuf,
    pub count:   usize,
    pub preview: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SplitReport {
    pub total:      usize,
    pub partitions: Vec<PartitionSummary>,
}

// ─── SplitUseCase ────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        // ── Step 1: Load dataset ─────────────────────────────────────────────
        let records = TsvDatasetLoader::new(&cfg.input).load_all()?;

        // ── Step 2: Shuffle + split ──────────────────────────────────────────
        let parts = split_train_val_test(records, cfg.seed, SplitRatios::default());
        let total = parts.total();
        tracing::info!(
            "Split {} records (seed {}): {} train, {} val, {} test",
            total,
            cfg.seed,
            parts.train.len(),
            parts.val.len(),
            parts.test.len()
        );

        // ── Step 3: Write manifests ──────────────────────────────────────────
        fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("Cannot create '{}'", cfg.output_dir.display()))?;

        let mut partitions = Vec::with_capacity(3);
        for (name, file, records) in [
            ("Training",   TRAIN_MANIFEST, &parts.train),
            ("Validation", VAL_MANIFEST,   &parts.val),
            ("Test",       TEST_MANIFEST,  &parts.test),
        ] {
            let path  = cfg.output_dir.join(file);
            let count = write_manifest(&path, records)?;
            tracing::info!("Converted dataset saved to {}", path.display());

            // ── Step 4: Preview ──────────────────────────────────────────────
            let preview = preview(&path, PREVIEW_LINES)?;
            partitions.push(PartitionSummary { name, path, count, preview });
        }

        Ok(SplitReport { total, partitions })
    }
}
