// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads the raw tab-separated G2P corpus:
//
//   grapheme<TAB>phoneme      ← header, always discarded
//   աբա<TAB>ɑ b ɑ
//   Աբադան<TAB>ɑ b ɑ d ɑ n
//   ...
//
// Each remaining line goes through the Preprocessor. Malformed
// lines are dropped without surfacing an error; only their count
// is logged at debug level.
//
// A missing file or invalid UTF-8 is fatal and propagates.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::record::ManifestRecord;
use crate::domain::traits::DatasetSource;

/// Loads a `grapheme<TAB>phoneme` file with a one-line header.
pub struct TsvDatasetLoader {
    path:         PathBuf,
    preprocessor: Preprocessor,
}

impl TsvDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:         path.into(),
            preprocessor: Preprocessor::new(),
        }
    }

    /// Parse already-read file contents. Split out so tests can
    /// feed strings directly.
    pub fn parse(&self, contents: &str) -> Vec<ManifestRecord> {
        let mut total   = 0usize;
        let mut records = Vec::new();

        // skip(1): first line is the header
        for line in contents.lines().skip(1) {
            total += 1;
            if let Some(rec) = self.preprocessor.parse_line(line) {
                records.push(rec);
            }
        }

        tracing::debug!(
            "Parsed {} lines: {} valid, {} skipped",
            total,
            records.len(),
            total - records.len()
        );
        records
    }
}

impl DatasetSource for TsvDatasetLoader {
    fn load_all(&self) -> Result<Vec<ManifestRecord>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read dataset '{}'", self.path.display()))?;

        let records = self.parse(&contents);
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
