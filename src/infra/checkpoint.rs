// ============================================================
// Layer 6 — G2P Checkpoint Layout
// ============================================================
// A G2P checkpoint is a directory:
//
//   G2P-Conformer-CTC/
//     model.onnx        ← exported CTC network
//     tokenizer.json    ← grapheme tokenizer (train-tokenizer output)
//     vocab.txt         ← phoneme labels, one per line, logit order
//     g2p_config.json   ← optional decoding settings
//
// This module only resolves and validates paths and reads the
// small text/JSON files. The network itself is opened by the
// model adapter in ml/model.rs.
//
// Reference: Rust Book §9 (Error Handling)

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::{G2pError, ResultExt};

/// Typed paths for the files of one checkpoint.
#[derive(Debug, Clone)]
pub struct CheckpointPaths {
    pub root:      PathBuf,
    pub model:     PathBuf,
    pub tokenizer: PathBuf,
    pub vocab:     PathBuf,
    pub config:    PathBuf,
}

impl CheckpointPaths {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            root:      dir.to_path_buf(),
            model:     dir.join("model.onnx"),
            tokenizer: dir.join("tokenizer.json"),
            vocab:     dir.join("vocab.txt"),
            config:    dir.join("g2p_config.json"),
        }
    }

    /// Fail with `ModelNotFound` naming the first missing piece.
    /// `g2p_config.json` is optional and not checked.
    pub fn ensure_exists(&self) -> Result<(), G2pError> {
        if !self.root.exists() {
            return Err(G2pError::ModelNotFound(self.root.clone()));
        }
        for required in [&self.model, &self.tokenizer, &self.vocab] {
            if !required.exists() {
                return Err(G2pError::ModelNotFound(required.clone()));
            }
        }
        Ok(())
    }
}

/// Decoding settings stored alongside the network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct G2pCheckpointConfig {
    /// CTC blank id. Defaults to `labels.len()`.
    #[serde(default)]
    pub blank_index: Option<usize>,

    /// String placed between decoded phonemes. Defaults to "".
    #[serde(default)]
    pub phoneme_separator: Option<String>,
}

impl G2pCheckpointConfig {
    /// Read `path` if present, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, G2pError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).model_load("g2p_config.json")
    }
}

/// Read phoneme labels: one per line, surrounding whitespace trimmed,
/// trailing empty lines ignored.
pub fn load_labels(path: &Path) -> Result<Vec<String>, G2pError> {
    let contents = fs::read_to_string(path)?;
    let mut labels: Vec<String> = contents.lines().map(|l| l.trim().to_string()).collect();
    while labels.last().is_some_and(|l| l.is_empty()) {
        labels.pop();
    }
    if labels.is_empty() {
        return Err(G2pError::ModelLoad(format!(
            "no phoneme labels in '{}'",
            path.display()
        )));
    }
    Ok(labels)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_reported() {
        let paths = CheckpointPaths::from_dir("/nope/G2P-Conformer-CTC");
        let err   = paths.ensure_exists().unwrap_err();
        assert!(matches!(&err, G2pError::ModelNotFound(p) if p == Path::new("/nope/G2P-Conformer-CTC")));
    }

    #[test]
    fn test_missing_member_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.onnx"), b"").unwrap();
        fs::write(dir.path().join("tokenizer.json"), b"{}").unwrap();

        let err = CheckpointPaths::from_dir(dir.path()).ensure_exists().unwrap_err();
        assert!(err.to_string().contains("vocab.txt"));
    }

    #[test]
    fn test_complete_checkpoint_passes() {
        let dir = tempfile::tempdir().unwrap();
        for f in ["model.onnx", "tokenizer.json", "vocab.txt"] {
            fs::write(dir.path().join(f), b"").unwrap();
        }
        assert!(CheckpointPaths::from_dir(dir.path()).ensure_exists().is_ok());
    }

    #[test]
    fn test_config_defaults_when_absent() {
        let cfg = G2pCheckpointConfig::load_or_default(Path::new("/nope/g2p_config.json")).unwrap();
        assert_eq!(cfg, G2pCheckpointConfig::default());
    }

    #[test]
    fn test_config_partial_json() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("g2p_config.json");
        fs::write(&path, r#"{"blank_index": 0}"#).unwrap();

        let cfg = G2pCheckpointConfig::load_or_default(&path).unwrap();
        assert_eq!(cfg.blank_index, Some(0));
        assert!(cfg.phoneme_separator.is_none());
    }

    #[test]
    fn test_labels_trimmed() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "ɑ\nb\r\nd\n\n").unwrap();
        assert_eq!(load_labels(&path).unwrap(), vec!["ɑ", "b", "d"]);
    }

    #[test]
    fn test_empty_labels_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "\n").unwrap();
        assert!(matches!(load_labels(&path), Err(G2pError::ModelLoad(_))));
    }
}
