// ============================================================
// Layer 3 — Model Error Taxonomy
// ============================================================
// The batch utilities (split, train-tokenizer, convert) treat
// every failure as fatal and use anyhow. The inference side
// needs to tell two kinds of failure apart:
//
//   fatal       — the model could not be loaded; abort (exit 1)
//   recoverable — one conversion failed; report and continue
//
// G2pError carries that distinction.

use std::path::PathBuf;

/// Errors raised by a G2P model adapter.
#[derive(Debug, thiserror::Error)]
pub enum G2pError {
    /// Checkpoint path (or one of its required files) does not exist.
    #[error("model file not found at {}", .0.display())]
    ModelNotFound(PathBuf),

    /// Checkpoint exists but could not be restored.
    #[error("model load error: {0}")]
    ModelLoad(String),

    /// Tokenisation, runtime or decoding failure during conversion.
    #[error("inference error: {0}")]
    Inference(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl G2pError {
    /// Load-side failures end the process; everything else is
    /// reported and the caller carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, G2pError::ModelNotFound(_) | G2pError::ModelLoad(_))
    }
}

/// Extension trait to reduce `.map_err()` boilerplate when wrapping
/// foreign errors into `G2pError`.
pub trait ResultExt<T> {
    /// Wrap the error as [`G2pError::ModelLoad`] with `context` prefix.
    fn model_load(self, context: &str) -> Result<T, G2pError>;
    /// Wrap the error as [`G2pError::Inference`] with `context` prefix.
    fn inference(self, context: &str) -> Result<T, G2pError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn model_load(self, context: &str) -> Result<T, G2pError> {
        self.map_err(|e| G2pError::ModelLoad(format!("{context}: {e}")))
    }
    fn inference(self, context: &str) -> Result<T, G2pError> {
        self.map_err(|e| G2pError::Inference(format!("{context}: {e}")))
    }
}
