// ============================================================
// Layer 5 — CTC G2P Model (ONNX Runtime)
// ============================================================
// Restores a pretrained CTC grapheme-to-phoneme network from a
// checkpoint directory (see infra/checkpoint.rs) and exposes it
// through the G2pModel trait.
//
// Pipeline for one batch of words:
//
//   words ──tokenizer.json──▶ input_ids [B, T] (0-padded)
//                             input_lengths [B]
//         ──model.onnx─────▶ log-probs [B, T', V]
//         ──CtcDecoder─────▶ phoneme strings
//
// Frames past an item's token count are ignored.
//
// The ONNX Runtime backend is behind the `onnx` feature. Without
// it a checkpoint can be validated but not opened.

use std::path::Path;

use crate::domain::error::G2pError;
use crate::domain::traits::G2pModel;
use crate::infra::checkpoint::CheckpointPaths;

/// Restore the G2P model stored at `path`.
///
/// Fails with `ModelNotFound` before touching the runtime when the
/// directory or one of its required files is missing.
pub fn load_checkpoint(path: &Path) -> Result<Box<dyn G2pModel>, G2pError> {
    tracing::info!("Loading model from {}", path.display());

    let paths = CheckpointPaths::from_dir(path);
    paths.ensure_exists()?;

    let model = open(&paths)?;
    tracing::info!("Model loaded from '{}'", path.display());
    Ok(model)
}

#[cfg(feature = "onnx")]
fn open(paths: &CheckpointPaths) -> Result<Box<dyn G2pModel>, G2pError> {
    Ok(Box::new(onnx::OnnxCtcG2p::open(paths)?))
}

#[cfg(not(feature = "onnx"))]
fn open(paths: &CheckpointPaths) -> Result<Box<dyn G2pModel>, G2pError> {
    Err(G2pError::ModelLoad(format!(
        "cannot open '{}': built without the `onnx` feature",
        paths.model.display()
    )))
}

#[cfg(feature = "onnx")]
mod onnx {
    use ort::session::Session;
    use ort::value::Tensor;
    use tokenizers::Tokenizer;

    use crate::domain::error::{G2pError, ResultExt};
    use crate::domain::traits::G2pModel;
    use crate::infra::checkpoint::{load_labels, CheckpointPaths, G2pCheckpointConfig};
    use crate::ml::ctc::CtcDecoder;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    // Padding id for input_ids; matches the <pad> slot of the trained tokenizer
    const PAD_ID: i64 = 0;

    pub struct OnnxCtcG2p {
        session:   Session,
        tokenizer: Tokenizer,
        decoder:   CtcDecoder,
    }

    impl OnnxCtcG2p {
        pub fn open(paths: &CheckpointPaths) -> Result<Self, G2pError> {
            let config  = G2pCheckpointConfig::load_or_default(&paths.config)?;
            let labels  = load_labels(&paths.vocab)?;
            let decoder = CtcDecoder::new(labels, config.blank_index, config.phoneme_separator)?;

            let tokenizer = Tokenizer::from_file(&paths.tokenizer).model_load("tokenizer.json")?;
            let session   = open_session(&paths.model).model_load("model.onnx")?;

            tracing::debug!(
                "Checkpoint '{}': {} phoneme classes",
                paths.root.display(),
                decoder.num_classes()
            );
            Ok(Self { session, tokenizer, decoder })
        }

        fn convert_batch(&mut self, words: &[String]) -> Result<Vec<String>, G2pError> {
            let encodings = self
                .tokenizer
                .encode_batch(words.to_vec(), false)
                .inference("tokenize")?;

            let batch   = words.len();
            let lengths: Vec<usize> = encodings.iter().map(|e| e.get_ids().len()).collect();
            let max_len = lengths.iter().copied().max().unwrap_or(0).max(1);

            let mut input_ids = vec![PAD_ID; batch * max_len];
            for (i, enc) in encodings.iter().enumerate() {
                for (j, &id) in enc.get_ids().iter().enumerate() {
                    input_ids[i * max_len + j] = i64::from(id);
                }
            }
            let input_lengths: Vec<i64> = lengths.iter().map(|&l| l as i64).collect();

            let (dims, logprobs) = run_network(&mut self.session, input_ids, input_lengths, batch, max_len)
                .inference("onnx run")?;

            if dims.len() != 3 || dims[0] != batch {
                return Err(G2pError::Inference(format!("unexpected output shape: {dims:?}")));
            }
            let (frames, classes) = (dims[1], dims[2]);

            lengths
                .iter()
                .enumerate()
                .map(|(i, &len)| {
                    let base = i * frames * classes;
                    self.decoder
                        .decode(&logprobs[base..base + frames * classes], len.min(frames), classes)
                })
                .collect()
        }
    }

    impl G2pModel for OnnxCtcG2p {
        fn convert(&mut self, words: &[String], batch_size: usize) -> Result<Vec<String>, G2pError> {
            let mut out = Vec::with_capacity(words.len());
            for chunk in words.chunks(batch_size.max(1)) {
                out.extend(self.convert_batch(chunk)?);
                tracing::debug!("Converted {}/{} words", out.len(), words.len());
            }
            Ok(out)
        }
    }

    fn open_session(path: &std::path::Path) -> Result<Session, BoxError> {
        let session = Session::builder()?.commit_from_file(path)?;
        Ok(session)
    }

    /// Run the network and copy out output 0 as (shape, data).
    fn run_network(
        session:       &mut Session,
        input_ids:     Vec<i64>,
        input_lengths: Vec<i64>,
        batch:         usize,
        max_len:       usize,
    ) -> Result<(Vec<usize>, Vec<f32>), BoxError> {
        let ids_tensor = Tensor::<i64>::from_array(([batch, max_len], input_ids))?;
        let len_tensor = Tensor::<i64>::from_array(([batch], input_lengths))?;

        let outputs = session.run(ort::inputs![ids_tensor, len_tensor])?;
        let (shape, data) = outputs[0].try_extract_tensor::<f32>()?;

        let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
        Ok((dims, data.to_vec()))
    }
}
