// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All inference-runtime code lives here. No other layer imports
// ort directly.
//
//   model.rs      — restores a CTC G2P checkpoint and runs it
//                   with ONNX Runtime (feature `onnx`)
//
//   ctc.rs        — greedy CTC decoding: argmax, collapse
//                   repeats, drop blanks, map to labels
//
//   inferencer.rs — report-and-continue wrapper used by the
//                   interactive and batch front ends
//
// Reference: ort crate documentation
//            Graves et al. (2006) CTC

/// Checkpoint loading and the ONNX Runtime adapter
pub mod model;

/// Greedy CTC decoder
pub mod ctc;

/// Prediction with recoverable error reporting
pub mod inferencer;
