// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case orchestrates the other layers for one utility.
//
// Rules for this layer:
//   - No model runtime code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and config types
//
// The three utilities are independent; they only share the
// manifest format.

// Dataset → train/val/test manifests
pub mod split_use_case;

// Manifest → BPE tokenizer
pub mod tokenizer_use_case;

// Checkpoint → phoneme predictions
pub mod infer_use_case;
