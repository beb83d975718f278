// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Adapters around on-disk artifacts produced or consumed by
// external libraries:
//
//   tokenizer_store.rs — stages the grapheme corpus, trains a
//                        BPE tokenizer with the `tokenizers`
//                        crate, saves and reloads it
//
//   checkpoint.rs      — G2P checkpoint directory layout:
//                        required files, optional decoding
//                        config, phoneme label list
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// G2P checkpoint path resolution and small-file loading
pub mod checkpoint;

/// Tokenizer training, saving, and loading
pub mod tokenizer_store;
