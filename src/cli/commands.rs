// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   split            TSV dataset → train/val/test manifests
//   train-tokenizer  manifest → BPE tokenizer
//   infer            words → phonemes (batch or interactive)
//   convert          grapheme manifest → prediction manifest
//
// Every flag has a default so each utility runs bare from the
// project directory.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::infer_use_case::{
    ConvertConfig, InferConfig, DEFAULT_BATCH_SIZE, DEFAULT_MODEL_PATH,
};
use crate::application::split_use_case::SplitConfig;
use crate::application::tokenizer_use_case::TokenizerConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a tab-separated grapheme/phoneme dataset into JSON-lines manifests
    Split(SplitArgs),

    /// Train a BPE tokenizer on the graphemes of a manifest
    TrainTokenizer(TrainTokenizerArgs),

    /// Convert words to phonemes with a pretrained CTC model
    Infer(InferArgs),

    /// Convert every record of a grapheme manifest into a prediction manifest
    Convert(ConvertArgs),
}

// ─── split ───────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Tab-separated dataset; the first line is a header
    #[arg(long, default_value = "armenian_g2p_dataset.txt")]
    pub input: PathBuf,

    /// Directory receiving the three manifest files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// RNG seed for the shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input:      a.input,
            output_dir: a.output_dir,
            seed:       a.seed,
        }
    }
}

// ─── train-tokenizer ─────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct TrainTokenizerArgs {
    /// Manifest whose `text_graphemes` form the training corpus
    #[arg(long, default_value = "armenian_g2p_train_manifest.json")]
    pub manifest: PathBuf,

    /// Plain-text corpus written before training
    #[arg(long, default_value = "armenian_tokenizer_input.txt")]
    pub corpus_file: PathBuf,

    /// Directory for the trained tokenizer
    #[arg(long, default_value = "tokenizer")]
    pub output_dir: PathBuf,

    /// File name prefix of the trained tokenizer
    #[arg(long, default_value = "armenian_g2p")]
    pub prefix: String,

    /// Target vocabulary size, special tokens included
    #[arg(long, default_value_t = 1000)]
    pub vocab_size: usize,

    /// Skip encoding the sample words after training
    #[arg(long)]
    pub no_self_test: bool,
}

impl From<TrainTokenizerArgs> for TokenizerConfig {
    fn from(a: TrainTokenizerArgs) -> Self {
        TokenizerConfig {
            manifest:    a.manifest,
            corpus_file: a.corpus_file,
            output_dir:  a.output_dir,
            prefix:      a.prefix,
            vocab_size:  a.vocab_size,
            self_test:   !a.no_self_test,
        }
    }
}

// ─── infer ───────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Path to the G2P checkpoint directory
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Words to convert. If none are given, runs in interactive mode
    #[arg(long, num_args = 0..)]
    pub words: Vec<String>,

    /// Batch size for prediction
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl From<InferArgs> for InferConfig {
    fn from(a: InferArgs) -> Self {
        InferConfig {
            model:      a.model,
            words:      a.words,
            batch_size: a.batch_size,
        }
    }
}

// ─── convert ─────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the G2P checkpoint directory
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Manifest with a `text_graphemes` field on every line
    #[arg(long)]
    pub input_manifest: PathBuf,

    /// Where to write the prediction manifest
    #[arg(long)]
    pub output_manifest: PathBuf,

    /// Batch size for prediction
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            model:           a.model,
            input_manifest:  a.input_manifest,
            output_manifest: a.output_manifest,
            batch_size:      a.batch_size,
        }
    }
}
