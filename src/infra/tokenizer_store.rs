// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Stages a grapheme corpus for the BPE trainer, trains it,
// saves the result and loads it back for sanity checks.
//
// Training is entirely delegated to the `tokenizers` crate.
// Fixed configuration:
//
//   model              BPE
//   vocab_size         1000
//   alphabet           unlimited (every character in the corpus)
//   normalizer         none — Armenian script passes through
//                      untouched (no case folding, no NFC/NFKC)
//   pre-tokenizer      Metaspace ("▁" marks word starts)
//   max piece length   16 characters
//   special tokens     <pad>=0  <unk>=1  <s>=2  </s>=3
//
// The trainer inserts special tokens before the alphabet, so
// the order of SPECIAL_TOKENS is the order of their ids.
//
// Output: <dir>/<prefix>.json in the tokenizers serialization.
//
// Reference: Sennrich et al. (2016) BPE paper
//            tokenizers crate documentation

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tokenizers::{
    decoders::DecoderWrapper,
    models::bpe::{BpeTrainerBuilder, BPE},
    normalizers::NormalizerWrapper,
    pre_tokenizers::{metaspace::Metaspace, PreTokenizerWrapper},
    processors::PostProcessorWrapper,
    AddedToken, Tokenizer, TokenizerBuilder, TokenizerImpl,
};

use crate::data::manifest::read_manifest;
use crate::domain::record::GraphemeRecord;
use crate::domain::traits::TokenizerTrainer;

/// Reserved tokens, in id order.
pub const SPECIAL_TOKENS: [&str; 4] = ["<pad>", "<unk>", "<s>", "</s>"];

pub const UNK_TOKEN: &str = "<unk>";

type BpeTokenizer = TokenizerImpl<
    BPE,
    NormalizerWrapper,
    PreTokenizerWrapper,
    PostProcessorWrapper,
    DecoderWrapper,
>;

// ─── Corpus staging ──────────────────────────────────────────────────────────

/// Read `text_graphemes` from every manifest record and write them
/// newline-joined to `corpus_path`. Returns the number of lines.
pub fn extract_corpus(manifest: &Path, corpus_path: &Path) -> Result<usize> {
    let records: Vec<GraphemeRecord> = read_manifest(manifest)?;
    let texts: Vec<&str> = records.iter().map(|r| r.text_graphemes.as_str()).collect();

    if let Some(parent) = corpus_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }
    }
    fs::write(corpus_path, texts.join("\n"))
        .with_context(|| format!("Cannot write corpus '{}'", corpus_path.display()))?;

    tracing::info!(
        "Extracted {} utterances from '{}' into '{}'",
        texts.len(),
        manifest.display(),
        corpus_path.display()
    );
    Ok(texts.len())
}

// ─── BpeTokenizerTrainer ─────────────────────────────────────────────────────

/// BPE trainer settings. Defaults are the fixed G2P configuration.
#[derive(Debug, Clone)]
pub struct BpeSettings {
    pub vocab_size:       usize,
    pub max_token_length: usize,
}

impl Default for BpeSettings {
    fn default() -> Self {
        Self {
            vocab_size:       1000,
            max_token_length: 16,
        }
    }
}

pub struct BpeTokenizerTrainer {
    dir:      PathBuf,
    prefix:   String,
    settings: BpeSettings,
}

impl BpeTokenizerTrainer {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, settings: BpeSettings) -> Self {
        Self {
            dir:      dir.into(),
            prefix:   prefix.into(),
            settings,
        }
    }

    /// Where the trained model is (or will be) written.
    pub fn model_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.prefix))
    }

    fn build_tokenizer(&self) -> Result<BpeTokenizer> {
        let model = BPE::builder()
            .unk_token(UNK_TOKEN.to_string())
            .build()
            .map_err(|e| anyhow::anyhow!("Cannot build BPE model: {e}"))?;

        TokenizerBuilder::new()
            .with_model(model)
            .with_normalizer(None)
            .with_pre_tokenizer(Some(Metaspace::default().into()))
            .with_post_processor(None)
            .with_decoder(Some(Metaspace::default().into()))
            .build()
            .map_err(|e| anyhow::anyhow!("Cannot assemble tokenizer: {e}"))
    }
}

impl TokenizerTrainer for BpeTokenizerTrainer {
    fn train(&self, corpus: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let special: Vec<AddedToken> = SPECIAL_TOKENS
            .iter()
            .map(|t| AddedToken::from(t.to_string(), true))
            .collect();

        let mut trainer = BpeTrainerBuilder::new()
            .show_progress(false)
            .vocab_size(self.settings.vocab_size)
            .min_frequency(0)
            .max_token_length(Some(self.settings.max_token_length))
            .special_tokens(special)
            .build();

        tracing::info!(
            "Training BPE tokenizer (vocab_size={}) on '{}'",
            self.settings.vocab_size,
            corpus.display()
        );

        let mut tokenizer = self.build_tokenizer()?;
        let corpus_file   = corpus.to_string_lossy().into_owned();
        tokenizer
            .train_from_files(&mut trainer, vec![corpus_file])
            .map_err(|e| anyhow::anyhow!("BPE training failed on '{}': {e}", corpus.display()))?;

        let path = self.model_path();
        tokenizer
            .save(&path, false)
            .map_err(|e| anyhow::anyhow!("Cannot save tokenizer to '{}': {e}", path.display()))?;

        tracing::info!(
            "Tokenizer trained with {} entries, saved to '{}'",
            tokenizer.get_vocab_size(true),
            path.display()
        );
        Ok(path)
    }
}

// ─── Loading and self-test ───────────────────────────────────────────────────

/// Load a previously saved tokenizer.
pub fn load_tokenizer(path: &Path) -> Result<Tokenizer> {
    Tokenizer::from_file(path)
        .map_err(|e| anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e))
}

/// One sample run through the tokenizer.
#[derive(Debug, Clone)]
pub struct EncodedSample {
    pub text:   String,
    pub pieces: Vec<String>,
    pub ids:    Vec<u32>,
}

/// Encode each sample without special tokens.
pub fn encode_samples(tokenizer: &Tokenizer, samples: &[&str]) -> Result<Vec<EncodedSample>> {
    samples
        .iter()
        .map(|text| {
            let enc = tokenizer
                .encode(*text, false)
                .map_err(|e| anyhow::anyhow!("Cannot encode '{text}': {e}"))?;
            Ok(EncodedSample {
                text:   text.to_string(),
                pieces: enc.get_tokens().to_vec(),
                ids:    enc.get_ids().to_vec(),
            })
        })
        .collect()
}
