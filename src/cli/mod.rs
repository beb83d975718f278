// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands off to the Layer 2 use
// cases, and prints their results. All user-facing output
// lives here; diagnostics go through tracing (stderr).
//
// Exit status:
//   0 — work completed (a failed single prediction still counts)
//   1 — model failed to load, or any error reached the top
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod interactive;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::application::infer_use_case::{ConvertUseCase, InferUseCase};
use crate::application::split_use_case::{SplitReport, SplitUseCase};
use crate::application::tokenizer_use_case::{TokenizerReport, TrainTokenizerUseCase};
use crate::data::splitter::percentage;
use crate::domain::error::G2pError;
use crate::ml::inferencer::Inferencer;
use commands::{Commands, ConvertArgs, InferArgs, SplitArgs, TrainTokenizerArgs};
use interactive::{install_interrupt_handler, InteractiveSession};

#[derive(Parser, Debug)]
#[command(
    name = "armenian-g2p",
    version,
    about = "Prepare manifests, train a BPE tokenizer and run CTC inference for Armenian G2P."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How a command finished, when it did not error out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    ModelLoadFailed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::ModelLoadFailed => ExitCode::FAILURE,
        }
    }
}

impl Cli {
    /// Dispatch to the selected subcommand using the real
    /// stdin/stdout.
    pub fn run(self) -> Result<Outcome> {
        let stdin  = io::stdin();
        let stdout = io::stdout();
        match self.command {
            Commands::Split(args)          => run_split(args, stdout.lock()),
            Commands::TrainTokenizer(args) => run_train_tokenizer(args, stdout.lock()),
            // stdout stays unlocked so the Ctrl-C handler can print
            Commands::Infer(args)          => run_infer(args, stdin.lock(), stdout),
            Commands::Convert(args)        => run_convert(args, stdout.lock()),
        }
    }
}

// ─── split ───────────────────────────────────────────────────────────────────
fn run_split<W: Write>(args: SplitArgs, mut out: W) -> Result<Outcome> {
    tracing::info!("Splitting dataset '{}'", args.input.display());
    let report = SplitUseCase::new(args.into()).execute()?;
    print_split_report(&mut out, &report)?;
    Ok(Outcome::Completed)
}

fn print_split_report<W: Write>(out: &mut W, report: &SplitReport) -> io::Result<()> {
    for part in &report.partitions {
        writeln!(out, "Converted dataset saved to {}", part.path.display())?;
        writeln!(out, "Total entries: {}", part.count)?;
    }

    writeln!(out, "\nDataset Split:")?;
    writeln!(out, "Total entries: {}", report.total)?;
    for part in &report.partitions {
        writeln!(
            out,
            "{} set: {} ({:.2}%)",
            part.name,
            part.count,
            percentage(part.count, report.total)
        )?;
    }

    writeln!(out, "\nVerifying output files:")?;
    for part in &report.partitions {
        writeln!(out, "\nFirst 3 entries in {}:", part.path.display())?;
        for line in &part.preview {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

// ─── train-tokenizer ─────────────────────────────────────────────────────────
fn run_train_tokenizer<W: Write>(args: TrainTokenizerArgs, mut out: W) -> Result<Outcome> {
    tracing::info!("Training tokenizer from '{}'", args.manifest.display());
    let report = TrainTokenizerUseCase::new(args.into()).execute()?;
    print_tokenizer_report(&mut out, &report)?;
    Ok(Outcome::Completed)
}

fn print_tokenizer_report<W: Write>(out: &mut W, report: &TokenizerReport) -> io::Result<()> {
    writeln!(out, "Corpus lines: {}", report.corpus_lines)?;
    writeln!(out, "Tokenizer model saved at {}", report.model_path.display())?;
    writeln!(out, "\nUse this path in your model configuration:")?;
    writeln!(out, "model.tokenizer.dir={}", report.model_path.display())?;

    for sample in &report.samples {
        writeln!(out, "\nOriginal: {}", sample.text)?;
        writeln!(out, "Tokenized: {:?}", sample.pieces)?;
        writeln!(out, "Piece IDs: {:?}", sample.ids)?;
    }
    Ok(())
}

// ─── infer ───────────────────────────────────────────────────────────────────
fn run_infer<R: BufRead, W: Write>(args: InferArgs, input: R, mut out: W) -> Result<Outcome> {
    let use_case = InferUseCase::new(args.into());

    writeln!(out, "Loading model from {}...", use_case.config().model.display())?;
    let mut model = match use_case.load_model() {
        Ok(m) => m,
        Err(e) if e.is_fatal() => {
            report_load_failure(&mut out, &e)?;
            return Ok(Outcome::ModelLoadFailed);
        }
        Err(e) => return Err(e.into()),
    };
    writeln!(out, "Model loaded successfully!")?;

    if use_case.is_interactive() {
        install_interrupt_handler().context("Cannot install the Ctrl-C handler")?;
        let inferencer = Inferencer::new(model.as_mut(), use_case.config().batch_size);
        InteractiveSession::new(inferencer, input, out).run()?;
    } else if let Some(phonemes) = use_case.predict_words(model.as_mut()) {
        print_pairs(&mut out, &use_case.config().words, &phonemes)?;
    }
    Ok(Outcome::Completed)
}

// ─── convert ─────────────────────────────────────────────────────────────────
fn run_convert<W: Write>(args: ConvertArgs, mut out: W) -> Result<Outcome> {
    let use_case = ConvertUseCase::new(args.into());

    let mut model = match use_case.load_model() {
        Ok(m) => m,
        Err(e) if e.is_fatal() => {
            report_load_failure(&mut out, &e)?;
            return Ok(Outcome::ModelLoadFailed);
        }
        Err(e) => return Err(e.into()),
    };

    let written = use_case.execute(model.as_mut())?;
    writeln!(out, "Converted {written} records")?;
    Ok(Outcome::Completed)
}

fn report_load_failure<W: Write>(out: &mut W, e: &G2pError) -> io::Result<()> {
    tracing::error!("Full error details: {:?}", e);
    writeln!(out, "Error: {e}")?;
    writeln!(out, "Failed to load the model. Exiting.")
}

/// Print `Grapheme:`/`Phonemes:` pairs.
pub fn print_pairs<W: Write>(out: &mut W, words: &[String], phonemes: &[String]) -> io::Result<()> {
    for (word, phoneme) in words.iter().zip(phonemes) {
        writeln!(out, "\nGrapheme: {word}")?;
        writeln!(out, "Phonemes: {phoneme}")?;
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn infer_args(model: &str, words: &[&str]) -> InferArgs {
        InferArgs {
            model:      PathBuf::from(model),
            words:      words.iter().map(|w| w.to_string()).collect(),
            batch_size: 32,
        }
    }

    #[test]
    fn test_cli_parses_infer_words() {
        let cli = Cli::try_parse_from([
            "armenian-g2p", "infer", "--model", "ckpt", "--words", "աբա", "հայ", "--batch-size", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Infer(a) => {
                assert_eq!(a.model, PathBuf::from("ckpt"));
                assert_eq!(a.words, vec!["աբա", "հայ"]);
                assert_eq!(a.batch_size, 4);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_infer_defaults() {
        let cli = Cli::try_parse_from(["armenian-g2p", "infer"]).unwrap();
        match cli.command {
            Commands::Infer(a) => {
                assert!(a.words.is_empty());
                assert_eq!(a.batch_size, 32);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_split_defaults() {
        let cli = Cli::try_parse_from(["armenian-g2p", "split"]).unwrap();
        match cli.command {
            Commands::Split(a) => {
                assert_eq!(a.input, PathBuf::from("armenian_g2p_dataset.txt"));
                assert_eq!(a.seed, 42);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_invalid_model_path_fails_with_message() {
        let mut out = Vec::new();
        let outcome = run_infer(
            infer_args("/no/such/checkpoint", &["աբա"]),
            "".as_bytes(),
            &mut out,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::ModelLoadFailed);
        assert_eq!(
            format!("{:?}", outcome.exit_code()),
            format!("{:?}", ExitCode::FAILURE)
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/no/such/checkpoint"));
        assert!(text.contains("Failed to load the model"));
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(
            format!("{:?}", Outcome::Completed.exit_code()),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", Outcome::ModelLoadFailed.exit_code()),
            format!("{:?}", ExitCode::FAILURE)
        );
    }

    #[test]
    fn test_convert_invalid_model_path() {
        let mut out = Vec::new();
        let args = ConvertArgs {
            model:           PathBuf::from("/no/such/checkpoint"),
            input_manifest:  PathBuf::from("in.json"),
            output_manifest: PathBuf::from("out.json"),
            batch_size:      32,
        };
        assert_eq!(run_convert(args, &mut out).unwrap(), Outcome::ModelLoadFailed);
    }

    #[test]
    fn test_split_prints_counts_and_previews() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        let mut body = String::from("g\tp\n");
        for i in 0..10 {
            body.push_str(&format!("w{i}\tp {i}\n"));
        }
        fs::write(&input, body).unwrap();

        let mut out = Vec::new();
        let args = SplitArgs {
            input,
            output_dir: dir.path().to_path_buf(),
            seed:       42,
        };
        assert_eq!(run_split(args, &mut out).unwrap(), Outcome::Completed);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Training set: 8 (80.00%)"));
        assert!(text.contains("Validation set: 1 (10.00%)"));
        assert!(text.contains("Test set: 1 (10.00%)"));
        assert!(text.contains("First 3 entries in"));
    }

    #[test]
    fn test_print_pairs() {
        let mut out = Vec::new();
        print_pairs(&mut out, &["աբա".to_string()], &["ɑbɑ".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nGrapheme: աբա\nPhonemes: ɑbɑ\n");
    }
}
