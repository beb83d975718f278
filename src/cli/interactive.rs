// ============================================================
// Layer 1 — Interactive Session
// ============================================================
// Read-print loop used by `infer` when no words are given.
//
//   <word>   convert one word, print the first result
//   batch    collect words (one per line) until `done`,
//            then convert them in a single call
//   exit     leave the loop
//   <empty>  ignored
//
// Commands are case-insensitive. End of input or Ctrl-C ends
// the session cleanly with "Exiting..." and status 0. A failed
// prediction prints nothing and the loop continues.
//
// Input and output are generic so tests can drive the session
// with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::process;

use crate::cli::print_pairs;
use crate::ml::inferencer::Inferencer;

pub struct InteractiveSession<'a, R: BufRead, W: Write> {
    inferencer: Inferencer<'a>,
    input:      R,
    out:        W,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(inferencer: Inferencer<'a>, input: R, out: W) -> Self {
        Self { inferencer, input, out }
    }

    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== Armenian Grapheme-to-Phoneme Converter ===")?;
        writeln!(self.out, "Enter words to convert to phonemes. Type 'exit' to quit.")?;
        writeln!(self.out, "Type 'batch' to enter batch mode for multiple words.")?;

        loop {
            write!(self.out, "\nEnter a word (or 'exit'/'batch'): ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                exit_notice(&mut self.out)?;
                break;
            };
            let entry = line.trim();

            if entry.eq_ignore_ascii_case("exit") {
                break;
            }

            if entry.eq_ignore_ascii_case("batch") {
                if self.batch_mode()? {
                    continue;
                }
                exit_notice(&mut self.out)?;
                break;
            }

            if entry.is_empty() {
                continue;
            }

            let words = vec![entry.to_string()];
            if let Some(phonemes) = self.inferencer.predict(&words) {
                print_pairs(&mut self.out, &words[..1], &phonemes[..1])?;
            }
        }
        Ok(())
    }

    /// Collect words until `done`. Returns false when input ended
    /// before `done`; whatever was collected is still converted.
    fn batch_mode(&mut self) -> io::Result<bool> {
        writeln!(self.out, "Enter words (one per line). Type 'done' when finished:")?;
        self.out.flush()?;

        let mut words: Vec<String> = Vec::new();
        let mut more_input = true;
        loop {
            let Some(line) = self.read_line()? else {
                more_input = false;
                break;
            };
            let word = line.trim();
            if word.eq_ignore_ascii_case("done") {
                break;
            }
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        if !words.is_empty() {
            if let Some(phonemes) = self.inferencer.predict(&words) {
                print_pairs(&mut self.out, &words, &phonemes)?;
            }
        }
        Ok(more_input)
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }
}

// ─── Ctrl-C ──────────────────────────────────────────────────────────────────

/// Install the SIGINT handler for an interactive session.
///
/// The main thread is parked in a stdin read that the standard
/// library retries on EINTR, so the handler prints the exit notice
/// and ends the process itself. Stdout must not be held locked
/// across the session or the notice would block.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let _ = exit_notice(&mut io::stdout());
        process::exit(0);
    })
}

fn exit_notice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nExiting...")?;
    out.flush()
}
