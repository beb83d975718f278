// ============================================================
// Layer 4 — Line Preprocessor
// ============================================================
// Turns one raw dataset line into a ManifestRecord.
//
// Dataset lines look like:
//   աբա<TAB>ɑ b ɑ
//
// Rules (applied in order):
//   1. Trim surrounding whitespace from the line (incl. "\r\n")
//   2. Split on TAB — exactly two fields or the line is dropped
//   3. Grapheme field is kept as-is
//   4. Phoneme field loses EVERY whitespace character, not just
//      leading/trailing ones: "x y\tz" → "xyz"
//
// Reference: Rust Book §8 (Strings in Rust)

use crate::domain::record::ManifestRecord;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Parse one dataset line. Returns None for malformed lines.
    pub fn parse_line(&self, line: &str) -> Option<ManifestRecord> {
        let mut fields = line.trim().split('\t');

        let grapheme = fields.next()?;
        let phoneme  = fields.next()?;

        // A third field means the line is malformed
        if fields.next().is_some() {
            return None;
        }

        Some(ManifestRecord::new(grapheme, self.clean_phonemes(phoneme)))
    }

    /// Remove all whitespace from a phonetic transcription.
    pub fn clean_phonemes(&self, phoneme: &str) -> String {
        phoneme.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
