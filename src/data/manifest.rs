// ============================================================
// Layer 4 — JSON-lines Manifest I/O
// ============================================================
// A manifest is a UTF-8 text file with one JSON object per
// line:
//
//   {"text_graphemes":"աբա","text":"ɑbɑ"}
//   {"text_graphemes":"Աբադան","text":"ɑbɑdɑn"}
//
// serde_json never escapes non-ASCII characters, so Armenian
// script and IPA symbols are written as-is.
//
// Reference: serde_json documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Write `records` to `path`, one JSON object per line.
/// Overwrites an existing file. Returns the number of lines written.
pub fn write_manifest<T: Serialize>(path: &Path, records: &[T]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create manifest '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    for rec in records {
        serde_json::to_writer(&mut out, rec)?;
        out.write_all(b"\n")?;
    }
    out.flush()
        .with_context(|| format!("Cannot write manifest '{}'", path.display()))?;

    tracing::debug!("Wrote {} records to '{}'", records.len(), path.display());
    Ok(records.len())
}

/// Read every record of a manifest. Blank lines are ignored;
/// any other line that fails to parse is an error naming the line.
pub fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open manifest '{}'", path.display()))?;

    let mut records = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Cannot read '{}'", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let rec = serde_json::from_str(&line).with_context(|| {
            format!("Invalid manifest line {} in '{}'", idx + 1, path.display())
        })?;
        records.push(rec);
    }

    tracing::debug!("Read {} records from '{}'", records.len(), path.display());
    Ok(records)
}

/// First `n` raw lines of a manifest, for eyeballing output.
pub fn preview(path: &Path, n: usize) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;
    Ok(contents.lines().take(n).map(str::to_string).collect())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{GraphemeRecord, ManifestRecord};

    #[test]
    fn test_write_is_one_object_per_line_unescaped() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        let recs = vec![
            ManifestRecord::new("աբա", "ɑbɑ"),
            ManifestRecord::new("Աբադան", "ɑbɑdɑn"),
        ];

        assert_eq!(write_manifest(&path, &recs).unwrap(), 2);

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw,
            "{\"text_graphemes\":\"աբա\",\"text\":\"ɑbɑ\"}\n\
             {\"text_graphemes\":\"Աբադան\",\"text\":\"ɑbɑdɑn\"}\n"
        );
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        fs::write(&path, "{\"text_graphemes\":\"ա\"}\n\n{\"text_graphemes\":\"բ\"}\n").unwrap();

        let recs: Vec<GraphemeRecord> = read_manifest(&path).unwrap();
        let graphemes: Vec<&str> = recs.iter().map(|r| r.text_graphemes.as_str()).collect();
        assert_eq!(graphemes, vec!["ա", "բ"]);
        assert!(recs.iter().all(|r| r.text.is_none()));
    }

    #[test]
    fn test_read_reports_bad_line_number() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        fs::write(&path, "{\"text_graphemes\":\"ա\"}\nnot json\n").unwrap();

        let err = read_manifest::<GraphemeRecord>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_read_requires_graphemes_field() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        fs::write(&path, "{\"text\":\"ɑ\"}\n").unwrap();

        assert!(read_manifest::<GraphemeRecord>(&path).is_err());
    }

    #[test]
    fn test_preview_takes_first_lines() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        fs::write(&path, "1\n2\n3\n4\n").unwrap();

        assert_eq!(preview(&path, 3).unwrap(), vec!["1", "2", "3"]);
        assert_eq!(preview(&path, 10).unwrap().len(), 4);
    }
}
