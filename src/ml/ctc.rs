// ============================================================
// Layer 5 — Greedy CTC Decoder
// ============================================================
// Turns per-frame log-probabilities into a phoneme string.
//
//   frame argmax:   ɑ ɑ <b> b b <b> ɑ
//   collapse runs:  ɑ <b> b <b> ɑ
//   drop blanks:    ɑ b ɑ
//   join:           "ɑbɑ"   (separator "" by default)
//
// A blank between two equal labels keeps both: "ɑ <b> ɑ" → "ɑɑ".
//
// Reference: Graves et al. (2006) Connectionist Temporal
//            Classification

use crate::domain::error::G2pError;

pub struct CtcDecoder {
    labels:    Vec<String>,
    blank:     usize,
    separator: String,
}

impl CtcDecoder {
    /// `blank` defaults to `labels.len()` (one class past the last
    /// label). An explicit blank may also point inside the label list,
    /// in which case that label is never emitted.
    pub fn new(
        labels:    Vec<String>,
        blank:     Option<usize>,
        separator: Option<String>,
    ) -> Result<Self, G2pError> {
        let blank = blank.unwrap_or(labels.len());
        if blank > labels.len() {
            return Err(G2pError::ModelLoad(format!(
                "blank index {blank} outside {} labels",
                labels.len()
            )));
        }
        Ok(Self {
            labels,
            blank,
            separator: separator.unwrap_or_default(),
        })
    }

    /// Number of output classes the network must produce.
    pub fn num_classes(&self) -> usize {
        self.labels.len().max(self.blank + 1)
    }

    /// Decode `frames` rows of a row-major `[frames, classes]` slice.
    pub fn decode(&self, logprobs: &[f32], frames: usize, classes: usize) -> Result<String, G2pError> {
        if classes != self.num_classes() {
            return Err(G2pError::Inference(format!(
                "network emits {classes} classes, checkpoint vocabulary has {}",
                self.num_classes()
            )));
        }
        if logprobs.len() < frames * classes {
            return Err(G2pError::Inference(format!(
                "expected {} log-probs, got {}",
                frames * classes,
                logprobs.len()
            )));
        }

        let best: Vec<usize> = logprobs
            .chunks_exact(classes)
            .take(frames)
            .map(argmax)
            .collect();
        Ok(self.collapse(&best))
    }

    /// Collapse repeats, drop blanks, map ids to labels.
    pub fn collapse(&self, ids: &[usize]) -> String {
        let mut out: Vec<&str> = Vec::new();
        let mut prev: Option<usize> = None;

        for &id in ids {
            if prev != Some(id) && id != self.blank {
                if let Some(label) = self.labels.get(id) {
                    out.push(label);
                }
            }
            prev = Some(id);
        }
        out.join(&self.separator)
    }
}

/// Index of the largest value; first one wins on ties.
fn argmax(row: &[f32]) -> usize {
    let mut best     = 0;
    let mut best_val = f32::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > best_val {
            best     = i;
            best_val = v;
        }
    }
    best
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> CtcDecoder {
        // classes: 0=ɑ 1=b 2=d 3=<blank>
        CtcDecoder::new(vec!["ɑ".into(), "b".into(), "d".into()], None, None).unwrap()
    }

    fn one_hot(ids: &[usize], classes: usize) -> Vec<f32> {
        ids.iter()
            .flat_map(|&id| (0..classes).map(move |c| if c == id { 0.0 } else { -10.0 }))
            .collect()
    }

    #[test]
    fn test_collapse_repeats_and_blanks() {
        assert_eq!(decoder().collapse(&[0, 0, 3, 1, 1, 3, 0]), "ɑbɑ");
    }

    #[test]
    fn test_blank_separates_equal_labels() {
        assert_eq!(decoder().collapse(&[0, 3, 0]), "ɑɑ");
        assert_eq!(decoder().collapse(&[0, 0, 0]), "ɑ");
    }

    #[test]
    fn test_decode_respects_frame_count() {
        let probs = one_hot(&[2, 3, 0, 1], 4);
        assert_eq!(decoder().decode(&probs, 2, 4).unwrap(), "d");
        assert_eq!(decoder().decode(&probs, 4, 4).unwrap(), "dɑb");
    }

    #[test]
    fn test_separator() {
        let d = CtcDecoder::new(vec!["ɑ".into(), "b".into()], None, Some(" ".into())).unwrap();
        assert_eq!(d.collapse(&[0, 1, 2, 0]), "ɑ b ɑ");
    }

    #[test]
    fn test_blank_inside_label_list() {
        let d = CtcDecoder::new(vec!["<blank>".into(), "ɑ".into()], Some(0), None).unwrap();
        assert_eq!(d.num_classes(), 2);
        assert_eq!(d.collapse(&[1, 0, 1]), "ɑɑ");
    }

    #[test]
    fn test_class_mismatch_is_inference_error() {
        let probs = one_hot(&[0], 5);
        assert!(matches!(decoder().decode(&probs, 1, 5), Err(G2pError::Inference(_))));
    }

    #[test]
    fn test_blank_out_of_range_rejected() {
        assert!(CtcDecoder::new(vec!["ɑ".into()], Some(5), None).is_err());
    }

    #[test]
    fn test_argmax_first_wins_on_tie() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), 1);
    }
}
