// ============================================================
// Layer 3 — Manifest Record Types
// ============================================================
// One JSON object per manifest line. Three shapes exist:
//
//   ManifestRecord   {"text_graphemes": .., "text": ..}
//                    splitter output, tokenizer-trainer input
//   GraphemeRecord   {"text_graphemes": ..}
//                    minimal model input (`text` is optional)
//   PredictionRecord {"text_graphemes": .., "text": .., "pred_text": ..}
//                    output of the manifest conversion routine
//
// Field names are fixed by the downstream model tooling and
// must not be renamed.

use serde::{Deserialize, Serialize};

/// A labelled grapheme/phoneme pair.
///
/// `text` holds the phoneme string with all whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub text_graphemes: String,
    pub text:           String,
}

impl ManifestRecord {
    pub fn new(text_graphemes: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text_graphemes: text_graphemes.into(),
            text:           text.into(),
        }
    }
}

/// A model input line. Reference phonemes are optional so any
/// manifest produced by the splitter is also valid model input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphemeRecord {
    pub text_graphemes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A model output line: the input record plus the predicted phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub text_graphemes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub pred_text: String,
}

impl PredictionRecord {
    pub fn from_input(input: GraphemeRecord, pred_text: impl Into<String>) -> Self {
        Self {
            text_graphemes: input.text_graphemes,
            text:           input.text,
            pred_text:      pred_text.into(),
        }
    }
}
