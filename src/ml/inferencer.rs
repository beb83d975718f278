// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Wraps a loaded G2pModel for the recoverable side of the error
// taxonomy: a failed conversion is reported (short message plus
// full debug representation) and turned into "no result" so the
// caller can carry on.

use crate::domain::error::G2pError;
use crate::domain::traits::G2pModel;

pub struct Inferencer<'a> {
    model:      &'a mut dyn G2pModel,
    batch_size: usize,
}

impl<'a> Inferencer<'a> {
    pub fn new(model: &'a mut dyn G2pModel, batch_size: usize) -> Self {
        Self { model, batch_size }
    }

    /// Convert `words`, returning one phoneme string per word.
    pub fn try_predict(&mut self, words: &[String]) -> Result<Vec<String>, G2pError> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let phonemes = self.model.convert(words, self.batch_size)?;
        if phonemes.len() != words.len() {
            return Err(G2pError::Inference(format!(
                "model returned {} predictions for {} words",
                phonemes.len(),
                words.len()
            )));
        }
        Ok(phonemes)
    }

    /// Like `try_predict`, but failures are logged and become `None`.
    pub fn predict(&mut self, words: &[String]) -> Option<Vec<String>> {
        match self.try_predict(words) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::error!("Prediction error: {}", e);
                tracing::error!("Full error details: {:?}", e);
                None
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl G2pModel for Echo {
        fn convert(&mut self, words: &[String], _batch_size: usize) -> Result<Vec<String>, G2pError> {
            Ok(words.iter().map(|w| w.to_uppercase()).collect())
        }
    }

    struct Broken;

    impl G2pModel for Broken {
        fn convert(&mut self, _words: &[String], _batch_size: usize) -> Result<Vec<String>, G2pError> {
            Err(G2pError::Inference("runtime exploded".into()))
        }
    }

    struct Short;

    impl G2pModel for Short {
        fn convert(&mut self, _words: &[String], _batch_size: usize) -> Result<Vec<String>, G2pError> {
            Ok(vec!["x".into()])
        }
    }

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_predict_passes_through() {
        let mut model = Echo;
        let mut inf   = Inferencer::new(&mut model, 32);
        assert_eq!(inf.predict(&words(&["ab", "c"])), Some(words(&["AB", "C"])));
    }

    #[test]
    fn test_failure_becomes_none() {
        let mut model = Broken;
        let mut inf   = Inferencer::new(&mut model, 32);
        assert!(inf.predict(&words(&["ab"])).is_none());
    }

    #[test]
    fn test_count_mismatch_is_error() {
        let mut model = Short;
        let mut inf   = Inferencer::new(&mut model, 32);
        assert!(matches!(
            inf.try_predict(&words(&["a", "b"])),
            Err(G2pError::Inference(_))
        ));
    }

    #[test]
    fn test_empty_input_skips_model() {
        let mut model = Broken;
        let mut inf   = Inferencer::new(&mut model, 32);
        assert_eq!(inf.predict(&[]), Some(Vec::new()));
    }
}
