// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Loads the artifacts written by `train` and turns one row of
// metrics into a human-readable suggestion.
//
//   Step 1: Rebuild model + encoder   (Layer 6 - infra)
//   Step 2: Score the row              (Layer 5 - ml)
//   Step 3: Optionally write a report  (Layer 6 - infra)

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::domain::{
    sample::PerformanceMetrics,
    traits::{Suggestion, SuggestionPredictor},
};
use crate::infra::{artifacts::ArtifactStore, report::PerformanceReport};
use crate::ml::predictor::Predictor;

pub struct PredictUseCase {
    predictor: Predictor,
}

impl PredictUseCase {
    pub fn new(model_dir: impl Into<PathBuf>) -> Result<Self> {
        let store     = ArtifactStore::new(model_dir);
        let predictor = Predictor::from_artifacts(&store)?;
        Ok(Self { predictor })
    }

    pub fn write_report(
        &self,
        metrics:    &PerformanceMetrics,
        suggestion: &Suggestion,
        path:       &Path,
    ) -> Result<()> {
        PerformanceReport::new(metrics, &suggestion.label).write(path)
    }
}

impl SuggestionPredictor for PredictUseCase {
    fn suggest(&self, metrics: &PerformanceMetrics) -> Result<Suggestion> {
        self.predictor.predict(metrics)
    }
}
