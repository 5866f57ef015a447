// ============================================================
// Layer 5 — Predictor
// ============================================================
// Rebuilds the classifier from saved artifacts and scores one
// row of metrics at a time.
//
// The model only knows class codes; the label encoder saved
// with it turns the arg-max code back into the suggestion text.
use anyhow::Result;
use burn::prelude::*;

use crate::data::encoder::LabelEncoder;
use crate::domain::sample::{PerformanceMetrics, NUM_FEATURES};
use crate::domain::traits::Suggestion;
use crate::infra::artifacts::ArtifactStore;
use crate::ml::model::SuggestionClassifier;

type InferBackend = burn::backend::NdArray;

pub struct Predictor {
    model:   SuggestionClassifier<InferBackend>,
    encoder: LabelEncoder,
    device:  burn::backend::ndarray::NdArrayDevice,
}

impl Predictor {
    pub fn from_artifacts(store: &ArtifactStore) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let (model, encoder) = store.load::<InferBackend>(&device)?;
        tracing::info!("Model loaded with {} classes", encoder.num_classes());
        Ok(Self { model, encoder, device })
    }

    /// Softmax probability for every class, in code order.
    pub fn probabilities(&self, metrics: &PerformanceMetrics) -> Result<Vec<f32>> {
        let input = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(metrics.to_features().to_vec(), [1, NUM_FEATURES]),
            &self.device,
        );

        self.model
            .forward_probs(input)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read model output: {e:?}"))
    }

    pub fn predict(&self, metrics: &PerformanceMetrics) -> Result<Suggestion> {
        let probs = self.probabilities(metrics)?;
        best_suggestion(&probs, &self.encoder)
    }
}

/// Arg-max over `probs`, decoded through `encoder`. A code the encoder
/// does not know is an error, never an empty label.
fn best_suggestion(probs: &[f32], encoder: &LabelEncoder) -> Result<Suggestion> {
    let (code, confidence) = probs
        .iter()
        .copied()
        .enumerate()
        .fold((0usize, f32::NEG_INFINITY), |best, (i, p)| {
            if p > best.1 { (i, p) } else { best }
        });

    let label = encoder.decode(code)?.to_string();
    tracing::debug!("Predicted class {} ('{}') p={:.4}", code, label, confidence);

    Ok(Suggestion { label, confidence })
}
