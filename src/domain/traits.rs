// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to these traits, not to the
// CSV reader or the Burn model directly.
//
//   - CsvLoader        implements SampleSource
//   - PredictUseCase   implements SuggestionPredictor
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::sample::{PerformanceMetrics, PerformanceSample};

// ─── SampleSource ─────────────────────────────────────────────────────────────
/// Any component that can produce labelled performance samples.
pub trait SampleSource {
    /// Load every available sample, in source order.
    fn load_all(&self) -> Result<Vec<PerformanceSample>>;
}

// ─── SuggestionPredictor ──────────────────────────────────────────────────────
/// A suggestion decoded back to its label, with the model's
/// softmax probability for that class.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub label:      String,
    pub confidence: f32,
}

/// Any component that turns a row of metrics into a suggestion.
pub trait SuggestionPredictor {
    fn suggest(&self, metrics: &PerformanceMetrics) -> Result<Suggestion>;
}
