use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::sample::{PerformanceMetrics, NUM_FEATURES};

/// One encoded training row: the feature vector in FEATURE_COLUMNS
/// order and the label's class code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedSample {
    pub features: [f32; NUM_FEATURES],
    pub label:    usize,
}

impl EncodedSample {
    pub fn new(metrics: &PerformanceMetrics, label: usize) -> Self {
        Self { features: metrics.to_features(), label }
    }
}

pub struct PerformanceDataset {
    samples: Vec<EncodedSample>,
}

impl PerformanceDataset {
    pub fn new(samples: Vec<EncodedSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<EncodedSample> for PerformanceDataset {
    fn get(&self, index: usize) -> Option<EncodedSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_len() {
        let m  = PerformanceMetrics::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let ds = PerformanceDataset::new(vec![EncodedSample::new(&m, 2)]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.get(0).unwrap().features, [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ds.get(0).unwrap().label, 2);
        assert!(ds.get(1).is_none());
    }
}
