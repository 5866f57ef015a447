// ============================================================
// Layer 4 — Performance Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<EncodedSample>
// into the two tensors the classifier needs:
//
//   Input:  Vec of N EncodedSamples (5 features + 1 code each)
//   Output: features [N, 5] (Float), targets [N] (Int)
//
// Features are flattened row-major, then reshaped:
//   [s1_f1, ..., s1_f5, s2_f1, ..., sN_f5] → [N, 5]
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::EncodedSample;
use crate::domain::sample::NUM_FEATURES;

/// A batch ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct PerformanceBatch<B: Backend> {
    /// Shape: [batch_size, NUM_FEATURES]
    pub features: Tensor<B, 2>,

    /// Class codes — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

/// Holds the target device so tensors land on the right backend device.
#[derive(Clone, Debug)]
pub struct PerformanceBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> PerformanceBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<EncodedSample, PerformanceBatch<B>> for PerformanceBatcher<B> {
    fn batch(&self, items: Vec<EncodedSample>) -> PerformanceBatch<B> {
        let batch_size = items.len();

        let features_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        let targets: Vec<i64> = items
            .iter()
            .map(|s| s.label as i64)
            .collect();

        let features = Tensor::<B, 2>::from_data(
            TensorData::new(features_flat, [batch_size, NUM_FEATURES]),
            &self.device,
        );

        let targets = Tensor::<B, 1, Int>::from_data(
            TensorData::new(targets, [batch_size]),
            &self.device,
        );

        PerformanceBatch { features, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    #[test]
    fn test_batch_shapes_and_values() {
        let device  = Default::default();
        let batcher = PerformanceBatcher::<NdArray>::new(device);

        let items = vec![
            EncodedSample { features: [1.0, 2.0, 3.0, 4.0, 5.0], label: 0 },
            EncodedSample { features: [6.0, 7.0, 8.0, 9.0, 10.0], label: 2 },
        ];
        let batch = batcher.batch(items);

        assert_eq!(batch.features.dims(), [2, NUM_FEATURES]);
        assert_eq!(batch.targets.dims(), [2]);

        let row2: Vec<f32> = batch.features
            .slice([1..2, 0..NUM_FEATURES])
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        assert_eq!(row2, vec![6.0, 7.0, 8.0, 9.0, 10.0]);

        let codes: Vec<i64> = batch.targets.into_data().to_vec::<i64>().unwrap();
        assert_eq!(codes, vec![0, 2]);
    }
}
