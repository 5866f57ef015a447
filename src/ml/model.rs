use burn::{
    nn::{
        loss::CrossEntropyLossConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::activation::{relu, softmax},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct SuggestionClassifierConfig {
    pub num_features: usize,
    pub num_classes:  usize,
    #[config(default = 128)]
    pub hidden_1:     usize,
    #[config(default = 64)]
    pub hidden_2:     usize,
}

impl SuggestionClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SuggestionClassifier<B> {
        SuggestionClassifier {
            hidden_1: LinearConfig::new(self.num_features, self.hidden_1).init(device),
            hidden_2: LinearConfig::new(self.hidden_1, self.hidden_2).init(device),
            output:   LinearConfig::new(self.hidden_2, self.num_classes).init(device),
        }
    }
}

/// features → Dense(128, relu) → Dense(64, relu) → Dense(C) → softmax
#[derive(Module, Debug)]
pub struct SuggestionClassifier<B: Backend> {
    pub hidden_1: Linear<B>,
    pub hidden_2: Linear<B>,
    pub output:   Linear<B>,
}

impl<B: Backend> SuggestionClassifier<B> {
    /// features: [batch, num_features] → logits: [batch, num_classes]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.hidden_1.forward(features));
        let x = relu(self.hidden_2.forward(x));
        self.output.forward(x)
    }

    /// Softmax over the class dimension. Each row sums to 1.
    pub fn forward_probs(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        softmax(self.forward(features), 1)
    }

    /// Sparse categorical cross-entropy against integer class codes.
    /// CrossEntropyLoss applies log-softmax to the logits itself.
    pub fn forward_loss(
        &self,
        features: Tensor<B, 2>,
        targets:  Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(features);
        let loss = CrossEntropyLossConfig::new()
            .init(&logits.device())
            .forward(logits.clone(), targets);
        (loss, logits)
    }

    /// Width of the output layer
    pub fn num_classes(&self) -> usize {
        self.output.weight.val().dims()[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_layer_widths() {
        let device = Default::default();
        let model: SuggestionClassifier<TestBackend> =
            SuggestionClassifierConfig::new(5, 3).init(&device);

        assert_eq!(model.hidden_1.weight.val().dims(), [5, 128]);
        assert_eq!(model.hidden_2.weight.val().dims(), [128, 64]);
        assert_eq!(model.output.weight.val().dims(), [64, 3]);
        assert_eq!(model.num_classes(), 3);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let device = Default::default();
        let model: SuggestionClassifier<TestBackend> =
            SuggestionClassifierConfig::new(5, 4).init(&device);

        let x = Tensor::<TestBackend, 2>::from_data(
            TensorData::new(vec![60.0f32, 4.0, 2.0, 0.5, 16.0, 30.0, 4.0, 3.5, 0.9, 40.0], [2, 5]),
            &device,
        );
        let probs = model.forward_probs(x);
        assert_eq!(probs.dims(), [2, 4]);

        let sums: Vec<f32> = probs.sum_dim(1).into_data().to_vec::<f32>().unwrap();
        for s in sums {
            assert!((s - 1.0).abs() < 1e-5, "row sum {s}");
        }
    }

    #[test]
    fn test_loss_is_non_negative() {
        let device = Default::default();
        let model: SuggestionClassifier<TestBackend> =
            SuggestionClassifierConfig::new(5, 3).init(&device);

        let x = Tensor::<TestBackend, 2>::from_data(
            TensorData::new(vec![1.0f32; 10], [2, 5]),
            &device,
        );
        let y = Tensor::<TestBackend, 1, Int>::from_data(TensorData::new(vec![0i64, 2], [2]), &device);

        let (loss, logits) = model.forward_loss(x, y);
        assert_eq!(logits.dims(), [2, 3]);
        assert!(loss.into_scalar().elem::<f64>() >= 0.0);
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg  = SuggestionClassifierConfig::new(5, 7);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SuggestionClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_classes, 7);
        assert_eq!(back.hidden_1, 128);
        assert_eq!(back.hidden_2, 64);
    }
}
