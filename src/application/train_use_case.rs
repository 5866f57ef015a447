// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load PerformanceData.csv     (Layer 4 - data)
//   Step 2: Encode suggestion labels     (Layer 4 - data)
//   Step 3: Train/test split (80/20)     (Layer 4 - data)
//   Step 4: Validation holdout (20%)     (Layer 4 - data)
//   Step 5: Build Burn datasets          (Layer 4 - data)
//   Step 6: Run training loop            (Layer 5 - ml)
//   Step 7: Evaluate on the test split   (Layer 5 - ml)
//   Step 8: Save model + label encoder   (Layer 6 - infra)
//
// Steps 1-5 only read input. Nothing is written to the output
// directory until the data has been loaded and split, and the
// model artifacts only after training and evaluation succeed.

use anyhow::{bail, Result};
use burn::data::dataloader::DataLoaderBuilder;
use std::path::PathBuf;

use crate::data::{
    batcher::PerformanceBatcher,
    dataset::{EncodedSample, PerformanceDataset},
    encoder::LabelEncoder,
    loader::CsvLoader,
    splitter::{holdout_tail, train_test_split},
};
use crate::domain::{
    sample::{PerformanceSample, NUM_FEATURES},
    traits::SampleSource,
};
use crate::infra::{
    artifacts::{ArtifactStore, SavedArtifacts},
    metrics::MetricsLogger,
};
use crate::ml::{
    evaluator::{evaluate, Evaluation},
    model::SuggestionClassifierConfig,
    trainer::{run_training, EvalBackend},
};

// ─── Training Configuration ──────────────────────────────────────────────────
// All knobs for a training run. The defaults reproduce the fixed
// pipeline: 80/20 split with seed 42, 20% validation holdout,
// 50 epochs of Adam (lr 1e-3) on mini-batches of 32.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub data_path:        PathBuf,
    pub output_dir:       PathBuf,
    pub epochs:           usize,
    pub batch_size:       usize,
    pub learning_rate:    f64,
    pub test_size:        f64,
    pub validation_split: f64,
    pub seed:             u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:        PathBuf::from("PerformanceData.csv"),
            output_dir:       PathBuf::from("."),
            epochs:           50,
            batch_size:       32,
            learning_rate:    1e-3,
            test_size:        0.2,
            validation_split: 0.2,
            seed:             42,
        }
    }
}

/// Encoded rows after both splits, plus the fitted encoder.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub encoder:    LabelEncoder,
    pub train:      Vec<EncodedSample>,
    pub validation: Vec<EncodedSample>,
    pub test:       Vec<EncodedSample>,
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub total_rows:      usize,
    pub train_rows:      usize,
    pub validation_rows: usize,
    pub test_rows:       usize,
    pub num_classes:     usize,
    pub evaluation:      Evaluation,
    pub artifacts:       SavedArtifacts,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainReport> {
        let cfg = &self.config;
        if cfg.epochs == 0 || cfg.batch_size == 0 {
            bail!("epochs and batch_size must be positive");
        }

        // ── Step 1: Load all rows ─────────────────────────────────────────────
        tracing::info!("Loading samples from '{}'", cfg.data_path.display());
        let loader  = CsvLoader::new(&cfg.data_path);
        let samples = loader.load_all()?;
        let total_rows = samples.len();

        // ── Steps 2-4: Encode + split ─────────────────────────────────────────
        let prepared = self.prepare(samples)?;
        tracing::info!(
            "Split: {} train, {} validation, {} test ({} classes)",
            prepared.train.len(),
            prepared.validation.len(),
            prepared.test.len(),
            prepared.encoder.num_classes()
        );
        tracing::debug!("Classes: {:?}", prepared.encoder.classes());

        let train_rows      = prepared.train.len();
        let validation_rows = prepared.validation.len();
        let test_rows       = prepared.test.len();

        // ── Step 5: Build Burn datasets ───────────────────────────────────────
        let train_dataset = PerformanceDataset::new(prepared.train);
        let val_dataset   = PerformanceDataset::new(prepared.validation);
        let test_dataset  = PerformanceDataset::new(prepared.test);

        // ── Step 6: Run training loop (Layer 5) ───────────────────────────────
        let model_cfg = SuggestionClassifierConfig::new(NUM_FEATURES, prepared.encoder.num_classes());
        let metrics   = MetricsLogger::new(&cfg.output_dir)?;
        let model     = run_training(cfg, &model_cfg, train_dataset, val_dataset, Some(&metrics))?;
        tracing::info!("Epoch metrics written to '{}'", metrics.csv_path().display());

        // ── Step 7: Evaluate on the held-out test split ───────────────────────
        let test_loader = DataLoaderBuilder::new(PerformanceBatcher::<EvalBackend>::new(Default::default()))
            .batch_size(cfg.batch_size)
            .build(test_dataset);
        let evaluation = evaluate(&model, test_loader.as_ref())?;
        tracing::info!(
            "Test evaluation: loss={:.4} accuracy={:.4} ({} rows)",
            evaluation.loss,
            evaluation.accuracy,
            evaluation.samples
        );

        // ── Step 8: Persist model + encoder ───────────────────────────────────
        let store     = ArtifactStore::new(&cfg.output_dir);
        let artifacts = store.save(&model, &model_cfg, &prepared.encoder)?;

        Ok(TrainReport {
            total_rows,
            train_rows,
            validation_rows,
            test_rows,
            num_classes: model_cfg.num_classes,
            evaluation,
            artifacts,
        })
    }

    /// Encode labels and apply both splits. Pure: same rows and seed in,
    /// same partitions out.
    pub fn prepare(&self, samples: Vec<PerformanceSample>) -> Result<PreparedData> {
        let cfg = &self.config;

        // The encoder sees the whole label column, before any split
        let labels: Vec<&str> = samples
            .iter()
            .map(|s| s.optimization_suggestion.as_str())
            .collect();
        let (encoder, codes) = LabelEncoder::fit_transform(&labels)?;

        let encoded: Vec<EncodedSample> = samples
            .iter()
            .zip(codes)
            .map(|(s, code)| EncodedSample::new(&s.metrics, code))
            .collect();

        let (train, test)       = train_test_split(encoded, cfg.test_size, cfg.seed)?;
        let (train, validation) = holdout_tail(train, cfg.validation_split)?;

        Ok(PreparedData { encoder, train, validation, test })
    }
}
