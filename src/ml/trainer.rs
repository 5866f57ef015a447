// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Fixed-length train + validation loop using Burn's DataLoader
// and Adam.
//
//   - Training uses TrainBackend (Autodiff<NdArray>) for gradients
//   - model.valid() returns the model on EvalBackend (NdArray)
//   - Validation batcher must also use EvalBackend
//   - No early stopping and no mid-run checkpoints: the model is
//     only persisted by the caller after the last epoch
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::PerformanceBatcher, dataset::PerformanceDataset};
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::evaluator::{evaluate, EvalAccumulator, Evaluation};
use crate::ml::model::{SuggestionClassifier, SuggestionClassifierConfig};

pub type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;
pub type EvalBackend  = burn::backend::NdArray;

/// Train a fresh classifier and return it on the inference backend.
pub fn run_training(
    cfg:           &TrainConfig,
    model_cfg:     &SuggestionClassifierConfig,
    train_dataset: PerformanceDataset,
    val_dataset:   PerformanceDataset,
    metrics:       Option<&MetricsLogger>,
) -> Result<SuggestionClassifier<EvalBackend>> {
    let device = burn::backend::ndarray::NdArrayDevice::default();
    tracing::info!("Using NdArray device: {:?}", device);
    train_loop(cfg, model_cfg, train_dataset, val_dataset, metrics, device)
}

fn train_loop(
    cfg:           &TrainConfig,
    model_cfg:     &SuggestionClassifierConfig,
    train_dataset: PerformanceDataset,
    val_dataset:   PerformanceDataset,
    metrics:       Option<&MetricsLogger>,
    device:        burn::backend::ndarray::NdArrayDevice,
) -> Result<SuggestionClassifier<EvalBackend>> {

    // ── Build model ───────────────────────────────────────────────────────────
    // Seed parameter initialisation so a rerun starts from the same weights
    <TrainBackend as Backend>::seed(cfg.seed);
    let mut model: SuggestionClassifier<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: {} → {} → {} → {}",
        model_cfg.num_features, model_cfg.hidden_1, model_cfg.hidden_2, model_cfg.num_classes
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new()
        .with_beta_1(0.9)
        .with_beta_2(0.999)
        .with_epsilon(1e-7);
    let mut optim = optim_cfg.init();

    // ── Training data loader (TrainBackend) ───────────────────────────────────
    // Reshuffled every epoch from a seeded RNG
    let train_batcher = PerformanceBatcher::<TrainBackend>::new(device.clone());
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .build(train_dataset);

    // ── Validation data loader (EvalBackend — no autodiff overhead) ───────────
    let has_validation = val_dataset.sample_count() > 0;
    let val_batcher = PerformanceBatcher::<EvalBackend>::new(device.clone());
    let val_loader  = DataLoaderBuilder::new(val_batcher)
        .batch_size(cfg.batch_size)
        .build(val_dataset);

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {

        // ── Training phase ────────────────────────────────────────────────────
        let mut train_acc = EvalAccumulator::default();

        for batch in train_loader.iter() {
            let (loss, logits) = model.forward_loss(batch.features, batch.targets.clone());

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            train_acc.add(loss_val, logits, batch.targets);

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.learning_rate, model, grads);
        }
        let train_eval = train_acc.finish()?;

        // ── Validation phase ──────────────────────────────────────────────────
        let val_eval: Option<Evaluation> = if has_validation {
            Some(evaluate(&model.valid(), val_loader.as_ref())?)
        } else {
            None
        };

        let row = EpochMetrics::new(epoch, train_eval, val_eval);
        match val_eval {
            Some(v) => tracing::info!(
                "Epoch {:>3}/{} | loss={:.4} | accuracy={:.4} | val_loss={:.4} | val_accuracy={:.4}",
                epoch, cfg.epochs, train_eval.loss, train_eval.accuracy, v.loss, v.accuracy,
            ),
            None => tracing::info!(
                "Epoch {:>3}/{} | loss={:.4} | accuracy={:.4}",
                epoch, cfg.epochs, train_eval.loss, train_eval.accuracy,
            ),
        }

        if let Some(logger) = metrics {
            logger.log(&row)?;
        }
    }

    tracing::info!("Training complete after {} epochs", cfg.epochs);
    Ok(model.valid())
}
