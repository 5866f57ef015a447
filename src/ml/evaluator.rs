// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Loss and accuracy of a model over every batch of a loader.
//
// Both numbers are sample-weighted means, so a short final
// batch counts exactly as much as its row count:
//
//   loss     = Σ(batch_loss * batch_rows) / total_rows
//   accuracy = correct / total_rows
//
// Used for the per-epoch validation pass and the final
// held-out test evaluation.

use anyhow::{bail, Result};
use burn::{data::dataloader::DataLoader, prelude::*};
use serde::{Deserialize, Serialize};

use crate::data::batcher::PerformanceBatch;
use crate::ml::model::SuggestionClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub loss:     f64,
    /// In [0, 1]
    pub accuracy: f64,
    pub samples:  usize,
}

/// Running totals over a sequence of batches.
#[derive(Debug, Default)]
pub struct EvalAccumulator {
    loss_sum: f64,
    correct:  usize,
    samples:  usize,
}

impl EvalAccumulator {
    /// Fold one batch in: mean loss over the batch and its logits/targets.
    pub fn add<B: Backend>(
        &mut self,
        batch_loss: f64,
        logits:     Tensor<B, 2>,
        targets:    Tensor<B, 1, Int>,
    ) {
        let [rows] = targets.dims();
        // argmax(1) returns [batch, 1] — reshape to [batch] before comparing
        let predicted = logits.argmax(1).reshape([rows]);
        let correct: i64 = predicted
            .equal(targets)
            .int()
            .sum()
            .into_scalar()
            .elem::<i64>();

        self.loss_sum += batch_loss * rows as f64;
        self.correct  += correct as usize;
        self.samples  += rows;
    }

    pub fn finish(self) -> Result<Evaluation> {
        if self.samples == 0 {
            bail!("cannot evaluate on an empty dataset");
        }
        Ok(Evaluation {
            loss:     self.loss_sum / self.samples as f64,
            accuracy: self.correct as f64 / self.samples as f64,
            samples:  self.samples,
        })
    }
}

/// Evaluate `model` over every batch the loader yields.
pub fn evaluate<B: Backend>(
    model:  &SuggestionClassifier<B>,
    loader: &dyn DataLoader<PerformanceBatch<B>>,
) -> Result<Evaluation> {
    let mut acc = EvalAccumulator::default();

    for batch in loader.iter() {
        let (loss, logits) = model.forward_loss(batch.features, batch.targets.clone());
        acc.add(loss.into_scalar().elem::<f64>(), logits, batch.targets);
    }

    acc.finish()
}
