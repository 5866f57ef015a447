// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records training metrics to a CSV file after each epoch.
//
// Metrics recorded per epoch:
//   - epoch:      the epoch number (1, 2, 3, ...)
//   - train_loss: mean cross-entropy over the training batches
//   - train_acc:  fraction of training rows predicted correctly
//   - val_loss:   mean cross-entropy on the validation holdout
//   - val_acc:    fraction of validation rows predicted correctly
//
// val_* cells are left empty when the run has no validation set.
// Rows are serialised from EpochMetrics with the csv crate; the
// header comes from the field names and is written only when
// the file is new or empty.
//
// Output file: <output_dir>/training_metrics.csv
//
//   epoch,train_loss,train_acc,val_loss,val_acc
//   1,1.0986,0.34375,1.0872,0.375
//   ...

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

use crate::ml::evaluator::Evaluation;

pub const METRICS_FILE: &str = "training_metrics.csv";

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// Starts at 1
    pub epoch: usize,

    pub train_loss: f64,
    pub train_acc:  f64,

    pub val_loss: Option<f64>,
    pub val_acc:  Option<f64>,
}

impl EpochMetrics {
    pub fn new(epoch: usize, train: Evaluation, val: Option<Evaluation>) -> Self {
        Self {
            epoch,
            train_loss: train.loss,
            train_acc:  train.accuracy,
            val_loss:   val.map(|v| v.loss),
            val_acc:    val.map(|v| v.accuracy),
        }
    }
}

/// Appends epoch metrics to a CSV file.
/// Existing files are appended to, so several runs can share one log.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create metrics directory '{}'", dir.display()))?;

        Ok(Self { csv_path: dir.join(METRICS_FILE) })
    }

    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let is_new = fs::metadata(&self.csv_path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let mut writer = WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer
            .serialize(m)
            .with_context(|| format!("Cannot write epoch {} to '{}'", m.epoch, self.csv_path.display()))?;
        writer.flush()?;

        tracing::debug!(
            "Logged epoch {} metrics: train_loss={:.4}, val_loss={:?}",
            m.epoch,
            m.train_loss,
            m.val_loss,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Read every logged row back, in file order.
    pub fn read_all(&self) -> Result<Vec<EpochMetrics>> {
        let mut reader = csv::Reader::from_path(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<EpochMetrics>, csv::Error>>()
            .with_context(|| format!("Cannot parse '{}'", self.csv_path.display()))?;
        Ok(rows)
    }
}
