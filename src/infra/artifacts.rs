// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores everything a later prediction needs,
// side by side in one directory:
//
//   <dir>/
//     optimization_model.mpk   ← trained weights (Burn record)
//     model_config.json        ← layer widths, to rebuild the
//                                model before loading weights
//     label_encoder.json       ← class code → suggestion table
//
// The weights use Burn's NamedMpkFileRecorder at full
// precision (MessagePack, no compression). The recorder adds
// the ".mpk" extension itself.
//
// Files are written in place: no versioning, no atomic rename.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{bail, Context, Result};
use std::{fs, path::{Path, PathBuf}};
use burn::{
    prelude::*,
    record::{FullPrecisionSettings, NamedMpkFileRecorder, Recorder},
};

use crate::data::encoder::LabelEncoder;
use crate::ml::model::{SuggestionClassifier, SuggestionClassifierConfig};

/// File stem for the weights; the recorder appends ".mpk"
pub const MODEL_STEM:        &str = "optimization_model";
pub const MODEL_CONFIG_FILE: &str = "model_config.json";
pub const ENCODER_FILE:      &str = "label_encoder.json";

type ModelRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

/// Paths of the files written by one save
#[derive(Debug, Clone)]
pub struct SavedArtifacts {
    pub model:        PathBuf,
    pub model_config: PathBuf,
    pub encoder:      PathBuf,
}

/// Reads and writes training artifacts in a single directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the weights file as written by the recorder
    pub fn model_path(&self) -> PathBuf {
        self.dir.join(format!("{MODEL_STEM}.mpk"))
    }

    pub fn model_config_path(&self) -> PathBuf {
        self.dir.join(MODEL_CONFIG_FILE)
    }

    pub fn encoder_path(&self) -> PathBuf {
        self.dir.join(ENCODER_FILE)
    }

    /// Write weights, architecture and label table.
    pub fn save<B: Backend>(
        &self,
        model:     &SuggestionClassifier<B>,
        model_cfg: &SuggestionClassifierConfig,
        encoder:   &LabelEncoder,
    ) -> Result<SavedArtifacts> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create output directory '{}'", self.dir.display()))?;

        self.save_model(model)?;
        write_json(&self.model_config_path(), model_cfg)?;
        write_json(&self.encoder_path(), encoder)?;

        let saved = SavedArtifacts {
            model:        self.model_path(),
            model_config: self.model_config_path(),
            encoder:      self.encoder_path(),
        };
        tracing::info!(
            "Saved model to '{}' and label encoder to '{}'",
            saved.model.display(),
            saved.encoder.display()
        );
        Ok(saved)
    }

    fn save_model<B: Backend>(&self, model: &SuggestionClassifier<B>) -> Result<()> {
        let path = self.dir.join(MODEL_STEM);
        ModelRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .map_err(|e| anyhow::anyhow!(
                "Failed to save model to '{}': {e:?}", path.display()
            ))?;
        Ok(())
    }

    pub fn load_encoder(&self) -> Result<LabelEncoder> {
        read_json(&self.encoder_path())
    }

    pub fn load_model_config(&self) -> Result<SuggestionClassifierConfig> {
        read_json(&self.model_config_path())
    }

    /// Rebuild the classifier and restore its weights, together with the
    /// label encoder it was trained with.
    ///
    /// Fails if the encoder and the model disagree on the class count —
    /// a sign the two files come from different runs.
    pub fn load<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<(SuggestionClassifier<B>, LabelEncoder)> {
        let model_cfg = self.load_model_config()?;
        let encoder   = self.load_encoder()?;

        if encoder.num_classes() != model_cfg.num_classes {
            bail!(
                "label encoder in '{}' has {} classes but the model expects {}",
                self.encoder_path().display(),
                encoder.num_classes(),
                model_cfg.num_classes
            );
        }

        let path   = self.dir.join(MODEL_STEM);
        let record = ModelRecorder::new()
            .load(path.clone(), device)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load model '{}'. Have you trained it first? ({e:?})",
                path.display()
            ))?;

        let model = model_cfg.init::<B>(device).load_record(record);
        Ok((model, encoder))
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    tracing::debug!("Wrote '{}'", path.display());
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!(
            "Cannot read '{}'. Make sure you have run 'train' first.",
            path.display()
        ))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Cannot parse '{}'", path.display()))
}
