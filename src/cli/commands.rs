// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `train` and `predict`, and
// their flags. Every `train` default reproduces the fixed
// pipeline: PerformanceData.csv in, artifacts in the working
// directory, seed 42, 80/20 split, 50 epochs.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::train_use_case::TrainConfig;
use crate::domain::sample::PerformanceMetrics;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the suggestion classifier on a CSV of performance samples
    Train(TrainArgs),

    /// Suggest an optimization for one set of readings using a trained model
    Predict(PredictArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// CSV file with FrameRate, TotalMemory, UsedMemory, CPUUsage,
    /// GPUFrameTime and OptimizationSuggestion columns
    #[arg(long, default_value = "PerformanceData.csv")]
    pub data: PathBuf,

    /// Directory that receives the model, encoder and metrics files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 50)]
    pub epochs: usize,

    /// Rows per gradient step
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Fraction of rows held out for the final test evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// Fraction of the training rows monitored as validation each epoch
    #[arg(long, default_value_t = 0.2)]
    pub validation_split: f64,

    /// Seed for the split, the batch shuffle and weight initialisation
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_path:        a.data,
            output_dir:       a.output_dir,
            epochs:           a.epochs,
            batch_size:       a.batch_size,
            learning_rate:    a.lr,
            test_size:        a.test_size,
            validation_split: a.validation_split,
            seed:             a.seed,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Frames per second
    #[arg(long)]
    pub frame_rate: f64,

    /// Reserved memory in bytes
    #[arg(long)]
    pub total_memory: f64,

    /// Allocated memory in bytes
    #[arg(long)]
    pub used_memory: f64,

    /// CPU usage as a fraction (0.0 - 1.0)
    #[arg(long)]
    pub cpu_usage: f64,

    /// GPU frame time in milliseconds
    #[arg(long)]
    pub gpu_frame_time: f64,

    /// Directory the `train` command wrote its artifacts to
    #[arg(long, default_value = ".")]
    pub model_dir: PathBuf,

    /// Also write a plain-text performance report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl PredictArgs {
    pub fn metrics(&self) -> PerformanceMetrics {
        PerformanceMetrics::new(
            self.frame_rate,
            self.total_memory,
            self.used_memory,
            self.cpu_usage,
            self.gpu_frame_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_train_defaults_match_fixed_pipeline() {
        let cli = Cli::try_parse_from(["perf-optimizer", "train"]).unwrap();
        let Commands::Train(args) = cli.command else { panic!("expected train") };

        let cfg: TrainConfig = args.into();
        let def = TrainConfig::default();
        assert_eq!(cfg.data_path, def.data_path);
        assert_eq!(cfg.output_dir, def.output_dir);
        assert_eq!(cfg.epochs, def.epochs);
        assert_eq!(cfg.batch_size, def.batch_size);
        assert_eq!(cfg.learning_rate, def.learning_rate);
        assert_eq!(cfg.test_size, def.test_size);
        assert_eq!(cfg.validation_split, def.validation_split);
        assert_eq!(cfg.seed, def.seed);
    }

    #[test]
    fn test_predict_requires_all_metrics() {
        assert!(Cli::try_parse_from(["perf-optimizer", "predict", "--frame-rate", "60"]).is_err());

        let cli = Cli::try_parse_from([
            "perf-optimizer", "predict",
            "--frame-rate", "60", "--total-memory", "1024", "--used-memory", "512",
            "--cpu-usage", "0.5", "--gpu-frame-time", "16.6",
        ])
        .unwrap();
        let Commands::Predict(args) = cli.command else { panic!("expected predict") };
        assert_eq!(args.metrics(), PerformanceMetrics::new(60.0, 1024.0, 512.0, 0.5, 16.6));
        assert!(args.report.is_none());
    }
}
