// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   1. `train`   — load CSV, train, evaluate, save artifacts
//   2. `predict` — load artifacts and suggest an optimization
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PredictArgs, TrainArgs};

use crate::domain::traits::SuggestionPredictor;

#[derive(Parser, Debug)]
#[command(
    name = "perf-optimizer",
    version,
    about = "Train a classifier that maps performance metrics to optimization suggestions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case. Only routing and printing here.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)   => run_train(args),
            Commands::Predict(args) => run_predict(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on: {}", args.data.display());

    let report = TrainUseCase::new(args.into()).execute()?;
    tracing::info!(
        "{} rows: {} train / {} validation / {} test, {} classes, test loss {:.4}",
        report.total_rows,
        report.train_rows,
        report.validation_rows,
        report.test_rows,
        report.num_classes,
        report.evaluation.loss,
    );
    tracing::info!(
        "Artifacts: {}, {}, {}",
        report.artifacts.model.display(),
        report.artifacts.model_config.display(),
        report.artifacts.encoder.display(),
    );

    println!("Accuracy: {}", report.evaluation.accuracy);
    Ok(())
}

fn run_predict(args: PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;

    let use_case   = PredictUseCase::new(args.model_dir.clone())?;
    let metrics    = args.metrics();
    let suggestion = use_case.suggest(&metrics)?;

    if let Some(path) = &args.report {
        use_case.write_report(&metrics, &suggestion, path)?;
    }

    println!(
        "Suggestion: {} (confidence {:.2}%)",
        suggestion.label,
        suggestion.confidence * 100.0
    );
    Ok(())
}
