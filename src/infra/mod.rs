// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem after the data has
// been loaded:
//
//   artifacts.rs — model weights, model config and label
//                  encoder; saved after training, loaded for
//                  prediction
//
//   metrics.rs   — per-epoch loss / accuracy appended to a CSV
//
//   report.rs    — plain-text performance report for one
//                  predicted row
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Trained model + label encoder persistence
pub mod artifacts;

/// Training metrics CSV logger
pub mod metrics;

/// Text report for a single prediction
pub mod report;
