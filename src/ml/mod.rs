// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn modelling code lives here:
//
//   model.rs     — SuggestionClassifier: 5 → 128 → 64 → C
//                  dense network with ReLU hidden layers and a
//                  softmax output
//
//   trainer.rs   — The training loop: forward pass, loss,
//                  backward pass, Adam step, per-epoch
//                  validation
//
//   evaluator.rs — Sample-weighted loss and accuracy over a
//                  data loader
//
//   predictor.rs — Loads saved artifacts and scores one row of
//                  metrics
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Feed-forward classifier architecture
pub mod model;

/// Fixed-epoch training loop with validation monitoring
pub mod trainer;

/// Held-out loss / accuracy
pub mod evaluator;

/// Inference from saved artifacts
pub mod predictor;
