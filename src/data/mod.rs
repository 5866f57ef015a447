// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw CSV file to tensor batches:
//
//   PerformanceData.csv
//       │
//       ▼
//   CsvLoader          → validates header, parses rows
//       │
//       ▼
//   LabelEncoder       → suggestion string → class code
//       │
//       ▼
//   train_test_split   → seeded 80/20 partition
//   holdout_tail       → validation tail of the train part
//       │
//       ▼
//   PerformanceDataset → implements Burn's Dataset trait
//       │
//       ▼
//   PerformanceBatcher → stacks samples into tensor batches
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads PerformanceData.csv with the csv crate
pub mod loader;

/// Bidirectional label ↔ class code table
pub mod encoder;

/// Seeded train/test split and validation holdout
pub mod splitter;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Synthetic CSV fixtures shared by tests
#[cfg(test)]
pub mod fixture;
