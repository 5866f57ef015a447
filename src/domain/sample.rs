// ============================================================
// Layer 3 — PerformanceSample Domain Type
// ============================================================
// One observation captured by the data collector:
//   five numeric readings + the suggestion that was attached
//   to them.
//
// CSV header written by the collector:
//
//   FrameRate,TotalMemory,UsedMemory,CPUUsage,GPUFrameTime,OptimizationSuggestion
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Number of numeric feature columns fed to the classifier
pub const NUM_FEATURES: usize = 5;

/// Feature column names, in the order the network sees them
pub const FEATURE_COLUMNS: [&str; NUM_FEATURES] = [
    "FrameRate",
    "TotalMemory",
    "UsedMemory",
    "CPUUsage",
    "GPUFrameTime",
];

/// Label column name
pub const LABEL_COLUMN: &str = "OptimizationSuggestion";

/// The five numeric readings of one observation.
/// No range checks: values are whatever the collector wrote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub frame_rate:     f64,
    pub total_memory:   f64,
    pub used_memory:    f64,
    pub cpu_usage:      f64,
    pub gpu_frame_time: f64,
}

impl PerformanceMetrics {
    pub fn new(
        frame_rate:     f64,
        total_memory:   f64,
        used_memory:    f64,
        cpu_usage:      f64,
        gpu_frame_time: f64,
    ) -> Self {
        Self { frame_rate, total_memory, used_memory, cpu_usage, gpu_frame_time }
    }

    /// Feature vector in FEATURE_COLUMNS order
    pub fn to_features(&self) -> [f32; NUM_FEATURES] {
        [
            self.frame_rate     as f32,
            self.total_memory   as f32,
            self.used_memory    as f32,
            self.cpu_usage      as f32,
            self.gpu_frame_time as f32,
        ]
    }
}

/// A labelled row: metrics plus the suggestion string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub metrics: PerformanceMetrics,

    pub optimization_suggestion: String,
}

impl PerformanceSample {
    pub fn new(metrics: PerformanceMetrics, suggestion: impl Into<String>) -> Self {
        Self {
            metrics,
            optimization_suggestion: suggestion.into(),
        }
    }
}
