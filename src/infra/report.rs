// ============================================================
// Layer 6 — Performance Report
// ============================================================
// Plain-text summary of one row of metrics and the suggestion
// the model picked for it.
//
//   Performance Report
//   ------------------
//   Frame Rate: 59.94 FPS
//   Total Memory: 4096 MB
//   Used Memory: 1024 MB
//   CPU Usage: 42.00%
//   GPU Frame Time: 12.30 ms
//   Optimization Suggestion: Reduce texture memory
//   End of Report
//
// Memory readings are bytes; the report shows whole MiB.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::sample::PerformanceMetrics;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

pub struct PerformanceReport<'a> {
    metrics:    &'a PerformanceMetrics,
    suggestion: &'a str,
}

impl<'a> PerformanceReport<'a> {
    pub fn new(metrics: &'a PerformanceMetrics, suggestion: &'a str) -> Self {
        Self { metrics, suggestion }
    }

    pub fn render(&self) -> String {
        let m = self.metrics;
        let lines = [
            "Performance Report".to_string(),
            "------------------".to_string(),
            format!("Frame Rate: {:.2} FPS", m.frame_rate),
            format!("Total Memory: {} MB", whole_mib(m.total_memory)),
            format!("Used Memory: {} MB", whole_mib(m.used_memory)),
            format!("CPU Usage: {:.2}%", m.cpu_usage * 100.0),
            format!("GPU Frame Time: {:.2} ms", m.gpu_frame_time),
            format!("Optimization Suggestion: {}", self.suggestion),
            "End of Report".to_string(),
        ];
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Overwrites `path` if it exists.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;
        tracing::info!("Performance report saved to '{}'", path.display());
        Ok(())
    }
}

fn whole_mib(bytes: f64) -> i64 {
    (bytes / BYTES_PER_MIB).trunc() as i64
}
