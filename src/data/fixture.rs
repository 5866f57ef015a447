// Deterministic synthetic PerformanceData.csv for tests.
// Three suggestion classes, separable on frame rate / CPU usage.

use std::{fmt::Write as _, fs, path::{Path, PathBuf}};

pub const HEADER: &str =
    "FrameRate,TotalMemory,UsedMemory,CPUUsage,GPUFrameTime,OptimizationSuggestion";

pub const LABELS: [&str; 3] = [
    "Optimize game objects and scripts",
    "Reduce texture memory",
    "No action needed",
];

/// `rows` data lines cycling through the three labels.
pub fn csv_body(rows: usize) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for i in 0..rows {
        let class  = i % 3;
        let jitter = (i % 7) as f64 * 0.1;
        let (fps, used, cpu, gpu) = match class {
            0 => (20.0 + jitter, 1.0 + jitter, 0.9, 45.0 + jitter),
            1 => (45.0 + jitter, 3.5 + jitter, 0.4, 20.0 + jitter),
            _ => (90.0 + jitter, 1.5 + jitter, 0.2, 8.0 + jitter),
        };
        let _ = writeln!(out, "{fps},4.0,{used},{cpu},{gpu},{}", LABELS[class]);
    }
    out
}

/// Write `csv_body(rows)` to `<dir>/PerformanceData.csv`.
pub fn write_fixture(dir: &Path, rows: usize) -> PathBuf {
    let path = dir.join("PerformanceData.csv");
    fs::write(&path, csv_body(rows)).unwrap();
    path
}
