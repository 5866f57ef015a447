// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads PerformanceData.csv using the csv crate.
//
// The header is checked before a single row is parsed, so a
// file with a missing column fails fast and nothing later in
// the pipeline (training, artifact writing) ever runs.
//
// Rows are deserialised through serde into a flat CsvRow and
// then converted into the domain type. Extra columns are
// ignored, and column order in the file does not matter.
//
// Reference: csv crate documentation (Reader, serde support)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::{fs::File, path::PathBuf};

use crate::domain::sample::{
    PerformanceMetrics, PerformanceSample, FEATURE_COLUMNS, LABEL_COLUMN,
};
use crate::domain::traits::SampleSource;

/// One raw CSV record. Field names follow the collector's header.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "FrameRate")]
    frame_rate:     f64,
    #[serde(rename = "TotalMemory")]
    total_memory:   f64,
    #[serde(rename = "UsedMemory")]
    used_memory:    f64,
    #[serde(rename = "CPUUsage")]
    cpu_usage:      f64,
    #[serde(rename = "GPUFrameTime")]
    gpu_frame_time: f64,
    #[serde(rename = "OptimizationSuggestion")]
    suggestion:     String,
}

impl From<CsvRow> for PerformanceSample {
    fn from(r: CsvRow) -> Self {
        PerformanceSample::new(
            PerformanceMetrics::new(
                r.frame_rate,
                r.total_memory,
                r.used_memory,
                r.cpu_usage,
                r.gpu_frame_time,
            ),
            r.suggestion,
        )
    }
}

/// Loads labelled samples from a single CSV file.
/// Implements the SampleSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SampleSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<PerformanceSample>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open data file '{}'", self.path.display()))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read CSV header of '{}'", self.path.display()))?
            .clone();
        check_required_columns(&headers)
            .with_context(|| format!("Invalid header in '{}'", self.path.display()))?;

        let mut samples = Vec::new();
        for record in reader.deserialize::<CsvRow>() {
            // Quoted fields may span lines, so take the line from the reader
            let row = record.map_err(|e| {
                let line = e.position().map_or(0, |p| p.line());
                anyhow::Error::new(e).context(format!(
                    "Malformed row at line {line} of '{}'",
                    self.path.display()
                ))
            })?;
            samples.push(PerformanceSample::from(row));
        }

        tracing::info!("Loaded {} rows from '{}'", samples.len(), self.path.display());
        Ok(samples)
    }
}

/// Fail unless every feature column and the label column is present.
/// The error names all missing columns at once.
pub fn check_required_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<&str> = FEATURE_COLUMNS
        .iter()
        .copied()
        .chain(std::iter::once(LABEL_COLUMN))
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();

    if !missing.is_empty() {
        bail!(
            "missing required column(s): {} (found: {})",
            missing.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("PerformanceData.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_loads_rows_in_file_order() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "FrameRate,TotalMemory,UsedMemory,CPUUsage,GPUFrameTime,OptimizationSuggestion\n\
             60.5,4096,2048,0.25,12.5,Reduce draw calls\n\
             30,4096,3900,0.9,40,Optimize game objects and scripts\n",
        );

        let rows = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].metrics.frame_rate, 60.5);
        assert_eq!(rows[0].optimization_suggestion, "Reduce draw calls");
        assert_eq!(rows[1].metrics.used_memory, 3900.0);
        assert_eq!(rows[1].optimization_suggestion, "Optimize game objects and scripts");
    }

    #[test]
    fn test_column_order_and_extra_columns_are_ignored() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "OptimizationSuggestion,Timestamp,GPUFrameTime,CPUUsage,UsedMemory,TotalMemory,FrameRate\n\
             Lower texture quality, 1700000000 ,8, 0.1 ,100,200,144\n",
        );

        let rows = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].metrics,
            PerformanceMetrics::new(144.0, 200.0, 100.0, 0.1, 8.0)
        );
        assert_eq!(rows[0].optimization_suggestion, "Lower texture quality");
    }

    #[test]
    fn test_missing_column_is_reported() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "FrameRate,TotalMemory,UsedMemory,GPUFrameTime,OptimizationSuggestion\n\
             60,1,1,1,x\n",
        );

        let err = CsvLoader::new(&path).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("CPUUsage"));
    }

    #[test]
    fn test_malformed_number_names_the_line() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "FrameRate,TotalMemory,UsedMemory,CPUUsage,GPUFrameTime,OptimizationSuggestion\n\
             60,1,1,1,1,ok\n\
             fast,1,1,1,1,bad\n",
        );

        let err = CsvLoader::new(&path).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("line 3"));
    }

    #[test]
    fn test_line_number_counts_multiline_quoted_fields() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "FrameRate,TotalMemory,UsedMemory,CPUUsage,GPUFrameTime,OptimizationSuggestion\n\
             60,1,1,1,1,\"reduce\nshadows\"\n\
             fast,1,1,1,1,bad\n",
        );

        let err = CsvLoader::new(&path).load_all().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 4"), "{msg}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::new(dir.path().join("nope.csv")).load_all().unwrap_err();
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn test_header_check_lists_every_missing_column() {
        let headers = StringRecord::from(vec!["FrameRate", "TotalMemory"]);
        let msg = check_required_columns(&headers).unwrap_err().to_string();
        for col in ["UsedMemory", "CPUUsage", "GPUFrameTime", "OptimizationSuggestion"] {
            assert!(msg.contains(col), "{msg}");
        }
    }
}
