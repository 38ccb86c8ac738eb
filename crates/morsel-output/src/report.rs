//! JSON run report.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use morsel_model::{FileReport, FileStatus, RunFailure};

use crate::error::{OutputError, Result};

const REPORT_SCHEMA: &str = "morsel.run-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable record of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub schema: String,
    pub schema_version: u32,
    pub generated_at: String,
    pub input_directory: PathBuf,
    pub pattern: String,
    /// Destination file, when one was written.
    pub output_path: Option<PathBuf>,
    pub success: bool,
    pub failure: Option<RunFailure>,
    pub total_records: usize,
    pub contributed_files: usize,
    pub skipped_files: usize,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(input_directory: &Path, pattern: &str, files: Vec<FileReport>) -> Self {
        let total_records = files.iter().map(FileReport::rows).sum();
        let contributed_files = files
            .iter()
            .filter(|file| matches!(file.status, FileStatus::Contributed { .. }))
            .count();
        let skipped_files = files.len() - contributed_files;
        Self {
            schema: REPORT_SCHEMA.to_string(),
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            input_directory: input_directory.to_path_buf(),
            pattern: pattern.to_string(),
            output_path: None,
            success: false,
            failure: None,
            total_records,
            contributed_files,
            skipped_files,
            files,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output_path: Option<PathBuf>) -> Self {
        self.success = true;
        self.failure = None;
        self.output_path = output_path;
        self
    }

    #[must_use]
    pub fn with_failure(mut self, failure: RunFailure) -> Self {
        self.success = false;
        self.failure = Some(failure);
        self.output_path = None;
        self
    }
}

pub fn write_run_report(path: &Path, report: &RunReport) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(report).map_err(|e| OutputError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, format!("{json}\n")).map_err(|e| OutputError::io(path, e))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morsel_model::FileSkip;

    fn files() -> Vec<FileReport> {
        vec![
            FileReport::contributed("data/a.csv", 2),
            FileReport::skipped("data/b.csv", FileSkip::NoMatchingProduct),
            FileReport::contributed("data/c.csv", 1),
        ]
    }

    #[test]
    fn counts_files_and_records() {
        let report = RunReport::new(Path::new("data"), "*.csv", files());
        assert_eq!(report.total_records, 3);
        assert_eq!(report.contributed_files, 2);
        assert_eq!(report.skipped_files, 1);
        assert!(!report.success);
    }

    #[test]
    fn failure_clears_output() {
        let report = RunReport::new(Path::new("data"), "*.csv", Vec::new())
            .with_output(Some("out.csv".into()))
            .with_failure(RunFailure::NoUsableData { files: 0 });
        assert!(!report.success);
        assert!(report.output_path.is_none());
    }
}
