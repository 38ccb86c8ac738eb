use std::path::PathBuf;

use morsel_model::{FileReport, FileStatus, RunFailure};

/// Everything a finished run produced, successful or not.
#[derive(Debug)]
pub struct RunResult {
    pub input_directory: PathBuf,
    pub pattern: String,
    /// One entry per located file, in processing order.
    pub files: Vec<FileReport>,
    /// Destination that was written; `None` on failure or dry run.
    pub output_path: Option<PathBuf>,
    pub total_records: usize,
    pub failure: Option<RunFailure>,
    pub dry_run: bool,
}

impl RunResult {
    pub fn failed(
        input_directory: PathBuf,
        pattern: String,
        files: Vec<FileReport>,
        failure: RunFailure,
    ) -> Self {
        Self {
            input_directory,
            pattern,
            files,
            output_path: None,
            total_records: 0,
            failure: Some(failure),
            dry_run: false,
        }
    }

    /// True when at least one row survived.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn contributed_files(&self) -> usize {
        self.files
            .iter()
            .filter(|file| matches!(file.status, FileStatus::Contributed { .. }))
            .count()
    }
}
