//! Error types for sales extract ingestion.

use std::path::PathBuf;
use thiserror::Error;

use morsel_model::FileSkip;

/// Errors that can occur while locating or reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Glob pattern could not be compiled.
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A matched entry could not be inspected.
    #[error("failed to read directory entry {path}: {message}")]
    DirectoryRead { path: PathBuf, message: String },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Delimited text could not be parsed.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File is empty or has only blank lines.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// First row has no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl From<IngestError> for FileSkip {
    fn from(err: IngestError) -> Self {
        FileSkip::FileUnreadable {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file is empty: /path/to/file.csv");
    }

    #[test]
    fn read_failures_become_unreadable_skips() {
        let skip: FileSkip = IngestError::NoHeaderDetected {
            path: PathBuf::from("east.csv"),
        }
        .into();
        assert_eq!(
            skip,
            FileSkip::FileUnreadable {
                message: "could not detect header row in east.csv".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = IngestError::InvalidPattern {
            pattern: "[".to_string(),
            message: "invalid range pattern".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid file pattern '[': invalid range pattern"
        );
    }
}
