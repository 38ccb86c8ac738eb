//! Input file discovery.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Lists files in `dir` matching the glob `pattern`.
///
/// The pattern is interpreted relative to `dir` and may contain path
/// separators (e.g. `2024/*.csv`). Directories are skipped. Results are sorted
/// by path so that logs are reproducible between runs.
pub fn locate_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    // Escape the directory so that brackets or asterisks in its name are literal.
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let entries = glob_with(&full_pattern, options).map_err(|e| IngestError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| IngestError::DirectoryRead {
            path: e.path().to_path_buf(),
            message: e.error().to_string(),
        })?;

        // Skip directories
        if !path.is_file() {
            continue;
        }
        files.push(path);
    }

    files.sort();
    debug!(
        directory = %dir.display(),
        pattern,
        file_count = files.len(),
        "located input files"
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["daily_sales_1.csv", "daily_sales_0.csv", "notes.txt"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "header\ndata").unwrap();
        }
        std::fs::create_dir(dir.path().join("archive.csv")).unwrap();

        dir
    }

    #[test]
    fn test_locate_files_sorted_and_filtered() {
        let dir = create_test_dir();
        let files = locate_files(dir.path(), "*.csv").unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["daily_sales_0.csv", "daily_sales_1.csv"]);
    }

    #[test]
    fn test_locate_files_custom_pattern() {
        let dir = create_test_dir();
        let files = locate_files(dir.path(), "*.txt").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_locate_files_empty_dir() {
        let dir = TempDir::new().unwrap();
        let files = locate_files(dir.path(), "*.csv").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_locate_files_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.csv");
        std::fs::write(&file_path, "data").unwrap();

        let result = locate_files(&file_path, "*.csv");
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_locate_files_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let result = locate_files(dir.path(), "[.csv");
        assert!(matches!(result, Err(IngestError::InvalidPattern { .. })));
    }
}
