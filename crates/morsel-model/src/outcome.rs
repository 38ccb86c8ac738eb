//! Per-file and run-level outcomes.
//!
//! A file either contributes rows or is skipped for one named reason; nothing a
//! single file does aborts the run. Only [`RunFailure`] ends a run without output.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{CanonicalField, join_fields};

/// One transformed output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub sales: f64,
    pub region: String,
    pub price: f64,
}

/// Reason a file contributed no rows.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileSkip {
    /// I/O or delimited-text parse failure.
    #[error("file unreadable: {message}")]
    FileUnreadable { message: String },

    /// Fewer than four canonical fields resolved.
    #[error("missing columns: {}", join_fields(missing))]
    SchemaIncomplete { missing: Vec<CanonicalField> },

    /// The product filter kept nothing. Informational, not an error.
    #[error("no matching product data")]
    NoMatchingProduct,

    /// A kept row had a price or quantity that would not parse.
    #[error("unparseable {field} value '{value}' in data row {row}")]
    PriceOrQuantityUnparseable {
        /// 1-based data row number (header excluded).
        row: usize,
        field: CanonicalField,
        value: String,
    },
}

impl FileSkip {
    /// True for every reason except [`FileSkip::NoMatchingProduct`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::NoMatchingProduct)
    }

    /// Stable short label used in summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FileUnreadable { .. } => "unreadable",
            Self::SchemaIncomplete { .. } => "schema incomplete",
            Self::NoMatchingProduct => "no matching product",
            Self::PriceOrQuantityUnparseable { .. } => "unparseable value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Contributed { rows: usize },
    Skipped { reason: FileSkip },
}

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub fn contributed(path: impl Into<PathBuf>, rows: usize) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Contributed { rows },
        }
    }

    pub fn skipped(path: impl Into<PathBuf>, reason: FileSkip) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Skipped { reason },
        }
    }

    /// Rows this file added to the combined table.
    pub fn rows(&self) -> usize {
        match self.status {
            FileStatus::Contributed { rows } => rows,
            FileStatus::Skipped { .. } => 0,
        }
    }

    /// File name for diagnostics, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Terminal run-level failures. No output file is written for either.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunFailure {
    #[error("no input files matching '{pattern}' in '{}'", directory.display())]
    NoInputFiles { directory: PathBuf, pattern: String },

    #[error("no usable data found in {files} file(s)")]
    NoUsableData { files: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_incomplete_lists_missing_fields() {
        let skip = FileSkip::SchemaIncomplete {
            missing: vec![CanonicalField::Price, CanonicalField::Region],
        };
        assert_eq!(skip.to_string(), "missing columns: price, region");
        assert!(skip.is_error());
    }

    #[test]
    fn no_matching_product_is_informational() {
        assert!(!FileSkip::NoMatchingProduct.is_error());
    }

    #[test]
    fn report_rows_only_count_contributions() {
        assert_eq!(FileReport::contributed("a.csv", 3).rows(), 3);
        assert_eq!(
            FileReport::skipped("b.csv", FileSkip::NoMatchingProduct).rows(),
            0
        );
    }

    #[test]
    fn file_name_strips_directories() {
        let report = FileReport::contributed("data/daily_sales_0.csv", 1);
        assert_eq!(report.file_name(), "daily_sales_0.csv");
    }
}
