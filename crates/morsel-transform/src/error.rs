//! Error types for row transformation and aggregation.

use polars::prelude::PolarsError;
use thiserror::Error;

use morsel_model::{CanonicalField, FileSkip};

#[derive(Debug, Error)]
pub enum TransformError {
    /// Price or quantity of a kept row did not parse after cleaning.
    #[error("unparseable {field} value '{value}' in data row {row}")]
    Unparseable {
        /// 1-based data row number.
        row: usize,
        field: CanonicalField,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl TransformError {
    /// Per-file skip reason for this error.
    pub fn into_skip(self) -> FileSkip {
        match self {
            Self::Unparseable { row, field, value } => {
                FileSkip::PriceOrQuantityUnparseable { row, field, value }
            }
            Self::DataFrame { message } => FileSkip::FileUnreadable { message },
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
