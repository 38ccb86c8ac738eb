//! Error types for column reconciliation.

use thiserror::Error;

use morsel_model::{CanonicalField, FileSkip, join_fields};

/// Errors from reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// At least one canonical field had no synonym among the headers.
    #[error("missing canonical columns: {}", join_fields(missing))]
    MissingFields { missing: Vec<CanonicalField> },
}

impl From<ReconcileError> for FileSkip {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::MissingFields { missing } => FileSkip::SchemaIncomplete { missing },
        }
    }
}
