//! Core types shared by the sales consolidation pipeline.

pub mod config;
pub mod error;
pub mod field;
pub mod outcome;

pub use config::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH, DEFAULT_PATTERN, DEFAULT_SYNONYMS, OUTPUT_COLUMNS,
    SynonymOverlap, SynonymTable, TARGET_PRODUCT, normalize_column_name,
};
pub use error::{ModelError, Result};
pub use field::{CanonicalField, join_fields};
pub use outcome::{FileReport, FileSkip, FileStatus, RunFailure, SalesRecord};
