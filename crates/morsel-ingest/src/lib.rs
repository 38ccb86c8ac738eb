//! Sales extract ingestion.
//!
//! This crate locates input files and loads each one into a [`RawTable`]:
//!
//! - **File Discovery**: glob a pattern inside an input directory
//! - **CSV Loading**: detect the field delimiter, normalize header names
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use morsel_ingest::{locate_files, read_raw_table};
//!
//! for path in locate_files(Path::new("data"), "*.csv")? {
//!     let table = read_raw_table(&path)?;
//!     println!("{}: {} rows", path.display(), table.len());
//! }
//! ```

mod delimited;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use delimited::{
    CANDIDATE_DELIMITERS, DEFAULT_DELIMITER, RawTable, detect_delimiter, parse_raw_table,
    read_raw_table,
};

// === File Discovery ===
pub use discovery::locate_files;
