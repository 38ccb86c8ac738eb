//! Consolidated CSV output.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use morsel_transform::SalesFrame;

use crate::error::{OutputError, Result};

/// Writes the combined table to `path` as comma-separated text.
///
/// The header row is `sales,region,price`. Any existing file at `path` is
/// replaced; missing parent directories are created.
pub fn write_sales_csv(frame: &SalesFrame, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    let mut file = File::create(path).map_err(|e| OutputError::io(path, e))?;
    let mut data = frame.data.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut data)
        .map_err(|e| OutputError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(
        output = %path.display(),
        records = frame.record_count(),
        "wrote consolidated sales file"
    );
    Ok(path.to_path_buf())
}
