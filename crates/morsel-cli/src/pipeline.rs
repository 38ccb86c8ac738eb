//! Consolidation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Locate**: Glob the input directory for candidate files
//! 2. **Process**: Per file, read, reconcile columns, filter and transform rows
//! 3. **Aggregate**: Concatenate contributed rows in processing order
//! 4. **Write**: Serialize the combined table as `sales,region,price`
//!
//! A file never aborts the run: every per-file problem becomes a [`FileSkip`].
//! The run itself fails only when no file is located or no row survives.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use morsel_ingest::{IngestError, locate_files, read_raw_table};
use morsel_map::ColumnReconciler;
use morsel_model::{FileReport, FileSkip, RunFailure, SalesRecord};
use morsel_output::write_sales_csv;
use morsel_transform::{Aggregator, RowTransformer, SalesFrame, TransformError};

use crate::config::RunConfig;
use crate::types::RunResult;

// ============================================================================
// Stage 1: Locate
// ============================================================================

/// Finds input files, or the run-level failure that ends the run.
///
/// A missing input directory is treated like an empty one. A malformed
/// pattern is a configuration error and is returned as `Err`.
pub fn locate(input_directory: &Path, pattern: &str) -> Result<Result<Vec<PathBuf>, RunFailure>> {
    let no_files = || RunFailure::NoInputFiles {
        directory: input_directory.to_path_buf(),
        pattern: pattern.to_string(),
    };
    match locate_files(input_directory, pattern) {
        Ok(files) if files.is_empty() => Ok(Err(no_files())),
        Ok(files) => Ok(Ok(files)),
        Err(IngestError::DirectoryNotFound { path }) => {
            warn!(directory = %path.display(), "input directory does not exist");
            Ok(Err(no_files()))
        }
        Err(err) => Err(err).context("locate input files"),
    }
}

// ============================================================================
// Stage 2: Process
// ============================================================================

/// Reads one file and returns the rows it contributes.
///
/// An empty filter result is reported as [`FileSkip::NoMatchingProduct`], so
/// `Ok` always carries at least one record.
pub fn process_file(
    path: &Path,
    reconciler: &ColumnReconciler,
    transformer: &RowTransformer,
) -> Result<Vec<SalesRecord>, FileSkip> {
    let table = read_raw_table(path)?;
    debug!(
        delimiter = %char::from(table.delimiter).escape_default(),
        rows = table.len(),
        "read input file"
    );
    let map = reconciler.reconcile(&table.headers)?;
    for column in map.iter() {
        debug!(
            field = %column.field,
            source = %column.source,
            index = column.index,
            "resolved column"
        );
    }
    let dropped = map.unmapped_columns(&table.headers);
    if !dropped.is_empty() {
        debug!(columns = ?dropped, "dropping unmapped columns");
    }
    if table.is_empty() {
        return Err(FileSkip::NoMatchingProduct);
    }
    let records = transformer
        .transform_table(&table, &map)
        .map_err(TransformError::into_skip)?;
    if records.is_empty() {
        return Err(FileSkip::NoMatchingProduct);
    }
    Ok(records)
}

/// Logs a file outcome at the level its kind calls for.
fn log_skip(skip: &FileSkip, target_product: &str) {
    match skip {
        FileSkip::NoMatchingProduct => {
            info!(product = target_product, "no matching product data");
        }
        FileSkip::SchemaIncomplete { .. } => {
            warn!(reason = %skip, "skipping file: schema incomplete");
        }
        FileSkip::FileUnreadable { .. } => {
            warn!(reason = %skip, "skipping file: unreadable");
        }
        FileSkip::PriceOrQuantityUnparseable { .. } => {
            warn!(reason = %skip, "skipping file: unparseable value");
        }
    }
}

/// Processes every located file in order, appending survivors to `aggregator`.
pub fn process_files(
    files: &[PathBuf],
    reconciler: &ColumnReconciler,
    transformer: &RowTransformer,
    aggregator: &mut Aggregator,
) -> Vec<FileReport> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let span = info_span!("file", file = %file_name);
        let _guard = span.enter();

        let outcome = process_file(path, reconciler, transformer).and_then(|records| {
            aggregator
                .append(path, &records)
                .map_err(TransformError::into_skip)?;
            Ok(records.len())
        });
        match outcome {
            Ok(rows) => {
                info!(rows, "file contributed rows");
                reports.push(FileReport::contributed(path, rows));
            }
            Err(skip) => {
                log_skip(&skip, transformer.target_product());
                reports.push(FileReport::skipped(path, skip));
            }
        }
    }
    reports
}

// ============================================================================
// Stage 3 & 4: Aggregate and write
// ============================================================================

/// Writes the combined table unless this is a dry run.
pub fn write_output(frame: &SalesFrame, config: &RunConfig) -> Result<Option<PathBuf>> {
    if config.dry_run {
        info!(
            output = %config.output_path.display(),
            records = frame.record_count(),
            "dry run: output not written"
        );
        return Ok(None);
    }
    let path = write_sales_csv(frame, &config.output_path).context("write output file")?;
    Ok(Some(path))
}

/// Runs every stage for one configuration.
///
/// Run-level failures are returned inside [`RunResult`] and reported once by
/// the caller; `Err` is reserved for configuration and writer problems.
pub fn run_pipeline(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!(
        "run",
        input = %config.input_directory.display(),
        pattern = %config.pattern
    );
    let _guard = span.enter();
    let start = Instant::now();

    let files = match locate(&config.input_directory, &config.pattern)? {
        Ok(files) => files,
        Err(failure) => {
            return Ok(RunResult::failed(
                config.input_directory.clone(),
                config.pattern.clone(),
                Vec::new(),
                failure,
            ));
        }
    };
    info!(count = files.len(), "located input files");

    let reconciler = ColumnReconciler::new(config.synonyms.clone());
    let transformer = RowTransformer::default();
    let mut aggregator = Aggregator::new();
    let reports = process_files(&files, &reconciler, &transformer, &mut aggregator);

    let Some(frame) = aggregator.finish() else {
        let failure = RunFailure::NoUsableData { files: files.len() };
        return Ok(RunResult::failed(
            config.input_directory.clone(),
            config.pattern.clone(),
            reports,
            failure,
        ));
    };

    let output_path = write_output(&frame, config)?;
    info!(
        records = frame.record_count(),
        contributed = frame.source_files.len(),
        elapsed = ?start.elapsed(),
        "consolidation complete"
    );
    Ok(RunResult {
        input_directory: config.input_directory.clone(),
        pattern: config.pattern.clone(),
        files: reports,
        output_path,
        total_records: frame.record_count(),
        failure: None,
        dry_run: config.dry_run,
    })
}
