//! Concatenation of per-file results into one [`SalesFrame`].

use std::path::Path;

use tracing::debug;

use morsel_model::SalesRecord;

use crate::error::Result;
use crate::frame::SalesFrame;

/// Append-only accumulator for transformed rows.
///
/// Rows keep file order, then row order within each file. Nothing is
/// deduplicated or re-sorted.
#[derive(Debug, Default)]
pub struct Aggregator {
    combined: Option<SalesFrame>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one file's rows. Empty slices are ignored.
    pub fn append(&mut self, source: &Path, records: &[SalesRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let frame = SalesFrame::from_records(records)?;
        match self.combined.as_mut() {
            Some(existing) => {
                existing.data.vstack_mut(&frame.data)?;
                existing.source_files.push(source.to_path_buf());
            }
            None => {
                let mut frame = frame;
                frame.source_files.push(source.to_path_buf());
                self.combined = Some(frame);
            }
        }
        debug!(
            source_file = %source.display(),
            appended = records.len(),
            total = self.record_count(),
            "appended rows"
        );
        Ok(())
    }

    /// Rows accumulated so far.
    pub fn record_count(&self) -> usize {
        self.combined.as_ref().map_or(0, SalesFrame::record_count)
    }

    /// The combined table, or `None` when no file contributed a row.
    pub fn finish(self) -> Option<SalesFrame> {
        self.combined
    }
}
