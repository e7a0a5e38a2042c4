//! High-level library API: run the full export (read the history sheet,
//! filter by cutoff, write the Anki import file) and report what happened.
//! Prefer this entrypoint over the individual `io` and `core` stages.
use chrono::{DateTime, Local};
use tracing::info;

use crate::core::filter::filter_records;
use crate::core::params::ExportParams;
use crate::error::Result;
use crate::io::{read_history_rows, write_records};

/// Summary of one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub rows_read: usize,
    pub records_written: usize,
    /// Rows at or before the cutoff
    pub skipped: usize,
    /// Latest action time written; pass it as the next run's cutoff to resume
    pub newest: Option<DateTime<Local>>,
}

/// Export review history described by `params` to its output file.
pub fn export_history(params: &ExportParams) -> Result<ExportReport> {
    info!(
        "Exporting {:?} (sheet '{}') after {}",
        params.input, params.sheet_name, params.cutoff
    );

    let rows = read_history_rows(&params.input, &params.sheet_name)?;
    let records = filter_records(&rows, &params.cutoff)?;
    write_records(&params.output, &records)?;

    Ok(ExportReport {
        rows_read: rows.len(),
        records_written: records.len(),
        skipped: rows.len() - records.len(),
        newest: records.iter().map(|r| r.action_time).max(),
    })
}
