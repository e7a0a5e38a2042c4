use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::types::{DEFAULT_SHEET_NAME, OUTPUT_FILE_NAME};

/// Export parameters shared by the CLI and library callers
#[derive(Debug, Clone)]
pub struct ExportParams {
    /// Review-history spreadsheet to read
    pub input: PathBuf,
    /// Text file to create or overwrite
    pub output: PathBuf,
    /// Sheet holding the history rows
    pub sheet_name: String,
    /// Only rows strictly after this instant are exported
    pub cutoff: DateTime<Local>,
}

impl ExportParams {
    /// Parameters for the standard export layout: `Sheet1` in, `output.txt` out.
    pub fn new(input: impl Into<PathBuf>, cutoff: DateTime<Local>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(OUTPUT_FILE_NAME),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            cutoff,
        }
    }
}
