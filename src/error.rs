//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Each pipeline stage has its own variant so callers can tell an unreadable
//! workbook from a malformed row or a failed write.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot open spreadsheet {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Sheet '{sheet}' not found. Available: {available}")]
    SheetNotFound { sheet: String, available: String },

    #[error("Cannot parse action time '{value}' in row {row}: {source}")]
    TimeParse {
        row: usize,
        value: String,
        #[source]
        source: TimestampError,
    },

    #[error("Row {row} has no column {column}")]
    MissingColumn { row: usize, column: usize },

    #[error("Cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {arg}={value} ({reason})")]
    InvalidArgument {
        arg: &'static str,
        value: String,
        reason: String,
    },
}

/// Why a timestamp string could not be turned into a local instant.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("{0}")]
    Format(#[from] chrono::ParseError),

    #[error("{0} does not exist in the local time zone")]
    NonexistentLocalTime(chrono::NaiveDateTime),
}
