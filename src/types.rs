//! Shared types and constants used across bob2anki.
//! Includes the `Record` produced by the filter stage and the fixed layout of
//! the review-history export (sheet name, column positions, time layout).
use chrono::{DateTime, Local};

/// Layout of normalized action times and of the `--lastTime` flag.
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Cutoff used when `--lastTime` is not given.
pub const DEFAULT_LAST_TIME: &str = "1970-01-01 00:00:00";

/// Sheet holding the review history in the export workbook.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Output file written in the current working directory.
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Zero-based column positions within a history row.
pub const ACTION_TIME_COLUMN: usize = 1;
pub const BEFORE_COLUMN: usize = 4;
pub const AFTER_COLUMN: usize = 6;

/// One review event that survived the cutoff filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub action_time: DateTime<Local>,
    pub before: String,
    pub after: String,
}
