use chrono::{DateTime, Local};
use tracing::debug;

use crate::core::timestamp::parse_action_time;
use crate::error::{Error, Result};
use crate::types::{ACTION_TIME_COLUMN, AFTER_COLUMN, BEFORE_COLUMN, Record};

/// Spreadsheet row number of the first data row (row 1 is the header).
const FIRST_DATA_ROW: usize = 2;

fn cell(row: &[String], column: usize, row_number: usize) -> Result<&str> {
    row.get(column)
        .map(String::as_str)
        .ok_or(Error::MissingColumn {
            row: row_number,
            column,
        })
}

/// Turn raw history rows into records newer than `cutoff`.
///
/// Rows at or before the cutoff are dropped. The first row whose action time
/// cannot be parsed aborts the whole batch.
pub fn filter_records(rows: &[Vec<String>], cutoff: &DateTime<Local>) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + FIRST_DATA_ROW;
        let raw_time = cell(row, ACTION_TIME_COLUMN, row_number)?;
        let action_time = parse_action_time(raw_time).map_err(|source| Error::TimeParse {
            row: row_number,
            value: raw_time.to_string(),
            source,
        })?;

        if action_time <= *cutoff {
            debug!("Row {} at {} is not after cutoff", row_number, action_time);
            continue;
        }

        records.push(Record {
            action_time,
            before: cell(row, BEFORE_COLUMN, row_number)?.to_string(),
            after: cell(row, AFTER_COLUMN, row_number)?.to_string(),
        });
    }

    Ok(records)
}
