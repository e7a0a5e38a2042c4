use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::TIME_LAYOUT;

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        // Typed date cells hold a serial number; render them as the app would.
        Data::DateTime(_) => match cell.as_datetime() {
            Some(datetime) => datetime.format(TIME_LAYOUT).to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

// calamine trims leading empty rows/columns from a range; pad them back so
// row and column positions match the sheet as the user sees it.
fn sheet_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let width = start_col as usize + range.width();

    let mut rows = vec![vec![String::new(); width]; start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_text));
        rows.push(cells);
    }
    rows
}

/// Read every data row of `sheet_name`, skipping the header row.
///
/// Cells are returned as text in sheet order; empty cells become `""`.
pub fn read_history_rows(path: &Path, sheet_name: &str) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|name| name == sheet_name) {
        return Err(Error::SheetNotFound {
            sheet: sheet_name.to_string(),
            available: sheet_names.join(", "),
        });
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Sheet '{}' spans {:?}", sheet_name, range.get_size());

    let rows: Vec<Vec<String>> = sheet_rows(&range).into_iter().skip(1).collect();
    info!("Read {} history rows from {:?}", rows.len(), path);
    Ok(rows)
}
