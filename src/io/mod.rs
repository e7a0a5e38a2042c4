//! I/O layer: the spreadsheet reader for review-history exports and the
//! `writers` that serialize records for import into Anki.
pub mod workbook;
pub use workbook::read_history_rows;

pub mod writers;
pub use writers::anki::{format_record_line, write_records};

#[cfg(test)]
pub(crate) mod fixtures;
