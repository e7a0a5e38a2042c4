use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::types::Record;

/// Anki text-import line for one record: `before;"after"`, no escaping.
pub fn format_record_line(record: &Record) -> String {
    format!("{};\"{}\"\n", record.before, record.after)
}

/// Create or truncate `output` and write one line per record, in order.
/// A failed write leaves whatever was already flushed on disk.
pub fn write_records(output: &Path, records: &[Record]) -> Result<()> {
    let write_error = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writer
            .write_all(format_record_line(record).as_bytes())
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    info!("Wrote {} records to {:?}", records.len(), output);
    Ok(())
}
