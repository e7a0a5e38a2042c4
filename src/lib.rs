#![doc = r#"
bob2anki — export spaced-repetition review history to Anki.

Reads the `Sheet1` review-history sheet of a spreadsheet export, keeps the rows
whose action time is strictly after a cutoff, and writes each surviving
before/after pair as a `before;"after"` line of an Anki text-import file.

Quick start
-----------
```rust,no_run
use bob2anki::{ExportParams, export_history, parse_local_timestamp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cutoff = parse_local_timestamp("2023-01-02 03:04:05")?;
    let report = export_history(&ExportParams::new("history.xlsx", cutoff))?;
    println!("wrote {} records", report.records_written);
    Ok(())
}
```

Action times in the sheet use localized markers (`2023年01月02日 03时04分05秒`)
and are read in the local time zone. A single malformed action time aborts
the whole export.

Useful modules
--------------
- [`api`] — the end-to-end export entrypoint.
- [`core`] — timestamp normalization and the cutoff filter.
- [`io`] — spreadsheet reader and the Anki text writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::ExportParams;
pub use crate::core::timestamp::{format_timestamp, normalize_timestamp, parse_local_timestamp};
pub use error::{Error, Result, TimestampError};
pub use types::Record;

pub use api::{ExportReport, export_history};
