use chrono::{DateTime, Local};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bob2anki::{Error, ExportParams, export_history, format_timestamp, parse_local_timestamp};

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bob2anki=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_cutoff(last_time: &str) -> bob2anki::Result<DateTime<Local>> {
    parse_local_timestamp(last_time).map_err(|e| Error::InvalidArgument {
        arg: "--lastTime",
        value: last_time.to_string(),
        reason: e.to_string(),
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let cutoff = parse_cutoff(&args.last_time)?;

    let params = ExportParams::new(args.file_path, cutoff);
    let report = export_history(&params)?;

    info!(
        "Export complete: {} rows read, {} written, {} skipped",
        report.rows_read, report.records_written, report.skipped
    );
    if let Some(newest) = report.newest {
        println!(
            "Wrote {} records to {}; resume with --lastTime \"{}\"",
            report.records_written,
            params.output.display(),
            format_timestamp(&newest)
        );
    } else {
        println!("No records after {}", format_timestamp(&cutoff));
    }

    Ok(())
}
