//! bob2anki CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the export,
//! and exit with appropriate status. For programmatic use, prefer the library
//! API (`bob2anki::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse_from(cli::args::normalize_legacy_flags(std::env::args_os()));
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
