//! Command Line Interface (CLI) layer for bob2anki.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that maps flags onto `ExportParams` and runs the export.
//!
//! If you are embedding the exporter into another application, prefer the
//! `bob2anki::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
