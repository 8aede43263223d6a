//! Command implementations for the address-sort CLI
//!
//! The tool has a single command; `convert` holds its workflow and
//! `shared` the logging and reporting helpers.

pub mod convert;
pub mod shared;

pub use shared::exit_code;

use crate::Result;
use crate::app::services::batch_converter::BatchReport;
use crate::cli::args::Args;

/// Main command runner
///
/// Returns the batch report on completion, including when some files
/// failed. Only fatal errors are returned as `Err`.
pub fn run(args: Args) -> Result<BatchReport> {
    convert::run_convert(args)
}
