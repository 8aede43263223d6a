//! Command-line argument definitions for address-sort
//!
//! This module defines the CLI interface using the clap derive API. A bare
//! invocation converts `./input` into `./output`.

use crate::app::models::PhaseOrdering;
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the address sorter
///
/// Reorders the rows of every CSV file in a directory by phase, then street
/// name, then house number, and writes the results under the same names.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "address-sort",
    version,
    about = "Sort address CSV files by phase, street name and house number",
    long_about = "Reads every *.csv file directly inside the input directory, orders its rows \
                  by phase, then street name, then house number, and writes each result under \
                  the same file name in the output directory. All columns are preserved. A file \
                  that cannot be processed is reported and skipped."
)]
pub struct Args {
    /// Directory containing the CSV files to sort
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = DEFAULT_INPUT_DIR,
        help = "Input directory containing CSV files"
    )]
    pub input_path: PathBuf,

    /// Directory receiving the sorted files
    ///
    /// Created if it doesn't exist. Existing files with the same names are replaced.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for sorted CSV files"
    )]
    pub output_path: PathBuf,

    /// How phase values are compared
    ///
    /// `auto` compares numerically when every phase in a file is a number and
    /// as plain text otherwise. `natural` compares embedded digit runs by value
    /// so "Phase 2" sorts before "Phase 10".
    #[arg(
        long = "phase-order",
        value_enum,
        value_name = "MODE",
        default_value_t = PhaseOrdering::Auto,
        help = "How phase values are compared"
    )]
    pub phase_order: PhaseOrdering,

    /// Perform a dry run without reading or writing any file
    #[arg(
        long = "dry-run",
        help = "Show which files would be processed without creating output"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only failures and errors are shown. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet or JSON mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_DIR),
            phase_order: PhaseOrdering::Auto,
            dry_run: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}
