//! Convert command implementation
//!
//! Runs the batch converter over the input directory, reporting each file on
//! the console as it completes and printing a final summary.

use super::shared::{create_progress_bar, print_report, setup_logging};
use crate::app::services::batch_converter::{
    BatchConverter, BatchReport, FileOutcome, FileStatus, ProgressSink,
};
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use tracing::{debug, info};

/// Convert command runner
///
/// 1. Set up logging and build the configuration
/// 2. Run the batch with console progress
/// 3. Print the final report
pub fn run_convert(args: Args) -> Result<BatchReport> {
    setup_logging(&args)?;

    info!("Starting address sort");
    debug!("Command line arguments: {:?}", args);

    let config = Config::from_args(&args);
    debug!("Configuration: {:?}", config);

    let mut progress = ConsoleProgress::new(&args);
    let report = BatchConverter::new(config).run_with_progress(&mut progress)?;
    progress.finish();

    print_report(&report, args.output_format)?;
    Ok(report)
}

/// Console progress: a bar over the file list plus one line per file
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
    show_progress: bool,
    quiet: bool,
    json: bool,
}

impl ConsoleProgress {
    pub fn new(args: &Args) -> Self {
        Self {
            bar: None,
            show_progress: args.show_progress(),
            quiet: args.quiet,
            json: args.output_format == OutputFormat::Json,
        }
    }

    /// Clear the progress bar once the batch is done
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn print_line(&self, outcome: &FileOutcome) {
        let failed = outcome.is_failed();
        if self.quiet && !failed {
            return;
        }

        let line = colorize(outcome, &format_outcome(outcome));
        let emit = || {
            // stdout stays reserved for the JSON document
            if self.json || failed {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        };

        match &self.bar {
            Some(bar) => bar.suspend(emit),
            None => emit(),
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_start(&mut self, total_files: usize) {
        if self.show_progress && total_files > 0 {
            self.bar = Some(create_progress_bar(total_files as u64, "Sorting"));
        }
    }

    fn on_file(&mut self, outcome: &FileOutcome) {
        self.print_line(outcome);
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }
}

/// Plain progress line for a finished file
pub fn format_outcome(outcome: &FileOutcome) -> String {
    match &outcome.status {
        FileStatus::Converted { rows } => format!(
            "Processed and saved: {} ({} rows)",
            outcome.output_path.display(),
            rows
        ),
        FileStatus::Planned => format!(
            "Would process: {} -> {}",
            outcome.input_path.display(),
            outcome.output_path.display()
        ),
        FileStatus::Failed { error } => format!("Failed: {}: {}", outcome.file, error),
    }
}

fn colorize(outcome: &FileOutcome, line: &str) -> String {
    match outcome.status {
        FileStatus::Converted { .. } => line.green().to_string(),
        FileStatus::Planned => line.cyan().to_string(),
        FileStatus::Failed { .. } => line.red().to_string(),
    }
}
