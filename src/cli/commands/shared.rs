//! Shared components for CLI commands
//!
//! Logging setup, progress bar styling and the final report printers.

use crate::app::services::batch_converter::{BatchReport, FileStatus};
use crate::cli::args::{Args, OutputFormat};
use crate::constants::{EXIT_FILE_FAILURES, EXIT_SUCCESS, LOG_TARGET};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::debug;

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print the final report in the requested format
pub fn print_report(report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            print_human_report(report);
            Ok(())
        }
        OutputFormat::Json => print_json_report(report),
    }
}

fn print_human_report(report: &BatchReport) {
    let duration = HumanDuration(report.elapsed);

    println!();
    if report.dry_run {
        println!(
            "{} {} files would be processed",
            "Dry run:".cyan().bold(),
            report.files.len()
        );
    } else if report.is_success() {
        println!("{}", "All files have been processed.".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} of {} files failed.",
                report.files_failed(),
                report.files.len()
            )
            .red()
            .bold()
        );
    }

    println!("   • Input directory: {}", report.input_dir.display());
    println!("   • Output directory: {}", report.output_dir.display());
    println!("   • Files converted: {}", report.files_converted());
    println!("   • Rows written: {}", report.rows_written());
    if report.files_failed() > 0 {
        println!(
            "   • {}",
            format!("Files failed: {}", report.files_failed()).yellow()
        );
        for outcome in &report.files {
            if let FileStatus::Failed { error } = &outcome.status {
                println!("       - {}: {}", outcome.file, error);
            }
        }
    }
    println!("   • Processing time: {}", duration);
    println!();
}

fn print_json_report(report: &BatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::io("Failed to serialize report", e.into()))?;
    println!("{}", json);
    Ok(())
}

/// Exit status for a completed run
pub fn exit_code(report: &BatchReport) -> u8 {
    if report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_FILE_FAILURES
    }
}
