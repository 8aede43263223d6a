//! Batch conversion of an input directory
//!
//! Orchestrates the complete workflow for one run:
//!
//! 1. Validate the configuration and discover `*.csv` input files
//! 2. Create the output directory
//! 3. For each file: load, sort, and write under the same name
//! 4. Collect a [`FileOutcome`] per file into a [`BatchReport`]
//!
//! Failures are split in two tiers. Problems with the run as a whole
//! (configuration, input directory, output directory) abort with an error.
//! Problems with a single file (missing columns or fields, malformed CSV,
//! unreadable or unwritable file) are recorded in its outcome and the batch
//! moves on to the next file.

use crate::app::services::csv_io::{file_label, read_dataset, write_dataset};
use crate::app::services::file_discovery::FileDiscovery;
use crate::app::services::row_sorter::sort_dataset;
use crate::config::Config;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of handling one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    /// File name used in diagnostics
    pub file: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// What happened to a file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Sorted and written
    Converted { rows: usize },
    /// Dry run: would have been converted
    Planned,
    /// Skipped after an error; the diagnostic names the cause
    Failed { error: String },
}

impl FileOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn files_converted(&self) -> usize {
        self.files
            .iter()
            .filter(|outcome| matches!(outcome.status, FileStatus::Converted { .. }))
            .count()
    }

    pub fn files_failed(&self) -> usize {
        self.files.iter().filter(|outcome| outcome.is_failed()).count()
    }

    /// Data rows written across all converted files
    pub fn rows_written(&self) -> usize {
        self.files
            .iter()
            .map(|outcome| match outcome.status {
                FileStatus::Converted { rows } => rows,
                _ => 0,
            })
            .sum()
    }

    /// True when no file failed (an empty input directory succeeds)
    pub fn is_success(&self) -> bool {
        self.files_failed() == 0
    }
}

fn serialize_seconds<S: Serializer>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Receives progress while a batch runs
pub trait ProgressSink {
    /// Called once after discovery with the number of files to handle
    fn on_start(&mut self, _total_files: usize) {}

    /// Called after each file, in processing order
    fn on_file(&mut self, outcome: &FileOutcome);
}

/// Progress sink that discards everything
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&mut self, _outcome: &FileOutcome) {}
}

/// Main converter for a directory of CSV files
#[derive(Debug)]
pub struct BatchConverter {
    config: Config,
    file_discovery: FileDiscovery,
}

impl BatchConverter {
    /// Create a new converter
    pub fn new(config: Config) -> Self {
        let file_discovery = FileDiscovery::new(config.input_dir.clone());
        Self {
            config,
            file_discovery,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert every file without progress reporting
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with_progress(&mut NoProgress)
    }

    /// Main processing entry point
    pub fn run_with_progress(&self, progress: &mut dyn ProgressSink) -> Result<BatchReport> {
        let started_at = Utc::now();
        let start_time = Instant::now();

        self.config.validate()?;

        let input_files = self.file_discovery.discover_csv_files()?;
        info!(
            "Found {} CSV files in {}",
            input_files.len(),
            self.file_discovery.input_dir().display()
        );

        if !self.config.dry_run {
            std::fs::create_dir_all(&self.config.output_dir)
                .map_err(|e| Error::output_directory(&self.config.output_dir, e))?;
        }

        progress.on_start(input_files.len());

        let mut files = Vec::with_capacity(input_files.len());
        for input_path in input_files {
            let outcome = self.handle_file(&input_path);
            progress.on_file(&outcome);
            files.push(outcome);
        }

        let report = BatchReport {
            started_at,
            elapsed: start_time.elapsed(),
            input_dir: self.config.input_dir.clone(),
            output_dir: self.config.output_dir.clone(),
            dry_run: self.config.dry_run,
            files,
        };

        info!(
            "Batch complete: {} converted, {} failed, {} rows written",
            report.files_converted(),
            report.files_failed(),
            report.rows_written()
        );
        Ok(report)
    }

    /// Convert one file, capturing any per-file error in the outcome
    fn handle_file(&self, input_path: &Path) -> FileOutcome {
        let file = file_label(input_path);
        let output_path = self.config.output_path_for(input_path);

        let status = if self.config.dry_run {
            debug!("Dry run: would convert {}", input_path.display());
            FileStatus::Planned
        } else {
            match self.convert_file(input_path, &output_path) {
                Ok(rows) => FileStatus::Converted { rows },
                Err(e) => {
                    warn!("Failed to convert {}: {}", file, e);
                    FileStatus::Failed {
                        error: e.to_string(),
                    }
                }
            }
        };

        FileOutcome {
            file,
            input_path: input_path.to_path_buf(),
            output_path,
            status,
        }
    }

    /// Load, sort and write a single file, returning the rows written
    pub fn convert_file(&self, input_path: &Path, output_path: &Path) -> Result<usize> {
        let dataset = read_dataset(input_path)?;
        let sorted = sort_dataset(dataset, self.config.phase_ordering)?;
        write_dataset(&sorted, output_path)
    }
}
