//! Configuration management and validation.
//!
//! Holds the directories and sorting options for one run. Defaults match the
//! historical behaviour of converting `./input` into `./output`, and every
//! value can be redirected so tests never depend on the working directory.

use crate::app::models::PhaseOrdering;
use crate::cli::args::Args;
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for a batch conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for `*.csv` files
    pub input_dir: PathBuf,

    /// Directory receiving the sorted files, created if absent
    pub output_dir: PathBuf,

    /// How phase values compare
    pub phase_ordering: PhaseOrdering,

    /// List the files that would be converted without reading or writing them
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            phase_ordering: PhaseOrdering::default(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Create a configuration for the given directories with default options
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Build the configuration from parsed command-line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_dir: args.input_path.clone(),
            output_dir: args.output_path.clone(),
            phase_ordering: args.phase_order,
            dry_run: args.dry_run,
        }
    }

    pub fn with_phase_ordering(mut self, phase_ordering: PhaseOrdering) -> Self {
        self.phase_ordering = phase_ordering;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Output location for an input file: same file name inside the output directory
    pub fn output_path_for(&self, input_file: &Path) -> PathBuf {
        match input_file.file_name() {
            Some(name) => self.output_dir.join(name),
            None => self.output_dir.join(input_file),
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Input directory must not be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory must not be empty"));
        }

        if same_location(&self.input_dir, &self.output_dir) {
            return Err(Error::configuration(format!(
                "Output directory {} must differ from the input directory",
                self.output_dir.display()
            )));
        }

        debug!(
            "Configuration validated: input={}, output={}, phase_ordering={}",
            self.input_dir.display(),
            self.output_dir.display(),
            self.phase_ordering
        );
        Ok(())
    }
}

/// Compare two directories, resolving them when both exist
fn same_location(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
