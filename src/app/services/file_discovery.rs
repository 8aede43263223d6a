//! Input file discovery
//!
//! Lists the CSV files sitting directly inside the input directory. Nested
//! directories are not searched and file names are returned in sorted order
//! so runs are reproducible regardless of directory listing order.

use crate::constants::CSV_EXTENSION;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File discovery component for an input directory
#[derive(Debug)]
pub struct FileDiscovery {
    input_dir: PathBuf,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Discover all CSV files in the input directory, sorted by file name
    ///
    /// Fails when the input directory is missing, is not a directory or
    /// cannot be listed. Symbolic links to files are followed. An entry that
    /// cannot be resolved (dangling or looping link) is skipped with a
    /// warning unless it is named like a CSV file, in which case it is kept
    /// so the failure is reported against that file.
    pub fn discover_csv_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            let source = match std::fs::metadata(&self.input_dir) {
                Err(e) => e,
                Ok(_) => std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            };
            return Err(Error::input_directory(&self.input_dir, source));
        }

        debug!("Searching for CSV files in: {}", self.input_dir.display());

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && is_csv_file(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) if e.depth() == 0 => return Err(self.traversal_error(e)),
                Err(e) => match e.path() {
                    Some(path) if is_csv_file(path) => {
                        warn!("Cannot resolve {}: {}", path.display(), e);
                        files.push(path.to_path_buf());
                    }
                    _ => warn!("Skipping unreadable entry: {}", e),
                },
            }
        }
        files.sort();

        debug!("Found {} CSV files", files.len());
        Ok(files)
    }

    fn traversal_error(&self, error: walkdir::Error) -> Error {
        match error.io_error() {
            Some(source) => Error::input_directory(
                &self.input_dir,
                std::io::Error::new(source.kind(), source.to_string()),
            ),
            None => Error::directory_traversal(
                format!("Failed to list {}", self.input_dir.display()),
                error,
            ),
        }
    }
}

/// Check if a path is a CSV file
pub fn is_csv_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CSV_EXTENSION)
}
