//! Address Sort Library
//!
//! A Rust library for reordering address-bearing CSV files into a
//! deterministic, walkable order: by phase, then street name, then house number.
//!
//! This library provides tools for:
//! - Splitting free-text addresses into a house number and a street name
//! - Loading CSV files into datasets with a validated column mapping
//! - Stable multi-key sorting that never alters the set or order of columns
//! - Converting a whole input directory into a parallel output directory
//! - Per-file error isolation so one bad file does not halt the batch

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod address_parser;
        pub mod batch_converter;
        pub mod csv_io;
        pub mod file_discovery;
        pub mod row_sorter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColumnMapping, Dataset, ParsedAddress, PhaseOrdering, Record};
pub use app::services::address_parser::parse_address;
pub use app::services::row_sorter::sort_dataset;
pub use config::Config;

use std::path::PathBuf;

/// Result type alias for address sorting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for address sorting operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be parsed as CSV
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Header row lacks a required column
    #[error("Missing column '{field}' in header of '{file}'")]
    MissingColumn { file: String, field: String },

    /// A record has no value for a required field
    #[error("Missing field '{field}' in record {record_index} (line {line})")]
    MissingField {
        field: String,
        record_index: usize,
        line: u64,
    },

    /// Input directory cannot be read
    #[error("Cannot read input directory '{}': {source}", path.display())]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory cannot be created
    #[error("Cannot create output directory '{}': {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            field: field.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, record_index: usize, line: u64) -> Self {
        Self::MissingField {
            field: field.into(),
            record_index,
            line,
        }
    }

    /// Create an input directory error
    pub fn input_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputDirectory {
            path: path.into(),
            source,
        }
    }

    /// Create an output directory error
    pub fn output_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDirectory {
            path: path.into(),
            source,
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error must abort the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InputDirectory { .. }
                | Self::OutputDirectory { .. }
                | Self::DirectoryTraversal { .. }
                | Self::Configuration { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
