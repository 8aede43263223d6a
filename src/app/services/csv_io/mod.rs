//! CSV loading and writing for address datasets
//!
//! ## Architecture
//!
//! - [`reader`] - loads a file into a [`Dataset`](crate::app::models::Dataset),
//!   resolving the required columns from the header once
//! - [`writer`] - writes a dataset back with its original header
//!
//! Values are carried as raw strings end to end, so anything not used for
//! sorting is written back exactly as it was read (quoting aside).

pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use reader::{read_dataset, read_dataset_from};
pub use writer::{write_dataset, write_dataset_to};

use std::path::Path;

/// Short label for a file in diagnostics: its file name, or the full path
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
