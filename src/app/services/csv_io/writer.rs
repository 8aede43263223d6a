//! Dataset writing

use crate::app::models::Dataset;
use crate::constants::UTF8_BOM;
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write a dataset to `path`, replacing any existing file
///
/// Returns the number of data rows written.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<usize> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    let rows = write_dataset_to(dataset, file)?;
    debug!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}

/// Write the header row followed by every record in current order
///
/// The byte order mark is re-emitted when the source file had one.
pub fn write_dataset_to<W: Write>(dataset: &Dataset, mut writer: W) -> Result<usize> {
    if dataset.columns.has_byte_order_mark() {
        writer
            .write_all(UTF8_BOM)
            .map_err(|e| Error::io("Failed to write byte order mark", e))?;
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(dataset.columns.headers())
        .map_err(write_error)?;
    for record in &dataset.records {
        csv_writer.write_record(&record.fields).map_err(write_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush CSV output", e))?;

    Ok(dataset.len())
}

fn write_error(error: csv::Error) -> Error {
    match error.into_kind() {
        csv::ErrorKind::Io(source) => Error::io("Failed to write CSV output", source),
        other => Error::csv_parsing(
            "<output>",
            format!("Failed to write record: {:?}", other),
            None,
        ),
    }
}
