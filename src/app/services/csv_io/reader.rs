//! Dataset loading

use super::file_label;
use crate::app::models::{ColumnMapping, Dataset, Record};
use crate::constants::UTF8_BOM;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Load a CSV file into a dataset
///
/// The first row is the header and must name `address` and `phase` columns.
/// Every data row must have as many fields as the header.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    info!("Reading CSV file: {}", path.display());

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

    read_dataset_from(file, &file_label(path))
}

/// Load a dataset from any reader; `file` names the source in diagnostics
///
/// A leading UTF-8 byte order mark is consumed before parsing and recorded
/// on the column mapping so it can be written back.
pub fn read_dataset_from<R: Read>(reader: R, file: &str) -> Result<Dataset> {
    let mut reader = BufReader::new(reader);
    let byte_order_mark = reader
        .fill_buf()
        .map_err(|e| Error::io(format!("Failed to read {}", file), e))?
        .starts_with(UTF8_BOM);
    if byte_order_mark {
        debug!("Stripping byte order mark from {}", file);
        reader.consume(UTF8_BOM.len());
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(file, "Failed to read CSV headers", Some(e)))?
        .clone();

    let columns = ColumnMapping::analyze(&headers, file)?.with_byte_order_mark(byte_order_mark);
    debug!(
        "Column mapping for {}: {} columns, address at {}, phase at {}",
        file,
        columns.len(),
        columns.address_index(),
        columns.phase_index()
    );

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let fields = result.map_err(|e| {
            Error::csv_parsing(file, format!("Malformed record {}", index), Some(e))
        })?;
        let line = fields.position().map_or(0, |position| position.line());
        records.push(Record::new(index, line, fields));
    }

    debug!("Loaded {} records from {}", records.len(), file);
    Ok(Dataset::new(columns, records))
}
