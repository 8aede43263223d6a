//! Core data structures for address-bearing CSV records
//!
//! This module defines the in-memory representation of one CSV file:
//! - [`ColumnMapping`] - the header row plus resolved required-column indices
//! - [`Record`] - one data row with its field values in file order
//! - [`Dataset`] - a mapping and the records read from a single file
//! - [`ParsedAddress`] - transient sort key derived from the address field
//! - [`PhaseOrdering`] - how phase values compare to each other
//!
//! Records are never modified after loading. Sorting only reorders them, and
//! derived keys are kept outside the records so they can never leak into
//! output files.

use crate::constants::{ADDRESS_COLUMN, PHASE_COLUMN};
use crate::{Error, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured form of a free-text address
///
/// Derived solely from the `address` field and never written to output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedAddress {
    /// Leading integer prefix of the address (0 when there is none)
    pub house_number: u64,
    /// Remainder of the address after the number and its separator
    pub street_name: String,
}

impl ParsedAddress {
    pub fn new(house_number: u64, street_name: impl Into<String>) -> Self {
        Self {
            house_number,
            street_name: street_name.into(),
        }
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {:?}", self.house_number, self.street_name)
    }
}

/// Comparison policy for phase values
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PhaseOrdering {
    /// Numeric when every phase in the file is a number, lexical otherwise
    #[default]
    Auto,
    /// Plain string comparison
    Lexical,
    /// Digit runs compare by value ("Phase 2" before "Phase 10")
    Natural,
}

impl fmt::Display for PhaseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseOrdering::Auto => "auto",
            PhaseOrdering::Lexical => "lexical",
            PhaseOrdering::Natural => "natural",
        };
        f.write_str(name)
    }
}

/// Header row of a CSV file with the required columns resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    /// Column names exactly as read, in file order
    headers: StringRecord,
    address_index: usize,
    phase_index: usize,
    /// The file started with a UTF-8 byte order mark
    byte_order_mark: bool,
}

impl ColumnMapping {
    /// Analyze a header row and locate the `address` and `phase` columns
    ///
    /// Names are matched after trimming surrounding whitespace; the first
    /// matching column wins. `file` is only used for diagnostics.
    pub fn analyze(headers: &StringRecord, file: &str) -> Result<Self> {
        let address_index = find_column(headers, ADDRESS_COLUMN)
            .ok_or_else(|| Error::missing_column(file, ADDRESS_COLUMN))?;
        let phase_index = find_column(headers, PHASE_COLUMN)
            .ok_or_else(|| Error::missing_column(file, PHASE_COLUMN))?;

        Ok(Self {
            headers: headers.clone(),
            address_index,
            phase_index,
            byte_order_mark: false,
        })
    }

    pub fn with_byte_order_mark(mut self, byte_order_mark: bool) -> Self {
        self.byte_order_mark = byte_order_mark;
        self
    }

    /// Whether output should start with a byte order mark
    pub fn has_byte_order_mark(&self) -> bool {
        self.byte_order_mark
    }

    /// Header row as it must be written back
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn address_index(&self) -> usize {
        self.address_index
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Number of columns in the header row
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        find_column(&self.headers, column_name)
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

/// One data row of a CSV file
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Zero-based position of the row among the file's data rows
    pub index: usize,
    /// One-based line in the source file where the row starts
    pub line: u64,
    /// Field values in column order, untouched
    pub fields: StringRecord,
}

impl Record {
    pub fn new(index: usize, line: u64, fields: StringRecord) -> Self {
        Self {
            index,
            line,
            fields,
        }
    }

    /// Value at a column index, empty when the row is shorter
    pub fn get(&self, column: usize) -> &str {
        self.fields.get(column).unwrap_or("")
    }
}

/// Records read from one input file together with its header
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub columns: ColumnMapping,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: ColumnMapping, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Build a dataset from in-memory rows, numbering records as if read from a file
    pub fn from_rows<H, R, F>(headers: H, rows: R) -> Result<Self>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = F>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let headers: StringRecord = headers.into_iter().collect();
        let columns = ColumnMapping::analyze(&headers, "<memory>")?;
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let fields: StringRecord = row.into_iter().collect();
                Record::new(index, index as u64 + 2, fields)
            })
            .collect();

        Ok(Self::new(columns, records))
    }

    pub fn address<'a>(&self, record: &'a Record) -> &'a str {
        record.get(self.columns.address_index())
    }

    pub fn phase<'a>(&self, record: &'a Record) -> &'a str {
        record.get(self.columns.phase_index())
    }

    /// Address values in current record order
    pub fn addresses(&self) -> Vec<&str> {
        self.records.iter().map(|r| self.address(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mapping_locates_required_columns() {
        let headers = StringRecord::from(vec!["id", " phase ", "address", "notes"]);
        let mapping = ColumnMapping::analyze(&headers, "test.csv").unwrap();

        assert_eq!(mapping.address_index(), 2);
        assert_eq!(mapping.phase_index(), 1);
        assert_eq!(mapping.len(), 4);
        assert_eq!(mapping.get_index("notes"), Some(3));
        assert_eq!(mapping.get_index("missing"), None);

        // Header is kept verbatim for output
        assert_eq!(mapping.headers().get(1), Some(" phase "));
    }

    #[test]
    fn test_column_mapping_requires_address() {
        let headers = StringRecord::from(vec!["phase", "street"]);
        match ColumnMapping::analyze(&headers, "north.csv").unwrap_err() {
            Error::MissingColumn { file, field } => {
                assert_eq!(file, "north.csv");
                assert_eq!(field, "address");
            }
            other => panic!("Expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn test_column_mapping_requires_phase() {
        let headers = StringRecord::from(vec!["address", "Phase"]);
        match ColumnMapping::analyze(&headers, "south.csv").unwrap_err() {
            Error::MissingColumn { field, .. } => assert_eq!(field, "phase"),
            other => panic!("Expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn test_column_mapping_first_duplicate_wins() {
        let headers = StringRecord::from(vec!["address", "phase", "address"]);
        let mapping = ColumnMapping::analyze(&headers, "dup.csv").unwrap();
        assert_eq!(mapping.address_index(), 0);
    }

    #[test]
    fn test_dataset_from_rows() {
        let dataset = Dataset::from_rows(
            ["phase", "address"],
            vec![vec!["1", "10 Oak St"], vec!["2", "5 Elm St"]],
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.addresses(), vec!["10 Oak St", "5 Elm St"]);
        assert_eq!(dataset.phase(&dataset.records[1]), "2");
        assert_eq!(dataset.records[1].index, 1);
        assert_eq!(dataset.records[1].line, 3);
    }

    #[test]
    fn test_record_get_out_of_range_is_empty() {
        let record = Record::new(0, 2, StringRecord::from(vec!["a"]));
        assert_eq!(record.get(0), "a");
        assert_eq!(record.get(5), "");
    }

    #[test]
    fn test_phase_ordering_display_matches_cli_names() {
        assert_eq!(PhaseOrdering::Auto.to_string(), "auto");
        assert_eq!(PhaseOrdering::Lexical.to_string(), "lexical");
        assert_eq!(PhaseOrdering::Natural.to_string(), "natural");
        assert_eq!(PhaseOrdering::default(), PhaseOrdering::Auto);
    }
}
