//! Stable multi-key sort over a dataset

use super::sort_key::{PhaseComparison, SortKey};
use crate::app::models::{Dataset, PhaseOrdering};
use crate::constants::{ADDRESS_COLUMN, PHASE_COLUMN};
use crate::{Error, Result};
use tracing::debug;

/// Reorder records by `(phase, street name, house number)`, all ascending
///
/// Ties on all three keys keep their input order. The returned dataset holds
/// the same records with the same fields; only their order changes.
pub fn sort_dataset(dataset: Dataset, ordering: PhaseOrdering) -> Result<Dataset> {
    validate_required_fields(&dataset)?;

    let Dataset { columns, records } = dataset;
    let phase_index = columns.phase_index();
    let address_index = columns.address_index();

    let comparison = PhaseComparison::resolve(
        ordering,
        records.iter().map(|record| record.get(phase_index)),
    );
    debug!(
        "Sorting {} records with {:?} phase comparison",
        records.len(),
        comparison
    );

    let permutation = {
        let keys: Vec<SortKey<'_>> = records
            .iter()
            .map(|record| {
                SortKey::new(
                    comparison,
                    record.get(phase_index),
                    record.get(address_index),
                )
            })
            .collect();

        let mut permutation: Vec<usize> = (0..keys.len()).collect();
        // slice::sort_by is stable
        permutation.sort_by(|&a, &b| keys[a].compare(&keys[b]));
        permutation
    };

    let mut slots: Vec<_> = records.into_iter().map(Some).collect();
    let sorted = permutation
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect();

    Ok(Dataset::new(columns, sorted))
}

/// Ensure every record carries an `address` and a `phase` value
///
/// Records are checked in input order and the first empty value is
/// reported with its record index and source line.
pub fn validate_required_fields(dataset: &Dataset) -> Result<()> {
    for record in &dataset.records {
        if dataset.address(record).is_empty() {
            return Err(Error::missing_field(
                ADDRESS_COLUMN,
                record.index,
                record.line,
            ));
        }
        if dataset.phase(record).is_empty() {
            return Err(Error::missing_field(PHASE_COLUMN, record.index, record.line));
        }
    }

    Ok(())
}
