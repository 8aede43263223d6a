//! Tests for the row sorter
//!
//! Shared fixtures for building small datasets and reading back the
//! resulting order.


use crate::app::models::Dataset;

/// Build a `phase,address` dataset from `(phase, address)` pairs
pub fn phase_address_dataset(rows: &[(&str, &str)]) -> Dataset {
    Dataset::from_rows(
        ["phase", "address"],
        rows.iter().map(|(phase, address)| [*phase, *address]),
    )
    .unwrap()
}

/// Build a dataset with an extra `id` column used to track row identity
pub fn tagged_dataset(rows: &[(&str, &str, &str)]) -> Dataset {
    Dataset::from_rows(
        ["id", "phase", "address"],
        rows.iter()
            .map(|(id, phase, address)| [*id, *phase, *address]),
    )
    .unwrap()
}

/// Values of the `id` column in current order
pub fn ids(dataset: &Dataset) -> Vec<String> {
    dataset
        .records
        .iter()
        .map(|record| record.get(0).to_string())
        .collect()
}

/// `(phase, address)` pairs in current order
pub fn phase_address_pairs(dataset: &Dataset) -> Vec<(String, String)> {
    dataset
        .records
        .iter()
        .map(|record| {
            (
                dataset.phase(record).to_string(),
                dataset.address(record).to_string(),
            )
        })
        .collect()
}
