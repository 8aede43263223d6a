//! Row sorting for address-bearing datasets
//!
//! Orders the records of a [`Dataset`](crate::app::models::Dataset) by the
//! composite key `(phase, street name, house number)`, all ascending.
//!
//! ## Architecture
//!
//! - [`sort_key`] - phase comparison policies and the composite sort key
//! - [`sorter`] - field validation and the stable sort itself
//!
//! Derived keys are computed once per record, held beside the records for
//! the duration of the sort and then dropped, so output files carry exactly
//! the columns that were read.
//!
//! ## Usage
//!
//! ```rust
//! use address_sort::{Dataset, PhaseOrdering, sort_dataset};
//!
//! # fn example() -> address_sort::Result<()> {
//! let dataset = Dataset::from_rows(
//!     ["phase", "address"],
//!     vec![["1", "10 Oak St"], ["1", "2 Oak St"], ["1", "5 Elm St"]],
//! )?;
//!
//! let sorted = sort_dataset(dataset, PhaseOrdering::Auto)?;
//! assert_eq!(sorted.addresses(), vec!["5 Elm St", "2 Oak St", "10 Oak St"]);
//! # Ok(())
//! # }
//! ```

pub mod sort_key;
pub mod sorter;

#[cfg(test)]
pub mod tests;

pub use sort_key::{PhaseComparison, PhaseKey, SortKey, natural_cmp};
pub use sorter::{sort_dataset, validate_required_fields};
