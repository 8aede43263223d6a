//! Composite sort keys and phase comparison policies

use crate::app::models::{ParsedAddress, PhaseOrdering};
use crate::app::services::address_parser::parse_address;
use std::cmp::Ordering;

/// Phase comparison policy after `Auto` has been resolved for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseComparison {
    /// Every phase is an integer; compared exactly
    Integer,
    /// Every phase is a finite number, at least one non-integral
    Numeric,
    Lexical,
    Natural,
}

impl PhaseComparison {
    /// Resolve an ordering against the phase values of a whole dataset
    ///
    /// `Auto` becomes integer when every value is an integer, numeric when
    /// every value is a finite number, and lexical otherwise, mirroring
    /// column type inference in dataframe tools.
    pub fn resolve<'a, I>(ordering: PhaseOrdering, phases: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        match ordering {
            PhaseOrdering::Auto => {
                let mut seen = false;
                let mut integral = true;
                for phase in phases {
                    seen = true;
                    if integral && parse_integer(phase).is_some() {
                        continue;
                    }
                    integral = false;
                    if parse_numeric(phase).is_none() {
                        return PhaseComparison::Lexical;
                    }
                }

                match (seen, integral) {
                    (false, _) => PhaseComparison::Lexical,
                    (true, true) => PhaseComparison::Integer,
                    (true, false) => PhaseComparison::Numeric,
                }
            }
            PhaseOrdering::Lexical => PhaseComparison::Lexical,
            PhaseOrdering::Natural => PhaseComparison::Natural,
        }
    }
}

/// Phase value prepared for comparison
///
/// All keys built for one dataset share the same variant.
#[derive(Debug, Clone, Copy)]
pub enum PhaseKey<'a> {
    Integer(i128),
    Numeric(f64),
    Lexical(&'a str),
    Natural(&'a str),
}

impl<'a> PhaseKey<'a> {
    /// Build a key; a value that fails to parse under `Integer` or `Numeric`
    /// compares lexically
    pub fn new(comparison: PhaseComparison, phase: &'a str) -> Self {
        match comparison {
            PhaseComparison::Integer => match parse_integer(phase) {
                Some(value) => PhaseKey::Integer(value),
                None => PhaseKey::Lexical(phase),
            },
            PhaseComparison::Numeric => match parse_numeric(phase) {
                Some(value) => PhaseKey::Numeric(value),
                None => PhaseKey::Lexical(phase),
            },
            PhaseComparison::Lexical => PhaseKey::Lexical(phase),
            PhaseComparison::Natural => PhaseKey::Natural(phase),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PhaseKey::Integer(_) => 0,
            PhaseKey::Numeric(_) => 1,
            PhaseKey::Lexical(_) => 2,
            PhaseKey::Natural(_) => 3,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PhaseKey::Integer(a), PhaseKey::Integer(b)) => a.cmp(b),
            (PhaseKey::Numeric(a), PhaseKey::Numeric(b)) => a.total_cmp(b),
            (PhaseKey::Lexical(a), PhaseKey::Lexical(b)) => a.cmp(b),
            (PhaseKey::Natural(a), PhaseKey::Natural(b)) => natural_cmp(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn parse_integer(phase: &str) -> Option<i128> {
    phase.trim().parse::<i128>().ok()
}

fn parse_numeric(phase: &str) -> Option<f64> {
    let value = phase.trim().parse::<f64>().ok()?;
    // + 0.0 folds -0.0 into 0.0 so the two compare equal under total_cmp
    value.is_finite().then_some(value + 0.0)
}

/// Transient `(phase, street name, house number)` key for one record
#[derive(Debug, Clone)]
pub struct SortKey<'a> {
    pub phase: PhaseKey<'a>,
    pub address: ParsedAddress,
}

impl<'a> SortKey<'a> {
    pub fn new(comparison: PhaseComparison, phase: &'a str, address: &str) -> Self {
        Self {
            phase: PhaseKey::new(comparison, phase),
            address: parse_address(address),
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.phase
            .compare(&other.phase)
            .then_with(|| self.address.street_name.cmp(&other.address.street_name))
            .then_with(|| self.address.house_number.cmp(&other.address.house_number))
    }
}

/// Compare strings so that runs of ASCII digits order by numeric value
///
/// Runs with equal value but different zero padding order shorter first,
/// keeping the comparison total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if is_digit_run(x) && is_digit_run(y) => compare_digit_runs(x, y),
            (Some(x), Some(y)) => x.cmp(y),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Split into maximal runs of ASCII digits and non-digits
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn is_digit_run(chunk: &str) -> bool {
    chunk.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_value = a.trim_start_matches('0');
    let b_value = b.trim_start_matches('0');

    a_value
        .len()
        .cmp(&b_value.len())
        .then_with(|| a_value.cmp(b_value))
        .then_with(|| a.len().cmp(&b.len()))
}
