//! Free-text address splitting
//!
//! Splits an address such as `"12 3rd Ave"` into its leading house number and
//! the street name that follows. Parsing is total: every string produces a
//! [`ParsedAddress`], falling back to house number 0 and the unmodified input
//! when there is no numeric prefix.

use crate::app::models::ParsedAddress;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Leading ASCII digit run plus any whitespace separating it from the street
static HOUSE_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s*").expect("house number pattern is valid"));

/// Split an address into house number and street name
///
/// No trimming, case folding or other normalization is applied beyond the
/// split itself. Numbers too large for `u64` saturate to `u64::MAX`.
pub fn parse_address(address: &str) -> ParsedAddress {
    let Some(captures) = HOUSE_NUMBER_PREFIX.captures(address) else {
        return ParsedAddress::new(0, address);
    };

    let digits = &captures[1];
    let house_number = digits.parse::<u64>().unwrap_or_else(|_| {
        trace!("House number {} exceeds u64, saturating", digits);
        u64::MAX
    });
    let prefix_len = captures.get(0).map_or(0, |m| m.end());

    ParsedAddress::new(house_number, &address[prefix_len..])
}
