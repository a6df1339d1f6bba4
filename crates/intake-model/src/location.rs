//! Canonical address records.

use serde::{Deserialize, Serialize};

/// A decomposed property location.
///
/// Every field defaults to the empty string. A location that failed to
/// resolve is all-empty, never partially filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Single building number (`street_number` from the provider).
    pub building_number: String,
    /// Street name (`route`).
    pub street1: String,
    /// Suite or unit (`subpremise`).
    pub street2: String,
    pub city: String,
    /// County as reported by the provider, including any "County" suffix.
    pub county: String,
    pub state: String,
    pub zip: String,
}

impl Location {
    /// Returns true when no component was resolved.
    pub fn is_empty(&self) -> bool {
        self.building_number.is_empty()
            && self.street1.is_empty()
            && self.street2.is_empty()
            && self.city.is_empty()
            && self.county.is_empty()
            && self.state.is_empty()
            && self.zip.is_empty()
    }
}

/// Insured name plus the trailing address lines of an ACORD-style block.
///
/// `address_lines` is `[street, city/state/zip]` or
/// `[street, suite line, city/state/zip]` for well-formed blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuredAddressBlock {
    pub insured_name: String,
    pub address_lines: Vec<String>,
}

impl InsuredAddressBlock {
    pub fn new(insured_name: impl Into<String>, address_lines: Vec<String>) -> Self {
        Self {
            insured_name: insured_name.into(),
            address_lines,
        }
    }

    /// Street line (first address line), if any.
    pub fn street(&self) -> Option<&str> {
        self.address_lines.first().map(String::as_str)
    }

    /// Suite line, present only for three-line addresses.
    pub fn suite(&self) -> Option<&str> {
        if self.address_lines.len() == 3 {
            self.address_lines.get(1).map(String::as_str)
        } else {
            None
        }
    }

    /// City/state/zip line (last address line), if there is more than the street.
    pub fn city_state_zip(&self) -> Option<&str> {
        if self.address_lines.len() >= 2 {
            self.address_lines.last().map(String::as_str)
        } else {
            None
        }
    }
}
