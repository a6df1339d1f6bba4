//! Geocoding provider response types.

use serde::Deserialize;

/// Status string the provider uses for a successful lookup.
pub const STATUS_OK: &str = "OK";

/// Raw geocoding response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Provider status (`OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...).
    pub status: String,

    /// Candidate results, best match first.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Provider explanation for non-`OK` statuses.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Returns true when the provider reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// A single geocoding candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    /// Structured address parts. Other result fields are ignored.
    pub address_components: Vec<AddressComponent>,
}

/// One structured part of a geocoded address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    /// Full text of the component (e.g. "South Saint Mary's Street").
    pub long_name: String,

    /// Component types; the first entry is the one used for mapping.
    pub types: Vec<String>,
}

impl AddressComponent {
    /// The primary (first) type of this component.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}
