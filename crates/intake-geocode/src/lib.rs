//! Address decomposition through an external geocoding provider.
//!
//! A free-text address is sent to a Google-compatible geocoding endpoint and
//! the best result's components are mapped onto a [`Location`]:
//!
//! | Component type                 | Location field    |
//! |--------------------------------|-------------------|
//! | `street_number`                | `building_number` |
//! | `route`                        | `street1`         |
//! | `subpremise`                   | `street2`         |
//! | `locality` (else `political`)  | `city`            |
//! | `administrative_area_level_2`  | `county`          |
//! | `administrative_area_level_1`  | `state`           |
//! | `postal_code`                  | `zip`             |
//!
//! [`resolve_address`] never fails: any provider or transport problem yields
//! an all-empty location. Use [`Geocoder::geocode`] directly to see the cause.

pub mod client;
pub mod config;
pub mod error;
pub mod mapping;
pub mod types;

pub use client::HttpGeocoder;
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, GeocoderSettings};
pub use error::{GeocodeError, Result};
pub use intake_model::Location;
pub use mapping::{location_from_components, location_from_response};
pub use types::{AddressComponent, GeocodeResponse, GeocodeResult, STATUS_OK};

/// A source of geocoding responses.
///
/// Implemented by [`HttpGeocoder`]; tests substitute canned responses.
pub trait Geocoder: Send + Sync {
    /// Looks up one free-text address.
    fn geocode(&self, address: &str) -> Result<GeocodeResponse>;
}

/// Decomposes a free-text address into a [`Location`].
///
/// Blank input returns an empty location without a request. Every failure
/// (transport, HTTP status, malformed body, non-`OK` status, no results)
/// also returns an empty location; the cause is logged at `warn`.
pub fn resolve_address<G: Geocoder + ?Sized>(geocoder: &G, raw_address: &str) -> Location {
    let address = raw_address.trim();
    if address.is_empty() {
        return Location::default();
    }

    match geocoder
        .geocode(address)
        .and_then(|response| location_from_response(&response))
    {
        Ok(location) => location,
        Err(error) => {
            tracing::warn!(
                %error,
                retryable = error.is_retryable(),
                "Address could not be resolved"
            );
            Location::default()
        }
    }
}
