//! Mapping of provider address components onto a [`Location`].

use std::collections::HashMap;

use intake_model::Location;

use crate::error::{GeocodeError, Result};
use crate::types::{AddressComponent, GeocodeResponse};

pub const STREET_NUMBER: &str = "street_number";
pub const ROUTE: &str = "route";
pub const SUBPREMISE: &str = "subpremise";
pub const LOCALITY: &str = "locality";
pub const POLITICAL: &str = "political";
pub const COUNTY: &str = "administrative_area_level_2";
pub const STATE: &str = "administrative_area_level_1";
pub const POSTAL_CODE: &str = "postal_code";

/// Builds a location from address components.
///
/// Each component is keyed by its first type only, and the first component
/// seen for a key wins. City falls back to a `political` component when no
/// `locality` is present.
pub fn location_from_components(components: &[AddressComponent]) -> Location {
    let mut parts: HashMap<&str, &str> = HashMap::new();
    for component in components {
        if let Some(kind) = component.primary_type() {
            parts.entry(kind).or_insert(component.long_name.as_str());
        }
    }

    let part = |key: &str| parts.get(key).map(|value| (*value).to_string());

    Location {
        building_number: part(STREET_NUMBER).unwrap_or_default(),
        street1: part(ROUTE).unwrap_or_default(),
        street2: part(SUBPREMISE).unwrap_or_default(),
        city: part(LOCALITY).or_else(|| part(POLITICAL)).unwrap_or_default(),
        county: part(COUNTY).unwrap_or_default(),
        state: part(STATE).unwrap_or_default(),
        zip: part(POSTAL_CODE).unwrap_or_default(),
    }
}

/// Builds a location from the best result of a successful response.
pub fn location_from_response(response: &GeocodeResponse) -> Result<Location> {
    if !response.is_ok() {
        return Err(GeocodeError::ProviderStatus {
            status: response.status.clone(),
            message: response.error_message.clone(),
        });
    }
    let best = response.results.first().ok_or(GeocodeError::NoResults)?;
    Ok(location_from_components(&best.address_components))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn test_maps_known_types() {
        let location = location_from_components(&[
            component("203", &["street_number"]),
            component("South Saint Mary's Street", &["route"]),
            component("170", &["subpremise"]),
            component("San Antonio", &["locality", "political"]),
            component("Bexar County", &["administrative_area_level_2", "political"]),
            component("Texas", &["administrative_area_level_1", "political"]),
            component("78205", &["postal_code"]),
        ]);
        assert_eq!(location.building_number, "203");
        assert_eq!(location.street1, "South Saint Mary's Street");
        assert_eq!(location.street2, "170");
        assert_eq!(location.city, "San Antonio");
        assert_eq!(location.county, "Bexar County");
        assert_eq!(location.state, "Texas");
        assert_eq!(location.zip, "78205");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let location = location_from_components(&[
            component("12", &["street_number"]),
            component("14", &["street_number"]),
        ]);
        assert_eq!(location.building_number, "12");
    }

    #[test]
    fn test_only_first_type_is_a_key() {
        // "locality" is the second type here, so it is not used for city.
        let location = location_from_components(&[component(
            "Downtown",
            &["neighborhood", "locality"],
        )]);
        assert_eq!(location.city, "");
    }

    #[test]
    fn test_political_fallback_for_city() {
        let location = location_from_components(&[
            component("Queens", &["political", "sublocality"]),
            component("11375", &["postal_code"]),
        ]);
        assert_eq!(location.city, "Queens");

        let location = location_from_components(&[
            component("Queens", &["political"]),
            component("New York", &["locality", "political"]),
        ]);
        assert_eq!(location.city, "New York");
    }

    #[test]
    fn test_components_without_types_are_skipped() {
        let location = location_from_components(&[component("203", &[])]);
        assert!(location.is_empty());
    }

    #[test]
    fn test_non_ok_status_is_an_error() {
        let response = GeocodeResponse {
            status: "REQUEST_DENIED".to_string(),
            results: vec![],
            error_message: Some("The provided API key is invalid.".to_string()),
        };
        let err = location_from_response(&response).unwrap_err();
        assert!(matches!(
            err,
            GeocodeError::ProviderStatus { ref status, .. } if status == "REQUEST_DENIED"
        ));
    }

    #[test]
    fn test_ok_without_results_is_an_error() {
        let response = GeocodeResponse {
            status: "OK".to_string(),
            results: vec![],
            error_message: None,
        };
        assert!(matches!(
            location_from_response(&response),
            Err(GeocodeError::NoResults)
        ));
    }
}
