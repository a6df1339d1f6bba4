//! Error types for address decomposition.

use thiserror::Error;

/// Errors that can occur while talking to the geocoding provider.
///
/// [`resolve_address`](crate::resolve_address) collapses all of these into an
/// empty [`Location`](intake_model::Location); they are only visible through
/// [`Geocoder::geocode`](crate::Geocoder::geocode) and
/// [`HttpGeocoder::fetch`](crate::HttpGeocoder::fetch).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeocodeError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success HTTP status.
    #[error("geocoding provider returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The provider reported a non-`OK` status (e.g. `ZERO_RESULTS`).
    #[error("geocoding provider status {status}")]
    ProviderStatus {
        /// Status string from the response body.
        status: String,
        /// Optional provider explanation.
        message: Option<String>,
    },

    /// Status was `OK` but no result was returned.
    #[error("geocoding provider returned no results")]
    NoResults,

    /// The configured endpoint is not a valid URL.
    #[error("invalid geocoder endpoint: {0}")]
    InvalidEndpoint(String),
}

impl GeocodeError {
    /// Returns whether a retry might succeed.
    ///
    /// The core never retries; this is for callers that choose to.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus { status } => *status == 429 || *status >= 500,
            Self::ProviderStatus { status, .. } => {
                status == "OVER_QUERY_LIMIT" || status == "UNKNOWN_ERROR"
            }
            Self::JsonParse(_) | Self::NoResults | Self::InvalidEndpoint(_) => false,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GeocodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodeError>;
