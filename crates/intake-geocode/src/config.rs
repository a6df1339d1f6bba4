//! Configuration for the geocoding provider.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Google-compatible geocoding endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for provider requests.
pub const DEFAULT_USER_AGENT: &str = concat!("intake-geocode/", env!("CARGO_PKG_VERSION"));

/// Provider settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderSettings {
    /// Geocoding endpoint; the raw address is sent as the `address` query parameter.
    pub endpoint: String,

    /// API key sent as the `key` query parameter when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GeocoderSettings {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// The API key never appears in debug output.
impl fmt::Debug for GeocoderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocoderSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
