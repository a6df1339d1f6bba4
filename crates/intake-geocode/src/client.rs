//! Blocking HTTP client for the geocoding provider.

use reqwest::Url;

use crate::config::GeocoderSettings;
use crate::error::{GeocodeError, Result};
use crate::types::GeocodeResponse;
use crate::Geocoder;

/// Geocoder backed by an HTTP GET against a Google-compatible endpoint.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    client: reqwest::blocking::Client,
    settings: GeocoderSettings,
}

impl HttpGeocoder {
    /// Creates a client for the configured endpoint.
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot be
    /// built.
    pub fn new(settings: GeocoderSettings) -> Result<Self> {
        Url::parse(&settings.endpoint)
            .map_err(|e| GeocodeError::InvalidEndpoint(format!("{}: {e}", settings.endpoint)))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| GeocodeError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, settings })
    }

    /// Builds the request URL with the address (and key) as query parameters.
    pub fn request_url(&self, address: &str) -> Result<Url> {
        let mut params = vec![("address", address)];
        if let Some(key) = self.settings.api_key.as_deref() {
            params.push(("key", key));
        }
        Url::parse_with_params(&self.settings.endpoint, &params)
            .map_err(|e| GeocodeError::InvalidEndpoint(e.to_string()))
    }

    /// Sends one geocoding request and parses the response body.
    ///
    /// Unlike [`resolve_address`](crate::resolve_address), this surfaces the
    /// failure cause to the caller.
    pub fn fetch(&self, address: &str) -> Result<GeocodeResponse> {
        let url = self.request_url(address)?;

        tracing::debug!(
            host = url.host_str().unwrap_or_default(),
            address_len = address.len(),
            "Sending geocoding request"
        );

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let parsed: GeocodeResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            status = %parsed.status,
            results = parsed.results.len(),
            "Received geocoding response"
        );

        Ok(parsed)
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, address: &str) -> Result<GeocodeResponse> {
        self.fetch(address)
    }
}
