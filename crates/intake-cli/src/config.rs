//! TOML configuration for the `intake` binary.
//!
//! ```toml
//! [normalization]
//! year_pivot = 29
//! construction_scheme = "internal"
//!
//! [geocoder]
//! endpoint = "https://maps.googleapis.com/maps/api/geocode/json"
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use intake_geocode::GeocoderSettings;
use intake_model::NormalizationOptions;

/// Environment variable holding the geocoding API key.
pub const API_KEY_ENV: &str = "INTAKE_GEOCODER_API_KEY";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeConfig {
    pub normalization: NormalizationOptions,
    pub geocoder: GeocoderSettings,
}

impl IntakeConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("parse intake configuration")
    }

    /// Reads the file at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("load config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies an API key from the environment; a non-blank value wins over
    /// the file.
    #[must_use]
    pub fn with_env_api_key(mut self, value: Option<String>) -> Self {
        if let Some(key) = value.filter(|key| !key.trim().is_empty()) {
            self.geocoder = self.geocoder.with_api_key(Some(key));
        }
        self
    }

    /// Reads [`API_KEY_ENV`] from the process environment.
    #[must_use]
    pub fn with_process_env(self) -> Self {
        self.with_env_api_key(std::env::var(API_KEY_ENV).ok())
    }
}
