//! Runtime configuration for the weather API

use std::fmt;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_IP_LOCATE_URL: &str = "http://ip-api.com/json/";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["OPENWEATHER_API_KEY", "VITE_API_KEY"];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing OpenWeatherMap API key (set --api-key or OPENWEATHER_API_KEY)")]
    MissingApiKey,
}

/// Credential and endpoint for the weather API
#[derive(Clone)]
pub struct WeatherConfig {
    api_key: String,
    base_url: String,
}

impl WeatherConfig {
    /// A blank key counts as missing.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Pick the API key: explicit value first, then the environment.
pub fn resolve_api_key(explicit: Option<String>) -> Option<String> {
    explicit.or_else(|| {
        API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
    })
}
