//! OpenWeatherMap client and location lookup

use std::time::Duration;

use serde::Deserialize;

use crate::config::{DEFAULT_IP_LOCATE_URL, WeatherConfig};
use crate::state::{Coordinates, WeatherSample};

// ============================================================================
// Weather API
// ============================================================================

#[derive(thiserror::Error, Debug)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather API returned HTTP {0}")]
    Status(u16),
    #[error("weather response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Current weather response; only the consumed fields are modelled
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainBlock,
    #[serde(default)]
    name: String,
    wind: WindBlock,
    #[serde(default)]
    rain: Option<RainBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    /// Kelvin
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    /// m/s
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RainBlock {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl From<CurrentWeatherResponse> for WeatherSample {
    fn from(data: CurrentWeatherResponse) -> Self {
        WeatherSample::from_raw(
            data.main.temp,
            data.wind.speed,
            data.rain.and_then(|rain| rain.one_hour),
            data.name,
        )
    }
}

/// Parse a current-weather JSON body into a sample
pub fn parse_weather(body: &str) -> Result<WeatherSample, WeatherError> {
    let data: CurrentWeatherResponse = serde_json::from_str(body)?;
    Ok(data.into())
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, coords: Coordinates) -> String {
        format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}",
            self.config.base_url(),
            coords.lat,
            coords.lon,
            urlencoding::encode(self.config.api_key())
        )
    }

    /// Fetch current weather for the coordinates. No retry.
    pub async fn fetch(&self, coords: Coordinates) -> Result<WeatherSample, WeatherError> {
        let response = self.http.get(self.url(coords)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_weather(&body)
    }
}

// ============================================================================
// Location
// ============================================================================

#[derive(thiserror::Error, Debug)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("location request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("location lookup failed: {0}")]
    Lookup(String),
}

/// Position request options. All unset by default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationOptions {
    /// Accepted for parity with device geolocation; IP lookup ignores it
    pub high_accuracy: bool,
    pub timeout: Option<Duration>,
    /// Accepted for parity with device geolocation; IP lookup ignores it
    pub max_age: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct IpLocateResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Where the current position comes from
#[derive(Debug, Clone)]
pub enum LocationSource {
    /// Position given on the command line
    Fixed(Coordinates),
    /// Approximate position from the public IP address
    IpLookup { http: reqwest::Client, url: String },
    /// No way to locate
    Unavailable,
}

impl LocationSource {
    pub fn ip_lookup() -> Self {
        Self::ip_lookup_at(DEFAULT_IP_LOCATE_URL)
    }

    pub fn ip_lookup_at(url: impl Into<String>) -> Self {
        LocationSource::IpLookup {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Resolve the current position. Each call yields a fresh value.
    pub async fn locate(&self, options: &LocationOptions) -> Result<Coordinates, LocationError> {
        match self {
            LocationSource::Fixed(coords) => Ok(*coords),
            LocationSource::Unavailable => Err(LocationError::Unsupported),
            LocationSource::IpLookup { http, url } => {
                let mut request = http.get(url);
                if let Some(timeout) = options.timeout {
                    request = request.timeout(timeout);
                }
                let data: IpLocateResponse = request.send().await?.json().await?;
                if data.status != "success" {
                    return Err(LocationError::Lookup(
                        data.message.unwrap_or_else(|| data.status.clone()),
                    ));
                }
                match (data.lat, data.lon) {
                    (Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
                    _ => Err(LocationError::Lookup("response without coordinates".into())),
                }
            }
        }
    }
}
