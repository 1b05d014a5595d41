//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advisory::AdvisoryState;

/// The user's current geographic position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Latest weather snapshot, already converted to display units
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSample {
    pub temperature_celsius: f64,
    pub wind_speed_kmh: f64,
    /// Rainfall over the last hour; absent when the API reports none
    pub rainfall_mm_1h: Option<f64>,
    pub location_name: String,
}

const KELVIN_OFFSET: f64 = 273.15;
const MS_TO_KMH: f64 = 3.6;

impl WeatherSample {
    /// Build a sample from raw API units (Kelvin, m/s)
    pub fn from_raw(
        temperature_kelvin: f64,
        wind_speed_ms: f64,
        rainfall_mm_1h: Option<f64>,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            temperature_celsius: temperature_kelvin - KELVIN_OFFSET,
            wind_speed_kmh: wind_speed_ms * MS_TO_KMH,
            rainfall_mm_1h,
            location_name: location_name.into(),
        }
    }

    /// Whole degrees, halves rounded up
    pub fn temperature_label(&self) -> String {
        format!("{:.0} °C", self.temperature_celsius.round())
    }

    pub fn wind_label(&self) -> String {
        format!("{:.2} km/h", self.wind_speed_kmh)
    }

    pub fn rain_label(&self) -> String {
        format!("{} mm (last hour)", self.rainfall_mm_1h.unwrap_or(0.0))
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Null until the first successful location request
    #[debug(section = "Location", label = "Coordinates", debug_fmt)]
    pub coordinates: Option<Coordinates>,

    /// Replaced wholesale by each successful fetch, kept on failure
    #[debug(section = "Weather", label = "Sample", debug_fmt)]
    pub weather: Option<WeatherSample>,

    #[debug(section = "Weather", label = "Loading")]
    pub is_loading: bool,

    #[debug(section = "Advisory", label = "Advisory", debug_fmt)]
    pub advisory: AdvisoryState,

    /// Tag of the fetch whose result may still be applied.
    /// Survives refresh so results from before a reload are discarded.
    #[debug(section = "Weather", label = "Generation", debug_fmt)]
    pub generation: u64,
}

impl AppState {
    /// Initial (mount) state; a refresh returns here but keeps `generation`
    pub fn new() -> Self {
        Self {
            coordinates: None,
            weather: None,
            is_loading: false,
            advisory: AdvisoryState::default(),
            generation: 0,
        }
    }

    pub fn has_sample(&self) -> bool {
        self.weather.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
