//! Actions - user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Coordinates, WeatherSample};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location (request is uncategorized; results are `location_did`) =====
    /// Intent: ask the host for the current position (also runs on mount)
    LocationRequest,

    /// Result: position resolved; always re-triggers a fetch
    LocationDidLoad(Coordinates),

    /// Result: position unavailable (logged only)
    LocationDidError(String),

    // ===== Weather results (`weather_did`) =====
    /// Result: fetch tagged `generation` succeeded
    WeatherDidLoad {
        generation: u64,
        sample: WeatherSample,
    },

    /// Result: fetch tagged `generation` failed (logged only)
    WeatherDidError { generation: u64, error: String },

    // ===== Share (request is uncategorized; results are `share_did`) =====
    /// Intent: invoke the host share capability
    ShareRequest,

    /// Result: payload handed to the terminal clipboard
    ShareDidComplete,

    ShareDidError(String),

    // ===== Uncategorized (global) =====
    /// Discard all state and start over, like the first mount
    Refresh,

    /// Exit the application
    Quit,
}
