//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::share::{SHARE_TITLE, SHARE_URL};
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Location actions =====
        Action::LocationRequest => DispatchResult::changed_with(Effect::RequestLocation),

        Action::LocationDidLoad(coords) => {
            // Unconditional: identical coordinates still start a new fetch.
            state.coordinates = Some(coords);
            state.generation = state.generation.wrapping_add(1);
            state.is_loading = true;
            tracing::debug!(
                generation = state.generation,
                lat = coords.lat,
                lon = coords.lon,
                "fetching weather"
            );
            DispatchResult::changed_with(Effect::FetchWeather {
                generation: state.generation,
                coords,
            })
        }

        Action::LocationDidError(error) => {
            tracing::warn!(%error, "error getting location");
            DispatchResult::unchanged()
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { generation, sample } => {
            if generation != state.generation {
                tracing::debug!(generation, current = state.generation, "discarding stale weather");
                return DispatchResult::unchanged();
            }
            state.advisory = state.advisory.apply(&sample);
            state.weather = Some(sample);
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { generation, error } => {
            if generation != state.generation {
                tracing::debug!(generation, current = state.generation, "discarding stale error");
                return DispatchResult::unchanged();
            }
            tracing::error!(%error, "weather fetch failed");
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== Share actions =====
        Action::ShareRequest => DispatchResult::changed_with(Effect::Share {
            title: SHARE_TITLE,
            url: SHARE_URL,
        }),

        Action::ShareDidComplete => {
            tracing::info!("content shared successfully");
            DispatchResult::unchanged()
        }

        Action::ShareDidError(error) => {
            tracing::warn!(%error, "error sharing");
            DispatchResult::unchanged()
        }

        // ===== Global actions =====
        Action::Refresh => {
            // Bumping the generation orphans anything still in flight.
            let generation = state.generation.wrapping_add(1);
            *state = AppState {
                generation,
                ..AppState::new()
            };
            DispatchResult::changed_with(Effect::RequestLocation)
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
