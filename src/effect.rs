//! Effects - side effects declared by the reducer

use crate::state::Coordinates;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the location source for the current position
    RequestLocation,
    /// Fetch weather for the given coordinates, tagged with its generation
    FetchWeather { generation: u64, coords: Coordinates },
    /// Hand the share payload to the host
    Share {
        title: &'static str,
        url: &'static str,
    },
}
