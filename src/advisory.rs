//! Advisory derivation - pure rules from a weather sample to "may pasok ba?"
//!
//! Both rules only ever downgrade `may_pasok`. Nothing in here sets it back
//! to `true`; only a full refresh (fresh `AdvisoryState::default()`) does.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSample;

/// Lower bound (inclusive) of the Signal #1 wind band, km/h.
pub const SIGNAL_ONE_MIN_KMH: f64 = 30.0;
/// Upper bound (inclusive) of the Signal #1 wind band, km/h.
pub const SIGNAL_ONE_MAX_KMH: f64 = 60.0;

/// Rainfall thresholds in mm over the last hour (strictly greater than).
pub const RAIN_RED_MM: f64 = 30.0;
pub const RAIN_ORANGE_MM: f64 = 15.0;
pub const RAIN_YELLOW_MM: f64 = 7.5;

/// Public wind-warning tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum WindSignal {
    SignalOne,
}

impl WindSignal {
    pub fn label(&self) -> &'static str {
        match self {
            WindSignal::SignalOne => "Signal #1",
        }
    }
}

/// Rainfall warning tag, ordered from least to most severe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum RainSeverity {
    #[default]
    None,
    Yellow,
    Orange,
    Red,
}

impl RainSeverity {
    /// The tag as shown in the banner ("" when there is no warning)
    pub fn tag(&self) -> &'static str {
        match self {
            RainSeverity::None => "",
            RainSeverity::Yellow => "yellow",
            RainSeverity::Orange => "orange",
            RainSeverity::Red => "red",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, RainSeverity::None)
    }

    /// Orange and red rainfall cancel school/work; yellow does not.
    pub fn suspends_classes(&self) -> bool {
        matches!(self, RainSeverity::Orange | RainSeverity::Red)
    }
}

/// Classify rainfall (mm, last hour). Tiers are exclusive, most severe first.
pub fn rain_severity(mm: f64) -> RainSeverity {
    if mm > RAIN_RED_MM {
        RainSeverity::Red
    } else if mm > RAIN_ORANGE_MM {
        RainSeverity::Orange
    } else if mm > RAIN_YELLOW_MM {
        RainSeverity::Yellow
    } else {
        RainSeverity::None
    }
}

/// Whether the wind speed falls in the closed Signal #1 band.
pub fn wind_in_signal_one(kmh: f64) -> bool {
    (SIGNAL_ONE_MIN_KMH..=SIGNAL_ONE_MAX_KMH).contains(&kmh)
}

/// Derived school/work judgment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdvisoryState {
    /// `true` = "Meron" (there is school/work)
    pub may_pasok: bool,
    /// Sticky: set by the wind rule, never cleared until refresh
    pub signal: Option<WindSignal>,
    pub rain: RainSeverity,
}

impl Default for AdvisoryState {
    fn default() -> Self {
        Self {
            may_pasok: true,
            signal: None,
            rain: RainSeverity::None,
        }
    }
}

impl AdvisoryState {
    /// Compute the next advisory from the previous one and a new sample.
    ///
    /// The wind rule only sets the signal; a wind speed outside the band
    /// leaves the previous signal in place. The rain rule always replaces the
    /// tag. Neither rule restores `may_pasok` once it is `false`.
    pub fn apply(&self, sample: &WeatherSample) -> AdvisoryState {
        let mut next = self.clone();

        if wind_in_signal_one(sample.wind_speed_kmh) {
            next.signal = Some(WindSignal::SignalOne);
            next.may_pasok = false;
        }

        next.rain = rain_severity(sample.rainfall_mm_1h.unwrap_or(0.0));
        if next.rain.suspends_classes() {
            next.may_pasok = false;
        }

        next
    }

    /// Whether the warning banner (as opposed to "no warning") is shown
    pub fn has_warning(&self) -> bool {
        self.signal.is_some() || self.rain.is_set()
    }

    pub fn verdict(&self) -> &'static str {
        if self.may_pasok { "Meron" } else { "Wala" }
    }
}
