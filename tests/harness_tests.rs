//! Store + effect flow tests using EffectStoreTestHarness
//!
//! Async completions are simulated with `complete_action`, so these cover the
//! whole locate -> fetch -> derive pipeline without a network.

use tui_dispatch::testing::*;
use maypasok::{
    action::Action,
    advisory::{RainSeverity, WindSignal},
    effect::Effect,
    reducer::reducer,
    state::{AppState, Coordinates, WeatherSample},
};

const DAVAO: Coordinates = Coordinates {
    lat: 7.1907,
    lon: 125.4553,
};

fn sample(wind_kmh: f64, rain_mm: Option<f64>) -> WeatherSample {
    WeatherSample {
        temperature_celsius: 30.2,
        wind_speed_kmh: wind_kmh,
        rainfall_mm_1h: rain_mm,
        location_name: "Davao City".into(),
    }
}

/// Locate and complete the fetch tagged `$generation` with `$sample`
macro_rules! run_cycle {
    ($harness:expr, $generation:expr, $sample:expr) => {{
        $harness.dispatch_collect(Action::LocationDidLoad(DAVAO));
        $harness.complete_action(Action::WeatherDidLoad {
            generation: $generation,
            sample: $sample,
        });
        $harness.process_emitted();
    }};
}

#[test]
fn test_mount_to_populated_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LocationRequest);
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::RequestLocation));

    harness.dispatch_collect(Action::LocationDidLoad(DAVAO));
    harness.assert_state(|s| s.is_loading);
    harness.assert_state(|s| s.coordinates == Some(DAVAO));

    let effects = harness.drain_effects();
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { generation: 1, coords } if *coords == DAVAO),
    );

    harness.complete_action(Action::WeatherDidLoad {
        generation: 1,
        sample: sample(12.0, Some(2.0)),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.is_loading);
    harness.assert_state(|s| {
        s.weather.as_ref().map(|w| w.location_name.as_str()) == Some("Davao City")
    });
    harness.assert_state(|s| s.advisory.may_pasok);
}

#[test]
fn test_signal_one_wind_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    run_cycle!(harness, 1, sample(45.0, Some(0.0)));

    harness.assert_state(|s| s.advisory.signal == Some(WindSignal::SignalOne));
    harness.assert_state(|s| s.advisory.rain == RainSeverity::None);
    harness.assert_state(|s| !s.advisory.may_pasok);
}

#[test]
fn test_orange_rain_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    run_cycle!(harness, 1, sample(10.0, Some(20.0)));

    harness.assert_state(|s| s.advisory.rain == RainSeverity::Orange);
    harness.assert_state(|s| s.advisory.signal.is_none());
    harness.assert_state(|s| !s.advisory.may_pasok);
}

#[test]
fn test_calm_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    run_cycle!(harness, 1, sample(10.0, Some(5.0)));

    harness.assert_state(|s| s.advisory.rain == RainSeverity::None);
    harness.assert_state(|s| s.advisory.may_pasok);
}

#[test]
fn test_fetch_failure_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LocationDidLoad(DAVAO));
    harness.complete_action(Action::WeatherDidError {
        generation: 1,
        error: "error sending request".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| !s.is_loading);
    harness.assert_state(|s| s.weather.is_none());
    harness.assert_state(|s| s.advisory.may_pasok);
}

#[test]
fn test_verdict_never_upgrades_within_session() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    run_cycle!(harness, 1, sample(50.0, None));
    harness.assert_state(|s| !s.advisory.may_pasok);

    let calm_samples = [sample(5.0, None), sample(0.0, Some(0.0)), sample(70.0, Some(1.0))];
    for (generation, calm) in (2..).zip(calm_samples) {
        run_cycle!(harness, generation, calm);
        harness.assert_state(|s| !s.advisory.may_pasok);
        harness.assert_state(|s| s.advisory.signal == Some(WindSignal::SignalOne));
    }
}

#[test]
fn test_refresh_restores_defaults() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    run_cycle!(harness, 1, sample(40.0, Some(35.0)));
    harness.drain_effects();

    harness.dispatch_collect(Action::Refresh);

    harness.assert_state(|s| s.advisory.may_pasok);
    harness.assert_state(|s| s.advisory.signal.is_none());
    harness.assert_state(|s| s.advisory.rain == RainSeverity::None);
    harness.assert_state(|s| s.weather.is_none());
    harness.assert_state(|s| s.coordinates.is_none());
    harness.assert_state(|s| !s.is_loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::RequestLocation));
}

#[test]
fn test_superseded_fetch_is_discarded() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    // Two relocates in flight; the older result arrives last.
    harness.dispatch_collect(Action::LocationDidLoad(DAVAO));
    harness.dispatch_collect(Action::LocationDidLoad(DAVAO));
    harness.complete_action(Action::WeatherDidLoad {
        generation: 2,
        sample: sample(5.0, None),
    });
    harness.complete_action(Action::WeatherDidLoad {
        generation: 1,
        sample: sample(45.0, Some(40.0)),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 1);
    harness.assert_state(|s| s.advisory.may_pasok);
    harness.assert_state(|s| s.weather.as_ref().map(|w| w.wind_speed_kmh) == Some(5.0));
}

#[test]
fn test_share_leaves_state_alone() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    run_cycle!(harness, 1, sample(10.0, Some(10.0)));
    harness.drain_effects();

    harness.dispatch_collect(Action::ShareRequest);
    let effects = harness.drain_effects();
    effects.effects_all_match(|e| matches!(e, Effect::Share { .. }));

    harness.complete_action(Action::ShareDidError("clipboard unavailable".into()));
    let (changed, _) = harness.process_emitted();
    assert_eq!(changed, 0);
    harness.assert_state(|s| s.advisory.rain == RainSeverity::Yellow);
    harness.assert_state(|s| s.weather.is_some());
}
