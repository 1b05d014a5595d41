//! HTTP client tests against a wiremock server

use std::time::Duration;

use maypasok::{
    api::{LocationError, LocationOptions, LocationSource, WeatherClient, WeatherError},
    config::WeatherConfig,
    state::Coordinates,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ILOILO: Coordinates = Coordinates {
    lat: 10.72,
    lon: 122.56,
};

fn client_for(server: &MockServer) -> WeatherClient {
    let config = WeatherConfig::new(Some("test-key".into()), server.uri()).unwrap();
    WeatherClient::new(config)
}

#[tokio::test]
async fn test_fetch_converts_units() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "10.72"))
        .and(query_param("lon", "122.56"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 303.15 },
            "name": "Iloilo City",
            "wind": { "speed": 10.0 },
            "rain": { "1h": 16.5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sample = client_for(&server).fetch(ILOILO).await.unwrap();

    assert_eq!(sample.location_name, "Iloilo City");
    assert_eq!(sample.temperature_label(), "30 °C");
    assert_eq!(sample.wind_label(), "36.00 km/h");
    assert_eq!(sample.rainfall_mm_1h, Some(16.5));
}

#[tokio::test]
async fn test_fetch_without_rain_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 298.15 },
            "name": "Bacolod",
            "wind": { "speed": 2.0 }
        })))
        .mount(&server)
        .await;

    let sample = client_for(&server).fetch(ILOILO).await.unwrap();
    assert_eq!(sample.rainfall_mm_1h, None);
}

#[tokio::test]
async fn test_fetch_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(ILOILO).await.unwrap_err();
    assert!(matches!(err, WeatherError::Status(401)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(ILOILO).await.unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_ip_lookup_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "lat": 10.72,
            "lon": 122.56
        })))
        .mount(&server)
        .await;

    let source = LocationSource::ip_lookup_at(format!("{}/json/", server.uri()));
    let coords = source.locate(&LocationOptions::default()).await.unwrap();
    assert_eq!(coords, ILOILO);
}

#[tokio::test]
async fn test_ip_lookup_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "reserved range"
        })))
        .mount(&server)
        .await;

    let source = LocationSource::ip_lookup_at(format!("{}/json/", server.uri()));
    let err = source.locate(&LocationOptions::default()).await.unwrap_err();
    assert!(matches!(&err, LocationError::Lookup(msg) if msg == "reserved range"));
}

#[tokio::test]
async fn test_ip_lookup_honours_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({ "status": "success", "lat": 1.0, "lon": 2.0 })),
        )
        .mount(&server)
        .await;

    let source = LocationSource::ip_lookup_at(format!("{}/json/", server.uri()));
    let options = LocationOptions {
        timeout: Some(Duration::from_millis(50)),
        ..Default::default()
    };
    let err = source.locate(&options).await.unwrap_err();
    assert!(matches!(err, LocationError::Request(_)), "got {err:?}");
}
