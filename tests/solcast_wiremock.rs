//! Integration tests for the Solcast client using wiremock.
//!
//! These tests verify bearer authentication, the omission of unsupplied
//! optional fields, and the handling of CSV, JSON and error responses.

use chrono::NaiveDate;
use heliomet::{ArrayType, HeliometError, LatLon, ResponseFormat, SolcastClient};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{bearer_token, method, path, query_param, query_param_is_missing},
};

const API_KEY: &str = "test-key";

/// Runs a blocking fetch off the test runtime.
///
/// The blocking HTTP client must be built, used and dropped outside the
/// async runtime thread.
async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking fetch task panicked")
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

fn end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 7).unwrap()
}

#[tokio::test]
async fn test_request_omits_geometry_when_not_supplied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/historic/radiation_and_weather"))
        .and(bearer_token(API_KEY))
        .and(query_param("latitude", "-33.86"))
        .and(query_param("longitude", "151.21"))
        .and(query_param("start", "2022-01-01"))
        .and(query_param("end", "2022-01-07"))
        .and(query_param("output_parameters", "ghi,dni"))
        .and(query_param("format", "csv"))
        .and(query_param("time_zone", "utc"))
        .and(query_param_is_missing("duration"))
        .and(query_param_is_missing("azimuth"))
        .and(query_param_is_missing("tilt"))
        .and(query_param_is_missing("array_type"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ghi,dni\n100,200\n"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let payload = run_blocking(move || {
        let client = SolcastClient::with_base_url(API_KEY, base_url)?;
        client
            .fetch()
            .location(LatLon(-33.86, 151.21))
            .start(start())
            .end(end())
            .output_parameters(&["ghi", "dni"])
            .call()
    })
    .await
    .expect("expected a parsed payload");

    let frame = payload.into_table().expect("csv should yield a table");
    assert_eq!(frame.get_column_names_str(), ["ghi", "dni"]);
    assert_eq!(frame.height(), 1);
}

#[tokio::test]
async fn test_geometry_fields_are_sent_when_supplied() {
    let mock_server = MockServer::start().await;
    let body = json!({"data": []});

    Mock::given(method("GET"))
        .and(path("/data/historic/radiation_and_weather"))
        .and(bearer_token(API_KEY))
        .and(query_param("azimuth", "30"))
        .and(query_param("tilt", "10"))
        .and(query_param("array_type", "fixed"))
        .and(query_param("duration", "P1D"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let payload = run_blocking(move || {
        let client = SolcastClient::with_base_url(API_KEY, base_url)?;
        client
            .fetch()
            .location(LatLon(-33.86, 151.21))
            .start(start())
            .end(end())
            .output_parameters(&["ghi"])
            .duration("P1D")
            .azimuth(30.0)
            .tilt(10.0)
            .array_type(ArrayType::Fixed)
            .format(ResponseFormat::Json)
            .call()
    })
    .await
    .expect("expected a parsed payload");

    assert_eq!(payload.into_json().expect("json should yield a tree"), body);
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/historic/radiation_and_weather"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let err = run_blocking(move || {
        let client = SolcastClient::with_base_url(API_KEY, base_url)?;
        client
            .fetch()
            .location(LatLon(-33.86, 151.21))
            .start(start())
            .end(end())
            .output_parameters(&["ghi"])
            .call()
    })
    .await
    .expect_err("expected an error for status 403");

    match &err {
        HeliometError::HttpStatus { status, body, .. } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected HttpStatus, got: {other:?}"),
    }
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_per_call_api_key_overrides_the_constructor_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/historic/radiation_and_weather"))
        .and(bearer_token("override-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ghi\n100\n"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let payload = run_blocking(move || {
        let client = SolcastClient::with_base_url("constructor-key", base_url)?;
        client
            .fetch()
            .location(LatLon(-33.86, 151.21))
            .start(start())
            .end(end())
            .output_parameters(&["ghi"])
            .api_key("override-key")
            .call()
    })
    .await
    .expect("the override key should authenticate");

    assert!(payload.as_table().is_some());
}

#[tokio::test]
async fn test_extension_fields_merge_last() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/historic/radiation_and_weather"))
        .and(query_param("time_zone", "Australia/Sydney"))
        .and(query_param("hours", "168"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ghi\n100\n"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let payload = run_blocking(move || {
        let client = SolcastClient::with_base_url(API_KEY, base_url)?;
        client
            .fetch()
            .location(LatLon(-33.86, 151.21))
            .start(start())
            .end(end())
            .output_parameters(&["ghi"])
            .extra_params(&[
                ("time_zone", "Australia/Sydney".into()),
                ("hours", 168.into()),
            ])
            .call()
    })
    .await
    .expect("expected a parsed payload");

    assert!(payload.as_table().is_some());

    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert_eq!(query.matches("time_zone=").count(), 1);
}
