//! Integration tests for the HTTP adapter.
//!
//! These tests drive the full router stack against the static fixture rates.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use converter_hex::{ConverterService, inbound::HttpServer};
use rates_source::StaticRateSource;
use rates_types::{ConverterSettings, RateSource, RateTable, SourceError};

/// Helper to create a test app backed by the sample rates.
fn create_test_app() -> axum::Router {
    let source = StaticRateSource::sample().unwrap();
    let service = ConverterService::new(source, ConverterSettings::default());
    HttpServer::new(service).router()
}

/// Rate source that is always down.
struct DownSource;

#[async_trait::async_trait]
impl RateSource for DownSource {
    async fn fetch(&self) -> Result<RateTable, SourceError> {
        Err(SourceError::Network("connection refused".into()))
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Helper to send a request and decode the JSON body.
async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_before_and_after_first_fetch() {
    let app = create_test_app();

    let (status, json) = send(app.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rates_loaded"], false);

    send(app.clone(), get("/api/currencies")).await;

    let (_, json) = send(app, get("/health")).await;
    assert_eq!(json["rates_loaded"], true);
    assert!(json["fetched_at"].is_string());
}

#[tokio::test]
async fn test_convert_explicit_request() {
    let (status, json) = send(create_test_app(), get("/api/convert?q=100%20usd%20to%20byn")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from"], "USD");
    assert_eq!(json["to"], "BYN");
    assert_eq!(json["amount"], "100");
    assert_eq!(json["converted"], "319.36");
    assert_eq!(json["rate"], "3.19");
}

#[tokio::test]
async fn test_convert_bare_amount() {
    let (status, json) = send(create_test_app(), get("/api/convert?q=-500")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from"], "RUB");
    assert_eq!(json["to"], "BYN");
    assert_eq!(json["converted"], "18.07");
}

#[tokio::test]
async fn test_convert_error_statuses() {
    let app = create_test_app();

    let (status, json) = send(app.clone(), get("/api/convert?q=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);

    let (status, _) = send(app, get("/api/convert?q=1%20usd%20to%20xyz")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rates_unavailable_is_503() {
    let service = ConverterService::new(DownSource, ConverterSettings::default());
    let app = HttpServer::new(service).router();

    let (status, _) = send(app.clone(), get("/api/convert?q=1%20usd%20to%20eur")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(app.clone(), get("/api/currencies")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // same-currency requests never need rates
    let (status, json) = send(app, get("/api/convert?q=1%20usd%20to%20usd")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["converted"], "1");
}

#[tokio::test]
async fn test_currency_list_starts_with_base() {
    let (status, json) = send(create_test_app(), get("/api/currencies")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["base"], "BYN");
    let codes: Vec<&str> = json["currencies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes[0], "BYN");

    let base = &json["currencies"][0];
    assert_eq!(base["rate"], "1");
    assert_eq!(base["scale"], 1);
    assert!(base.get("official_rate").is_none());

    let mut rest = codes[1..].to_vec();
    rest.sort();
    assert_eq!(rest, codes[1..]);
}

#[tokio::test]
async fn test_message_endpoint_routes_commands() {
    let app = create_test_app();
    let request = |text: &str| {
        Request::builder()
            .method(Method::POST)
            .uri("/api/messages")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    };

    let (status, json) = send(app.clone(), request("/convert 10 eur to usd")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["replies"][0],
        "<b>10 EUR = 10.69 USD</b>\n\n<i>Rate: 1 EUR = 1.07 USD</i>"
    );

    let (_, json) = send(app.clone(), request("/currencies")).await;
    let listing = json["replies"][0].as_str().unwrap();
    assert!(listing.contains("<code>BYN</code> - Belarusian ruble"));

    let (_, json) = send(app, request("what's up")).await;
    assert_eq!(json["replies"].as_array().unwrap().len(), 0);
}
