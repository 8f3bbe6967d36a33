//! Tests for market price lookups
//!
//! The resolver must never error; every failure mode collapses to a zero
//! price.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{parse_lowest_price, PriceOverview, SteamClient};

#[test]
fn parse_lowest_price_handles_currency_strings() {
    assert_eq!(parse_lowest_price("$10.50"), Some(10.50));
    assert_eq!(parse_lowest_price("$0.03"), Some(0.03));
    assert_eq!(parse_lowest_price("10.50"), Some(10.50));
    // Thousands separators are stripped, not truncated at the comma
    assert_eq!(parse_lowest_price("$1,234.56"), Some(1234.56));
}

#[test]
fn parse_lowest_price_rejects_garbage() {
    assert_eq!(parse_lowest_price(""), None);
    assert_eq!(parse_lowest_price("unavailable"), None);
    assert_eq!(parse_lowest_price("$1.2.3"), None);
}

#[test]
fn price_overview_deserializes_without_price() {
    let overview: PriceOverview = serde_json::from_str(r#"{ "success": true }"#).unwrap();

    assert!(overview.success);
    assert!(overview.lowest_price.is_none());
    assert!(overview.median_price.is_none());
}

#[tokio::test]
async fn resolve_price_parses_lowest_price() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/priceoverview/"))
        .and(query_param("appid", "730"))
        .and(query_param("currency", "1"))
        .and(query_param(
            "market_hash_name",
            "AK-47 | Redline (Field-Tested)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "lowest_price": "$10.50",
            "volume": "1,204",
            "median_price": "$10.32"
        })))
        .mount(&mock_server)
        .await;

    let client = SteamClient::with_base_url(mock_server.uri(), 730, 1);
    let price = client.resolve_price("AK-47 | Redline (Field-Tested)").await;

    assert_eq!(price, 10.50);
}

#[tokio::test]
async fn resolve_price_missing_field_yields_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/priceoverview/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&mock_server)
        .await;

    let client = SteamClient::with_base_url(mock_server.uri(), 730, 1);
    let price = client.resolve_price("Chroma 2 Case").await;

    assert_eq!(price, 0.0);
}

#[tokio::test]
async fn resolve_price_error_status_yields_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/priceoverview/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = SteamClient::with_base_url(mock_server.uri(), 730, 1);
    let price = client.resolve_price("Chroma 2 Case").await;

    assert_eq!(price, 0.0);
}

#[tokio::test]
async fn resolve_price_malformed_body_yields_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/priceoverview/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = SteamClient::with_base_url(mock_server.uri(), 730, 1);
    let price = client.resolve_price("Chroma 2 Case").await;

    assert_eq!(price, 0.0);
}

#[tokio::test]
async fn resolve_price_unreachable_endpoint_yields_zero() {
    // Nothing listens here; the connection itself fails
    let client = SteamClient::with_base_url("http://127.0.0.1:9", 730, 1);
    let price = client.resolve_price("Chroma 2 Case").await;

    assert_eq!(price, 0.0);
}
