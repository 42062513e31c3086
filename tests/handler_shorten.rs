mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;
use shortlink::api::handlers::shorten::SHORTEN_SUCCESS_MESSAGE;
use shortlink::domain::repositories::LinkStore;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_success() {
    let (state, store) = common::memory_state();
    let server = common::test_server(state);

    let response = server
        .post("/v1/links/shorten")
        .json(&json!({
            "url": "https://example.com/some/long/path",
            "exp": 600
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["message"], SHORTEN_SUCCESS_MESSAGE);

    assert_eq!(
        store.get(code).await.unwrap(),
        "https://example.com/some/long/path"
    );
}

#[tokio::test]
async fn test_shorten_expires_at_follows_exp() {
    let (state, _store) = common::memory_state();
    let server = common::test_server(state);

    let before = Utc::now();
    let response = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com", "exp": 600 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let expires_at: DateTime<Utc> = serde_json::from_value(json["expires_at"].clone()).unwrap();
    let lifetime = (expires_at - before).num_seconds();

    assert!((595..=605).contains(&lifetime), "lifetime was {lifetime}s");
}

#[tokio::test]
async fn test_shorten_missing_exp_uses_default_ttl() {
    let (state, _store) = common::memory_state();
    let server = common::test_server(state);

    let before = Utc::now();
    let response = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let expires_at: DateTime<Utc> = serde_json::from_value(json["expires_at"].clone()).unwrap();
    let lifetime = (expires_at - before).num_seconds() as u64;

    assert!(lifetime.abs_diff(common::TEST_DEFAULT_TTL) <= 5);
}

#[tokio::test]
async fn test_shorten_zero_exp_uses_default_ttl() {
    let (state, _store) = common::memory_state();
    let server = common::test_server(state);

    let before = Utc::now();
    let response = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com", "exp": 0 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let expires_at: DateTime<Utc> = serde_json::from_value(json["expires_at"].clone()).unwrap();
    let lifetime = (expires_at - before).num_seconds() as u64;

    assert!(lifetime.abs_diff(common::TEST_DEFAULT_TTL) <= 5);
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let (state, store) = common::memory_state();
    let server = common::test_server(state);

    let first = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["code"], second["code"]);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, store) = common::memory_state();
    let server = common::test_server(state);

    for url in ["not a url", "ftp://example.com/file", ""] {
        let response = server
            .post("/v1/links/shorten")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (state, _store) = common::memory_state();
    let server = common::test_server(state);

    let response = server
        .post("/v1/links/shorten")
        .json(&json!({ "exp": 60 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request body");
}

#[tokio::test]
async fn test_shorten_non_json_body() {
    let (state, _store) = common::memory_state();
    let server = common::test_server(state);

    let response = server
        .post("/v1/links/shorten")
        .text("url=https://example.com")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_store_failure_is_opaque_500() {
    let state = common::create_test_state(Arc::new(common::FailingStore));
    let server = common::test_server(state);

    let response = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal Server Error");
    assert!(!response.text().contains("connection refused"));
}

#[tokio::test]
async fn test_shorten_oversized_exp_is_bad_request() {
    let (state, store) = common::memory_state();
    let server = common::test_server(state);

    let response = server
        .post("/v1/links/shorten")
        .json(&json!({ "url": "https://example.com", "exp": 100_000_000_000_000_000u64 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}
