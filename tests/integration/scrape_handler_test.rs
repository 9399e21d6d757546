// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;

use super::helpers::mock_session::MockBehavior;
use super::helpers::{create_test_app, create_test_app_with_budget, GOLD_EVENT_BLOCK};

#[tokio::test]
async fn test_scrape_returns_normalized_offers() {
    let app = create_test_app(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "https://in.bookmyshow.com/events/gig/ET001?src=home")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "offers": [{
                "name": "Gold",
                "price": "1200",
                "priceCurrency": "INR",
                "availability": "http://schema.org/InStock",
                "inventoryLevel": "0",
                "validFrom": "2024-01-01"
            }]
        })
    );
    assert_eq!(
        app.manager.navigated(),
        vec!["https://in.bookmyshow.com/events/gig/ET001?src=home".to_string()]
    );
    assert_eq!(app.manager.released(), 1);
}

#[tokio::test]
async fn test_scrape_with_many_offers_keeps_order() {
    let app = create_test_app(MockBehavior::blocks(&[
        "<!-- broken -->",
        r#"{"@type":"Event","offers":[
            {"name":"Early Bird","price":"499","inventoryLevel":"5","availability":"http://schema.org/SoldOut"},
            {"name":"Regular","price":"799"},
            {"name":"VIP","price":"2999","inventoryLevel":"12"}
        ]}"#,
    ]));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "https://example.com/event")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    let offers = body["offers"].as_array().unwrap();
    assert_eq!(offers.len(), 3);
    assert_eq!(offers[0]["name"], "Early Bird");
    assert_eq!(offers[0]["inventoryLevel"], "5");
    assert_eq!(offers[1]["inventoryLevel"], "0");
    assert_eq!(offers[2]["name"], "VIP");
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let app = create_test_app(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]));

    let response = app.server.get("/api/scrape").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL is required" })
    );
    assert_eq!(app.manager.acquired(), 0);
}

#[tokio::test]
async fn test_empty_url_is_bad_request() {
    let app = create_test_app(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]));

    let response = app.server.get("/api/scrape").add_query_param("url", "").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.manager.acquired(), 0);
}

#[tokio::test]
async fn test_malformed_url_is_bad_request() {
    let app = create_test_app(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "bookmyshow events")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid URL");
    assert!(body["details"].is_string());
    assert_eq!(app.manager.acquired(), 0);
}

#[tokio::test]
async fn test_no_structured_data_is_not_found() {
    let app = create_test_app(MockBehavior::blocks(&[]));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "https://example.com/plain")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "No JSON-LD data found" })
    );
}

#[tokio::test]
async fn test_no_offers_is_not_found() {
    let app = create_test_app(MockBehavior::blocks(&[
        r#"{"@type":"Event","name":"Sold out show"}"#,
    ]));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "https://example.com/event")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "No offers found" })
    );
    assert_eq!(app.manager.released(), 1);
}

#[tokio::test]
async fn test_navigation_timeout_is_server_error() {
    let app = create_test_app_with_budget(MockBehavior::NeverReady, Duration::from_millis(50));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "https://slow.example.com/event")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Failed to scrape");
    assert!(body["details"].as_str().unwrap().contains("timed out"));
    assert_eq!(app.manager.acquired(), 1);
    assert_eq!(app.manager.released(), 1);
}

#[tokio::test]
async fn test_navigation_error_is_server_error() {
    let app = create_test_app(MockBehavior::NavigationError(
        "net::ERR_CONNECTION_REFUSED".to_string(),
    ));

    let response = app
        .server
        .get("/api/scrape")
        .add_query_param("url", "http://127.0.0.1:1/")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "error": "Failed to scrape",
            "details": "Navigation failed: net::ERR_CONNECTION_REFUSED"
        })
    );
    assert_eq!(app.manager.released(), 1);
}
