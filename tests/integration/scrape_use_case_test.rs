// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use super::helpers::mock_session::MockBehavior;
use super::helpers::{use_case_with, GOLD_EVENT_BLOCK};
use ticketprobe::application::dto::scrape_request::ScrapeQuery;
use ticketprobe::utils::errors::{ErrorKind, ScrapeError};

fn query(url: &str) -> ScrapeQuery {
    ScrapeQuery {
        url: Some(url.to_string()),
    }
}

#[tokio::test]
async fn test_event_offers_are_returned_and_session_released() {
    let (use_case, manager) =
        use_case_with(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]), Duration::from_secs(60));

    let response = use_case
        .execute(query("https://in.bookmyshow.com/events/gig/ET001"))
        .await
        .unwrap();

    assert_eq!(response.offers.len(), 1);
    assert_eq!(response.offers[0].name.as_deref(), Some("Gold"));
    assert_eq!(response.offers[0].inventory_level, "0");
    assert_eq!(manager.acquired(), 1);
    assert_eq!(manager.released(), 1);
    assert_eq!(
        manager.navigated(),
        vec!["https://in.bookmyshow.com/events/gig/ET001".to_string()]
    );
}

#[tokio::test]
async fn test_missing_url_never_touches_browser() {
    let (use_case, manager) =
        use_case_with(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]), Duration::from_secs(60));

    let err = use_case.execute(ScrapeQuery { url: None }).await.unwrap_err();

    assert!(matches!(err, ScrapeError::MissingUrl));
    assert_eq!(manager.acquired(), 0);
    assert_eq!(manager.released(), 0);
}

#[tokio::test]
async fn test_invalid_url_never_touches_browser() {
    let (use_case, manager) =
        use_case_with(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]), Duration::from_secs(60));

    let err = use_case.execute(query("not-a-url")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputError);
    assert_eq!(manager.acquired(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_navigation_timeout_releases_session() {
    let (use_case, manager) = use_case_with(MockBehavior::NeverReady, Duration::from_secs(60));

    let err = use_case
        .execute(query("https://slow.example.com/event"))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::NavigationTimeout(d) if d == Duration::from_secs(60)));
    assert_eq!(err.kind(), ErrorKind::NavigationFailure);
    assert_eq!(manager.acquired(), 1);
    assert_eq!(manager.released(), 1);
}

#[tokio::test]
async fn test_navigation_error_releases_session() {
    let (use_case, manager) = use_case_with(
        MockBehavior::NavigationError("net::ERR_NAME_NOT_RESOLVED".to_string()),
        Duration::from_secs(60),
    );

    let err = use_case
        .execute(query("https://no-such-host.invalid/"))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Navigation(ref m) if m == "net::ERR_NAME_NOT_RESOLVED"));
    assert_eq!(manager.released(), 1);
}

#[tokio::test]
async fn test_panic_during_collection_releases_session() {
    let (use_case, manager) = use_case_with(MockBehavior::PanicOnCollect, Duration::from_secs(60));

    let err = use_case
        .execute(query("https://example.com/event"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedFailure);
    assert!(err.to_string().contains("renderer crashed"));
    assert_eq!(manager.acquired(), 1);
    assert_eq!(manager.released(), 1);
}

#[tokio::test]
async fn test_evaluation_error_is_unexpected_failure() {
    let (use_case, manager) = use_case_with(
        MockBehavior::CollectError("Execution context was destroyed".to_string()),
        Duration::from_secs(60),
    );

    let err = use_case
        .execute(query("https://example.com/event"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedFailure);
    assert_eq!(manager.released(), 1);
}

#[tokio::test]
async fn test_launch_failure_has_nothing_to_release() {
    let (use_case, manager) = use_case_with(
        MockBehavior::LaunchFailure("chrome not found".to_string()),
        Duration::from_secs(60),
    );

    let err = use_case
        .execute(query("https://example.com/event"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedFailure);
    assert_eq!(manager.released(), 0);
}

#[tokio::test]
async fn test_extraction_misses_still_release_session() {
    let (use_case, manager) = use_case_with(MockBehavior::blocks(&[]), Duration::from_secs(60));
    let err = use_case
        .execute(query("https://example.com/plain"))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::NoStructuredData));
    assert_eq!(manager.released(), 1);

    let (use_case, manager) = use_case_with(
        MockBehavior::blocks(&[r#"{"@type":"Organization"}"#]),
        Duration::from_secs(60),
    );
    let err = use_case
        .execute(query("https://example.com/venue"))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::NoOffersFound));
    assert_eq!(manager.released(), 1);
}

#[tokio::test]
async fn test_concurrent_requests_use_independent_sessions() {
    let (use_case, manager) =
        use_case_with(MockBehavior::blocks(&[GOLD_EVENT_BLOCK]), Duration::from_secs(60));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                use_case
                    .execute(query(&format!("https://example.com/event/{}", i)))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(manager.acquired(), 8);
    assert_eq!(manager.released(), 8);

    let mut ids = manager.released_ids();
    ids.sort_unstable();
    assert_eq!(ids, (0..8).collect::<Vec<_>>());
}
