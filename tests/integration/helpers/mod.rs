// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.


use axum::Extension;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use ticketprobe::application::usecases::scrape_offers::ScrapeOffersUseCase;
use ticketprobe::presentation::routes;

use mock_session::{MockBehavior, MockSessionManager};

/// 示例活动页面中的 JSON-LD
pub const GOLD_EVENT_BLOCK: &str = r#"{"@type":"Event","offers":[{"name":"Gold","price":"1200","priceCurrency":"INR","availability":"http://schema.org/InStock","validFrom":"2024-01-01"}]}"#;

pub struct TestApp {
    pub server: TestServer,
    pub manager: Arc<MockSessionManager>,
}

pub fn use_case_with(
    behavior: MockBehavior,
    budget: Duration,
) -> (
    Arc<ScrapeOffersUseCase<MockSessionManager>>,
    Arc<MockSessionManager>,
) {
    let manager = Arc::new(MockSessionManager::new(behavior));
    let use_case = Arc::new(ScrapeOffersUseCase::new(manager.clone(), budget));
    (use_case, manager)
}

pub fn create_test_app(behavior: MockBehavior) -> TestApp {
    create_test_app_with_budget(behavior, Duration::from_secs(5))
}

pub fn create_test_app_with_budget(behavior: MockBehavior, budget: Duration) -> TestApp {
    let (use_case, manager) = use_case_with(behavior, budget);
    let app = routes::routes::<MockSessionManager>().layer(Extension(use_case));
    let server = TestServer::new(app).unwrap();

    TestApp { server, manager }
}
