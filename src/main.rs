// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use ticketprobe::application::usecases::scrape_offers::ScrapeOffersUseCase;
use ticketprobe::config::settings::Settings;
use ticketprobe::engines::chromium_session::ChromiumSessionManager;
use ticketprobe::infrastructure::metrics;
use ticketprobe::presentation::routes;
use ticketprobe::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting ticketprobe...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Metrics
    metrics::init_metrics(&settings.metrics);

    // 4. Browser session manager and use case
    let manager = Arc::new(ChromiumSessionManager::new(settings.browser.clone()));
    match &settings.browser.remote_debugging_url {
        Some(url) => info!("Using remote Chrome at {}", url),
        None => info!("Launching a local Chrome per request"),
    }
    let use_case = Arc::new(ScrapeOffersUseCase::new(
        manager,
        settings.browser.navigation_timeout(),
    ));

    // 5. Start HTTP server
    let app = routes::app(use_case, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
