// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

use crate::config::settings::MetricsSettings;

/// 初始化指标导出
///
/// 未启用时不安装 recorder，所有记录调用都是空操作。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!("scrape_requests_total", "Scrape requests by outcome");
    describe_histogram!(
        "scrape_duration_seconds",
        "End-to-end duration of scrape requests in seconds"
    );
    describe_gauge!("browser_sessions_active", "Browser sessions currently alive");

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次抓取的结果和耗时
pub fn record_scrape(outcome: &'static str, elapsed: Duration) {
    counter!("scrape_requests_total", "outcome" => outcome).increment(1);
    histogram!("scrape_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn session_opened() {
    gauge!("browser_sessions_active").increment(1.0);
}

pub fn session_closed() {
    gauge!("browser_sessions_active").decrement(1.0);
}
