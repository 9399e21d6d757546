// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::application::usecases::scrape_offers::ScrapeOffersUseCase;
use crate::config::settings::Settings;
use crate::engines::traits::BrowserSessionManager;
use crate::presentation::handlers::scrape_handler;

/// 创建API路由
///
/// 调用方需要通过 `Extension` 提供 `Arc<ScrapeOffersUseCase<M>>`。
pub fn routes<M>() -> Router
where
    M: BrowserSessionManager + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/api/scrape", get(scrape_handler::scrape::<M>))
}

/// 创建完整的应用
///
/// 非API请求回落到静态资源目录，找不到的路径返回 `index.html`。
pub fn app<M>(use_case: Arc<ScrapeOffersUseCase<M>>, settings: &Settings) -> Router
where
    M: BrowserSessionManager + 'static,
{
    let static_dir = PathBuf::from(&settings.static_files.dir);
    let static_files =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    routes::<M>()
        .fallback_service(static_files)
        .layer(Extension(use_case))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
