// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;

use crate::application::dto::scrape_request::ScrapeQuery;
use crate::application::dto::scrape_response::OffersResponse;
use crate::application::usecases::scrape_offers::ScrapeOffersUseCase;
use crate::engines::traits::BrowserSessionManager;
use crate::presentation::errors::AppError;

/// `GET /api/scrape?url=...`
///
/// 抓取在独立任务中运行，客户端断开连接不会打断会话的释放。
pub async fn scrape<M>(
    Extension(use_case): Extension<Arc<ScrapeOffersUseCase<M>>>,
    Query(query): Query<ScrapeQuery>,
) -> Result<Json<OffersResponse>, AppError>
where
    M: BrowserSessionManager + 'static,
{
    let task = tokio::spawn(async move { use_case.execute(query).await });
    let response = task.await??;
    Ok(Json(response))
}
