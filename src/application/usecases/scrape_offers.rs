// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

use crate::application::dto::scrape_request::{ScrapeQuery, ScrapeRequest};
use crate::application::dto::scrape_response::OffersResponse;
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines;
use crate::engines::traits::{BrowserSessionManager, SessionError};
use crate::infrastructure::metrics;
use crate::utils::errors::{ErrorKind, ScrapeError};

// === Section: Use Case Definition ===

/// 票档抓取用例
///
/// 一次请求的完整流程：校验URL、获取会话、在预算内导航、收集 JSON-LD、
/// 释放会话，最后在浏览器之外完成解析和标准化。
pub struct ScrapeOffersUseCase<M: BrowserSessionManager> {
    manager: Arc<M>,
    navigation_timeout: Duration,
}

// === Section: Implementation ===

impl<M: BrowserSessionManager> ScrapeOffersUseCase<M> {
    pub fn new(manager: Arc<M>, navigation_timeout: Duration) -> Self {
        Self {
            manager,
            navigation_timeout,
        }
    }

    /// 执行抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(OffersResponse)` - 非空的票档列表
    /// * `Err(ScrapeError)` - 输入错误、导航失败、未找到数据或意外错误之一
    pub async fn execute(&self, query: ScrapeQuery) -> Result<OffersResponse, ScrapeError> {
        let start = Instant::now();
        let result = self.run(query).await;

        match &result {
            Ok(response) => {
                metrics::record_scrape("success", start.elapsed());
                info!("Returned {} offers in {:?}", response.offers.len(), start.elapsed());
            }
            Err(e) => {
                metrics::record_scrape(e.label(), start.elapsed());
                match e.kind() {
                    ErrorKind::InputError | ErrorKind::ExtractionMiss => warn!("{}", e),
                    ErrorKind::NavigationFailure | ErrorKind::UnexpectedFailure => {
                        error!("Scraping error: {}", e)
                    }
                }
            }
        }

        result
    }

    async fn run(&self, query: ScrapeQuery) -> Result<OffersResponse, ScrapeError> {
        let request = query.into_request(self.navigation_timeout)?;
        let span = tracing::info_span!(
            "scrape",
            request_id = %Uuid::new_v4(),
            url = %request.url,
            manager = self.manager.name()
        );

        async move {
            info!("Scraping URL: {}", request.url);
            let blocks = self.render_blocks(&request).await?;
            let offers = ExtractionService::extract_offers(&blocks)?;
            Ok(OffersResponse { offers })
        }
        .instrument(span)
        .await
    }

    /// 获取会话、导航并收集 JSON-LD 文本
    ///
    /// 只要 `acquire` 成功，无论后续成功、超时、出错还是 panic，会话都恰好释放一次。
    pub async fn render_blocks(&self, request: &ScrapeRequest) -> Result<Vec<String>, ScrapeError> {
        let mut session = self.manager.acquire().await?;
        metrics::session_opened();

        let outcome = AssertUnwindSafe(self.navigate_and_collect(&mut session, request))
            .catch_unwind()
            .await;

        if let Err(e) = self.manager.release(session).await {
            warn!("Failed to release browser session: {}", e);
        }
        metrics::session_closed();

        match outcome {
            Ok(result) => result.map_err(ScrapeError::from),
            Err(panic) => Err(ScrapeError::Unexpected(panic_message(panic.as_ref()))),
        }
    }

    async fn navigate_and_collect(
        &self,
        session: &mut M::Session,
        request: &ScrapeRequest,
    ) -> Result<Vec<String>, SessionError> {
        info!("Navigating to page...");
        engines::navigate_within(self.manager.as_ref(), session, &request.url, request.timeout)
            .await?;

        info!("Extracting JSON-LD data...");
        self.manager.collect_blocks(session).await
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic during scrape: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic during scrape: {}", s)
    } else {
        "panic during scrape".to_string()
    }
}
