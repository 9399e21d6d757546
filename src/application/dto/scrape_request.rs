// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::engines::validators;
use crate::utils::errors::ScrapeError;

/// 抓取请求查询参数
///
/// 对应 `GET /api/scrape?url=...`
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ScrapeQuery {
    /// 目标活动页面URL（URL编码）
    pub url: Option<String>,
}

/// 通过校验的抓取请求
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// 目标URL
    pub url: Url,
    /// 导航时间预算
    pub timeout: Duration,
}

impl ScrapeQuery {
    /// 校验查询参数并生成抓取请求
    ///
    /// 缺少或为空的 `url` 返回 [`ScrapeError::MissingUrl`]，
    /// 无法解析为绝对URL时返回 [`ScrapeError::InvalidUrl`]。
    pub fn into_request(self, timeout: Duration) -> Result<ScrapeRequest, ScrapeError> {
        let raw = self
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ScrapeError::MissingUrl)?;

        let url = validators::validate_target_url(&raw)
            .map_err(|e| ScrapeError::InvalidUrl(e.to_string()))?;

        Ok(ScrapeRequest { url, timeout })
    }
}
