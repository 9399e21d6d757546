// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::offer::OfferRecord;

/// 抓取成功的响应
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OffersResponse {
    /// 按页面顺序排列的票档
    pub offers: Vec<OfferRecord>,
}

/// 错误响应
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    /// 简短的错误描述
    pub error: String,
    /// 诊断信息
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
