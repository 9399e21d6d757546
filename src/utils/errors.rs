// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;
use thiserror::Error;

use crate::engines::traits::SessionError;

/// 错误分类
///
/// 每个抓取错误都归入其中一类，用于决定返回给客户端的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入错误（缺少或无效的URL），不会到达浏览器层
    InputError,
    /// 浏览器层的导航失败（超时或加载失败）
    NavigationFailure,
    /// 页面正常，但没有可用的结构化活动/票档数据
    ExtractionMiss,
    /// 其他意外错误
    UnexpectedFailure,
}

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Navigation timed out after {}s", .0.as_secs())]
    NavigationTimeout(Duration),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("No JSON-LD data found")]
    NoStructuredData,

    #[error("No offers found")]
    NoOffersFound,

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl ScrapeError {
    /// 返回错误所属的分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::MissingUrl | ScrapeError::InvalidUrl(_) => ErrorKind::InputError,
            ScrapeError::NavigationTimeout(_) | ScrapeError::Navigation(_) => {
                ErrorKind::NavigationFailure
            }
            ScrapeError::NoStructuredData | ScrapeError::NoOffersFound => {
                ErrorKind::ExtractionMiss
            }
            ScrapeError::Unexpected(_) => ErrorKind::UnexpectedFailure,
        }
    }

    /// 指标标签使用的短名称
    pub fn label(&self) -> &'static str {
        match self {
            ScrapeError::MissingUrl => "missing_url",
            ScrapeError::InvalidUrl(_) => "invalid_url",
            ScrapeError::NavigationTimeout(_) => "navigation_timeout",
            ScrapeError::Navigation(_) => "navigation_error",
            ScrapeError::NoStructuredData => "no_structured_data",
            ScrapeError::NoOffersFound => "no_offers_found",
            ScrapeError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<SessionError> for ScrapeError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NavigationTimeout(budget) => ScrapeError::NavigationTimeout(budget),
            SessionError::Navigation(msg) => ScrapeError::Navigation(msg),
            other => ScrapeError::Unexpected(other.to_string()),
        }
    }
}
