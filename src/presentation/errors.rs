// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::scrape_response::ErrorBody;
use crate::utils::errors::{ErrorKind, ScrapeError};

/// 应用错误类型
///
/// 把抓取错误映射为统一的HTTP错误响应
#[derive(Debug)]
pub struct AppError(pub ScrapeError);

impl AppError {
    /// 错误对应的HTTP状态码
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::InputError => StatusCode::BAD_REQUEST,
            ErrorKind::ExtractionMiss => StatusCode::NOT_FOUND,
            ErrorKind::NavigationFailure | ErrorKind::UnexpectedFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 错误响应体
    pub fn body(&self) -> ErrorBody {
        match &self.0 {
            ScrapeError::InvalidUrl(details) => ErrorBody::new("Invalid URL").with_details(details),
            err if self.status().is_server_error() => {
                ErrorBody::new("Failed to scrape").with_details(err.to_string())
            }
            err => ErrorBody::new(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<ScrapeError> for AppError {
    fn from(err: ScrapeError) -> Self {
        Self(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self(ScrapeError::Unexpected(format!("scrape task failed: {}", err)))
    }
}
