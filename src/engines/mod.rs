// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod blocklist;
pub mod chromium_session;
pub mod html_blocks;
pub mod traits;
pub mod validators;

use std::time::Duration;
use url::Url;

use crate::engines::traits::{BrowserSessionManager, SessionError};

/// 在时间预算内完成导航
///
/// 预算耗尽时返回 [`SessionError::NavigationTimeout`]，会话仍由调用方负责释放。
pub async fn navigate_within<M>(
    manager: &M,
    session: &mut M::Session,
    url: &Url,
    budget: Duration,
) -> Result<(), SessionError>
where
    M: BrowserSessionManager + ?Sized,
{
    tokio::time::timeout(budget, manager.navigate(session, url))
        .await
        .map_err(|_| SessionError::NavigationTimeout(budget))?
}
