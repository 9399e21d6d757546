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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// 浏览器会话错误类型
#[derive(Error, Debug)]
pub enum SessionError {
    /// 浏览器启动或连接失败
    #[error("Browser launch failed: {0}")]
    Launch(String),
    /// 导航超出时间预算
    #[error("Navigation timed out after {}s", .0.as_secs())]
    NavigationTimeout(Duration),
    /// 导航失败（DNS、连接被拒绝等）
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 页面内脚本执行失败
    #[error("Evaluation failed: {0}")]
    Evaluation(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 浏览器会话管理器特质
///
/// 每个抓取请求独占一个会话：`acquire` 创建，`release` 销毁。
/// `release` 按值接收会话，因此每个会话最多只能释放一次。
#[async_trait]
pub trait BrowserSessionManager: Send + Sync {
    /// 会话类型
    type Session: Send;

    /// 创建一个全新的、相互隔离的浏览器会话
    async fn acquire(&self) -> Result<Self::Session, SessionError>;

    /// 导航到目标URL，等待初始DOM构建完成（DOMContentLoaded）
    ///
    /// 时间预算由 [`crate::engines::navigate_within`] 统一施加。
    async fn navigate(&self, session: &mut Self::Session, url: &Url) -> Result<(), SessionError>;

    /// 在页面上下文中收集所有 `application/ld+json` 脚本的文本，按文档顺序返回
    async fn collect_blocks(&self, session: &mut Self::Session)
        -> Result<Vec<String>, SessionError>;

    /// 销毁会话及其占用的全部系统资源
    async fn release(&self, session: Self::Session) -> Result<(), SessionError>;

    /// 管理器名称
    fn name(&self) -> &'static str;
}
