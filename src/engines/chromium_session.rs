// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::blocklist;
use crate::engines::html_blocks::{self, LD_JSON_SELECTOR};
use crate::engines::traits::{BrowserSessionManager, SessionError};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams as NetworkEnableParams, SetBlockedUrLsParams,
};
use chromiumoxide::cdp::browser_protocol::page::{EventDomContentEventFired, NavigateParams};
use chromiumoxide::cdp::browser_protocol::browser::BrowserContextId;
use chromiumoxide::cdp::browser_protocol::target::{
    CreateBrowserContextParams, CreateTargetParams, DisposeBrowserContextParams,
};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use url::Url;

/// 本地启动 Chrome 时附加的参数
const LAUNCH_ARGS: &[&str] = &[
    "--disable-setuid-sandbox",
    "--disable-gpu",
    "--disable-dev-shm-usage",
    "--no-first-run",
    "--no-default-browser-check",
];

/// 一个独占的浏览器会话
///
/// 本地模式下拥有整个浏览器进程和一次性的用户数据目录；
/// 远程模式下拥有远程 Chrome 上的一个隐身浏览器上下文。
pub struct ChromiumSession {
    browser: Browser,
    page: Option<Page>,
    context_id: Option<BrowserContextId>,
    handler_task: JoinHandle<()>,
    launched: bool,
    _profile_dir: Option<TempDir>,
}

impl ChromiumSession {
    fn page(&self) -> Result<&Page, SessionError> {
        self.page
            .as_ref()
            .ok_or_else(|| SessionError::Other("Session has no open page".to_string()))
    }
}

impl Drop for ChromiumSession {
    fn drop(&mut self) {
        // The browser process itself is killed by chromiumoxide's Browser drop.
        self.handler_task.abort();
    }
}

/// 基于 chromiumoxide 的浏览器会话管理器
///
/// 每次 `acquire` 都会得到一个全新的会话，不做任何复用。
pub struct ChromiumSessionManager {
    settings: BrowserSettings,
    blocked_patterns: Vec<String>,
}

impl ChromiumSessionManager {
    pub fn new(settings: BrowserSettings) -> Self {
        let blocked_patterns = blocklist::blocked_patterns(&settings);
        Self {
            settings,
            blocked_patterns,
        }
    }

    /// 本地启动参数
    pub fn launch_args(&self) -> Vec<String> {
        LAUNCH_ARGS.iter().map(|a| a.to_string()).collect()
    }

    async fn launch(&self) -> Result<ChromiumSession, SessionError> {
        let profile_dir = TempDir::with_prefix("ticketprobe-profile-")
            .map_err(|e| SessionError::Launch(format!("Failed to create profile dir: {}", e)))?;

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .user_data_dir(profile_dir.path())
            .request_timeout(self.settings.navigation_timeout())
            .launch_timeout(self.settings.launch_timeout())
            .args(self.launch_args());

        if !self.settings.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.settings.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(SessionError::Launch)?;
        let (browser, handler) = Browser::launch(config)
            .await
            .map_err(|e| SessionError::Launch(e.to_string()))?;

        Ok(ChromiumSession {
            browser,
            page: None,
            context_id: None,
            handler_task: spawn_handler(handler),
            launched: true,
            _profile_dir: Some(profile_dir),
        })
    }

    async fn connect(&self, remote_url: &str) -> Result<ChromiumSession, SessionError> {
        tracing::info!("Connecting to remote Chrome instance at: {}", remote_url);
        let (browser, handler) = Browser::connect(remote_url).await.map_err(|e| {
            SessionError::Launch(format!("Failed to connect to remote Chrome: {}", e))
        })?;
        let handler_task = spawn_handler(handler);

        let context_id = match browser.execute(CreateBrowserContextParams::default()).await {
            Ok(resp) => resp.result.browser_context_id.clone(),
            Err(e) => {
                handler_task.abort();
                return Err(SessionError::Launch(format!(
                    "Failed to create browser context: {}",
                    e
                )));
            }
        };

        Ok(ChromiumSession {
            browser,
            page: None,
            context_id: Some(context_id),
            handler_task,
            launched: false,
            _profile_dir: None,
        })
    }

    /// 打开工作页面并应用浏览器身份和拦截规则
    async fn open_page(&self, session: &mut ChromiumSession) -> Result<(), SessionError> {
        let mut params = CreateTargetParams::new("about:blank");
        params.browser_context_id = session.context_id.clone();

        let page = session
            .browser
            .new_page(params)
            .await
            .map_err(|e| SessionError::Launch(format!("Failed to open page: {}", e)))?;
        session.page = Some(page.clone());

        page.set_user_agent(self.settings.user_agent.as_str())
            .await
            .map_err(|e| SessionError::Other(format!("Failed to set user agent: {}", e)))?;

        if !self.blocked_patterns.is_empty() {
            page.execute(NetworkEnableParams::default())
                .await
                .map_err(|e| SessionError::Other(format!("Failed to enable network: {}", e)))?;
            page.execute(SetBlockedUrLsParams::new(self.blocked_patterns.clone()))
                .await
                .map_err(|e| SessionError::Other(format!("Failed to set blocked URLs: {}", e)))?;
            tracing::debug!("Blocking {} tracker patterns", self.blocked_patterns.len());
        }

        Ok(())
    }
}

fn spawn_handler(mut handler: chromiumoxide::Handler) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    })
}

/// 页面内执行的收集脚本，返回字符串数组
fn collect_script() -> String {
    format!(
        "Array.from(document.querySelectorAll('{}')).map(s => s.textContent || '')",
        LD_JSON_SELECTOR
    )
}

#[async_trait]
impl BrowserSessionManager for ChromiumSessionManager {
    type Session = ChromiumSession;

    async fn acquire(&self) -> Result<ChromiumSession, SessionError> {
        let mut session = match &self.settings.remote_debugging_url {
            Some(remote_url) => self.connect(remote_url).await?,
            None => tokio::time::timeout(self.settings.launch_timeout(), self.launch())
                .await
                .map_err(|_| SessionError::Launch("Browser launch timed out".to_string()))??,
        };

        if let Err(e) = self.open_page(&mut session).await {
            if let Err(release_err) = self.release(session).await {
                tracing::warn!("Failed to release half-configured session: {}", release_err);
            }
            return Err(e);
        }

        Ok(session)
    }

    async fn navigate(&self, session: &mut ChromiumSession, url: &Url) -> Result<(), SessionError> {
        let page = session.page()?;

        // Subscribe before navigating so the event cannot be missed.
        let mut dom_ready = page
            .event_listener::<EventDomContentEventFired>()
            .await
            .map_err(|e| SessionError::Other(e.to_string()))?;

        // The command future only resolves on the full `load` lifecycle,
        // so DOMContentLoaded has to be raced against it.
        let navigation = page.execute(NavigateParams::new(url.as_str()));
        tokio::pin!(navigation);

        tokio::select! {
            ready = dom_ready.next() => match ready {
                Some(_) => Ok(()),
                None => Err(SessionError::Navigation(
                    "Page closed before DOMContentLoaded".to_string(),
                )),
            },
            response = &mut navigation => {
                let response = response.map_err(|e| SessionError::Navigation(e.to_string()))?;
                if let Some(error_text) = &response.result.error_text {
                    return Err(SessionError::Navigation(error_text.clone()));
                }
                // Loaded before the listener was polled; the event is already queued.
                match dom_ready.next().await {
                    Some(_) => Ok(()),
                    None => Err(SessionError::Navigation(
                        "Page closed before DOMContentLoaded".to_string(),
                    )),
                }
            }
        }
    }

    async fn collect_blocks(&self, session: &mut ChromiumSession) -> Result<Vec<String>, SessionError> {
        let page = session.page()?;

        let result = page
            .evaluate(collect_script())
            .await
            .map_err(|e| SessionError::Evaluation(e.to_string()))?;

        match result.into_value::<Vec<String>>() {
            Ok(blocks) => Ok(blocks),
            Err(e) => {
                tracing::warn!("Unexpected evaluation result ({}), falling back to page HTML", e);
                let html = page
                    .content()
                    .await
                    .map_err(|e| SessionError::Evaluation(e.to_string()))?;
                Ok(html_blocks::collect_from_html(&html))
            }
        }
    }

    async fn release(&self, mut session: ChromiumSession) -> Result<(), SessionError> {
        let mut result = Ok(());

        if let Some(context_id) = session.context_id.take() {
            if let Err(e) = session
                .browser
                .execute(DisposeBrowserContextParams::new(context_id))
                .await
            {
                result = Err(SessionError::Other(format!(
                    "Failed to dispose browser context: {}",
                    e
                )));
            }
        }

        if session.launched {
            if let Err(e) = session.browser.close().await {
                result = Err(SessionError::Other(format!("Failed to close browser: {}", e)));
            }
            if let Err(e) = session.browser.wait().await {
                result = Err(SessionError::Other(format!(
                    "Failed to wait for browser exit: {}",
                    e
                )));
            }
        }

        session.page = None;
        session.handler_task.abort();
        result
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}
