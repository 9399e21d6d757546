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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 默认的浏览器身份标识（Windows 桌面版 Chrome）
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 应用程序配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 静态资源配置
    pub static_files: StaticFilesSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3005,
        }
    }
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 页面使用的 User-Agent
    pub user_agent: String,
    /// 导航超时时间（秒）
    pub navigation_timeout_secs: u64,
    /// 浏览器启动超时时间（秒）
    pub launch_timeout_secs: u64,
    /// 是否无头运行
    pub headless: bool,
    /// 是否拦截广告和跟踪器请求
    pub block_trackers: bool,
    /// 额外的拦截规则
    #[serde(default)]
    pub extra_blocked_patterns: Vec<String>,
    /// Chrome 可执行文件路径（为空时自动探测）
    pub chrome_executable: Option<String>,
    /// 远程 Chrome 调试地址，配置后不再本地启动浏览器
    pub remote_debugging_url: Option<String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            navigation_timeout_secs: 60,
            launch_timeout_secs: 20,
            headless: true,
            block_trackers: true,
            extra_blocked_patterns: Vec::new(),
            chrome_executable: None,
            remote_debugging_url: None,
        }
    }
}

impl BrowserSettings {
    /// 导航时间预算
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    /// 启动时间预算
    pub fn launch_timeout(&self) -> Duration {
        Duration::from_secs(self.launch_timeout_secs)
    }
}

/// 静态资源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesSettings {
    /// 前端构建产物目录
    pub dir: String,
}

impl Default for StaticFilesSettings {
    fn default() -> Self {
        Self {
            dir: "dist".to_string(),
        }
    }
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            listen_addr: "0.0.0.0:9000".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `TICKETPROBE__*` 环境变量；单独的 `PORT` 环境变量会覆盖监听端口。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let port_override = std::env::var("PORT").ok();

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("TICKETPROBE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("browser.extra_blocked_patterns")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port_override)?;

        builder.build()?.try_deserialize()
    }

    pub(crate) fn defaults() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        let server = ServerSettings::default();
        let browser = BrowserSettings::default();
        let static_files = StaticFilesSettings::default();
        let metrics = MetricsSettings::default();

        Config::builder()
            // Server
            .set_default("server.host", server.host)?
            .set_default("server.port", i64::from(server.port))?
            // Browser
            .set_default("browser.user_agent", browser.user_agent)?
            .set_default("browser.navigation_timeout_secs", browser.navigation_timeout_secs as i64)?
            .set_default("browser.launch_timeout_secs", browser.launch_timeout_secs as i64)?
            .set_default("browser.headless", browser.headless)?
            .set_default("browser.block_trackers", browser.block_trackers)?
            .set_default("browser.extra_blocked_patterns", Vec::<String>::new())?
            // Static files
            .set_default("static_files.dir", static_files.dir)?
            // Metrics
            .set_default("metrics.enabled", metrics.enabled)?
            .set_default("metrics.listen_addr", metrics.listen_addr)
    }
}
