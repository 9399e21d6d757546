// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 验证目标URL
///
/// 只做语法检查：必须是带主机名的绝对URL，不限制域名。
pub fn validate_target_url(url_str: &str) -> anyhow::Result<Url> {
    let url = Url::parse(url_str.trim())?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(anyhow::anyhow!("Missing host")),
    }
}
