// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 广告与跟踪器请求拦截规则
//!
//! 规则使用 `Network.setBlockedURLs` 的通配符语法（`*` 匹配任意字符），
//! 由浏览器在网络层直接丢弃匹配的请求。

use crate::config::settings::BrowserSettings;

/// 内置的广告/跟踪器域名规则
pub const DEFAULT_BLOCKED_PATTERNS: &[&str] = &[
    "*doubleclick.net*",
    "*googlesyndication.com*",
    "*googleadservices.com*",
    "*google-analytics.com*",
    "*googletagmanager.com*",
    "*googletagservices.com*",
    "*adservice.google.*",
    "*connect.facebook.net*",
    "*amazon-adsystem.com*",
    "*adnxs.com*",
    "*adsrvr.org*",
    "*criteo.com*",
    "*criteo.net*",
    "*taboola.com*",
    "*outbrain.com*",
    "*scorecardresearch.com*",
    "*quantserve.com*",
    "*moatads.com*",
    "*rubiconproject.com*",
    "*pubmatic.com*",
    "*openx.net*",
    "*hotjar.com*",
    "*clarity.ms*",
    "*mixpanel.com*",
    "*segment.io*",
    "*nr-data.net*",
];

/// 根据配置生成最终的拦截规则列表
///
/// 关闭 `block_trackers` 时只保留用户额外配置的规则。空白规则会被忽略。
pub fn blocked_patterns(settings: &BrowserSettings) -> Vec<String> {
    let defaults = if settings.block_trackers {
        DEFAULT_BLOCKED_PATTERNS
    } else {
        &[]
    };

    let mut patterns: Vec<String> = defaults.iter().map(|p| p.to_string()).collect();
    for extra in &settings.extra_blocked_patterns {
        let extra = extra.trim();
        if !extra.is_empty() && !patterns.iter().any(|p| p == extra) {
            patterns.push(extra.to_string());
        }
    }
    patterns
}
