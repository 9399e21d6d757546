// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};

/// JSON-LD 脚本选择器
pub const LD_JSON_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// 从已渲染的HTML中收集所有 JSON-LD 脚本文本
///
/// 与页面内求值的结果一致：按文档顺序返回，每个脚本对应一个字符串。
pub fn collect_from_html(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse(LD_JSON_SELECTOR) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}
