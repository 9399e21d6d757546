// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用用例模块
///
/// 负责协调浏览器会话和提取服务完成一次抓取
pub mod scrape_offers;
