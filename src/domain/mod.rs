// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：票档和结构化记录
/// - 服务（services）：JSON-LD 解析、活动选择和票档标准化
///
/// 领域层不依赖浏览器，所有输入都是已经收集好的文本。
pub mod models;
pub mod services;
