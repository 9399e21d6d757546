// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 票档（offer）：返回给客户端的标准化票档
/// - 结构化记录（structured_record）：从 JSON-LD 块解析出的无类型记录
pub mod offer;
pub mod structured_record;
