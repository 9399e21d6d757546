// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含抓取用例和数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含票档模型和 JSON-LD 提取服务
pub mod domain;

/// 引擎模块
///
/// 浏览器会话管理和页面内的数据收集
pub mod engines;

/// 基础设施模块
///
/// 指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 错误类型和日志初始化
pub mod utils;
