// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 库存字段缺失时使用的默认值
pub const DEFAULT_INVENTORY_LEVEL: &str = "0";

/// 标准化后的票档
///
/// 与活动记录中 `offers` 列表的条目一一对应，顺序一致。
/// 源数据中缺失或非标量的字段不会出现在输出中，`inventoryLevel` 除外。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    /// 票档名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 价格（字符串形式，不解析货币）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// 货币代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,
    /// 可售状态（schema.org URI，例如 `http://schema.org/InStock`）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// 库存数量，缺失时为 `"0"`
    pub inventory_level: String,
    /// 开售时间，原样保留
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
}
