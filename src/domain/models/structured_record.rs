// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};

/// 一个 JSON-LD 对象
///
/// 在选出活动记录之前保持为无类型的 JSON 映射。
pub type StructuredRecord = Map<String, Value>;

/// 单个脚本块的解析结果
///
/// 解析失败不是错误：该块被跳过，其余块照常参与选择。
#[derive(Debug, Clone, PartialEq)]
pub enum BlockParse {
    /// 解析成功；顶层数组已展开一层
    Parsed(Vec<StructuredRecord>),
    /// 跳过该块
    Skipped {
        /// 块在文档中的序号
        index: usize,
        /// 跳过原因
        reason: String,
    },
}

impl BlockParse {
    /// 取出解析得到的记录，被跳过的块返回空
    pub fn into_records(self) -> Vec<StructuredRecord> {
        match self {
            BlockParse::Parsed(records) => records,
            BlockParse::Skipped { .. } => Vec::new(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, BlockParse::Skipped { .. })
    }
}

/// JSON-LD 的类型字段名
pub const TYPE_KEY: &str = "@type";
/// 票档列表字段名
pub const OFFERS_KEY: &str = "offers";
/// 活动类型
pub const EVENT_TYPE: &str = "Event";

/// 记录的 `@type` 是否为给定的字符串
pub fn has_type(record: &StructuredRecord, kind: &str) -> bool {
    record.get(TYPE_KEY).and_then(Value::as_str) == Some(kind)
}

/// 记录中的票档列表
///
/// 数组原样返回；单个对象视为只有一个元素的列表；其他形态（或空数组）返回 `None`。
pub fn offers_of(record: &StructuredRecord) -> Option<Vec<&Value>> {
    match record.get(OFFERS_KEY)? {
        Value::Array(items) if !items.is_empty() => Some(items.iter().collect()),
        single @ Value::Object(_) => Some(vec![single]),
        _ => None,
    }
}
