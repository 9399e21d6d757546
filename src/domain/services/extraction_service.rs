// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

use crate::domain::models::offer::{OfferRecord, DEFAULT_INVENTORY_LEVEL};
use crate::domain::models::structured_record::{
    has_type, offers_of, BlockParse, StructuredRecord, EVENT_TYPE,
};
use crate::utils::errors::ScrapeError;

/// 提取服务
///
/// 负责把页面上收集到的 JSON-LD 文本变成标准化的票档列表。
/// 这里不接触浏览器，所有输入都是普通字符串。
pub struct ExtractionService;

impl ExtractionService {
    /// 解析单个脚本块
    ///
    /// 对象产生一条记录；顶层数组展开一层，只保留其中的对象。
    /// 非空标量算作数据但不产生记录；无法解析的文本以及
    /// `null`、`false`、`0`、`""` 会被跳过。
    pub fn parse_block(index: usize, raw: &str) -> BlockParse {
        let text = raw.trim();
        if text.is_empty() {
            return BlockParse::Skipped {
                index,
                reason: "empty block".to_string(),
            };
        }

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(record)) => BlockParse::Parsed(vec![record]),
            Ok(Value::Array(items)) => BlockParse::Parsed(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(record) => Some(record),
                        _ => None,
                    })
                    .collect(),
            ),
            // Truthy scalars count as data but carry no records.
            Ok(scalar) if is_truthy(&scalar) => BlockParse::Parsed(Vec::new()),
            Ok(other) => BlockParse::Skipped {
                index,
                reason: format!("empty value: {}", json_kind(&other)),
            },
            Err(e) => BlockParse::Skipped {
                index,
                reason: e.to_string(),
            },
        }
    }

    /// 逐块解析，返回每个块的结果
    pub fn parse_each(raw_blocks: &[String]) -> Vec<BlockParse> {
        raw_blocks
            .iter()
            .enumerate()
            .map(|(index, raw)| Self::parse_block(index, raw))
            .collect()
    }

    /// 解析所有块并展开为一个有序的记录列表
    ///
    /// 失败的块只记录调试日志，不会中断提取。
    pub fn parse_blocks(raw_blocks: &[String]) -> Vec<StructuredRecord> {
        Self::flatten(Self::parse_each(raw_blocks))
    }

    fn flatten(parsed: Vec<BlockParse>) -> Vec<StructuredRecord> {
        parsed
            .into_iter()
            .inspect(|block| {
                if let BlockParse::Skipped { index, reason } = block {
                    tracing::debug!("Skipping JSON-LD block #{}: {}", index, reason);
                }
            })
            .flat_map(BlockParse::into_records)
            .collect()
    }

    /// 选出第一条带有非空票档列表的活动记录
    pub fn select_event(records: &[StructuredRecord]) -> Option<&StructuredRecord> {
        records
            .iter()
            .find(|record| has_type(record, EVENT_TYPE) && offers_of(record).is_some())
    }

    /// 把活动记录中的票档映射为标准化输出，保持原有顺序
    pub fn normalize(event: &StructuredRecord) -> Vec<OfferRecord> {
        offers_of(event)
            .unwrap_or_default()
            .into_iter()
            .map(normalize_offer)
            .collect()
    }

    /// 完整的提取流程
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<OfferRecord>)` - 非空的票档列表
    /// * `Err(ScrapeError::NoStructuredData)` - 没有任何可解析的 JSON-LD 块
    /// * `Err(ScrapeError::NoOffersFound)` - 有数据，但没有带票档的活动
    pub fn extract_offers(raw_blocks: &[String]) -> Result<Vec<OfferRecord>, ScrapeError> {
        let parsed = Self::parse_each(raw_blocks);
        let usable = parsed.iter().filter(|b| !b.is_skipped()).count();
        tracing::info!(
            "Found {} JSON-LD scripts ({} parsed)",
            raw_blocks.len(),
            usable
        );

        if usable == 0 {
            return Err(ScrapeError::NoStructuredData);
        }

        let records = Self::flatten(parsed);
        let event = Self::select_event(&records).ok_or(ScrapeError::NoOffersFound)?;
        let offers = Self::normalize(event);
        tracing::info!("Extracted {} offers", offers.len());
        Ok(offers)
    }
}

fn normalize_offer(offer: &Value) -> OfferRecord {
    let field = |key: &str| scalar_text(offer.get(key));

    OfferRecord {
        name: field("name"),
        price: field("price"),
        price_currency: field("priceCurrency"),
        availability: field("availability"),
        inventory_level: offer
            .get("inventoryLevel")
            .filter(|level| is_truthy(level))
            .and_then(|level| scalar_text(Some(level)))
            .unwrap_or_else(|| DEFAULT_INVENTORY_LEVEL.to_string()),
        valid_from: field("validFrom"),
    }
}

/// 标量原样转为字符串；数字保留其 JSON 文本
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 是否为非空值：`null`、`false`、`0` 和 `""` 视为空
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
