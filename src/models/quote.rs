//! 行情数据模型
//!
//! 上游接口的数值字段可能是字符串（带千分位逗号）也可能是数字

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// 上游返回的原始字段值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// 上游 `datas` 数组中的一条行情记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawQuote {
    /// 股票代码
    #[serde(default, rename = "cd", alias = "itemCode")]
    pub code: Option<String>,
    /// 股票名称
    #[serde(default, rename = "nm")]
    pub name: Option<String>,
    /// 现价
    #[serde(default, rename = "closePrice")]
    pub close_price: Option<FieldValue>,
    /// 涨跌幅（百分比）
    #[serde(default, rename = "fluctuationsRatio")]
    pub fluctuations_ratio: Option<FieldValue>,
    /// 累计成交量
    #[serde(default, rename = "accTradeVolume")]
    pub acc_trade_volume: Option<FieldValue>,
    /// 5 个周期的累计成交量
    #[serde(default, rename = "accTradeVolume5")]
    pub acc_trade_volume5: Option<FieldValue>,
}

/// 解析后的行情，仅在单次请求内使用
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub code: String,
    pub name: String,
    pub close_price: i64,
    pub fluctuations_ratio: f64,
    pub acc_trade_volume: i64,
    pub acc_trade_volume5: i64,
}

impl Quote {
    /// 将原始记录解析为数值类型，代码缺失时使用请求的代码
    pub fn from_raw(raw: RawQuote, requested_code: &str) -> Result<Self, PredictError> {
        Ok(Self {
            close_price: parse_integer("closePrice", raw.close_price.as_ref())?,
            fluctuations_ratio: parse_float("fluctuationsRatio", raw.fluctuations_ratio.as_ref())?,
            acc_trade_volume: parse_integer("accTradeVolume", raw.acc_trade_volume.as_ref())?,
            acc_trade_volume5: parse_integer("accTradeVolume5", raw.acc_trade_volume5.as_ref())?,
            code: raw
                .code
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| requested_code.to_string()),
            name: raw.name.unwrap_or_default(),
        })
    }
}

fn clean_numeric(value: &FieldValue) -> String {
    value.to_text().trim().replace(',', "")
}

fn malformed(field: &'static str, value: Option<&FieldValue>) -> PredictError {
    PredictError::MalformedField {
        field,
        value: value.map(FieldValue::to_text).unwrap_or_else(|| "null".to_string()),
    }
}

/// 小数按向零截断
fn parse_integer(field: &'static str, value: Option<&FieldValue>) -> Result<i64, PredictError> {
    let text = value.map(clean_numeric).ok_or_else(|| malformed(field, value))?;

    if let Ok(n) = text.parse::<i64>() {
        return Ok(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
        _ => Err(malformed(field, value)),
    }
}

fn parse_float(field: &'static str, value: Option<&FieldValue>) -> Result<f64, PredictError> {
    let text = value.map(clean_numeric).ok_or_else(|| malformed(field, value))?;

    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(malformed(field, value)),
    }
}
