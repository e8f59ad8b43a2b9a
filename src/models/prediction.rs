//! 预测请求与结果模型

use serde::{Deserialize, Serialize};

/// 预测请求体
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    /// 股票代码，如 005930
    #[serde(default)]
    pub stock_code: Option<String>,
}

/// 走势方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// 次日价格预测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// 现价
    pub current_price: i64,
    /// 预测价格
    pub predicted_price: i64,
    /// 置信度，范围 [0.5, 0.9]
    pub confidence: f64,
    pub trend: Trend,
    pub stock_name: String,
}
