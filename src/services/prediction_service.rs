//! 次日价格预测服务
//!
//! 预测值只是对当日涨跌幅做随机扰动，并非模型输出：
//! - 预测涨跌幅 = 当日涨跌幅 × [0.75, 1.25) 之间的随机系数
//! - 置信度 = 当日成交量 / 5 周期平均成交量，限制在 [0.5, 0.9]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::PredictError;
use crate::models::{Prediction, Quote, Trend};
use crate::services::QuoteSource;

pub const MULTIPLIER_MIN: f64 = 0.75;
pub const MULTIPLIER_MAX: f64 = 1.25;
pub const CONFIDENCE_MIN: f64 = 0.5;
pub const CONFIDENCE_MAX: f64 = 0.9;
/// 平均成交量的周期数
const VOLUME_PERIODS: f64 = 5.0;

pub struct PredictionService {
    source: Arc<dyn QuoteSource>,
    rng: Mutex<StdRng>,
}

impl PredictionService {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 使用固定种子，随机系数序列可复现
    pub fn with_seed(source: Arc<dyn QuoteSource>, seed: u64) -> Self {
        Self {
            source,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub async fn predict(&self, stock_code: &str) -> Result<Prediction, PredictError> {
        let code = validate_stock_code(stock_code)?;
        let raw = self.source.fetch_quote(code).await?;
        let quote = Quote::from_raw(raw, code)?;

        let prediction = compute_prediction(&quote, self.sample_multiplier());
        log::info!(
            "预测完成 {}({}): {} -> {} [{:?}, 置信度 {:.2}]",
            quote.name,
            quote.code,
            prediction.current_price,
            prediction.predicted_price,
            prediction.trend,
            prediction.confidence
        );
        Ok(prediction)
    }

    fn sample_multiplier(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(MULTIPLIER_MIN..MULTIPLIER_MAX)
    }
}

/// 股票代码去除首尾空白后只能由字母和数字组成
pub fn validate_stock_code(code: &str) -> Result<&str, PredictError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(PredictError::Validation("缺少股票代码".to_string()));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PredictError::Validation(format!("股票代码格式无效: {}", code)));
    }
    Ok(code)
}

/// 根据行情和扰动系数计算预测结果
pub fn compute_prediction(quote: &Quote, multiplier: f64) -> Prediction {
    let predicted_change = quote.fluctuations_ratio * multiplier;
    let predicted_price =
        round_half_up(quote.close_price as f64 * (1.0 + predicted_change / 100.0));

    let trend = if quote.fluctuations_ratio > 0.0 {
        Trend::Up
    } else {
        Trend::Down
    };

    Prediction {
        current_price: quote.close_price,
        predicted_price,
        confidence: confidence(quote.acc_trade_volume, quote.acc_trade_volume5),
        trend,
        stock_name: quote.name.clone(),
    }
}

/// .5 向正无穷方向舍入
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn confidence(volume: i64, volume5: i64) -> f64 {
    let ratio = volume as f64 / (volume5 as f64 / VOLUME_PERIODS);
    if ratio.is_nan() {
        return CONFIDENCE_MIN;
    }
    ratio.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
}
