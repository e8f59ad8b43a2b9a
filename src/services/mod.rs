//! 业务逻辑服务模块
//!
//! 封装行情获取和预测计算逻辑

pub mod quote_service;      // 行情数据服务
pub mod prediction_service; // 价格预测服务

pub use quote_service::{NaverQuoteClient, QuoteSource};
pub use prediction_service::PredictionService;
