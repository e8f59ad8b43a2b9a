//! 预测接口错误类型
//!
//! 内部区分错误来源用于日志，对客户端统一返回固定提示

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorBody;

/// 返回给客户端的固定错误提示
pub const PREDICT_ERROR_MESSAGE: &str =
    "예측 중 오류가 발생했습니다. 올바른 종목 코드인지 확인해주세요.";

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("请求参数无效: {0}")]
    Validation(String),

    #[error("未找到股票 {0} 的行情数据")]
    NotFound(String),

    #[error("行情接口请求失败: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("行情字段 {field} 无法解析: {value:?}")]
    MalformedField { field: &'static str, value: String },
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: PREDICT_ERROR_MESSAGE.to_string(),
        })
    }
}
