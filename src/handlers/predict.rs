use actix_web::{web, HttpResponse, ResponseError, Result};
use crate::error::PredictError;
use crate::models::PredictRequest;
use crate::services::PredictionService;

/// 请求体无法解析时同样返回统一的错误提示
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::error!("预测请求体解析失败: {}", err);
        PredictError::Validation(err.to_string()).into()
    })
}

pub async fn predict(
    service: web::Data<PredictionService>,
    body: web::Json<PredictRequest>,
) -> Result<HttpResponse> {
    let stock_code = body.into_inner().stock_code.unwrap_or_default();

    match service.predict(&stock_code).await {
        Ok(prediction) => Ok(HttpResponse::Ok().json(prediction)),
        Err(e) => {
            log::error!("股票 {:?} 预测失败: {:?}", stock_code, e);
            Ok(e.error_response())
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/predict")
            .app_data(json_config())
            .route(web::post().to(predict))
    );
}
