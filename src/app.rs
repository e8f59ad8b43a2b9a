//! 应用路由与中间件装配

use actix_cors::Cors;
use actix_files::Files;
use actix_web::web;

use crate::handlers;

/// 允许任意来源跨域访问
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

/// 注册 API 路由，静态文件挂载在根路径，必须在 API 路由之后注册
pub fn configure_app(cfg: &mut web::ServiceConfig, static_dir: Option<&str>) {
    cfg.configure(handlers::config);

    if let Some(dir) = static_dir {
        cfg.service(Files::new("/", dir).index_file("index.html"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::quote_service::testing::FakeSource;
    use crate::services::PredictionService;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::json;
    use std::fs;

    fn prediction_data() -> web::Data<PredictionService> {
        web::Data::new(PredictionService::with_seed(FakeSource::samsung(), 7))
    }

    #[actix_web::test]
    async fn test_cors_allows_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .app_data(prediction_data())
                .configure(|cfg| configure_app(cfg, None)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .insert_header((header::ORIGIN, "http://example.com"))
            .set_json(json!({ "stockCode": "005930" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_cors_preflight() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .app_data(prediction_data())
                .configure(|cfg| configure_app(cfg, None)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/predict")
            .insert_header((header::ORIGIN, "http://example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success(), "{}", resp.status());
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[actix_web::test]
    async fn test_static_files_and_api_routes() {
        let dir = std::env::temp_dir().join(format!("stock-predictor-public-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<h1>주가 예측</h1>").unwrap();
        let dir_str = dir.to_string_lossy().to_string();

        let app = test::init_service(
            App::new()
                .app_data(prediction_data())
                .configure(|cfg| configure_app(cfg, Some(dir_str.as_str()))),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(String::from_utf8_lossy(&body), "<h1>주가 예측</h1>");

        // API 路由优先于静态文件
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "healthy");

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({ "stockCode": "005930" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["stockName"], "삼성전자");

        fs::remove_dir_all(&dir).ok();
    }

    #[actix_web::test]
    async fn test_without_static_dir() {
        let app = test::init_service(
            App::new()
                .app_data(prediction_data())
                .configure(|cfg| configure_app(cfg, None)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
