//! 股价预测服务
//!
//! 提供 `POST /api/predict` 接口：查询韩国股票实时行情并给出次日价格的随机预测
//! 数据来源：Naver 金融实时行情

mod app;        // 路由与中间件装配
mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{NaverQuoteClient, PredictionService};

/// 应用程序入口
///
/// 启动 HTTP 服务器，默认监听 0.0.0.0:3000
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match &config.source {
        Some(path) => log::info!("从 {} 加载配置成功", path.display()),
        None => log::info!("使用默认配置"),
    }
    if let Some(port) = &config.invalid_port {
        log::warn!("PORT 环境变量无效: {}，使用端口 {}", port, config.server.port);
    }

    let quote_client = NaverQuoteClient::new(&config.api)?;
    let service = web::Data::new(PredictionService::new(Arc::new(quote_client)));

    let static_dir = config
        .static_files
        .enabled
        .then(|| config.static_files.dir.clone())
        .filter(|dir| {
            let exists = Path::new(dir).is_dir();
            if !exists {
                log::warn!("静态文件目录 {} 不存在，跳过前端资源", dir);
            }
            exists
        });

    log::info!("启动股价预测服务，监听 {}", config.bind_addr());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(app::cors())
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(service.clone())
            .configure(|cfg| app::configure_app(cfg, static_dir.as_deref()))
    })
    .shutdown_timeout(config.server.shutdown_timeout_secs);

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.bind_addr())?.run().await?;

    log::info!("服务已停止");
    Ok(())
}
