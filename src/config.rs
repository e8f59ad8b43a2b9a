//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，端口可由 `PORT` 环境变量覆盖

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认的 Naver 金融实时行情接口
pub const NAVER_REALTIME_API: &str = "https://polling.finance.naver.com/api/realtime/domestic/stock";

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
    /// 收到停止信号后等待在途请求的秒数
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

/// 上游行情接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 行情接口地址，股票代码作为最后一段路径追加
    #[serde(default = "default_quote_base_url")]
    pub quote_base_url: String,
    /// 请求超时时间（秒），不设置则使用 HTTP 客户端默认值
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// 连接超时时间（秒）
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// 静态文件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// 前端资源目录
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 行情接口配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 静态文件配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 实际加载的配置文件路径
    #[serde(skip)]
    pub source: Option<PathBuf>,
    /// 被忽略的无效 `PORT` 值，日志初始化后再输出警告
    #[serde(skip)]
    pub invalid_port: Option<String>,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_shutdown_timeout() -> u64 { 30 }
fn default_quote_base_url() -> String { NAVER_REALTIME_API.to_string() }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}
fn default_enabled() -> bool { true }
fn default_static_dir() -> String { "public".to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            quote_base_url: default_quote_base_url(),
            timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dir: default_static_dir(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_json::from_str(&content)?;
        config.source = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// 加载配置：优先从文件，不存在则使用默认值，最后应用环境变量
    ///
    /// 日志系统此时尚未初始化，配置文件存在但无法解析时直接返回错误
    pub fn load() -> anyhow::Result<Self> {
        let config_paths = ["config.json", "config/config.json"];

        let mut config = Self::default();
        for path in config_paths {
            if Path::new(path).exists() {
                config = Self::from_file(path)
                    .map_err(|e| anyhow::anyhow!("加载配置文件 {} 失败: {}", path, e))?;
                break;
            }
        }

        config.apply_port_override(std::env::var("PORT").ok().as_deref());
        Ok(config)
    }

    /// 用 `PORT` 的值覆盖监听端口，返回是否生效
    ///
    /// 无效值记录在 `invalid_port` 中
    pub fn apply_port_override(&mut self, port: Option<&str>) -> bool {
        match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(value) => match value.parse::<u16>() {
                Ok(port) => {
                    self.server.port = port;
                    self.invalid_port = None;
                    true
                }
                Err(_) => {
                    self.invalid_port = Some(value.to_string());
                    false
                }
            },
            None => false,
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
