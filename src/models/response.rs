//! 通用 API 响应模型
//! 
//! 定义统一的 API 响应格式

use serde::{Deserialize, Serialize};
use chrono::Utc;
use chrono_tz::Asia::Seoul;

/// 获取韩国时间（UTC+9）
fn get_seoul_time() -> chrono::DateTime<chrono_tz::Tz> {
    Utc::now().with_timezone(&Seoul)
}

/// 统一 API 响应结构
/// 
/// - success: 请求是否成功
/// - data: 响应数据
/// - message: 响应消息
/// - timestamp: 响应时间戳（韩国时间）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    /// ISO 8601 格式
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: get_seoul_time().to_rfc3339(),
        }
    }
}

/// 预测接口的错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
