//! Naver 金融实时行情接口
//!
//! 对接 https://polling.finance.naver.com/api/realtime/domestic/stock/<code>
//! 每次调用只发起一次 GET 请求，不重试也不缓存

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::ApiConfig;
use crate::error::PredictError;
use crate::models::RawQuote;

/// 行情数据来源
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// 获取单只股票的实时行情记录
    async fn fetch_quote(&self, code: &str) -> Result<RawQuote, PredictError>;
}

pub struct NaverQuoteClient {
    client: Client,
    base_url: Url,
}

impl NaverQuoteClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.quote_base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("行情接口地址无效: {}", config.quote_base_url));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// 股票代码作为最后一段路径追加到接口地址
    fn quote_url(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(code);
        }
        url
    }
}

#[async_trait]
impl QuoteSource for NaverQuoteClient {
    async fn fetch_quote(&self, code: &str) -> Result<RawQuote, PredictError> {
        let url = self.quote_url(code);
        log::debug!("请求实时行情 URL: {}", url);

        let result: Result<RawQuote, PredictError> = async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let body: Value = response.json().await?;
            extract_first_quote(&body, code)
        }
        .await;

        if let Err(e) = &result {
            log::warn!("获取股票 {} 行情失败: {}", code, e);
        }
        result
    }
}

/// 取出响应中 `datas` 数组的第一条记录
pub fn extract_first_quote(body: &Value, code: &str) -> Result<RawQuote, PredictError> {
    let first = body
        .get("datas")
        .and_then(Value::as_array)
        .and_then(|datas| datas.first())
        .filter(|item| item.is_object())
        .ok_or_else(|| PredictError::NotFound(code.to_string()))?;

    serde_json::from_value(first.clone()).map_err(|e| {
        log::debug!("行情记录结构异常: {}", e);
        PredictError::NotFound(code.to_string())
    })
}
