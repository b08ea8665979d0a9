//! 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::{ProviderError, Result};

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str, config: &ApiConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// 拼接查询字符串，所有值均做百分号编码
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
