//! API client configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Default service root. Endpoint paths are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://servicio.repara503.site/consulta-partes-API/api/usados";
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the parts service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Rejects settings the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        let base = self.normalized_base_url();
        if base.is_empty() {
            return Err(invalid("base_url", "must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(invalid("base_url", "must start with http:// or https://"));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", "must be greater than 0"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(invalid("connect_timeout_secs", "must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(param: &str, detail: &str) -> ProviderError {
    ProviderError::InvalidParameter {
        provider: "config".to_string(),
        param: param.to_string(),
        detail: detail.to_string(),
    }
}
