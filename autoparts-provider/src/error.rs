use serde::{Deserialize, Serialize};

/// Unified error type for all parts-service operations.
///
/// Each variant includes a `provider` field identifying which service produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// The client never retries: a failed request is reported once and the caller decides
/// how to degrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Service that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The service answered with a non-success HTTP status.
    HttpStatus {
        /// Service that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// A request parameter or configuration value is invalid.
    InvalidParameter {
        /// Service that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the service's response.
    ParseError {
        /// Service that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（参数错误、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidParameter { .. } => true,
            Self::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Service identifier carried by every variant.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::ParseError { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider,
                status,
                raw_message,
            } => match raw_message {
                Some(msg) if !msg.is_empty() => {
                    write!(f, "[{provider}] HTTP {status}: {msg}")
                }
                _ => write!(f, "[{provider}] HTTP {status}"),
            },
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
