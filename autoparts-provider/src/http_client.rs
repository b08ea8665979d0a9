//! Generic HTTP client tools
//!
//! Shared request/response handling for the parts service: sending requests,
//! logging, mapping transport failures and decoding JSON bodies.
//! Callers construct the `RequestBuilder` themselves (URL, query, headers).

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::preview_body;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// Any 2xx status is a success. Other statuses become
    /// [`ProviderError::HttpStatus`] carrying the response body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, query, headers)
    /// * `provider_name` - service name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL (for logging)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "[{provider_name}] {method_name} {url} failed with HTTP {}",
                status.as_u16()
            );
            return Err(ProviderError::HttpStatus {
                provider: provider_name.to_string(),
                status: status.as_u16(),
                raw_message: Some(body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            preview_body(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                preview_body(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse a JSON list response row by row.
    ///
    /// A blank body and `null` decode as an empty list. Rows that fail to
    /// decode are skipped and logged; only a body that is not a list at all
    /// is a [`ProviderError::ParseError`].
    pub fn parse_list<T>(response_text: &str, provider_name: &str) -> Result<Vec<T>, ProviderError>
    where
        T: DeserializeOwned,
    {
        let trimmed = response_text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Option<Vec<serde_json::Value>> = Self::parse_json(trimmed, provider_name)?;
        let rows = rows.unwrap_or_default();
        let total = rows.len();

        let items: Vec<T> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("[{provider_name}] Skipping row {index}: {e}");
                    None
                }
            })
            .collect();

        if items.len() < total {
            log::warn!(
                "[{provider_name}] Decoded {} of {total} rows",
                items.len()
            );
        }
        Ok(items)
    }

    /// Parse a single-record JSON response that may legitimately be blank.
    ///
    /// An empty body, `null` and `[]` decode as `T::default()`. A non-empty
    /// array decodes its first element.
    pub fn parse_record<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned + Default,
    {
        let trimmed = response_text.trim();
        if trimmed.is_empty() {
            return Ok(T::default());
        }

        let value: serde_json::Value = Self::parse_json(trimmed, provider_name)?;
        let record = match value {
            serde_json::Value::Null => return Ok(T::default()),
            serde_json::Value::Array(items) => match items.into_iter().next() {
                Some(first) => first,
                None => return Ok(T::default()),
            },
            other => other,
        };

        serde_json::from_value(record).map_err(|e| {
            log::error!("[{provider_name}] Record decode failed: {e}");
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
