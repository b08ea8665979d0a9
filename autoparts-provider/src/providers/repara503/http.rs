//! repara503 HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{PROVIDER_ID, Repara503Api};

impl Repara503Api {
    fn url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{path}?{q}", self.base_url),
            _ => format!("{}{path}", self.base_url),
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/json");
        HttpUtils::execute_request(request, PROVIDER_ID, "GET", url).await
    }

    /// 执行 GET 请求，解析 JSON 列表（跳过无法解析的行）
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<Vec<T>> {
        let url = self.url(path, query);
        let text = self.fetch_text(&url).await?;
        HttpUtils::parse_list(&text, PROVIDER_ID)
    }

    /// 执行 GET 请求，解析单条记录（允许空响应）
    pub(crate) async fn get_record<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T> {
        let url = self.url(path, query);
        let text = self.fetch_text(&url).await?;
        HttpUtils::parse_record(&text, PROVIDER_ID)
    }
}
