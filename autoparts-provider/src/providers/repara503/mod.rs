//! repara503 used-parts service

mod http;
mod provider;

use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) const PROVIDER_ID: &str = "repara503";

pub(crate) const PATH_BRAND_MODELS: &str = "/marcasymodelos";
pub(crate) const PATH_SEARCH: &str = "/parte";
pub(crate) const PATH_PART_BY_ID: &str = "/usados";
pub(crate) const PATH_INVENTORY: &str = "/inventarios";

/// HTTP client for the repara503 parts service
pub struct Repara503Api {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl Repara503Api {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: create_http_client(PROVIDER_ID, config)?,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
