//! 业务逻辑服务层

mod aggregation;
mod catalog_service;
mod detail_service;
mod search_service;

pub use aggregation::{UNKNOWN_VENDOR, group, vendor_key};
pub use catalog_service::CatalogStore;
pub use detail_service::{DetailResolver, Resolution};
pub use search_service::{SearchExecutor, normalize};

use std::sync::Arc;

use autoparts_provider::PartsApi;

use crate::error::CoreError;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入配件服务客户端。
pub struct ServiceContext {
    /// 配件服务客户端
    pub api: Arc<dyn PartsApi>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn PartsApi>) -> Self {
        Self { api }
    }
}

/// Logs `err` at `warn` when expected, `error` otherwise.
pub(crate) fn log_error(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
