use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BrandModelPair, DetailRecord, InventoryKey, PartQuery, PartResult};

/// Parts lookup service Trait
///
/// The four remote endpoints consumed by the engine. Implementations are
/// stateless apart from their HTTP client and may be shared across tasks.
#[async_trait]
pub trait PartsApi: Send + Sync {
    /// 服务标识符
    fn id(&self) -> &'static str;

    /// 获取品牌/车型列表（扁平的 `{marca, modelo}` 序列）
    async fn list_brand_models(&self) -> Result<Vec<BrandModelPair>>;

    /// 搜索配件，按服务返回的顺序原样返回
    async fn search_parts(&self, query: &PartQuery) -> Result<Vec<PartResult>>;

    /// 按 id 获取详情（`id > 0`）
    async fn get_part(&self, id: i64) -> Result<DetailRecord>;

    /// 按组合键获取库存详情（`id <= 0`）
    async fn find_inventory(&self, key: &InventoryKey) -> Result<DetailRecord>;
}
