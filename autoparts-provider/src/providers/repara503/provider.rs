//! repara503 PartsApi trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::encode_query;
use crate::traits::PartsApi;
use crate::types::{BrandModelPair, DetailRecord, InventoryKey, PartQuery, PartResult};

use super::{
    PATH_BRAND_MODELS, PATH_INVENTORY, PATH_PART_BY_ID, PATH_SEARCH, PROVIDER_ID, Repara503Api,
};

#[async_trait]
impl PartsApi for Repara503Api {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn list_brand_models(&self) -> Result<Vec<BrandModelPair>> {
        self.get_list(PATH_BRAND_MODELS, None).await
    }

    async fn search_parts(&self, query: &PartQuery) -> Result<Vec<PartResult>> {
        let qs = encode_query(&[
            ("marca", query.marca.as_str()),
            ("modelo", query.modelo.as_str()),
            ("parte", query.parte.as_str()),
        ]);
        let rows: Vec<PartResult> = self.get_list(PATH_SEARCH, Some(&qs)).await?;
        log::debug!(
            "[{PROVIDER_ID}] search {}/{}/{} -> {} rows",
            query.marca,
            query.modelo,
            query.parte,
            rows.len()
        );
        Ok(rows)
    }

    async fn get_part(&self, id: i64) -> Result<DetailRecord> {
        self.get_record(&format!("{PATH_PART_BY_ID}/{id}"), None)
            .await
    }

    async fn find_inventory(&self, key: &InventoryKey) -> Result<DetailRecord> {
        let qs = encode_query(&[
            ("empresa", key.empresa.as_str()),
            ("vehiculo", key.vehiculo.as_str()),
            ("categoria", key.categoria.as_str()),
            ("parte", key.parte.as_str()),
            ("cod_inventario", key.cod_inventario.as_str()),
        ]);
        self.get_record(PATH_INVENTORY, Some(&qs)).await
    }
}
