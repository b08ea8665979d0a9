//! Detail lookup strategy Trait

use async_trait::async_trait;

use autoparts_provider::{DetailRecord, InventoryKey, PartResult, PartsApi, ProviderError};

/// How one search row is turned into a detail record.
///
/// Chosen once per row with [`lookup_for`]; the resolver only sees the trait.
#[async_trait]
pub trait DetailLookup: Send + Sync {
    /// Strategy name (for logs)
    fn name(&self) -> &'static str;

    /// Fetch the detail record through `api`.
    async fn fetch(&self, api: &dyn PartsApi) -> Result<DetailRecord, ProviderError>;
}

/// `GET /usados/{id}` for rows with a positive id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByIdLookup {
    pub id: i64,
}

#[async_trait]
impl DetailLookup for ByIdLookup {
    fn name(&self) -> &'static str {
        "by-id"
    }

    async fn fetch(&self, api: &dyn PartsApi) -> Result<DetailRecord, ProviderError> {
        api.get_part(self.id).await
    }
}

/// `GET /inventarios` keyed by vendor, vehicle, category, part and inventory code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLookup {
    pub key: InventoryKey,
}

#[async_trait]
impl DetailLookup for InventoryLookup {
    fn name(&self) -> &'static str {
        "inventory"
    }

    async fn fetch(&self, api: &dyn PartsApi) -> Result<DetailRecord, ProviderError> {
        api.find_inventory(&self.key).await
    }
}

/// Picks the lookup strategy for `item`.
pub fn lookup_for(item: &PartResult) -> Box<dyn DetailLookup> {
    if item.has_direct_id() {
        Box::new(ByIdLookup { id: item.id })
    } else {
        Box::new(InventoryLookup {
            key: item.inventory_key(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_id_uses_by_id() {
        let item = PartResult {
            id: 42,
            ..PartResult::default()
        };
        assert_eq!(lookup_for(&item).name(), "by-id");
    }

    #[test]
    fn zero_and_negative_ids_use_inventory() {
        for id in [0, -1] {
            let item = PartResult {
                id,
                ..PartResult::default()
            };
            assert_eq!(lookup_for(&item).name(), "inventory");
        }
    }
}
