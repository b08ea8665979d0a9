//! 品牌/车型目录服务

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, log_error};
use crate::types::{Catalog, CatalogOptions};

/// Loads and holds the brand/model catalog.
///
/// The catalog is swapped as a whole on every successful load. A failed load
/// leaves the previous catalog in place. Only the most recently started load
/// may touch the catalog; an older one that finishes later is discarded.
pub struct CatalogStore {
    ctx: Arc<ServiceContext>,
    options: CatalogOptions,
    catalog: RwLock<Arc<Catalog>>,
    latest_load: AtomicU64,
}

impl CatalogStore {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, options: CatalogOptions) -> Self {
        Self {
            ctx,
            options,
            catalog: RwLock::new(Arc::new(Catalog::default())),
            latest_load: AtomicU64::new(0),
        }
    }

    /// Fetches the listing and replaces the current catalog.
    ///
    /// If a newer load started meanwhile, this one's outcome (success or
    /// failure) is dropped and the current catalog is returned.
    pub async fn load(&self) -> CoreResult<Arc<Catalog>> {
        let seq = self.latest_load.fetch_add(1, Ordering::SeqCst) + 1;
        let fetched = self.ctx.api.list_brand_models().await;

        // 检查与替换在同一把写锁下完成
        let mut current = self.catalog.write().await;
        if self.latest_load.load(Ordering::SeqCst) != seq {
            log::debug!("Discarding superseded catalog load #{seq}");
            return Ok(Arc::clone(&*current));
        }

        let pairs = match fetched {
            Ok(pairs) => pairs,
            Err(e) => {
                let err = CoreError::CatalogUnavailable(e);
                log_error("Failed to load catalog", &err);
                return Err(err);
            }
        };

        let pair_count = pairs.len();
        let catalog = Arc::new(Catalog::from_pairs(pairs, self.options));
        log::info!(
            "Catalog loaded: {} brands from {pair_count} pairs",
            catalog.len()
        );

        *current = Arc::clone(&catalog);
        Ok(catalog)
    }

    /// Current catalog (empty until the first successful load).
    pub async fn current(&self) -> Arc<Catalog> {
        Arc::clone(&*self.catalog.read().await)
    }

    pub fn options(&self) -> CatalogOptions {
        self.options
    }
}
