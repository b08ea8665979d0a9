//! Presentation-facing session
//!
//! Wires the catalog, search and detail services to the navigation state
//! machine. The controller lock is never held across a network call, so a
//! `back()` or a new `search()` goes through while a lookup is in flight.
//! The controller sits behind a `std` lock; no guard may live across an `.await`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use autoparts_provider::PartResult;

use super::{NavigationController, Ticket};
use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::services::{
    CatalogStore, DetailResolver, SearchExecutor, ServiceContext, log_error, normalize,
};
use crate::types::{Catalog, CatalogOptions, SearchCriteria, ViewSnapshot};

/// Whether an asynchronous action's result reached the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A later action superseded this one; its result was dropped.
    Superseded,
}

/// Abandons its ticket when dropped.
///
/// Keeps `loading` honest if the future driving a request is cancelled
/// between `begin_*` and `complete_*`. After completion it is a no-op.
struct PendingGuard<'a> {
    nav: &'a RwLock<NavigationController>,
    ticket: Ticket,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.nav
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .abandon(self.ticket);
    }
}

pub struct PartsSession {
    catalog: CatalogStore,
    executor: SearchExecutor,
    resolver: DetailResolver,
    nav: RwLock<NavigationController>,
}

impl PartsSession {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self::with_options(ctx, CatalogOptions::default())
    }

    #[must_use]
    pub fn with_options(ctx: Arc<ServiceContext>, options: CatalogOptions) -> Self {
        Self {
            catalog: CatalogStore::new(Arc::clone(&ctx), options),
            executor: SearchExecutor::new(Arc::clone(&ctx)),
            resolver: DetailResolver::new(ctx),
            nav: RwLock::new(NavigationController::new()),
        }
    }

    /// Loads (or reloads) the brand/model catalog.
    pub async fn load_catalog(&self) -> CoreResult<Arc<Catalog>> {
        let result = self.catalog.load().await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.current().await
    }

    /// Runs a search and shows its vendor groups.
    ///
    /// Invalid criteria are rejected without touching the view. A failed
    /// search empties the result list.
    pub async fn search(&self, criteria: &SearchCriteria) -> CoreResult<Outcome> {
        if let Err(err) = normalize(criteria) {
            log_error("Search rejected", &err);
            self.report(&err);
            return Err(err);
        }

        let ticket = self.nav_mut().begin_search();
        let _pending = self.pending(ticket);
        let result = self.executor.search(criteria).await;
        let failure = result.as_ref().err().cloned();

        if !self.nav_mut().complete_search(ticket, result) {
            return Ok(Outcome::Superseded);
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(Outcome::Applied),
        }
    }

    pub async fn select_vendor(&self, name: &str) -> CoreResult<()> {
        let result = self.nav_mut().select_vendor(name);
        rejected(result)
    }

    /// Resolves `item` and opens it.
    ///
    /// Detail failures still open the part (with a notice). Returns
    /// [`Outcome::Superseded`] when `back()`, `close()` or a new search
    /// happened while the lookup was in flight.
    pub async fn select_item(&self, item: &PartResult) -> CoreResult<Outcome> {
        let result = self.nav_mut().begin_select_item(item);
        let ticket = rejected(result)?;
        let _pending = self.pending(ticket);
        let resolution = self.resolver.resolve(item).await;

        if self.nav_mut().complete_select_item(ticket, resolution) {
            Ok(Outcome::Applied)
        } else {
            Ok(Outcome::Superseded)
        }
    }

    /// [`select_item`](Self::select_item) by position in the current vendor's list.
    pub async fn select_item_at(&self, index: usize) -> CoreResult<Outcome> {
        let item = self.nav().vendor_items().get(index).cloned();
        let item = rejected(item.ok_or_else(|| {
            CoreError::InvalidTransition(format!("no item at position {}", index + 1))
        }))?;
        self.select_item(&item).await
    }

    pub async fn back(&self) -> CoreResult<()> {
        let result = self.nav_mut().back();
        rejected(result)
    }

    pub async fn close(&self) -> CoreResult<()> {
        let result = self.nav_mut().close();
        rejected(result)
    }

    pub async fn open_image(&self) -> CoreResult<()> {
        let result = self.nav_mut().open_image();
        rejected(result)
    }

    pub async fn close_image(&self) -> CoreResult<()> {
        let result = self.nav_mut().close_image();
        rejected(result)
    }

    /// Acknowledges the last notice.
    pub async fn clear_error(&self) {
        self.nav_mut().clear_error();
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let catalog = self.catalog.current().await;
        self.nav().snapshot(catalog)
    }

    pub async fn last_error(&self) -> Option<ErrorKind> {
        self.nav().last_error()
    }

    fn report(&self, err: &CoreError) {
        if let Some(kind) = err.kind() {
            self.nav_mut().report(kind);
        }
    }

    fn pending(&self, ticket: Ticket) -> PendingGuard<'_> {
        PendingGuard {
            nav: &self.nav,
            ticket,
        }
    }

    // 状态机的每次调用都不会 panic 到一半，中毒后的数据仍然一致
    fn nav(&self) -> RwLockReadGuard<'_, NavigationController> {
        self.nav.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn nav_mut(&self) -> RwLockWriteGuard<'_, NavigationController> {
        self.nav.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn rejected<T>(result: CoreResult<T>) -> CoreResult<T> {
    if let Err(err) = &result {
        log_error("Navigation rejected", err);
    }
    result
}
