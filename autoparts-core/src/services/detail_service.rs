//! 配件详情解析服务

use std::sync::Arc;

use autoparts_provider::PartResult;

use crate::error::{CoreError, ErrorKind};
use crate::services::{ServiceContext, log_error};
use crate::traits::{DetailLookup, lookup_for};
use crate::types::ResolvedPart;

/// Outcome of resolving one row.
///
/// Always carries a part to show; `notice` is set when the detail could not
/// be obtained and the base row is shown instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub part: ResolvedPart,
    pub notice: Option<ErrorKind>,
}

/// Resolves search rows into full detail records.
pub struct DetailResolver {
    ctx: Arc<ServiceContext>,
}

impl DetailResolver {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Resolves `item` with the lookup its id calls for.
    pub async fn resolve(&self, item: &PartResult) -> Resolution {
        let lookup = lookup_for(item);
        self.resolve_with(item, lookup.as_ref()).await
    }

    /// Resolves `item` with an explicit lookup strategy.
    ///
    /// Never fails: a failed or empty lookup degrades to the base row with a
    /// notice attached.
    pub async fn resolve_with(&self, item: &PartResult, lookup: &dyn DetailLookup) -> Resolution {
        log::debug!("Resolving part {} via {} lookup", item.id, lookup.name());

        match lookup.fetch(self.ctx.api.as_ref()).await {
            Ok(detail) if detail.is_empty() => {
                let err = CoreError::NoDetailAvailable(describe(item));
                log_error("Detail lookup returned nothing", &err);
                Resolution {
                    part: ResolvedPart::from(item.clone()),
                    notice: err.kind(),
                }
            }
            Ok(detail) => Resolution {
                part: ResolvedPart::merge(item.clone(), detail),
                notice: None,
            },
            Err(e) => {
                let err = CoreError::DetailFetchFailed(e);
                log_error("Detail lookup failed, showing base row", &err);
                Resolution {
                    part: ResolvedPart::from(item.clone()),
                    notice: err.kind(),
                }
            }
        }
    }
}

fn describe(item: &PartResult) -> String {
    if item.has_direct_id() {
        item.id.to_string()
    } else {
        item.codigo_inventario
            .clone()
            .unwrap_or_else(|| item.id.to_string())
    }
}
