//! 配件搜索服务

use std::sync::Arc;

use autoparts_provider::{PartQuery, PartResult};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, log_error};
use crate::types::SearchCriteria;

/// Checks `criteria` and turns it into the query sent to the service.
///
/// Brand and model are trimmed; the part text is trimmed and lowercased so
/// that the same intent always produces the same request.
pub fn normalize(criteria: &SearchCriteria) -> CoreResult<PartQuery> {
    let brand = criteria.brand.trim();
    let model = criteria.model.trim();
    let part = criteria.part_query.trim();

    let missing: Vec<&str> = [("brand", brand), ("model", model), ("partQuery", part)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::ValidationError(format!(
            "missing {}",
            missing.join(", ")
        )));
    }

    Ok(PartQuery {
        marca: brand.to_string(),
        modelo: model.to_string(),
        parte: part.to_lowercase(),
    })
}

/// Runs part searches.
pub struct SearchExecutor {
    ctx: Arc<ServiceContext>,
}

impl SearchExecutor {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Searches for parts. Rows come back in service order, unfiltered.
    ///
    /// Invalid criteria fail with [`CoreError::ValidationError`] before any
    /// request is made.
    pub async fn search(&self, criteria: &SearchCriteria) -> CoreResult<Vec<PartResult>> {
        let query = match normalize(criteria) {
            Ok(query) => query,
            Err(err) => {
                log_error("Search rejected", &err);
                return Err(err);
            }
        };

        log::debug!(
            "Searching '{}' for {} {}",
            query.parte,
            query.marca,
            query.modelo
        );

        match self.ctx.api.search_parts(&query).await {
            Ok(rows) => {
                log::info!("Search '{}' returned {} rows", query.parte, rows.len());
                Ok(rows)
            }
            Err(e) => {
                let err = CoreError::SearchFailed(e);
                log_error("Search failed", &err);
                Err(err)
            }
        }
    }
}
