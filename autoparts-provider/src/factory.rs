//! API factory functions.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::providers::Repara503Api;
use crate::traits::PartsApi;

/// Creates a [`PartsApi`] instance from the given configuration.
///
/// The returned client is wrapped in `Arc<dyn PartsApi>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use autoparts_provider::{create_api, ApiConfig, PartsApi};
///
/// let api = create_api(&ApiConfig::default()).unwrap();
/// assert_eq!(api.id(), "repara503");
/// ```
pub fn create_api(config: &ApiConfig) -> Result<Arc<dyn PartsApi>> {
    Ok(Arc::new(Repara503Api::new(config)?))
}
