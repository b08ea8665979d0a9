//! Auto-parts search engine core library
//!
//! Turns the raw parts service into something a front-end can drive:
//! - brand/model catalog loading (`CatalogStore`)
//! - validated part searches (`SearchExecutor`)
//! - grouping of results by vendor (`group`)
//! - detail resolution with fallback to the search row (`DetailResolver`)
//! - the vendor list → vendor → part → image navigation (`NavigationController`)
//!
//! Front-ends normally only touch [`PartsSession`], which ties all of the
//! above together and hands out [`ViewSnapshot`] values to render.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use autoparts_core::{PartsSession, SearchCriteria, ServiceContext};
//! use autoparts_provider::{ApiConfig, create_api};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = create_api(&ApiConfig::default())?;
//! let session = PartsSession::new(Arc::new(ServiceContext::new(api)));
//!
//! session.load_catalog().await?;
//! session
//!     .search(&SearchCriteria::new("TOYOTA", "COROLLA", "filtro"))
//!     .await?;
//! for group in session.snapshot().await.groups {
//!     println!("{} ({})", group.vendor_name, group.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod navigation;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ErrorKind};
pub use navigation::{NavigationController, Outcome, PartsSession};
pub use services::ServiceContext;
pub use traits::DetailLookup;
pub use types::{
    Catalog, CatalogOptions, NavigationState, ResolvedPart, SearchCriteria, VendorGroup,
    ViewSnapshot,
};
