//! # autoparts-provider
//!
//! Async client for the repara503 used auto-parts lookup service.
//!
//! ## Endpoints
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`PartsApi::list_brand_models`] | `GET /marcasymodelos` |
//! | [`PartsApi::search_parts`] | `GET /parte?marca=&modelo=&parte=` |
//! | [`PartsApi::get_part`] | `GET /usados/{id}` |
//! | [`PartsApi::find_inventory`] | `GET /inventarios?empresa=&vehiculo=&categoria=&parte=&cod_inventario=` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use autoparts_provider::{create_api, ApiConfig, PartQuery, PartsApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_api(&ApiConfig::default())?;
//!
//!     let rows = api
//!         .search_parts(&PartQuery {
//!             marca: "TOYOTA".to_string(),
//!             modelo: "COROLLA".to_string(),
//!             parte: "filtro".to_string(),
//!         })
//!         .await?;
//!
//!     for row in &rows {
//!         println!("{:?} - {:?}", row.nombre_empresa, row.descripcion);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). The
//! client performs a single attempt per call; there is no retry.

mod config;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use config::{
    ApiConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use error::{ProviderError, Result};
pub use factory::create_api;
pub use providers::Repara503Api;
pub use traits::PartsApi;
pub use types::{
    BrandModelPair, DetailRecord, InventoryKey, PartQuery, PartResult, VendorContact,
};
