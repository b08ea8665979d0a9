//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export library error type
pub use autoparts_provider::ProviderError;

/// User-facing notice categories.
///
/// Every failure the presentation layer can show maps onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A search field is missing. No request was sent.
    ValidationError,
    /// The brand/model list could not be loaded.
    CatalogUnavailable,
    /// The part search request failed.
    SearchFailed,
    /// The detail request failed; the base row is shown instead.
    DetailFetchFailed,
    /// The detail request succeeded with an empty payload.
    NoDetailAvailable,
}

impl ErrorKind {
    /// Notice text shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ValidationError => {
                "Por favor, seleccione una marca, un modelo y escriba la parte a buscar."
            }
            Self::CatalogUnavailable => {
                "No se pudo cargar el catálogo de marcas y modelos. Intente nuevamente más tarde."
            }
            Self::SearchFailed => {
                "No se pudo obtener la información. Intente nuevamente más tarde."
            }
            Self::DetailFetchFailed => {
                "No se pudieron obtener los detalles completos. Se muestra la información básica."
            }
            Self::NoDetailAvailable => "No hay detalles adicionales disponibles para esta parte.",
        }
    }

    /// `true` for informational notices: the operation still produced a usable view.
    #[must_use]
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::DetailFetchFailed | Self::NoDetailAvailable)
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Catalog endpoint failed
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(ProviderError),

    /// Search endpoint failed
    #[error("Search failed: {0}")]
    SearchFailed(ProviderError),

    /// Detail endpoint failed
    #[error("Detail fetch failed: {0}")]
    DetailFetchFailed(ProviderError),

    /// Detail endpoint answered with an empty record
    #[error("No detail available for part {0}")]
    NoDetailAvailable(String),

    /// Vendor name not present in the current results
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    /// Navigation command not valid in the current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Notice category for the presentation layer.
    ///
    /// `None` for navigation misuse and bare transport errors, which have no
    /// user-facing notice of their own.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::ValidationError(_) => Some(ErrorKind::ValidationError),
            Self::CatalogUnavailable(_) => Some(ErrorKind::CatalogUnavailable),
            Self::SearchFailed(_) => Some(ErrorKind::SearchFailed),
            Self::DetailFetchFailed(_) => Some(ErrorKind::DetailFetchFailed),
            Self::NoDetailAvailable(_) => Some(ErrorKind::NoDetailAvailable),
            Self::VendorNotFound(_) | Self::InvalidTransition(_) | Self::Provider(_) => None,
        }
    }

    /// Whether it is expected behavior (user input, empty payloads, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::NoDetailAvailable(_)
            | Self::VendorNotFound(_)
            | Self::InvalidTransition(_) => true,
            Self::CatalogUnavailable(e)
            | Self::SearchFailed(e)
            | Self::DetailFetchFailed(e)
            | Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
