//! Catalog error model.

use thiserror::Error;

use crate::id::EntityId;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Keep this focused on deterministic data failures. Loading and IO concerns
/// belong to the crate that does the loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog record is malformed (e.g. unparsable timestamp, missing category).
    #[error("invalid data in product {product_id}: {reason}")]
    DataValidation { product_id: EntityId, reason: String },
}

impl CatalogError {
    pub fn data_validation(product_id: &EntityId, reason: impl Into<String>) -> Self {
        Self::DataValidation {
            product_id: product_id.clone(),
            reason: reason.into(),
        }
    }

    /// The offending product.
    pub fn product_id(&self) -> &EntityId {
        match self {
            Self::DataValidation { product_id, .. } => product_id,
        }
    }
}
