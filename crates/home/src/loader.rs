//! Catalog loading from JSON.

use std::path::{Path, PathBuf};

use thiserror::Error;

use storefront_catalog::Product;
use storefront_core::CatalogError;

/// Sample catalog bundled with the binary.
pub const SAMPLE_CATALOG: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a catalog document: a JSON array of product records.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the catalog from `path`, or the bundled sample when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Product>, LoadError> {
    let catalog = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalog(&json)?
        }
        None => parse_catalog(SAMPLE_CATALOG)?,
    };

    tracing::info!(
        products = catalog.len(),
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "bundled sample".to_string()),
        "catalog loaded"
    );
    Ok(catalog)
}
