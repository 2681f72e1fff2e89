//! Environment-driven configuration.

use std::path::PathBuf;

use storefront_catalog::{CatalogViewModel, DEFAULT_SECTION_SIZE};

use crate::loader::LoadError;

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const FEATURED_COUNT_VAR: &str = "STOREFRONT_FEATURED_COUNT";
pub const LATEST_COUNT_VAR: &str = "STOREFRONT_LATEST_COUNT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Catalog JSON file; the bundled sample is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub view: CatalogViewModel,
}

impl Config {
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let featured_count = section_size(FEATURED_COUNT_VAR, lookup(FEATURED_COUNT_VAR))?;
        let latest_count = section_size(LATEST_COUNT_VAR, lookup(LATEST_COUNT_VAR))?;

        Ok(Self {
            catalog_path,
            view: CatalogViewModel::new(featured_count, latest_count),
        })
    }
}

/// Negative sizes mean an empty section.
fn section_size(key: &str, raw: Option<String>) -> Result<usize, LoadError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SECTION_SIZE);
    };
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| LoadError::Config(format!("{key} must be an integer, got {raw:?}")))?;
    if value < 0 {
        tracing::warn!(key, value, "negative section size; section will be empty");
    }
    Ok(usize::try_from(value).unwrap_or(0))
}
