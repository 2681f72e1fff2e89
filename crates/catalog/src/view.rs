//! Derived catalog views: featured, unique categories, latest.
//!
//! All functions borrow the catalog and return new sequences of references;
//! the catalog itself is never reordered or mutated.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use storefront_core::{CatalogResult, EntityId};

use crate::product::{Category, Product};

/// Section size used by the landing page when none is configured.
pub const DEFAULT_SECTION_SIZE: usize = 4;

/// First `n` products, in catalog order.
pub fn featured(catalog: &[Product], n: usize) -> Vec<&Product> {
    catalog.iter().take(n).collect()
}

/// One category per distinct `category.id`, in order of first occurrence.
///
/// When several products carry different records under the same id, the
/// first record wins (see [`category_conflicts`] to find the others).
/// A product without a category fails the whole operation.
pub fn unique_categories(catalog: &[Product]) -> CatalogResult<Vec<&Category>> {
    let mut seen: HashSet<&EntityId> = HashSet::new();
    let mut categories = Vec::new();

    for product in catalog {
        let category = product.require_category()?;
        if seen.insert(&category.id) {
            categories.push(category);
        }
    }

    Ok(categories)
}

/// The `n` most recently created products, newest first.
///
/// Every `creationAt` in the catalog is validated, not only those that end up
/// in the result. Equal timestamps keep their catalog order.
pub fn latest(catalog: &[Product], n: usize) -> CatalogResult<Vec<&Product>> {
    let mut stamped = catalog
        .iter()
        .map(|p| p.created_at().map(|at| (at, p)))
        .collect::<CatalogResult<Vec<(DateTime<Utc>, &Product)>>>()?;

    // `sort_by` is stable.
    stamped.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(stamped.into_iter().take(n).map(|(_, p)| p).collect())
}

/// A category record that disagrees with the first record seen for its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConflict<'a> {
    /// Product carrying the discarded record.
    pub product_id: &'a EntityId,
    /// Record kept by [`unique_categories`].
    pub kept: &'a Category,
    /// Record discarded by [`unique_categories`].
    pub discarded: &'a Category,
}

/// Every product whose category diverges from the first record with the same id.
///
/// Products without a category are skipped here; [`unique_categories`]
/// reports them.
pub fn category_conflicts(catalog: &[Product]) -> Vec<CategoryConflict<'_>> {
    let mut first_seen: HashMap<&EntityId, &Category> = HashMap::new();
    let mut conflicts = Vec::new();

    for product in catalog {
        let Some(category) = product.category.as_ref() else {
            continue;
        };
        let kept = *first_seen.entry(&category.id).or_insert(category);
        if category.diverges_from(kept) {
            conflicts.push(CategoryConflict {
                product_id: &product.id,
                kept,
                discarded: category,
            });
        }
    }

    conflicts
}

/// Section sizes for the landing page, applied to the derivations above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogViewModel {
    pub featured_count: usize,
    pub latest_count: usize,
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self {
            featured_count: DEFAULT_SECTION_SIZE,
            latest_count: DEFAULT_SECTION_SIZE,
        }
    }
}

impl CatalogViewModel {
    pub fn new(featured_count: usize, latest_count: usize) -> Self {
        Self {
            featured_count,
            latest_count,
        }
    }

    pub fn featured<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        let items = featured(catalog, self.featured_count);
        tracing::debug!(count = items.len(), "derived featured products");
        items
    }

    pub fn unique_categories<'a>(&self, catalog: &'a [Product]) -> CatalogResult<Vec<&'a Category>> {
        let categories = unique_categories(catalog)?;
        tracing::debug!(count = categories.len(), "derived unique categories");
        Ok(categories)
    }

    pub fn latest<'a>(&self, catalog: &'a [Product]) -> CatalogResult<Vec<&'a Product>> {
        let items = latest(catalog, self.latest_count)?;
        tracing::debug!(count = items.len(), "derived latest products");
        Ok(items)
    }
}
