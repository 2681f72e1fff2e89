//! Catalog views for the storefront landing page.
//!
//! This crate derives read-only views from an already-loaded product catalog,
//! implemented purely as deterministic logic (no IO, no HTTP, no rendering).

pub mod home;
pub mod product;
pub mod view;

pub use home::{CategoryCard, HeroBanner, HomePage, Link, ProductCard, Section};
pub use product::{Category, Product, parse_timestamp};
pub use view::{
    CatalogViewModel, CategoryConflict, DEFAULT_SECTION_SIZE, category_conflicts, featured,
    latest, unique_categories,
};
