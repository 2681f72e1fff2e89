//! `storefront-core`: catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::EntityId;
