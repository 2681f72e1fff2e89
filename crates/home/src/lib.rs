//! Landing page assembly: configuration, catalog loading, page output.

pub mod config;
pub mod loader;

pub use config::Config;
pub use loader::{LoadError, SAMPLE_CATALOG, load_catalog, parse_catalog};

use storefront_catalog::HomePage;

/// Load the configured catalog and derive the landing page from it.
pub fn render_home(config: &Config) -> Result<HomePage, LoadError> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    Ok(HomePage::build(&catalog, &config.view)?)
}
