//! Product catalog service for enrichment lookups
//!
//! A catalog maps a [`CatalogKey`] derived from a record's `ProductID` to
//! [`ProductInfo`]. Two implementations exist:
//!
//! - [`StaticCatalog`] - built-in product table keyed by the verbatim identifier
//! - [`HttpCatalog`] - remote catalog fetched once and keyed by numeric identifier
//!
//! Lookups are fallible. The enrichment stage converts every lookup error into
//! a not-found result, so a broken catalog degrades enrichment instead of
//! aborting the batch.

use crate::Result;
use crate::app::models::ProductInfo;
use crate::config::{CatalogConfig, CatalogSource};
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub mod http_catalog;
pub mod key;
pub mod static_catalog;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use http_catalog::HttpCatalog;
pub use key::{CatalogKey, derive_key};
pub use static_catalog::StaticCatalog;

/// Lookup capability backing the enrichment stage
pub trait ProductCatalog: fmt::Debug + Send + Sync {
    /// Look up product metadata; `Ok(None)` means the catalog has no entry
    fn lookup(&self, key: &CatalogKey) -> Result<Option<ProductInfo>>;

    /// Availability summary for reporting
    fn status(&self) -> CatalogStatus;
}

/// Catalog availability summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStatus {
    pub available: bool,
    pub message: String,
    pub products_available: usize,
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} products)",
            if self.available { "available" } else { "unavailable" },
            self.message,
            self.products_available
        )
    }
}

/// Build the catalog selected by the configuration
///
/// The HTTP catalog is fetched here; a failed fetch still returns a catalog
/// (an unavailable one) rather than an error.
pub async fn build_catalog(config: &CatalogConfig) -> Arc<dyn ProductCatalog> {
    let catalog: Arc<dyn ProductCatalog> = match config.source {
        CatalogSource::Static => Arc::new(StaticCatalog::builtin()),
        CatalogSource::Http => Arc::new(HttpCatalog::fetch(config).await),
    };

    info!("Product catalog: {}", catalog.status());
    catalog
}
