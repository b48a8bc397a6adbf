//! HTTP product catalog
//!
//! The catalog is fetched once from `GET {base_url}/products?limit={n}` and
//! indexed by numeric product id. The expected payload shape is
//!
//! ```json
//! {"products": [{"id": 1, "title": "...", "category": "...", "brand": "...", "rating": 4.5}]}
//! ```
//!
//! A failed or timed-out fetch produces an unavailable catalog whose lookups
//! return an error; the enrichment stage treats those as not found.

use super::{CatalogKey, CatalogStatus, ProductCatalog};
use crate::app::models::{ProductDetail, ProductInfo};
use crate::config::CatalogConfig;
use crate::constants::UNKNOWN_SENTINEL;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ProductListing {
    products: Vec<CatalogProduct>,
}

#[derive(Debug, Deserialize)]
struct CatalogProduct {
    id: u64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
}

impl From<CatalogProduct> for ProductInfo {
    fn from(product: CatalogProduct) -> Self {
        ProductInfo::new(
            product
                .category
                .unwrap_or_else(|| UNKNOWN_SENTINEL.to_string()),
            product.brand.unwrap_or_else(|| UNKNOWN_SENTINEL.to_string()),
            ProductDetail::Rating(product.rating.unwrap_or(0.0)),
        )
    }
}

/// Product catalog fetched from a remote HTTP service
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    products: HashMap<u64, ProductInfo>,
    unavailable_reason: Option<String>,
}

impl HttpCatalog {
    /// Fetch the catalog, degrading to an unavailable catalog on failure
    pub async fn fetch(config: &CatalogConfig) -> Self {
        match fetch_products(config).await {
            Ok(products) => {
                debug!(
                    "Fetched {} products from {}",
                    products.len(),
                    config.base_url
                );
                Self::from_products(&config.base_url, products)
            }
            Err(e) => {
                warn!(
                    "Product catalog at {} unavailable, enrichment will mark every record unmatched: {}",
                    config.base_url, e
                );
                Self::unavailable(&config.base_url, e.to_string())
            }
        }
    }

    /// Catalog built from already-fetched products
    pub fn from_products(base_url: &str, products: HashMap<u64, ProductInfo>) -> Self {
        Self {
            base_url: base_url.to_string(),
            products,
            unavailable_reason: None,
        }
    }

    /// Catalog whose fetch failed
    pub fn unavailable(base_url: &str, reason: impl Into<String>) -> Self {
        Self {
            base_url: base_url.to_string(),
            products: HashMap::new(),
            unavailable_reason: Some(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.unavailable_reason.is_none()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ProductCatalog for HttpCatalog {
    fn lookup(&self, key: &CatalogKey) -> Result<Option<ProductInfo>> {
        if let Some(reason) = &self.unavailable_reason {
            return Err(Error::catalog(format!(
                "catalog at {} is unavailable: {}",
                self.base_url, reason
            )));
        }

        match key {
            CatalogKey::Numeric(id) => Ok(self.products.get(id).cloned()),
            // Remote ids are numeric
            CatalogKey::Verbatim(_) => Ok(None),
        }
    }

    fn status(&self) -> CatalogStatus {
        match &self.unavailable_reason {
            None => CatalogStatus {
                available: true,
                message: format!("HTTP catalog at {}", self.base_url),
                products_available: self.products.len(),
            },
            Some(reason) => CatalogStatus {
                available: false,
                message: format!("HTTP catalog at {} failed: {}", self.base_url, reason),
                products_available: 0,
            },
        }
    }
}

/// Request the product listing from the remote catalog
async fn fetch_products(config: &CatalogConfig) -> Result<HashMap<u64, ProductInfo>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| Error::catalog_request("Failed to build HTTP client", e))?;

    let url = format!(
        "{}/products?limit={}",
        config.base_url.trim_end_matches('/'),
        config.fetch_limit
    );
    debug!("Fetching product catalog from {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::catalog_request(format!("GET {} failed", url), e))?
        .error_for_status()
        .map_err(|e| Error::catalog_request(format!("GET {} returned an error status", url), e))?;

    let body = response
        .text()
        .await
        .map_err(|e| Error::catalog_request(format!("Failed to read body from {}", url), e))?;

    parse_product_listing(&body)
}

/// Parse a product listing payload into a numeric-keyed table
pub fn parse_product_listing(body: &str) -> Result<HashMap<u64, ProductInfo>> {
    let listing: ProductListing = serde_json::from_str(body)
        .map_err(|e| Error::catalog(format!("Malformed product listing: {}", e)))?;

    Ok(listing
        .products
        .into_iter()
        .map(|product| (product.id, ProductInfo::from(product)))
        .collect())
}
