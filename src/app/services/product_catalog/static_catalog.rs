//! Built-in product table

use super::{CatalogKey, CatalogStatus, ProductCatalog};
use crate::Result;
use crate::app::models::{ProductDetail, ProductInfo};
use std::collections::HashMap;

/// (product id, category, manufacturer, warranty months)
const BUILTIN_PRODUCTS: &[(&str, &str, &str, u32)] = &[
    ("P101", "Electronics", "TechCorp", 24),
    ("P102", "Accessories", "PeripheralCo", 12),
    ("P103", "Accessories", "KeyMasters", 12),
    ("P104", "Electronics", "DisplayTech", 36),
    ("P105", "Electronics", "VisionTech", 12),
    ("P106", "Audio", "SoundPro", 18),
    ("P107", "Accessories", "CableCo", 6),
    ("P108", "Storage", "DataSafe", 24),
    ("P109", "Accessories", "GameGear", 12),
    ("P110", "Accessories", "PowerPlus", 12),
];

/// In-memory product table keyed by catalog key
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<CatalogKey, ProductInfo>,
}

impl StaticCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in product table (P101-P110)
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_PRODUCTS.iter().map(
            |&(id, category, manufacturer, warranty)| {
                (
                    CatalogKey::Verbatim(id.to_string()),
                    ProductInfo::new(
                        category,
                        manufacturer,
                        ProductDetail::WarrantyMonths(warranty),
                    ),
                )
            },
        ))
    }

    /// Catalog holding arbitrary entries
    pub fn from_entries(entries: impl IntoIterator<Item = (CatalogKey, ProductInfo)>) -> Self {
        Self {
            products: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for StaticCatalog {
    fn lookup(&self, key: &CatalogKey) -> Result<Option<ProductInfo>> {
        Ok(self.products.get(key).cloned())
    }

    fn status(&self) -> CatalogStatus {
        CatalogStatus {
            available: true,
            message: "Static product table loaded".to_string(),
            products_available: self.products.len(),
        }
    }
}
