//! Tests for the record processing pipeline
//!
//! Shared fixtures for building raw records and catalogs.

pub mod cleaning_tests;
pub mod stats_tests;

use crate::app::models::RawRecord;
use crate::app::services::product_catalog::{CatalogKey, CatalogStatus, ProductCatalog};
use crate::app::models::ProductInfo;
use crate::{Error, Result};

/// Create a record with every standard column set
pub fn create_test_record(
    line_number: usize,
    transaction_id: &str,
    product_id: &str,
    quantity: &str,
    unit_price: &str,
) -> RawRecord {
    RawRecord::from_pairs(
        line_number,
        [
            ("TransactionID", transaction_id),
            ("Date", "2024-12-01"),
            ("ProductID", product_id),
            ("ProductName", "Widget, Large"),
            ("Quantity", quantity),
            ("UnitPrice", unit_price),
            ("CustomerID", "C001"),
            ("Region", "North"),
        ],
    )
}

/// Valid record for the given product
pub fn create_valid_record(line_number: usize, product_id: &str) -> RawRecord {
    create_test_record(
        line_number,
        &format!("T{:03}", line_number),
        product_id,
        "2",
        "1,500.00",
    )
}

/// Catalog whose every lookup fails
#[derive(Debug)]
pub struct FailingCatalog;

impl ProductCatalog for FailingCatalog {
    fn lookup(&self, _key: &CatalogKey) -> Result<Option<ProductInfo>> {
        Err(Error::catalog("catalog offline"))
    }

    fn status(&self) -> CatalogStatus {
        CatalogStatus {
            available: false,
            message: "catalog offline".to_string(),
            products_available: 0,
        }
    }
}
