//! Application constants for the sales analytics pipeline
//!
//! This module contains column names, default values and output layout
//! constants used throughout the application.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter used by the transaction file format
pub const FIELD_DELIMITER: char = '|';

/// Prefix every valid transaction identifier starts with
pub const TRANSACTION_ID_PREFIX: char = 'T';

/// Column names used by the transaction file format
pub mod columns {
    pub const TRANSACTION_ID: &str = "TransactionID";
    pub const DATE: &str = "Date";
    pub const PRODUCT_ID: &str = "ProductID";
    pub const PRODUCT_NAME: &str = "ProductName";
    pub const QUANTITY: &str = "Quantity";
    pub const UNIT_PRICE: &str = "UnitPrice";
    pub const CUSTOMER_ID: &str = "CustomerID";
    pub const REGION: &str = "Region";

    // Enrichment columns
    pub const CATEGORY: &str = "Category";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const WARRANTY_MONTHS: &str = "WarrantyMonths";

    /// Column order of the cleaned data export
    pub const CLEANED_EXPORT: &[&str] = &[
        TRANSACTION_ID,
        DATE,
        PRODUCT_ID,
        PRODUCT_NAME,
        QUANTITY,
        UNIT_PRICE,
        CUSTOMER_ID,
        REGION,
        CATEGORY,
        MANUFACTURER,
        WARRANTY_MONTHS,
    ];
}

// =============================================================================
// Enrichment
// =============================================================================

/// Sentinel written into enrichment fields when the catalog has no entry
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Default base URL of the HTTP product catalog
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Default timeout in seconds for the HTTP catalog fetch
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Default number of products requested from the HTTP catalog
pub const DEFAULT_CATALOG_FETCH_LIMIT: usize = 100;

// =============================================================================
// Analytics Defaults
// =============================================================================

/// Default number of products in the top-N ranking
pub const DEFAULT_TOP_N: usize = 5;

/// Default number of customers listed in the report
pub const DEFAULT_TOP_CUSTOMERS: usize = 5;

/// Products selling fewer units than this are low performers
pub const DEFAULT_LOW_PERFORMER_THRESHOLD: i64 = 10;

/// Number of invalid records listed individually in the report
pub const DEFAULT_INVALID_LISTING_LIMIT: usize = 10;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default input file
pub const DEFAULT_INPUT_PATH: &str = "data/sales_data.txt";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Report output filename
pub const REPORT_FILENAME: &str = "sales_report.txt";

/// Cleaned data output filename
pub const CLEANED_DATA_FILENAME: &str = "cleaned_sales_data.txt";

/// Application directory name under the user's config directory
pub const CONFIG_DIR_NAME: &str = "sales-analytics";

/// Configuration filename
pub const CONFIG_FILENAME: &str = "config.toml";

// =============================================================================
// Environment Overrides
// =============================================================================

pub mod env {
    pub const INPUT_PATH: &str = "SALES_ANALYTICS_INPUT";
    pub const OUTPUT_DIR: &str = "SALES_ANALYTICS_OUTPUT_DIR";
    pub const CATALOG_URL: &str = "SALES_ANALYTICS_CATALOG_URL";
}

// =============================================================================
// Report Layout
// =============================================================================

/// Currency symbol prefixed to monetary values in the report
pub const CURRENCY_SYMBOL: &str = "₹";

/// Width of the report's rule lines
pub const REPORT_WIDTH: usize = 60;

/// Timestamp format for the report header
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
