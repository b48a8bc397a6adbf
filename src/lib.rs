//! Sales Analytics Library
//!
//! A Rust library for turning pipe-delimited sales transaction files into
//! validated, enriched records and a set of business analytics.
//!
//! This library provides tools for:
//! - Parsing pipe-delimited transaction files with a declared header line
//! - Normalizing numeric and text fields with fail-soft semantics
//! - Validating records against a fixed, ordered rule set
//! - Enriching records with product metadata from a static or HTTP catalog
//! - Folding records into revenue, region, product, customer and trend views
//! - Rendering a text report and a cleaned data export

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod product_catalog;
        pub mod record_parser;
        pub mod record_processor;
        pub mod report_writer;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CleanedRecord, EnrichedRecord, NumericValue, ProductInfo, RawRecord};
pub use config::Config;

/// Result type alias for the sales analytics pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sales analytics operations
///
/// Per-record problems (validation failures, catalog misses) are carried as data
/// and never surface here. These variants cover the boundary failures that end a run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Product catalog is unavailable or returned unusable data
    #[error("Product catalog error: {message}")]
    Catalog { message: String },

    /// HTTP request to the product catalog failed
    #[error("Product catalog request failed: {message}")]
    CatalogRequest {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a product catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a catalog request error
    pub fn catalog_request(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::CatalogRequest {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::CatalogRequest {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
