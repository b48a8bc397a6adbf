//! Catalog key derivation from product identifiers

use crate::config::KeyStrategy;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Key used to look a product up in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogKey {
    /// Product identifier as written in the file (`P101`)
    Verbatim(String),
    /// Digits embedded in the identifier (`P101` -> `101`)
    Numeric(u64),
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKey::Verbatim(id) => f.write_str(id),
            CatalogKey::Numeric(id) => write!(f, "{}", id),
        }
    }
}

/// Derive a catalog key from a `ProductID` value
///
/// Returns `None` when the identifier is absent or blank, or when the numeric
/// strategy finds no digits.
pub fn derive_key(product_id: Option<&str>, strategy: KeyStrategy) -> Option<CatalogKey> {
    let product_id = product_id.filter(|id| !id.trim().is_empty())?;

    match strategy {
        KeyStrategy::Verbatim => Some(CatalogKey::Verbatim(product_id.to_string())),
        KeyStrategy::NumericSuffix => DIGIT_RUN
            .find(product_id)
            .and_then(|digits| digits.as_str().parse::<u64>().ok())
            .map(CatalogKey::Numeric),
    }
}
