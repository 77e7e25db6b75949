//! Catalog envelope and product view types

use crate::types::{JsonValue, ProductCollection, ProductRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decoded catalog document, created per call and discarded afterwards
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    /// Records projected out of the envelope (never absent)
    pub products: ProductCollection,
    /// When the publisher last regenerated the catalog
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResponseEnvelope {
    /// Build an envelope from already projected records and the raw document
    pub fn from_document(products: ProductCollection, document: &JsonValue) -> Self {
        let updated_at = document
            .get("updatedAt")
            .and_then(JsonValue::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Self {
            products,
            updated_at,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Typed view over one published product record.
///
/// The records stay opaque; this is a lenient reading of the fields the
/// catalog publisher writes. Absent fields take their default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Product identifier; numeric ids are read as strings
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// Display name
    pub title: String,
    /// Brand name
    pub brand: String,
    /// Long description
    pub description: String,
    /// List price
    pub price: f64,
    /// Discounted price, `0` when there is no sale (`salePrice`)
    pub sale_price: f64,
    /// Units in stock
    pub quantity: i64,
    /// Image URLs
    pub images: Vec<String>,
    /// Category name
    pub category: String,
    /// Product page URL
    pub url: String,
}

impl CatalogProduct {
    /// Read a record as a catalog product, `None` if the fields have the wrong types
    pub fn from_record(record: &ProductRecord) -> Option<Self> {
        if !record.is_object() {
            return None;
        }
        serde_json::from_value(record.clone()).ok()
    }

    /// Effective price: the sale price when set, otherwise the list price
    pub fn effective_price(&self) -> f64 {
        if self.sale_price > 0.0 {
            self.sale_price
        } else {
            self.price
        }
    }

    /// True when at least one unit is in stock
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Typed view over a collection, skipping records that do not fit
pub fn catalog_view(records: &[ProductRecord]) -> Vec<CatalogProduct> {
    records.iter().filter_map(CatalogProduct::from_record).collect()
}

/// Accept ids published as either strings or numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(JsonValue::String(s)) => Some(s),
        Some(JsonValue::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
