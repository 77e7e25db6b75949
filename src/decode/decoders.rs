//! Envelope decoder
//!
//! Parses the catalog document and projects out its records field.

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use crate::types::{is_truthy, DEFAULT_RECORDS_FIELD};
use serde_json::Value;

/// JSON envelope decoder
///
/// Looks up `records_field` (a dot path, `products` by default) and returns
/// its value as the record list. A missing or falsy field yields no records;
/// a truthy non-array value yields a single record.
#[derive(Debug, Clone)]
pub struct EnvelopeDecoder {
    records_field: String,
}

impl Default for EnvelopeDecoder {
    fn default() -> Self {
        Self {
            records_field: DEFAULT_RECORDS_FIELD.to_string(),
        }
    }
}

impl EnvelopeDecoder {
    /// Create a decoder for the `products` field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder for a different field or nested path (`data.products`)
    pub fn with_field(field: impl Into<String>) -> Self {
        Self {
            records_field: field.into(),
        }
    }

    /// The field this decoder projects
    pub fn records_field(&self) -> &str {
        &self.records_field
    }
}

impl RecordDecoder for EnvelopeDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value = self.decode_raw(body)?;
        Ok(self.extract(&value))
    }

    fn decode_raw(&self, body: &str) -> Result<Value> {
        let document: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        // a null document has no fields to read, unlike an array or scalar
        if document.is_null() {
            return Err(Error::decode("document is null"));
        }

        Ok(document)
    }

    fn extract(&self, document: &Value) -> Vec<Value> {
        match lookup_path(document, &self.records_field) {
            Some(value) if is_truthy(value) => match value {
                Value::Array(arr) => arr.clone(),
                other => vec![other.clone()],
            },
            _ => Vec::new(),
        }
    }
}

/// Follow a dot path (`data.products`) into a document
fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }

    Some(current)
}
