//! Common types used throughout catalog-fetch
//!
//! Shared type aliases for the opaque product records plus the small enums
//! that describe how a catalog request is made.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// A single product as published in the catalog. Its shape is owned by the
/// publisher; nothing here inspects it.
pub type ProductRecord = JsonValue;

/// Products in the order the resource returned them
pub type ProductCollection = Vec<ProductRecord>;

/// Fixed resource path of the published catalog
pub const DEFAULT_RESOURCE_PATH: &str = "/urunler.json";

/// Envelope field holding the product records
pub const DEFAULT_RECORDS_FIELD: &str = "products";

// ============================================================================
// Cache Mode
// ============================================================================

/// How the outbound request treats intermediate caches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Force a fresh retrieval (`Cache-Control: no-store, no-cache`)
    #[default]
    Bypass,
    /// Let the transport and any proxies decide
    Default,
}

impl CacheMode {
    /// Headers that carry this mode on the wire
    pub fn headers(self) -> &'static [(&'static str, &'static str)] {
        match self {
            CacheMode::Bypass => &[
                ("cache-control", "no-store, no-cache"),
                ("pragma", "no-cache"),
            ],
            CacheMode::Default => &[],
        }
    }
}

// ============================================================================
// Status Policy
// ============================================================================

/// What to do with a non-2xx response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Decode the body regardless of status
    #[default]
    Ignore,
    /// Fail with `Error::HttpStatus` on any non-success status
    Strict,
}

// ============================================================================
// Utilities
// ============================================================================

/// JSON-document truthiness: `null`, `false`, `0` and `""` are falsy,
/// everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), false ; "null")]
    #[test_case(json!(false), false ; "false")]
    #[test_case(json!(0), false ; "zero")]
    #[test_case(json!(0.0), false ; "zero float")]
    #[test_case(json!(""), false ; "empty string")]
    #[test_case(json!(true), true ; "true")]
    #[test_case(json!(-1), true ; "negative")]
    #[test_case(json!("x"), true ; "string")]
    #[test_case(json!([]), true ; "empty array")]
    #[test_case(json!({}), true ; "empty object")]
    fn test_is_truthy(value: JsonValue, expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[test]
    fn test_cache_mode_serde() {
        let mode: CacheMode = serde_json::from_str("\"bypass\"").unwrap();
        assert_eq!(mode, CacheMode::Bypass);

        let json = serde_json::to_string(&CacheMode::Default).unwrap();
        assert_eq!(json, "\"default\"");
    }

    #[test]
    fn test_cache_mode_headers() {
        assert_eq!(CacheMode::default(), CacheMode::Bypass);
        assert!(CacheMode::Bypass
            .headers()
            .contains(&("cache-control", "no-store, no-cache")));
        assert!(CacheMode::Default.headers().is_empty());
    }

    #[test]
    fn test_status_policy_default() {
        assert_eq!(StatusPolicy::default(), StatusPolicy::Ignore);
        let policy: StatusPolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, StatusPolicy::Strict);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
    }
}
