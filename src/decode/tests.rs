//! Tests for decoder module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Envelope projection
// ============================================================================

#[test]
fn test_decoder_default_field() {
    let decoder = EnvelopeDecoder::new();
    assert_eq!(decoder.records_field(), "products");
}

#[test]
fn test_decode_products_in_order() {
    let decoder = EnvelopeDecoder::new();
    let body = r#"{"products": [{"id": "a"}, {"id": "b"}, {"id": "c"}]}"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(
        records,
        vec![json!({"id": "a"}), json!({"id": "b"}), json!({"id": "c"})]
    );
}

#[test]
fn test_decode_ignores_other_fields() {
    let decoder = EnvelopeDecoder::new();
    let body = r#"{"updatedAt": "2024-01-01T00:00:00Z", "products": [1, 2], "total": 2}"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(records, vec![json!(1), json!(2)]);
}

#[test_case(r"{}" ; "missing field")]
#[test_case(r#"{"products": null}"# ; "null")]
#[test_case(r#"{"products": []}"# ; "empty array")]
#[test_case(r#"{"products": false}"# ; "false")]
#[test_case(r#"{"products": 0}"# ; "zero")]
#[test_case(r#"{"products": ""}"# ; "empty string")]
#[test_case(r"[]" ; "top level array")]
fn test_decode_falls_back_to_empty(body: &str) {
    let decoder = EnvelopeDecoder::new();
    let records = decoder.decode(body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_decode_truthy_non_array_is_single_record() {
    let decoder = EnvelopeDecoder::new();
    let records = decoder
        .decode(r#"{"products": {"id": "only"}}"#)
        .unwrap();
    assert_eq!(records, vec![json!({"id": "only"})]);
}

#[test]
fn test_decode_nested_field() {
    let decoder = EnvelopeDecoder::with_field("data.products");
    let body = r#"{"data": {"products": [{"id": 1}]}}"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(records, vec![json!({"id": 1})]);
}

// ============================================================================
// Malformed bodies
// ============================================================================

#[test_case("<html>Not Found</html>" ; "html")]
#[test_case("" ; "empty body")]
#[test_case(r#"{"products": [1, 2"# ; "truncated")]
fn test_decode_malformed_body(body: &str) {
    let decoder = EnvelopeDecoder::new();
    let err = decoder.decode(body).unwrap_err();
    assert!(err.is_decode());
    assert!(err.to_string().contains("Failed to parse JSON"));
}

#[test]
fn test_decode_null_document_is_decode_error() {
    let decoder = EnvelopeDecoder::new();
    let err = decoder.decode("null").unwrap_err();
    assert!(err.is_decode());
    assert_eq!(err.to_string(), "Failed to decode response: document is null");

    assert!(decoder.decode_raw(" null ").unwrap_err().is_decode());
}

#[test]
fn test_decode_raw_returns_whole_document() {
    let decoder = EnvelopeDecoder::new();
    let value = decoder.decode_raw(r#"{"products": [], "x": 1}"#).unwrap();
    assert_eq!(value["x"], 1);
}

#[test]
fn test_extract_from_value() {
    let decoder = EnvelopeDecoder::new();
    let doc = json!({"products": [{"title": "Kazak"}]});
    assert_eq!(decoder.extract(&doc), vec![json!({"title": "Kazak"})]);
}
