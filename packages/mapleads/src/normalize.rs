//! Response normalization - turn an untrusted model reply into typed records.
//!
//! The reply is free text that usually, but not always, contains a JSON
//! array. Nothing about its shape is trusted: the fence wrapper is optional,
//! fields may be missing or carry the wrong type, and the whole thing may be
//! a bare object instead of an array. The rules here are deterministic and
//! involve no I/O.

use serde_json::Value;

use crate::error::{ExtractionError, Result};
use crate::types::{BusinessInfo, NOT_AVAILABLE};

const FENCE: &str = "```";
const FENCE_LANG_TAG: &str = "json";

/// Normalize a raw model reply into validated [`BusinessInfo`] records.
///
/// Steps: trim, strip one enclosing code fence, parse as JSON, dispatch on
/// shape (array, or a single object carrying a truthy `name`), coerce each
/// element, then drop every candidate without a usable phone number.
///
/// An empty final list is a valid, non-error outcome; surfacing "no results"
/// messaging is the caller's job.
///
/// # Errors
///
/// - [`ExtractionError::MalformedResponse`] when the reply is not JSON.
/// - [`ExtractionError::UnexpectedShape`] for any other JSON shape: a
///   scalar, `null`, or an object without a `name`.
pub fn normalize_reply(reply: &str) -> Result<Vec<BusinessInfo>> {
    let text = strip_code_fence(reply);
    let parsed: Value = serde_json::from_str(text)?;

    let candidates: Vec<BusinessInfo> = match &parsed {
        Value::Array(items) => items.iter().map(coerce_record).collect(),
        Value::Object(fields) if is_truthy(fields.get("name")) => vec![coerce_record(&parsed)],
        _ => return Err(ExtractionError::UnexpectedShape),
    };

    Ok(candidates
        .into_iter()
        .filter(BusinessInfo::has_usable_phone)
        .collect())
}

/// Strip a single enclosing fenced-code wrapper, if present.
///
/// Only the start and end of the trimmed text are inspected; interior fences
/// are left alone, and a lone opening or closing marker strips nothing.
/// Exactly one pass: nested fences are not recursively unwrapped. Text with
/// no fence markers comes back unchanged (modulo trimming).
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
    else {
        return trimmed;
    };
    // An optional language tag may follow the opening marker.
    let inner = inner.strip_prefix(FENCE_LANG_TAG).unwrap_or(inner);
    inner.trim()
}

/// Map one element of the model's reply onto a [`BusinessInfo`].
///
/// Each field takes the source value when truthy, else the `"N/A"` sentinel.
/// A non-object element coerces to an all-defaults record, which the phone
/// filter then drops.
pub fn coerce_record(element: &Value) -> BusinessInfo {
    let fields = element.as_object();
    let field = |key: &str| fields.and_then(|f| f.get(key));

    BusinessInfo {
        name: coerce_field(field("name")),
        address: coerce_field(field("address")),
        phone: coerce_field(field("phone")),
    }
}

/// Default substitution for one field.
///
/// Truthy strings are taken as-is; other truthy values keep their JSON
/// rendering. Missing, `null`, and falsy values (`""`, `0`, `false`) all
/// default to `"N/A"`.
fn coerce_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(v) if is_truthy(Some(v)) => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// JavaScript-style truthiness over JSON values.
///
/// Both the singleton-object fallback (truthy `name`) and field defaulting
/// use this rule.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_is_identity_without_markers() {
        assert_eq!(strip_code_fence("[1, 2, 3]"), "[1, 2, 3]");
        assert_eq!(strip_code_fence("  [1] \n"), "[1]");
    }

    #[test]
    fn test_strips_json_tagged_fence() {
        let reply = "```json\n[{\"name\":\"A\",\"address\":\"X\",\"phone\":\"555-1234\"}]\n```";
        assert_eq!(
            strip_code_fence(reply),
            "[{\"name\":\"A\",\"address\":\"X\",\"phone\":\"555-1234\"}]"
        );
    }

    #[test]
    fn test_strips_untagged_fence() {
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
    }

    #[test]
    fn test_lone_marker_strips_nothing() {
        assert_eq!(strip_code_fence("```json\n[]"), "```json\n[]");
        assert_eq!(strip_code_fence("[]\n```"), "[]\n```");
    }

    #[test]
    fn test_interior_fences_untouched() {
        let text = "[\"a ``` b\"]";
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn test_fenced_reply_parses_end_to_end() {
        let reply = "```json\n[{\"name\":\"A\",\"address\":\"X\",\"phone\":\"555-1234\"}]\n```";
        let records = normalize_reply(reply).unwrap();
        assert_eq!(
            records,
            vec![BusinessInfo {
                name: "A".to_string(),
                address: "X".to_string(),
                phone: "555-1234".to_string(),
            }]
        );
    }

    #[test]
    fn test_array_reply_filters_phoneless_records() {
        let reply = json!([
            {"name": "Acme", "address": "1 Main St", "phone": "555-0001"},
            {"name": "No Phone Diner", "address": "2 Main St"},
            {"name": "Blank Phone", "address": "3 Main St", "phone": ""},
            {"name": "Sentinel", "address": "4 Main St", "phone": "N/A"}
        ])
        .to_string();

        let records = normalize_reply(&reply).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Acme");
    }

    #[test]
    fn test_output_never_longer_and_phones_usable() {
        let reply = json!([
            {"name": "A", "phone": "1"},
            {"name": "B", "phone": " N/A "},
            {"name": "C", "phone": 0},
            {"name": "D", "phone": false},
            {"name": "E", "phone": "555-2222"}
        ])
        .to_string();

        let records = normalize_reply(&reply).unwrap();
        assert!(records.len() <= 5);
        assert!(records.iter().all(BusinessInfo::has_usable_phone));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_coercion_defaults_missing_fields() {
        let record = coerce_record(&json!({"name": "Acme"}));
        assert_eq!(record.name, "Acme");
        assert_eq!(record.address, "N/A");
        assert_eq!(record.phone, "N/A");

        // ...and the phone filter then drops it.
        let records = normalize_reply(&json!([{"name": "Acme"}]).to_string()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_singleton_object_with_name() {
        let records = normalize_reply("{\"name\":\"B\",\"phone\":\"555-9999\"}").unwrap();
        assert_eq!(
            records,
            vec![BusinessInfo {
                name: "B".to_string(),
                address: "N/A".to_string(),
                phone: "555-9999".to_string(),
            }]
        );
    }

    #[test]
    fn test_singleton_without_phone_yields_empty_list() {
        let records = normalize_reply("{\"name\":\"B\",\"address\":\"X\"}").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_object_without_name_is_unexpected_shape() {
        let err = normalize_reply("{\"foo\":\"bar\"}").unwrap_err();
        assert!(matches!(err, ExtractionError::UnexpectedShape));
    }

    #[test]
    fn test_object_with_falsy_name_is_unexpected_shape() {
        for reply in [
            "{\"name\":\"\",\"phone\":\"555-1\"}",
            "{\"name\":null,\"phone\":\"555-1\"}",
            "{\"name\":0,\"phone\":\"555-1\"}",
            "{\"address\":\"X\",\"phone\":\"555-1\"}",
        ] {
            let err = normalize_reply(reply).unwrap_err();
            assert!(matches!(err, ExtractionError::UnexpectedShape), "{reply}");
        }
    }

    #[test]
    fn test_scalar_and_null_are_unexpected_shape() {
        for reply in ["42", "\"hello\"", "null", "true"] {
            let err = normalize_reply(reply).unwrap_err();
            assert!(matches!(err, ExtractionError::UnexpectedShape), "{reply}");
        }
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = normalize_reply("not json").unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_array_is_a_valid_outcome() {
        assert!(normalize_reply("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_elements_are_dropped() {
        let records = normalize_reply("[\"just a string\", 7]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_truthy_number_field_keeps_json_rendering() {
        let record = coerce_record(&json!({"name": "Acme", "phone": 5551234}));
        assert_eq!(record.phone, "5551234");
    }
}
