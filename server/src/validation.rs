//! Input validation for the HTTP layer.
//!
//! Both functions are pure: they look only at the raw request data and
//! return either a value the store can accept or a `ValidationError`.

use serde_json::Value;

use crate::error::{ApiError, ValidationError};

/// Extract the trimmed `text` field from a create-todo request body.
///
/// The body must be a JSON object whose `text` is a string with at least one
/// non-whitespace character. Anything else, including a body that is not
/// JSON at all, is `InvalidText`. A byte-order mark counts as whitespace.
pub fn validate_text(payload: &[u8]) -> Result<String, ApiError> {
    let body: Value = serde_json::from_slice(payload).map_err(|_| ValidationError::InvalidText)?;

    body.get("text")
        .and_then(Value::as_str)
        .map(|text| text.trim_matches(is_blank))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(ApiError::Validation(ValidationError::InvalidText))
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parse a todo id taken from the request path.
///
/// An optional sign followed by ASCII digits is well-formed, whatever its
/// magnitude. Returns `None` for well-formed ids no todo can have (zero,
/// negative, or beyond `u64`); the caller reports those as `NotFound`.
pub fn parse_id(raw: &str) -> Result<Option<u64>, ApiError> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::Validation(ValidationError::InvalidId));
    }
    if negative {
        return Ok(None);
    }

    // Only overflow can fail here; the digits were checked above.
    Ok(digits.parse::<u64>().ok().filter(|&id| id > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_text() -> ApiError {
        ApiError::Validation(ValidationError::InvalidText)
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_text(br#"{"text":"  buy milk  "}"#).unwrap(), "buy milk");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(validate_text(br#"{"text":"\tbuy  oat milk\n"}"#).unwrap(), "buy  oat milk");
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(validate_text(br#"{"text":"a","done":true}"#).unwrap(), "a");
    }

    #[test]
    fn empty_and_blank_text_are_rejected() {
        assert_eq!(validate_text(br#"{"text":""}"#), Err(invalid_text()));
        assert_eq!(validate_text(br#"{"text":"   "}"#), Err(invalid_text()));
        assert_eq!(validate_text(br#"{"text":"\n\t"}"#), Err(invalid_text()));
    }

    #[test]
    fn missing_or_non_string_text_is_rejected() {
        assert_eq!(validate_text(b"{}"), Err(invalid_text()));
        assert_eq!(validate_text(br#"{"text":null}"#), Err(invalid_text()));
        assert_eq!(validate_text(br#"{"text":42}"#), Err(invalid_text()));
        assert_eq!(validate_text(br#"{"text":["a"]}"#), Err(invalid_text()));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert_eq!(validate_text(b""), Err(invalid_text()));
        assert_eq!(validate_text(b"not json"), Err(invalid_text()));
        assert_eq!(validate_text(br#"["text"]"#), Err(invalid_text()));
        assert_eq!(validate_text(br#""text""#), Err(invalid_text()));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(validate_text(br#"{"text":"\uFEFF"}"#), Err(invalid_text()));
        assert_eq!(validate_text(br#"{"text":"\uFEFF buy milk \uFEFF"}"#).unwrap(), "buy milk");
    }

    #[test]
    fn integer_ids_parse() {
        assert_eq!(parse_id("1"), Ok(Some(1)));
        assert_eq!(parse_id("42"), Ok(Some(42)));
        assert_eq!(parse_id("+7"), Ok(Some(7)));
        assert_eq!(parse_id("007"), Ok(Some(7)));
        assert_eq!(parse_id("18446744073709551615"), Ok(Some(u64::MAX)));
    }

    #[test]
    fn well_formed_ids_no_todo_can_have() {
        assert_eq!(parse_id("0"), Ok(None));
        assert_eq!(parse_id("-3"), Ok(None));
        assert_eq!(parse_id("-0"), Ok(None));
        assert_eq!(parse_id("18446744073709551616"), Ok(None));
        assert_eq!(parse_id("99999999999999999999"), Ok(None));
    }

    #[test]
    fn non_integer_ids_are_rejected() {
        let invalid = Err(ApiError::Validation(ValidationError::InvalidId));
        assert_eq!(parse_id("abc"), invalid);
        assert_eq!(parse_id(""), invalid);
        assert_eq!(parse_id("1.5"), invalid);
        assert_eq!(parse_id(" 1"), invalid);
        assert_eq!(parse_id("-"), invalid);
        assert_eq!(parse_id("+"), invalid);
        assert_eq!(parse_id("1-"), invalid);
        assert_eq!(parse_id("+-1"), invalid);
        assert_eq!(parse_id("١٢"), invalid);
    }
}
