//! HTTP response validation for OpenAQ API calls.

use crate::error::OpenAqError;
use serde_json::Value;

/// Validate a response and return its JSON payload.
///
/// The body must parse as JSON regardless of status; a non-200 status is
/// reported as `ApiError` with the message taken from the payload's
/// `message` or `error` field when present.
pub fn extract_payload(status: u16, body: &str) -> Result<Value, OpenAqError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|_| OpenAqError::MalformedResponse)?;

    if status != 200 {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| payload.get("error").and_then(Value::as_str))
            .unwrap_or("Unknown API error.")
            .to_string();
        return Err(OpenAqError::ApiError { code: status, message });
    }
    Ok(payload)
}

/// The `results` list of a payload, defaulting to empty when absent.
pub fn results_of(payload: &Value) -> Vec<Value> {
    payload
        .get("results")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_payload_passes_through() {
        let payload = extract_payload(200, r#"{"results": [{"value": 12.5}]}"#).unwrap();
        assert_eq!(results_of(&payload).len(), 1);
    }

    #[test]
    fn test_missing_results_defaults_to_empty() {
        let payload = extract_payload(200, r#"{"meta": {}}"#).unwrap();
        assert!(results_of(&payload).is_empty());
    }

    #[test]
    fn test_non_200_uses_message_field() {
        let err = extract_payload(404, r#"{"message": "not found"}"#).unwrap_err();
        assert_eq!(
            err,
            OpenAqError::ApiError {
                code: 404,
                message: "not found".to_string()
            }
        );
    }

    #[test]
    fn test_non_200_falls_back_to_error_field() {
        let err = extract_payload(401, r#"{"error": "invalid key"}"#).unwrap_err();
        assert_eq!(
            err,
            OpenAqError::ApiError {
                code: 401,
                message: "invalid key".to_string()
            }
        );
    }

    #[test]
    fn test_non_200_without_detail_uses_generic_message() {
        let err = extract_payload(500, "{}").unwrap_err();
        assert_eq!(
            err,
            OpenAqError::ApiError {
                code: 500,
                message: "Unknown API error.".to_string()
            }
        );
    }

    #[test]
    fn test_unparseable_body_is_malformed() {
        let err = extract_payload(200, "<html>oops</html>").unwrap_err();
        assert_eq!(err, OpenAqError::MalformedResponse);
    }

    #[test]
    fn test_results_of_ignores_non_array() {
        let payload = json!({"results": "nope"});
        assert!(results_of(&payload).is_empty());
    }
}
