//! Credential and date-input resolution.
//!
//! The environment is read once here and the resolved values travel through
//! the pipeline as explicit parameters.

use crate::error::OpenAqError;

/// Environment value holding the OpenAQ API key.
pub const API_KEY_ENV: &str = "X-API-Key";

/// Resolve the API key from a user override or the environment.
///
/// A trimmed, non-empty override wins; an empty override is treated as
/// absent and falls back to the `X-API-Key` environment value.
pub fn resolve_api_key(override_key: Option<&str>) -> Result<String, OpenAqError> {
    if let Some(key) = override_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or(OpenAqError::MissingCredential)
}

/// Format a start date ("YYYY-MM-DD") as the API's datetime lower bound.
pub fn format_date_start(raw_date: Option<&str>) -> Result<String, OpenAqError> {
    match raw_date.map(str::trim) {
        Some(date) if !date.is_empty() => Ok(format!("{}T00:00:00", date)),
        _ => Err(OpenAqError::MissingInput("Start date")),
    }
}

/// Format an end date ("YYYY-MM-DD") as the API's datetime upper bound.
pub fn format_date_end(raw_date: Option<&str>) -> Result<String, OpenAqError> {
    match raw_date.map(str::trim) {
        Some(date) if !date.is_empty() => Ok(format!("{}T23:59:59", date)),
        _ => Err(OpenAqError::MissingInput("End date")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_key_is_trimmed() {
        assert_eq!(
            resolve_api_key(Some("  abc123  ")).unwrap(),
            "abc123"
        );
    }

    // Environment manipulation stays in one test to avoid racing the
    // parallel test runner on the shared process environment.
    #[test]
    fn test_env_fallback_and_missing() {
        std::env::set_var(API_KEY_ENV, "from-env");
        assert_eq!(resolve_api_key(None).unwrap(), "from-env");
        assert_eq!(resolve_api_key(Some("   ")).unwrap(), "from-env");

        std::env::remove_var(API_KEY_ENV);
        assert_eq!(resolve_api_key(None), Err(OpenAqError::MissingCredential));
        assert_eq!(resolve_api_key(Some("")), Err(OpenAqError::MissingCredential));
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(
            format_date_start(Some("2020-01-01")).unwrap(),
            "2020-01-01T00:00:00"
        );
        assert_eq!(
            format_date_end(Some("2025-12-31")).unwrap(),
            "2025-12-31T23:59:59"
        );
    }

    #[test]
    fn test_missing_dates() {
        assert_eq!(
            format_date_start(None),
            Err(OpenAqError::MissingInput("Start date"))
        );
        assert_eq!(
            format_date_end(Some("  ")),
            Err(OpenAqError::MissingInput("End date"))
        );
    }
}
