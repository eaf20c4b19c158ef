//! Response models for the Baserow list-rows endpoint

use crate::domain::{FetchError, Record};
use serde_json::Value;

/// Decoded response to one page request
///
/// The body is kept as raw JSON whatever the status, so the caller decides
/// what a non-2xx answer means.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    /// Page number that was requested
    pub page: u64,

    /// HTTP status code
    pub status: u16,

    /// Decoded body; a non-JSON error body is kept as a JSON string
    pub body: Value,
}

impl PageResponse {
    /// Create a response
    pub fn new(page: u64, status: u16, body: Value) -> Self {
        Self { page, status, body }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Total row count advertised by the server, if any
    pub fn total_count(&self) -> Option<u64> {
        self.body.get("count").and_then(Value::as_u64)
    }

    /// Extracts the records from the `results` field
    ///
    /// A `null` field counts as an empty page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingResults`] when the body has no `results`
    /// field and [`FetchError::InvalidResponse`] when it is not an array.
    pub fn into_records(self) -> Result<Vec<Record>, FetchError> {
        let Self {
            page,
            status,
            mut body,
        } = self;

        let results = body.as_object_mut().and_then(|map| map.remove("results"));

        match results {
            Some(Value::Array(records)) => Ok(records),
            Some(Value::Null) => Ok(Vec::new()),
            Some(other) => Err(FetchError::InvalidResponse(format!(
                "'results' for page {page} is not an array: {other}"
            ))),
            None => Err(FetchError::MissingResults {
                page,
                status,
                body: body_preview(&body),
            }),
        }
    }
}

/// Body rendered for error messages, shortened to keep logs readable
pub(crate) fn body_preview(body: &Value) -> String {
    const MAX: usize = 512;
    let rendered = match body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    if rendered.chars().count() > MAX {
        let truncated: String = rendered.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_records() {
        let response = PageResponse::new(
            1,
            200,
            json!({"count": 3, "next": "http://x/?page=2", "results": [{"id": 1}, {"id": 2}]}),
        );
        assert_eq!(response.total_count(), Some(3));
        assert_eq!(
            response.into_records().unwrap(),
            vec![json!({"id": 1}), json!({"id": 2})]
        );
    }

    #[test]
    fn test_null_results_is_empty_page() {
        let response = PageResponse::new(4, 200, json!({"results": null}));
        assert!(response.into_records().unwrap().is_empty());
    }

    #[test]
    fn test_missing_results() {
        let response = PageResponse::new(1, 500, json!({"error": "server"}));
        assert!(!response.is_success());
        match response.into_records() {
            Err(FetchError::MissingResults { page, status, body }) => {
                assert_eq!(page, 1);
                assert_eq!(status, 500);
                assert_eq!(body, r#"{"error":"server"}"#);
            }
            other => panic!("Expected MissingResults, got {other:?}"),
        }
    }

    #[test]
    fn test_results_not_an_array() {
        let response = PageResponse::new(1, 200, json!({"results": {"id": 1}}));
        assert!(matches!(
            response.into_records(),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_non_object_body() {
        let response = PageResponse::new(2, 502, json!("<html>Bad Gateway</html>"));
        assert!(matches!(
            response.into_records(),
            Err(FetchError::MissingResults { .. })
        ));
    }

    #[test]
    fn test_body_preview_truncates() {
        let long = Value::String("x".repeat(2000));
        let preview = body_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.len(), 515);
    }
}
