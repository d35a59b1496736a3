//! Error mapping helpers for backend HTTP calls.

use http::StatusCode;

use crate::library::error::LibraryError;

pub(crate) fn map_transport_error(operation: &str, error: &reqwest::Error) -> LibraryError {
    LibraryError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Describes a non-success response using the backend's error detail.
pub(crate) fn describe_failure(status: StatusCode, body: &str) -> String {
    let detail = extract_detail(body).unwrap_or_else(|| "unknown error".to_owned());
    format!("status {status}: {detail}")
}

/// Pulls `detail` (or `message`) out of a JSON error body.
fn extract_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::{describe_failure, extract_detail};

    #[rstest]
    #[case::detail(r#"{"detail":"Prompt not found"}"#, Some("Prompt not found"))]
    #[case::message(r#"{"message":"Forbidden"}"#, Some("Forbidden"))]
    #[case::other_shape(r#"{"error":"x"}"#, None)]
    #[case::not_json("<html>oops</html>", None)]
    fn extracts_error_detail(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_detail(body).as_deref(), expected);
    }

    #[test]
    fn describe_failure_falls_back_to_unknown_error() {
        assert_eq!(
            describe_failure(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "status 500 Internal Server Error: unknown error"
        );
    }
}
