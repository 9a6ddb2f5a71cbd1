//! Wire types for the report service API

use serde::{Deserialize, Serialize};

/// Body of a successful `GET /api/reports/generate/{session_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    pub report: ReportRef,
}

/// Reference to a generated report artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRef {
    /// Path of the artifact, relative to the API host
    pub url: String,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, returning `None` when the payload is not a JSON
    /// object or carries no non-empty `message`.
    pub fn message_from(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}

/// A report that the API finished generating, with its absolute location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub url: String,
}

impl GeneratedReport {
    /// Resolve the report path returned by the API against `base_url`
    pub fn resolve(base_url: &str, response: &GenerateReportResponse) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), response.report.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_base_and_path() {
        let response = GenerateReportResponse {
            report: ReportRef {
                url: "/files/r1.pdf".to_string(),
            },
        };
        let report = GeneratedReport::resolve("http://localhost:5000/", &response);
        assert_eq!(report.url, "http://localhost:5000/files/r1.pdf");
    }

    #[test]
    fn test_error_body_message_extraction() {
        assert_eq!(
            ErrorBody::message_from(r#"{"message":"boom"}"#),
            Some("boom".to_string())
        );
        assert_eq!(ErrorBody::message_from(r#"{"message":""}"#), None);
        assert_eq!(ErrorBody::message_from(r#"{"error":"x"}"#), None);
        assert_eq!(ErrorBody::message_from(""), None);
        assert_eq!(ErrorBody::message_from("<html>oops</html>"), None);
    }
}
