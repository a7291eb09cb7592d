use thiserror::Error;

use crate::schema::MetadataError;

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend could not be reached; carries the raw transport message.
    #[error("{0}")]
    Transport(String),
    /// Non-success status; `message` is the pretty-printed body or a
    /// synthesized `HTTP <status>: <text>` line.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// A success response whose body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The served schema is unusable.
    #[error("Invalid metadata: {0}")]
    Metadata(#[from] MetadataError),
    /// A background worker stopped without producing a response.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build a backend error from a status line and an optional body.
    pub fn backend(status: u16, status_text: &str, body: Option<&str>) -> Self {
        let message = body
            .and_then(|body| serde_json::from_str::<serde_json::Value>(body.trim()).ok())
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| format!("HTTP {status}: {status_text}"));
        Self::Backend { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_is_pretty_printed_verbatim() {
        let err = ApiError::backend(
            422,
            "Unprocessable Entity",
            Some(r#"{"detail":"invalid field X"}"#),
        );
        assert_eq!(
            err.to_string(),
            "{\n  \"detail\": \"invalid field X\"\n}"
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_status_line() {
        let err = ApiError::backend(502, "Bad Gateway", Some("<html>upstream down</html>"));
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        let err = ApiError::backend(500, "Internal Server Error", None);
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }
}
