use thiserror::Error;

use crate::api::ApiError;

/// User-facing failures surfaced by the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Failed to load field metadata: {0}")]
    MetadataLoad(ApiError),
    #[error("Failed to load sample: {0}")]
    SampleLoad(ApiError),
    /// Raw editor text did not parse; nothing was sent.
    #[error("Request body is not valid JSON: {0}")]
    RequestBodyParse(String),
    #[error("{0}")]
    Predict(ApiError),
}

impl SessionError {
    /// Failures that leave the session without a usable schema.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MetadataLoad(_))
    }
}
