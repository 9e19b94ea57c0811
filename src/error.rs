//! Service-level error types

use thiserror::Error;

/// Errors produced by the domain services.
///
/// Inference collaborator failures are a separate type
/// ([`crate::inference::InferenceError`]) because they are caught and masked
/// inside the conversation router rather than surfaced to callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed or failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}
