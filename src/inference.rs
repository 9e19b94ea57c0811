//! External inference collaborator abstraction
//!
//! The conversation router can delegate reply generation to an external
//! inference backend. The integration is behind a trait so the mock-only
//! deployment carries no live dependency; when the backend is unreachable
//! the router falls back to its canned replies.

mod http;

pub use http::HttpInference;

use crate::chat::Turn;
use async_trait::async_trait;
use thiserror::Error;

/// Common interface for inference backends
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Generate a reply for `message` given the conversation so far
    async fn complete(&self, message: &str, history: &[Turn]) -> Result<String, InferenceError>;
}

/// Inference error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InferenceError {
    pub kind: InferenceErrorKind,
    pub message: String,
}

impl InferenceError {
    pub fn new(kind: InferenceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(InferenceErrorKind::Network, message)
    }
}

/// Error classification for the collaborator seam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceErrorKind {
    /// Network issues, timeouts - the backend is unreachable
    Network,
    /// Server error (5xx)
    Server,
    /// Bad request (4xx) - our payload was rejected
    InvalidRequest,
    /// Unknown error
    Unknown,
}

impl InferenceErrorKind {
    /// Transport-class failures must never reach the end user; the router
    /// masks them behind the canned fallback reply.
    pub fn is_transport(self) -> bool {
        matches!(self, Self::Network | Self::Server)
    }
}
