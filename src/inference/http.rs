//! HTTP inference backend implementation

use super::{InferenceError, InferenceErrorKind, InferenceService};
use crate::chat::{Role, Turn};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Inference backend reached over HTTP.
///
/// Posts `{ user_query, history }` to the configured endpoint and expects
/// `{ response }` back.
pub struct HttpInference {
    client: Client,
    endpoint: String,
}

impl HttpInference {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InferenceError::network(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    user_query: &'a str,
    history: Vec<HistoryEntry>,
}

#[derive(Serialize)]
struct HistoryEntry {
    role: &'static str,
    parts: Vec<String>,
}

#[derive(Deserialize)]
struct InferenceResponse {
    response: String,
}

fn translate_history(history: &[Turn]) -> Vec<HistoryEntry> {
    history
        .iter()
        .map(|turn| HistoryEntry {
            role: match turn.role {
                Role::User => "user",
                Role::Assistant => "model",
            },
            parts: vec![turn.text.clone()],
        })
        .collect()
}

fn classify_status(status: u16) -> InferenceErrorKind {
    match status {
        400..=499 => InferenceErrorKind::InvalidRequest,
        500..=599 => InferenceErrorKind::Server,
        _ => InferenceErrorKind::Unknown,
    }
}

#[async_trait]
impl InferenceService for HttpInference {
    async fn complete(&self, message: &str, history: &[Turn]) -> Result<String, InferenceError> {
        let request = InferenceRequest {
            user_query: message,
            history: translate_history(history),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                InferenceError::network(format!("inference request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::new(
                classify_status(status.as_u16()),
                format!("inference returned {status}: {body}"),
            ));
        }

        let parsed: InferenceResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::network(format!("invalid inference response: {e}")))?;

        if parsed.response.trim().is_empty() {
            return Err(InferenceError::new(
                InferenceErrorKind::Unknown,
                "inference returned an empty reply",
            ));
        }

        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(400), InferenceErrorKind::InvalidRequest);
        assert_eq!(classify_status(404), InferenceErrorKind::InvalidRequest);
        assert_eq!(classify_status(500), InferenceErrorKind::Server);
        assert_eq!(classify_status(503), InferenceErrorKind::Server);
        assert_eq!(classify_status(302), InferenceErrorKind::Unknown);
    }

    #[test]
    fn test_transport_classification() {
        assert!(InferenceErrorKind::Network.is_transport());
        assert!(InferenceErrorKind::Server.is_transport());
        assert!(!InferenceErrorKind::InvalidRequest.is_transport());
    }

    #[test]
    fn test_history_translation_roles() {
        let history = vec![
            Turn {
                role: Role::User,
                text: "hello".to_string(),
                timestamp: Utc::now(),
            },
            Turn {
                role: Role::Assistant,
                text: "hi there".to_string(),
                timestamp: Utc::now(),
            },
        ];

        let entries = translate_history(&history);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, "user");
        assert_eq!(entries[0].parts, vec!["hello".to_string()]);
        assert_eq!(entries[1].role, "model");
    }
}
