//! API request and response types
//!
//! Wire field names are camelCase to match the web client.

use crate::alerts::Alert;
use crate::triage::{Condition, HealthCenter, Severity};
use crate::vaccination::VaccineEntry;
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: String,
    pub conversation_id: String,
}

/// Chat reply with follow-up suggestions
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub response: String,
    pub message_id: String,
    pub suggestions: Vec<String>,
    pub timestamp: String,
}

/// Query for the conversation opening / echo-back
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationQuery {
    pub conversation_id: Option<String>,
}

/// One message in the conversation echo-back
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMessage {
    pub message: String,
    pub sender: String,
    pub timestamp: String,
    pub message_id: String,
}

/// Request to clear a conversation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    pub conversation_id: String,
}

/// Generic success acknowledgement
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Request body for the symptom check
#[derive(Debug, Deserialize)]
pub struct SymptomCheckRequest {
    pub symptoms: Vec<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub location: Option<String>,
}

/// One candidate condition on the wire
#[derive(Debug, Serialize)]
pub struct ConditionBody {
    pub condition: String,
    pub probability: u8,
    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
}

impl From<Condition> for ConditionBody {
    fn from(c: Condition) -> Self {
        Self {
            condition: c.name.to_string(),
            probability: c.probability,
            severity: c.severity,
            description: c.description.to_string(),
            recommendations: c.recommendations.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Symptom check result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomCheckResponse {
    pub possible_conditions: Vec<ConditionBody>,
    pub nearest_health_center: HealthCenter,
    pub disclaimer: String,
}

/// Query for the vaccination schedule
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub age: Option<u32>,
    pub location: Option<String>,
}

/// Vaccination schedule for one age band
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub schedule: Vec<VaccineEntry>,
    pub location: String,
    pub last_updated: String,
}

/// Request to set a vaccination reminder
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub vaccine_id: String,
    pub reminder_date: String,
    pub phone: String,
}

/// Acknowledgement carrying a human-readable message
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

/// Query for the outbreak alert feed
#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub location: Option<String>,
}

/// Outbreak alert feed
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsResponse {
    pub alerts: Vec<&'static Alert>,
    pub last_updated: String,
}

/// Request to subscribe to outbreak alerts
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub phone: String,
    pub location: String,
}

/// Request to submit feedback
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub rating: u8,
    pub category: String,
    pub comments: Option<String>,
    pub user_id: Option<String>,
}

/// Acknowledgement for a feedback submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub success: bool,
    pub feedback_id: String,
}

/// Query for health tips
#[derive(Debug, Deserialize)]
pub struct TipsQuery {
    pub category: Option<String>,
    pub language: Option<String>,
}

/// Health tips for one category
#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
    pub category: String,
    pub language: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{classify, SymptomSelection};

    #[test]
    fn test_wire_fields_are_camel_case() {
        let response = SendMessageResponse {
            response: "ok".to_string(),
            message_id: "msg_1".to_string(),
            suggestions: vec![],
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("messageId").is_some());
        assert!(value.get("message_id").is_none());
    }

    #[test]
    fn test_condition_body_serialization() {
        let ids = vec!["shortness_breath".to_string()];
        let selection = SymptomSelection::from_ids(&ids).unwrap();
        let condition = classify(&selection)[0];

        let body = ConditionBody::from(condition);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["condition"], "Respiratory Distress");
        assert_eq!(value["severity"], "high");
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_request_parses_client_payload() {
        let req: SymptomCheckRequest = serde_json::from_str(
            r#"{"symptoms":["fever","cough"],"age":30,"location":"Bhubaneswar"}"#,
        )
        .unwrap();
        assert_eq!(req.symptoms.len(), 2);
        assert_eq!(req.age, Some(30));
        assert_eq!(req.gender, None);
    }
}
