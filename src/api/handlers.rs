//! HTTP request handlers

use super::types::{
    AckResponse, AlertsQuery, AlertsResponse, ClearRequest, ConditionBody, ConversationQuery,
    ErrorResponse, FeedbackRequest, FeedbackResponse, HistoryMessage, ReminderRequest,
    ScheduleQuery, ScheduleResponse, SendMessageRequest, SendMessageResponse, SubscribeRequest,
    SuccessResponse, SymptomCheckRequest, SymptomCheckResponse, TipsQuery, TipsResponse,
};
use super::AppState;
use crate::alerts;
use crate::chat::{Role, GREETING};
use crate::error::ServiceError;
use crate::feedback;
use crate::tips;
use crate::triage::{self, SymptomSelection};
use crate::vaccination;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Chat assistant
        .route(
            "/api/chat/message",
            get(conversation_opening).post(send_message),
        )
        .route("/api/chat/clear", post(clear_conversation))
        // Symptom triage
        .route("/api/symptoms/check", post(check_symptoms))
        // Vaccination
        .route("/api/vaccination/schedule", get(vaccination_schedule))
        .route("/api/vaccination/reminder", post(set_reminder))
        // Outbreak alerts
        .route("/api/outbreak/alerts", get(outbreak_alerts))
        .route("/api/outbreak/alerts/:id", get(alert_detail))
        .route("/api/outbreak/subscribe", post(subscribe_alerts))
        // Feedback
        .route("/api/feedback/submit", post(submit_feedback))
        // Health tips
        .route("/api/health/tips", get(health_tips))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

fn new_message_id() -> String {
    format!("msg_{}", uuid::Uuid::new_v4())
}

// ============================================================
// Chat Assistant
// ============================================================

/// Opening greeting followed by the stored history for the conversation,
/// if any. The history is echo-back only; routing never reads it.
async fn conversation_opening(
    State(state): State<AppState>,
    Query(query): Query<ConversationQuery>,
) -> Json<Vec<HistoryMessage>> {
    let mut messages = vec![HistoryMessage {
        message: GREETING.to_string(),
        sender: "bot".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        message_id: "msg_1".to_string(),
    }];

    if let Some(id) = &query.conversation_id {
        for turn in state.chat.store().history(id).await {
            messages.push(HistoryMessage {
                message: turn.text,
                sender: match turn.role {
                    Role::User => "user".to_string(),
                    Role::Assistant => "bot".to_string(),
                },
                timestamp: turn.timestamp.to_rfc3339(),
                message_id: new_message_id(),
            });
        }
    }

    Json(messages)
}

async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let reply = state.chat.route(&req.message, &req.conversation_id).await?;

    Ok(Json(SendMessageResponse {
        response: reply.text,
        message_id: new_message_id(),
        suggestions: reply.suggestions,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Idempotent: clearing an unknown conversation id still succeeds
async fn clear_conversation(
    State(state): State<AppState>,
    Json(req): Json<ClearRequest>,
) -> Json<SuccessResponse> {
    state.chat.clear(&req.conversation_id).await;
    Json(SuccessResponse { success: true })
}

// ============================================================
// Symptom Triage
// ============================================================

async fn check_symptoms(
    State(state): State<AppState>,
    Json(req): Json<SymptomCheckRequest>,
) -> Result<Json<SymptomCheckResponse>, AppError> {
    let selection = SymptomSelection::from_ids(&req.symptoms)?;
    let conditions = triage::classify_aggregate(&selection);

    tracing::info!(
        symptoms = ?selection.labels(),
        conditions = conditions.len(),
        age = req.age,
        gender = req.gender.as_deref(),
        "symptom check"
    );

    let location = resolve_location(req.location.as_deref(), &state);

    Ok(Json(SymptomCheckResponse {
        possible_conditions: conditions.into_iter().map(ConditionBody::from).collect(),
        nearest_health_center: triage::nearest_health_center(location.as_deref()),
        disclaimer: triage::DISCLAIMER.to_string(),
    }))
}

/// Request location when given, else the configured default
fn resolve_location(requested: Option<&str>, state: &AppState) -> Option<String> {
    match requested {
        Some(loc) if !loc.trim().is_empty() => Some(loc.trim().to_string()),
        _ if !state.default_location.is_empty() => Some(state.default_location.to_string()),
        _ => None,
    }
}

// ============================================================
// Vaccination
// ============================================================

async fn vaccination_schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Json<ScheduleResponse> {
    let age = query.age.unwrap_or(0);
    let schedule = vaccination::schedule_for(age);
    let location = resolve_location(query.location.as_deref(), &state)
        .unwrap_or_else(|| "Your Area".to_string());

    Json(ScheduleResponse {
        schedule: schedule.to_vec(),
        location,
        last_updated: Utc::now().to_rfc3339(),
    })
}

async fn set_reminder(
    Json(req): Json<ReminderRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let ack = vaccination::set_reminder(&req.vaccine_id, &req.reminder_date, &req.phone)?;

    Ok(Json(AckResponse {
        success: true,
        message: ack.message,
    }))
}

// ============================================================
// Outbreak Alerts
// ============================================================

async fn outbreak_alerts(Query(query): Query<AlertsQuery>) -> Json<AlertsResponse> {
    let alerts = alerts::alerts_for(query.location.as_deref());

    Json(AlertsResponse {
        alerts,
        last_updated: Utc::now().to_rfc3339(),
    })
}

async fn alert_detail(Path(id): Path<String>) -> Result<Json<&'static alerts::Alert>, AppError> {
    let alert = alerts::alert_by_id(&id)?;
    Ok(Json(alert))
}

async fn subscribe_alerts(
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let ack = alerts::subscribe(&req.phone, &req.location)?;

    Ok(Json(AckResponse {
        success: true,
        message: ack.message,
    }))
}

// ============================================================
// Feedback
// ============================================================

async fn submit_feedback(
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let receipt = feedback::submit(req.rating, &req.category, req.comments, req.user_id)?;

    Ok(Json(FeedbackResponse {
        success: true,
        feedback_id: receipt.feedback_id,
    }))
}

// ============================================================
// Health Tips
// ============================================================

async fn health_tips(Query(query): Query<TipsQuery>) -> Json<TipsResponse> {
    let (category, tips) = tips::tips_for(query.category.as_deref());
    let language = query.language.unwrap_or_else(|| "english".to_string());

    Json(TipsResponse {
        tips: tips.iter().map(ToString::to_string).collect(),
        category: category.to_string(),
        language,
    })
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("arogya-assist ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidRequest(msg) => AppError::BadRequest(msg),
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
