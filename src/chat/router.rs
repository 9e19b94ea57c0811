//! Keyword-routed chat replies
//!
//! The routing table is an ordered decision list: the first intent whose
//! keyword set matches the lower-cased message wins, and later matches are
//! ignored. This keeps the precedence explicit instead of relying on
//! if/else fall-through.

use super::store::ConversationStore;
use crate::error::ServiceError;
use crate::inference::InferenceService;
use std::sync::Arc;

/// Canned opening message for a fresh conversation
pub const GREETING: &str = "Hello! I'm your health assistant. How can I help you today?";

const FALLBACK_REPLY: &str = "I understand your concern. How can I help you further?";

/// One entry in the routing decision list
struct Intent {
    keywords: &'static [&'static str],
    reply: &'static str,
    suggestions: &'static [&'static str],
}

/// Ordered by priority; first match wins
const INTENTS: [Intent; 4] = [
    Intent {
        keywords: &["symptom", "sick", "pain"],
        reply: "I can help you check your symptoms. Would you like me to guide you through \
                our symptom checker?",
        suggestions: &["Check symptoms", "Find nearby clinic", "Emergency contacts"],
    },
    Intent {
        keywords: &["vaccine", "vaccination"],
        reply: "I can provide information about vaccination schedules and reminders. What \
                would you like to know?",
        suggestions: &["Vaccination schedule", "Set reminder", "Vaccine info"],
    },
    Intent {
        keywords: &["outbreak", "alert"],
        reply: "I can show you current health alerts and outbreak information in your area.",
        suggestions: &["Current alerts", "Prevention tips", "Subscribe to alerts"],
    },
    Intent {
        keywords: &["feedback", "review"],
        reply: "Thank you for wanting to provide feedback! Your input helps us improve our \
                services.",
        suggestions: &["Rate service", "Report issue", "Suggest improvement"],
    },
];

/// Keyword families scanned over an inference reply to derive suggestion
/// chips. Scan order is fixed and the combined list is truncated to three.
const SUGGESTION_FAMILIES: [(&[&str], [&str; 2]); 4] = [
    (&["symptom"], ["Check symptoms", "Find nearby clinic"]),
    (&["vaccin"], ["Vaccination schedule", "Set reminder"]),
    (&["outbreak", "alert"], ["Current alerts", "Prevention tips"]),
    (&["emergency", "urgent"], ["Emergency contacts", "Call 108"]),
];

const MAX_SUGGESTIONS: usize = 3;

/// Router output: reply text plus up to three follow-up suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub suggestions: Vec<String>,
}

/// Routes user messages to replies and owns the conversation store.
///
/// When an inference backend is configured it supplies the reply text and
/// suggestions are extracted from it; any backend failure is masked by the
/// canned keyword-routed reply so the end user never sees a raw error.
pub struct ConversationRouter {
    store: ConversationStore,
    inference: Option<Arc<dyn InferenceService>>,
}

impl ConversationRouter {
    pub fn new(inference: Option<Arc<dyn InferenceService>>) -> Self {
        Self {
            store: ConversationStore::new(),
            inference,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Produce a reply for `message` and record the exchange.
    ///
    /// The (user, assistant) pair is appended to the conversation history
    /// even on the canned path; the history is contract surface for the
    /// inference collaborator, which reads it on the next call.
    pub async fn route(
        &self,
        message: &str,
        conversation_id: &str,
    ) -> Result<ChatReply, ServiceError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ServiceError::invalid("message must not be empty"));
        }

        let reply = match &self.inference {
            Some(service) => {
                let history = self.store.history(conversation_id).await;
                match service.complete(message, &history).await {
                    Ok(text) => {
                        let suggestions = extract_suggestions(&text);
                        ChatReply { text, suggestions }
                    }
                    Err(e) => {
                        // Transport-class failures are expected when the
                        // backend is down; anything else is worth a look.
                        if e.kind.is_transport() {
                            tracing::warn!(
                                conversation_id,
                                kind = ?e.kind,
                                error = %e.message,
                                "inference backend unreachable, using canned reply"
                            );
                        } else {
                            tracing::error!(
                                conversation_id,
                                kind = ?e.kind,
                                error = %e.message,
                                "inference request rejected, using canned reply"
                            );
                        }
                        canned_reply(message)
                    }
                }
            }
            None => canned_reply(message),
        };

        self.store
            .append_exchange(conversation_id, message, &reply.text)
            .await;

        Ok(reply)
    }

    /// Forget a conversation. Idempotent; unknown ids succeed.
    pub async fn clear(&self, conversation_id: &str) {
        self.store.clear(conversation_id).await;
        tracing::debug!(conversation_id, "conversation cleared");
    }
}

fn canned_reply(message: &str) -> ChatReply {
    let lower = message.to_lowercase();

    for intent in &INTENTS {
        if intent.keywords.iter().any(|k| lower.contains(k)) {
            return ChatReply {
                text: intent.reply.to_string(),
                suggestions: intent.suggestions.iter().map(ToString::to_string).collect(),
            };
        }
    }

    ChatReply {
        text: FALLBACK_REPLY.to_string(),
        suggestions: Vec::new(),
    }
}

/// Derive suggestion chips from free-form reply text.
///
/// Each matching keyword family contributes its fixed pair in scan order;
/// the combined list is cut to the first three entries.
pub fn extract_suggestions(reply: &str) -> Vec<String> {
    let lower = reply.to_lowercase();
    let mut suggestions = Vec::new();

    for (keywords, chips) in &SUGGESTION_FAMILIES {
        if keywords.iter().any(|k| lower.contains(k)) {
            suggestions.extend(chips.iter().map(ToString::to_string));
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Role, Turn};
    use crate::inference::{InferenceError, InferenceErrorKind};
    use async_trait::async_trait;

    struct FailingInference;

    #[async_trait]
    impl InferenceService for FailingInference {
        async fn complete(
            &self,
            _message: &str,
            _history: &[Turn],
        ) -> Result<String, InferenceError> {
            Err(InferenceError::network("connection refused"))
        }
    }

    struct CannedInference(&'static str);

    #[async_trait]
    impl InferenceService for CannedInference {
        async fn complete(
            &self,
            _message: &str,
            _history: &[Turn],
        ) -> Result<String, InferenceError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_symptom_intent() {
        let router = ConversationRouter::new(None);
        let reply = router.route("I feel sick today", "c1").await.unwrap();
        assert!(reply.text.contains("symptom checker"));
        assert_eq!(
            reply.suggestions,
            vec!["Check symptoms", "Find nearby clinic", "Emergency contacts"]
        );
    }

    #[tokio::test]
    async fn test_symptom_precedes_vaccine() {
        let router = ConversationRouter::new(None);
        let reply = router
            .route("symptom after my vaccine dose?", "c1")
            .await
            .unwrap();
        assert!(reply.text.contains("symptom checker"));
    }

    #[tokio::test]
    async fn test_each_intent_routes() {
        let router = ConversationRouter::new(None);

        let vaccine = router.route("When is my vaccination due?", "c1").await.unwrap();
        assert_eq!(vaccine.suggestions[0], "Vaccination schedule");

        let outbreak = router.route("Any outbreak near me?", "c1").await.unwrap();
        assert_eq!(outbreak.suggestions[0], "Current alerts");

        let feedback = router.route("I want to leave a review", "c1").await.unwrap();
        assert_eq!(feedback.suggestions[0], "Rate service");
    }

    #[tokio::test]
    async fn test_fallback_has_no_suggestions() {
        let router = ConversationRouter::new(None);
        let reply = router.route("hello there", "c1").await.unwrap();
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert!(reply.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive() {
        let router = ConversationRouter::new(None);
        let reply = router.route("SYMPTOM check please", "c1").await.unwrap();
        assert!(reply.text.contains("symptom checker"));
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let router = ConversationRouter::new(None);
        let err = router.route("   ", "c1").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));

        // A rejected message must not touch the history
        assert!(router.store().history("c1").await.is_empty());
    }

    #[tokio::test]
    async fn test_exchange_appended_to_history() {
        let router = ConversationRouter::new(None);
        router.route("I feel sick", "c1").await.unwrap();

        let history = router.store().history("c1").await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text, "I feel sick");
        assert_eq!(history[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_reply_independent_of_conversation_id() {
        let router = ConversationRouter::new(None);
        let a = router.route("pain in my chest", "c1").await.unwrap();
        let b = router.route("pain in my chest", "c2").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(router.store().history("c1").await.len(), 2);
        assert_eq!(router.store().history("c2").await.len(), 2);
    }

    #[tokio::test]
    async fn test_inference_failure_masked_by_canned_reply() {
        let router = ConversationRouter::new(Some(Arc::new(FailingInference)));
        let reply = router.route("I feel sick", "c1").await.unwrap();

        // Canned symptom reply, not an error
        assert!(reply.text.contains("symptom checker"));
        // The exchange is still recorded
        assert_eq!(router.store().history("c1").await.len(), 2);
    }

    #[tokio::test]
    async fn test_inference_reply_gets_extracted_suggestions() {
        let router = ConversationRouter::new(Some(Arc::new(CannedInference(
            "Please monitor your symptoms. This could be urgent.",
        ))));
        let reply = router.route("what should I do?", "c1").await.unwrap();

        assert_eq!(
            reply.suggestions,
            vec!["Check symptoms", "Find nearby clinic", "Emergency contacts"]
        );
    }

    #[test]
    fn test_extract_suggestions_truncates_in_scan_order() {
        let chips = extract_suggestions("Your symptoms suggest you need a vaccine alert");
        assert_eq!(
            chips,
            vec!["Check symptoms", "Find nearby clinic", "Vaccination schedule"]
        );
    }

    #[test]
    fn test_extract_suggestions_emergency_family() {
        let chips = extract_suggestions("This is an emergency, seek care now");
        assert_eq!(chips, vec!["Emergency contacts", "Call 108"]);
    }

    #[test]
    fn test_extract_suggestions_no_match() {
        assert!(extract_suggestions("drink plenty of water").is_empty());
    }

    #[test]
    fn test_error_kind_transport_flag() {
        let err = InferenceError::network("down");
        assert_eq!(err.kind, InferenceErrorKind::Network);
        assert!(err.kind.is_transport());
    }
}
