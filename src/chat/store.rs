//! In-memory conversation history store
//!
//! Histories exist only for the lifetime of the process. The store owns the
//! id-to-history map; handlers reach it through the router rather than any
//! ambient global. Appends for one conversation are serialized by the write
//! lock so a rapid double-submit can never interleave a partial exchange.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One exchange entry in a conversation. Immutable once stored.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Map from conversation id to its ordered turn history
pub struct ConversationStore {
    histories: RwLock<HashMap<String, Vec<Turn>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            histories: RwLock::new(HashMap::new()),
        }
    }

    /// Append a (user, assistant) turn pair under one lock hold
    pub async fn append_exchange(&self, conversation_id: &str, user_text: &str, reply_text: &str) {
        let now = Utc::now();
        let mut histories = self.histories.write().await;
        let history = histories.entry(conversation_id.to_string()).or_default();
        history.push(Turn {
            role: Role::User,
            text: user_text.to_string(),
            timestamp: now,
        });
        history.push(Turn {
            role: Role::Assistant,
            text: reply_text.to_string(),
            timestamp: now,
        });
    }

    /// Snapshot of a conversation's history, oldest first
    pub async fn history(&self, conversation_id: &str) -> Vec<Turn> {
        let histories = self.histories.read().await;
        histories.get(conversation_id).cloned().unwrap_or_default()
    }

    /// Drop a conversation's history. Unknown ids are a no-op.
    pub async fn clear(&self, conversation_id: &str) {
        let mut histories = self.histories.write().await;
        histories.remove(conversation_id);
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = ConversationStore::new();
        store.append_exchange("c1", "first question", "first answer").await;
        store.append_exchange("c1", "second question", "second answer").await;

        let history = store.history("c1").await;
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text, "first question");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[3].text, "second answer");
    }

    #[tokio::test]
    async fn test_histories_isolated_by_id() {
        let store = ConversationStore::new();
        store.append_exchange("c1", "hello", "hi").await;

        assert_eq!(store.history("c1").await.len(), 2);
        assert!(store.history("c2").await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = ConversationStore::new();
        store.append_exchange("c1", "hello", "hi").await;

        store.clear("c1").await;
        assert!(store.history("c1").await.is_empty());

        // Second clear, and clearing an id that never existed
        store.clear("c1").await;
        store.clear("never-seen").await;
    }
}
