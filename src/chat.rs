//! Conversation routing for the chat assistant
//!
//! Maps free-text user messages to canned replies via an ordered keyword
//! decision list, and keeps a per-conversation turn history for the
//! inference collaborator seam.

mod router;
mod store;

#[cfg(test)]
mod proptests;

pub use router::{extract_suggestions, ChatReply, ConversationRouter, GREETING};
pub use store::{ConversationStore, Role, Turn};
