//! HTTP API for the health assistant

mod handlers;
mod types;

pub use handlers::create_router;

use crate::chat::ConversationRouter;
use crate::inference::InferenceService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ConversationRouter>,
    pub default_location: Arc<str>,
}

impl AppState {
    pub fn new(inference: Option<Arc<dyn InferenceService>>, default_location: &str) -> Self {
        Self {
            chat: Arc::new(ConversationRouter::new(inference)),
            default_location: Arc::from(default_location),
        }
    }
}
