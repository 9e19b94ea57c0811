//! Arogya Assist - multilingual public-health assistant backend
//!
//! A Rust backend serving the chat assistant, symptom triage, vaccination
//! schedule, outbreak alert, and feedback APIs. All responses come from
//! deterministic keyword routing and static tables; an external inference
//! backend can optionally supply chat replies.

mod alerts;
mod api;
mod chat;
mod error;
mod feedback;
mod inference;
mod tips;
mod triage;
mod vaccination;

use api::{create_router, AppState};
use inference::{HttpInference, InferenceService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arogya_assist=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("AROGYA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let default_location = std::env::var("AROGYA_DEFAULT_LOCATION").unwrap_or_default();

    // Optional external inference backend; without it the chat assistant
    // answers from its canned keyword routing alone.
    let inference: Option<Arc<dyn InferenceService>> =
        match std::env::var("AROGYA_INFERENCE_URL") {
            Ok(url) if !url.trim().is_empty() => {
                tracing::info!(endpoint = %url, "inference backend configured");
                Some(Arc::new(HttpInference::new(url.trim())?))
            }
            _ => {
                tracing::info!("no inference backend configured, using canned replies");
                None
            }
        };

    // Create application state
    let state = AppState::new(inference, &default_location);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Arogya Assist server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
