//! PrintWorks web backend.
//!
//! Quote estimation for a printing company: a pure pricing engine behind a
//! JSON API, JSON-snapshot stores for saved quotes and chat transcripts, a
//! Gemini-backed chat assistant and an admin view of saved quotes.

pub mod chat;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use chat::ChatModel;
use config::Config;
use store::{ChatLogStore, QuoteStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub quotes: QuoteStore,
    pub chat_logs: ChatLogStore,
    /// None when no API key is configured; chat endpoints then return 503.
    pub chat_model: Option<Arc<dyn ChatModel>>,
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pricing::router())
        .merge(chat::router())
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
