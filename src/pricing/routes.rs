//! Quote API route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::engine::compute_quote;
use super::responses::QuoteResponse;
use super::spec::{Quote, QuoteSpec};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quotes/estimate", post(estimate))
        .route("/api/quotes", get(list_quotes).post(save_quote))
        .route("/api/quotes/:id", axum::routing::delete(delete_quote))
}

/// Compute a quote without persisting it.
async fn estimate(Json(spec): Json<QuoteSpec>) -> Json<QuoteResponse> {
    let quote = compute_quote(spec);
    tracing::debug!(id = %quote.id, price = quote.price, "quote estimated");
    Json(QuoteResponse::from(quote))
}

/// List saved quotes, newest first.
async fn list_quotes(State(state): State<AppState>) -> Json<Vec<QuoteResponse>> {
    let quotes = state.quotes.list().await;
    Json(quotes.into_iter().map(QuoteResponse::from).collect())
}

/// Persist a quote produced by the estimate endpoint or the chat flow.
async fn save_quote(
    State(state): State<AppState>,
    Json(quote): Json<Quote>,
) -> Result<(StatusCode, Json<QuoteResponse>)> {
    let saved = state.quotes.save(quote).await?;
    tracing::info!(id = %saved.id, "quote saved");
    Ok((StatusCode::CREATED, Json(QuoteResponse::from(saved))))
}

/// Delete a saved quote by id.
async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.quotes.delete(&id).await?;
    tracing::info!(%id, "quote deleted");
    Ok(StatusCode::NO_CONTENT)
}
