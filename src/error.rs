//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("Store data error: {0}")]
    StoreData(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Chat assistant is not configured")]
    ChatNotConfigured,

    #[error("Chat upstream request failed: {0}")]
    ChatRequest(#[from] reqwest::Error),

    #[error("Chat upstream error: {0}")]
    ChatUpstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::StoreIo(e) => {
                tracing::error!("Store I/O error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Store error")
            }
            AppError::StoreData(e) => {
                tracing::error!("Store data error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Store error")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
            AppError::ChatNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Chat assistant is not configured",
            ),
            AppError::ChatRequest(e) => {
                tracing::error!("Chat upstream request failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Chat upstream request failed")
            }
            AppError::ChatUpstream(msg) => {
                tracing::error!("Chat upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Chat upstream error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("error"),
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Error wrapper for page routes. API handlers return [`AppError`] and get
/// a JSON body; page handlers return this and get an HTML error page.
pub struct PageError(pub AppError);

impl<E> From<E> for PageError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head><title>{} - PrintWorks</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">トップページへ戻る</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
