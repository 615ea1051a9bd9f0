//! Chat API route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::pricing::engine::compute_quote;
use crate::pricing::responses::QuoteResponse;
use crate::pricing::QuoteSpec;
use crate::store::ChatLog;
use crate::AppState;

use super::classifier::{detect_service_type, wants_estimate};
use super::{ChatMessage, Language};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/chat/welcome", get(welcome))
        .route("/api/chat/logs", get(list_logs).delete(clear_logs))
        .route("/api/chat/logs/:id", delete(delete_log))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub language: Language,
    /// Earlier messages of the conversation, oldest first.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: ChatMessage,
    pub service_type: crate::pricing::ServiceType,
    /// Present when the message asked for an estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteResponse>,
    pub log_id: String,
}

/// Handle one user message: classify the service, generate a reply, and
/// attach an engine-computed quote when an estimate was asked for. The
/// exchange is archived in the chat-log store.
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let model = state.chat_model.clone().ok_or(AppError::ChatNotConfigured)?;

    let service_type = detect_service_type(&request.message);
    tracing::debug!(service = service_type.as_str(), "chat message classified");

    let mut messages = request.history;
    messages.push(ChatMessage::user(request.message.clone()));

    let reply_text = model.generate(&messages, request.language).await?;
    let reply = ChatMessage::ai(reply_text);
    messages.push(reply.clone());

    let quote = wants_estimate(&request.message).then(|| {
        let mut spec = QuoteSpec::defaults_for(service_type);
        spec.custom_specs = Some(request.message.clone());
        QuoteResponse::from(compute_quote(spec))
    });

    let log = state
        .chat_logs
        .save(
            messages,
            Some(service_type.as_str().to_string()),
            quote.is_some(),
        )
        .await?;

    Ok(Json(ChatResponse {
        reply,
        service_type,
        quote,
        log_id: log.id,
    }))
}

#[derive(Debug, Deserialize)]
pub struct WelcomeParams {
    #[serde(default)]
    pub language: Language,
}

/// Greeting for a new or cleared conversation.
async fn welcome(
    axum::extract::Query(params): axum::extract::Query<WelcomeParams>,
) -> Json<ChatMessage> {
    Json(ChatMessage::ai(params.language.welcome_message()))
}

/// List archived conversations, newest first.
async fn list_logs(State(state): State<AppState>) -> Json<Vec<ChatLog>> {
    Json(state.chat_logs.list().await)
}

/// Delete one archived conversation.
async fn delete_log(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    state.chat_logs.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every archived conversation.
async fn clear_logs(State(state): State<AppState>) -> Result<StatusCode> {
    state.chat_logs.clear().await?;
    tracing::info!("chat logs cleared");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::chat::provider::ChatModel;
    use crate::config::Config;
    use crate::pricing::ServiceType;
    use crate::store::{ChatLogStore, QuoteStore};

    struct FixedReply(&'static str);

    #[async_trait]
    impl ChatModel for FixedReply {
        async fn generate(&self, _messages: &[ChatMessage], _language: Language) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    async fn test_state(model: Option<Arc<dyn ChatModel>>) -> AppState {
        let dir =
            std::env::temp_dir().join(format!("printworks-chat-test-{}", uuid::Uuid::new_v4()));
        AppState {
            config: Arc::new(Config {
                bind_addr: "127.0.0.1:0".parse().unwrap(),
                data_dir: dir.clone(),
                gemini_api_key: None,
                gemini_api_url: String::new(),
            }),
            quotes: QuoteStore::open(dir.join("saved_quotes.json")).await.unwrap(),
            chat_logs: ChatLogStore::open(dir.join("chat_logs.json")).await.unwrap(),
            chat_model: model,
        }
    }

    #[tokio::test]
    async fn test_chat_attaches_quote_for_estimate_requests() {
        let state = test_state(Some(Arc::new(FixedReply("かしこまりました。")))).await;
        let request = ChatRequest {
            message: "チラシの見積もりをお願いします".to_string(),
            language: Language::Ja,
            history: Vec::new(),
        };

        let Json(response) = chat(State(state.clone()), Json(request)).await.unwrap();

        assert_eq!(response.service_type, ServiceType::Printing);
        assert_eq!(response.reply.content, "かしこまりました。");

        // Engine quote for the printing defaults: flyer at quantity 100.
        let quote = response.quote.expect("estimate request should carry a quote");
        assert_eq!(quote.quote.price, 5000);

        let logs = state.chat_logs.list().await;
        assert_eq!(logs.len(), 1);
        assert!(logs[0].quote_generated);
        assert_eq!(logs[0].service_type.as_deref(), Some("printing"));
        assert_eq!(logs[0].messages.len(), 2);
    }

    #[tokio::test]
    async fn test_chat_plain_question_carries_no_quote() {
        let state = test_state(Some(Arc::new(FixedReply("5営業日ほどです。")))).await;
        let request = ChatRequest {
            message: "配送にはどれくらいかかりますか".to_string(),
            language: Language::Ja,
            history: Vec::new(),
        };

        let Json(response) = chat(State(state.clone()), Json(request)).await.unwrap();

        assert_eq!(response.service_type, ServiceType::Logistics);
        assert!(response.quote.is_none());
        assert!(!state.chat_logs.list().await[0].quote_generated);
    }

    #[tokio::test]
    async fn test_welcome_greeting_follows_language() {
        use crate::chat::Sender;

        let Json(msg) = welcome(axum::extract::Query(WelcomeParams {
            language: Language::En,
        }))
        .await;

        assert_eq!(msg.content, Language::En.welcome_message());
        assert_eq!(msg.sender, Sender::Ai);
    }

    #[tokio::test]
    async fn test_chat_without_model_is_unavailable() {
        let state = test_state(None).await;
        let request = ChatRequest {
            message: "hello".to_string(),
            language: Language::En,
            history: Vec::new(),
        };

        let err = chat(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::ChatNotConfigured));
    }
}
