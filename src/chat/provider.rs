//! Chat model provider.
//!
//! `ChatModel` abstracts the language-model call so routes can be tested
//! with a stub; `GeminiClient` is the production implementation against the
//! Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{AppError, Result};

use super::{ChatMessage, Language, Sender};

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a reply to the latest user message in the conversation.
    async fn generate(&self, messages: &[ChatMessage], language: Language) -> Result<String>;
}

pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        GeminiClient {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, messages: &[ChatMessage], language: Language) -> Result<String> {
        let latest_user_message = messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::User)
            .ok_or_else(|| AppError::Internal("no user message in conversation".to_string()))?;

        let body = json!({
            "contents": [
                {
                    "parts": [
                        { "text": language.system_prompt() },
                        { "text": latest_user_message.content },
                    ]
                }
            ],
            "generationConfig": {
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024,
            },
            "safetySettings": [
                { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
            ],
        });

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let data: serde_json::Value = response.json().await?;

        if let Some(error) = data.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("failed to generate response");
            return Err(AppError::ChatUpstream(message.to_string()));
        }

        data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::ChatUpstream("no text generated".to_string()))
    }
}
