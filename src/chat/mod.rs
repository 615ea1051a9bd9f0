//! AI chat assistant.
//!
//! The assistant's own intelligence is limited to a keyword service-type
//! classifier; response text comes from the Gemini API behind the
//! [`provider::ChatModel`] trait.

pub mod classifier;
pub mod provider;
pub mod routes;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use classifier::detect_service_type;
pub use provider::{ChatModel, GeminiClient};
pub use routes::router;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// One message in a conversation, stored as the frontend shapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::now(content, Sender::User)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::now(content, Sender::Ai)
    }

    fn now(content: impl Into<String>, sender: Sender) -> Self {
        ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Languages the assistant answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
    Zh,
    Ko,
}

impl Language {
    /// System prompt steering the model toward printing-industry answers.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Language::Ja => {
                "あなたは印刷業界のプロフェッショナルアシスタントです。印刷、製本、物流、環境印刷に関する質問に丁寧に回答してください。専門知識を活かして、わかりやすく説明してください。"
            }
            Language::En => {
                "You are a professional assistant in the printing industry. Please politely answer questions about printing, binding, logistics, and eco-friendly printing. Use your expertise to explain clearly."
            }
            Language::Zh => {
                "您是印刷行业的专业助手。请礼貌地回答有关印刷、装订、物流和环保印刷的问题。利用您的专业知识进行清晰解释。"
            }
            Language::Ko => {
                "귀하는 인쇄 산업의 전문 어시스턴트입니다. 인쇄, 제본, 물류 및 친환경 인쇄에 관한 질문에 정중하게 답변해 주세요. 전문 지식을 활용하여 명확하게 설명해 주세요."
            }
        }
    }

    /// Greeting shown when a conversation starts or is cleared.
    pub fn welcome_message(&self) -> &'static str {
        match self {
            Language::Ja => {
                "こんにちは！印刷、製本、物流、環境印刷に関するご質問やお見積もりのお手伝いをさせていただきます。お気軽にお問い合わせください。"
            }
            Language::En => {
                "Hello! I can help you with printing, binding, logistics, and eco-friendly printing services. Feel free to ask any questions or request a quote."
            }
            Language::Zh => {
                "您好！我可以帮助您解决印刷、装订、物流和环保印刷服务的问题。欢迎随时提问或索取报价。"
            }
            Language::Ko => {
                "안녕하세요! 인쇄, 제본, 물류 및 친환경 인쇄 서비스에 관한 문의나 견적에 도움을 드릴 수 있습니다. 언제든지 질문해 주세요."
            }
        }
    }
}
