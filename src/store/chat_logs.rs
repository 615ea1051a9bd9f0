//! Chat transcript store.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::chat::ChatMessage;
use crate::error::{AppError, Result};

/// Only the most recent transcripts are kept.
const MAX_CHAT_LOGS: usize = 100;

/// One archived conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub quote_generated: bool,
}

/// Store for chat transcripts, newest first, capped at [`MAX_CHAT_LOGS`].
#[derive(Clone)]
pub struct ChatLogStore {
    path: PathBuf,
    logs: Arc<RwLock<Vec<ChatLog>>>,
}

impl ChatLogStore {
    /// Open the store, loading the existing snapshot if present.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let logs = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<ChatLog>>(&bytes) {
                Ok(logs) => {
                    info!(count = logs.len(), path = %path.display(), "chat log store loaded");
                    logs
                }
                Err(e) => {
                    warn!(path = %path.display(), "discarding unreadable chat log snapshot: {e}");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(ChatLogStore {
            path,
            logs: Arc::new(RwLock::new(logs)),
        })
    }

    /// Archive a conversation, trimming the oldest logs past the cap.
    pub async fn save(
        &self,
        messages: Vec<ChatMessage>,
        service_type: Option<String>,
        quote_generated: bool,
    ) -> Result<ChatLog> {
        let log = ChatLog {
            id: uuid::Uuid::new_v4().to_string(),
            date: Utc::now(),
            messages,
            service_type,
            quote_generated,
        };

        let mut logs = self.logs.write().await;
        logs.insert(0, log.clone());
        logs.truncate(MAX_CHAT_LOGS);
        self.persist(&logs).await?;

        Ok(log)
    }

    /// All archived conversations, newest first.
    pub async fn list(&self) -> Vec<ChatLog> {
        self.logs.read().await.clone()
    }

    /// Delete one transcript by id; unknown ids are reported as not found.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|log| log.id != id);
        if logs.len() == before {
            return Err(AppError::NotFound);
        }
        self.persist(&logs).await
    }

    /// Delete every transcript.
    pub async fn clear(&self) -> Result<()> {
        let mut logs = self.logs.write().await;
        logs.clear();
        self.persist(&logs).await
    }

    async fn persist(&self, logs: &[ChatLog]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(logs)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
