//! Saved-quote store.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::pricing::Quote;

/// Store for saved quotes, newest first. Quotes are immutable once saved;
/// editing a specification produces a new quote with a new id.
#[derive(Clone)]
pub struct QuoteStore {
    path: PathBuf,
    quotes: Arc<RwLock<Vec<Quote>>>,
}

impl QuoteStore {
    /// Open the store, loading the existing snapshot if present. A corrupt
    /// snapshot is logged and treated as empty instead of failing startup.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let quotes = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<Quote>>(&bytes) {
                Ok(quotes) => {
                    info!(count = quotes.len(), path = %path.display(), "quote store loaded");
                    quotes
                }
                Err(e) => {
                    warn!(path = %path.display(), "discarding unreadable quote snapshot: {e}");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(QuoteStore {
            path,
            quotes: Arc::new(RwLock::new(quotes)),
        })
    }

    /// All saved quotes, newest first.
    pub async fn list(&self) -> Vec<Quote> {
        self.quotes.read().await.clone()
    }

    /// Save a quote, stamping an id and creation time when absent, and
    /// prepend it so listings stay newest first.
    pub async fn save(&self, mut quote: Quote) -> Result<Quote> {
        if quote.id.is_empty() {
            quote.id = format!("Q-{}", Utc::now().timestamp_millis());
        }
        if quote.created_at.is_none() {
            quote.created_at = Some(Utc::now());
        }

        let mut quotes = self.quotes.write().await;
        quotes.insert(0, quote.clone());
        self.persist(&quotes).await?;

        Ok(quote)
    }

    /// Delete a quote by id; unknown ids are reported as not found.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut quotes = self.quotes.write().await;
        let before = quotes.len();
        quotes.retain(|quote| quote.id != id);
        if quotes.len() == before {
            return Err(AppError::NotFound);
        }
        self.persist(&quotes).await
    }

    async fn persist(&self, quotes: &[Quote]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(quotes)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
