use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use printworks_web::chat::{ChatModel, GeminiClient};
use printworks_web::config::Config;
use printworks_web::store::{ChatLogStore, QuoteStore};
use printworks_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "printworks_web=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    let quotes = QuoteStore::open(config.data_dir.join("saved_quotes.json")).await?;
    let chat_logs = ChatLogStore::open(config.data_dir.join("chat_logs.json")).await?;

    let chat_model: Option<Arc<dyn ChatModel>> = match &config.gemini_api_key {
        Some(key) => Some(Arc::new(GeminiClient::new(
            config.gemini_api_url.clone(),
            key.clone(),
        ))),
        None => {
            tracing::warn!("GEMINI_API_KEY not set; chat endpoints are disabled");
            None
        }
    };

    let bind_addr = config.bind_addr;
    let state = AppState {
        config,
        quotes,
        chat_logs,
        chat_model,
    };

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {}", bind_addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
