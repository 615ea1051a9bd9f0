//! Environment-driven configuration, read once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Directory holding the JSON store snapshots.
    pub data_dir: PathBuf,
    /// Gemini API key; chat endpoints return 503 when unset.
    pub gemini_api_key: Option<String>,
    /// Gemini generateContent endpoint.
    pub gemini_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let gemini_api_url =
            std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string());

        Ok(Config {
            bind_addr,
            data_dir,
            gemini_api_key,
            gemini_api_url,
        })
    }
}
