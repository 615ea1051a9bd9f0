//! JSON-snapshot stores.
//!
//! The frontend historically kept quotes and chat logs in browser-local
//! storage as single JSON blobs under one key each. These stores keep that
//! shape on the server: an in-memory list behind a lock, rewritten to one
//! snapshot file per store on every mutation.

pub mod chat_logs;
pub mod quotes;

pub use chat_logs::{ChatLog, ChatLogStore};
pub use quotes::QuoteStore;
