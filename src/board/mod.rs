// src/board/mod.rs

//! Source board access: listing parsing and the remote API client.

pub mod client;
pub mod listing;

use async_trait::async_trait;

use crate::error::Result;

pub use client::BoardClient;
pub use listing::newest_thread;

/// Trait for board content sources.
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetch the raw listing fragment for the configured forum page.
    async fn fetch_listing(&self) -> Result<String>;

    /// Fetch the raw wikitext body of a thread.
    async fn fetch_thread_body(&self, id: u64) -> Result<String>;
}
