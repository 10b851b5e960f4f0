// src/services/mod.rs

//! Outbound services.

pub mod webhook;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Thread;

pub use webhook::Notifier;

/// Trait for announcement sinks.
#[async_trait]
pub trait Announcer: Send + Sync {
    /// Post an announcement for the given thread.
    ///
    /// The thread body must already be rewritten; an empty body is a
    /// valid announcement.
    async fn announce(&self, thread: &Thread) -> Result<()>;
}
