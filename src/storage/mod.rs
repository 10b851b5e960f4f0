//! Watermark persistence.
//!
//! The watermark is the id of the last announced thread. It is the only
//! shared mutable resource in the system: read once at the start of a
//! cycle and written once after a successful announcement.

pub mod watermark;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use watermark::FileWatermark;

/// Trait for watermark storage backends.
#[async_trait]
pub trait WatermarkStore: Send + Sync {
    /// Load the last announced thread id, or `None` if nothing has been
    /// announced yet.
    async fn load(&self) -> Result<Option<u64>>;

    /// Persist the id of a just-announced thread.
    async fn store(&self, id: u64) -> Result<()>;
}
