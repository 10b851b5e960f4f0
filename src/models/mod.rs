// src/models/mod.rs

//! Domain models for the announcer application.

mod config;
mod thread;

pub use config::{BoardConfig, Config, PollerConfig, StorageConfig, WebhookConfig};
pub use thread::Thread;
