// src/services/webhook.rs

//! Discord webhook notifier.
//!
//! Announcements are a single embed: thread title, rewritten body as the
//! description, a permalink to the thread, the post timestamp, and the
//! configured accent color.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Config, Thread};
use crate::services::Announcer;
use crate::utils::http;

#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    embeds: Vec<Embed<'a>>,
}

#[derive(Debug, Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    url: String,
    timestamp: String,
    color: u32,
}

/// Posts thread announcements to a Discord webhook.
pub struct Notifier {
    client: Client,
    webhook_url: String,
    thread_base_url: String,
    color: u32,
}

impl Notifier {
    /// Create a notifier from application settings and the resolved
    /// webhook URL.
    pub fn new(config: &Config, webhook_url: String) -> Result<Self> {
        Ok(Self {
            client: http::create_client(&config.poller)?,
            webhook_url,
            thread_base_url: config.board.thread_base_url.clone(),
            color: config.webhook.color,
        })
    }
}

#[async_trait]
impl Announcer for Notifier {
    /// Post the thread as a single embed, empty description included.
    async fn announce(&self, thread: &Thread) -> Result<()> {
        let message = WebhookMessage {
            embeds: vec![Embed {
                title: &thread.title,
                description: &thread.body,
                url: thread.permalink(&self.thread_base_url),
                timestamp: Utc::now().to_rfc3339(),
                color: self.color,
            }],
        };

        self.client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
