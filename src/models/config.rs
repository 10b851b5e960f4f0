//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable that overrides the configured webhook URL.
pub const WEBHOOK_URL_ENV: &str = "HERALD_WEBHOOK_URL";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Polling cadence and HTTP behavior
    #[serde(default)]
    pub poller: PollerConfig,

    /// Source board endpoints and identifiers
    #[serde(default)]
    pub board: BoardConfig,

    /// Outbound webhook settings
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Watermark persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    ///
    /// A missing webhook URL is fatal here: the process must not start a
    /// poll loop it can never complete.
    pub fn validate(&self) -> Result<()> {
        if self.poller.interval_secs == 0 {
            return Err(AppError::config("poller.interval_secs must be > 0"));
        }
        if self.poller.timeout_secs == 0 {
            return Err(AppError::config("poller.timeout_secs must be > 0"));
        }
        if self.poller.user_agent.trim().is_empty() {
            return Err(AppError::config("poller.user_agent is empty"));
        }
        url::Url::parse(&self.board.api_url)
            .map_err(|e| AppError::config(format!("board.api_url is invalid: {e}")))?;
        if self.board.page_title.trim().is_empty() {
            return Err(AppError::config("board.page_title is empty"));
        }
        if self.board.thread_base_url.trim().is_empty() {
            return Err(AppError::config("board.thread_base_url is empty"));
        }
        self.webhook_url()?;
        Ok(())
    }

    /// Resolve the webhook URL, preferring the environment override.
    pub fn webhook_url(&self) -> Result<String> {
        let url = std::env::var(WEBHOOK_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.webhook.url.clone());

        if url.trim().is_empty() {
            return Err(AppError::config(format!(
                "webhook URL is not set (webhook.url in config or {WEBHOOK_URL_ENV})"
            )));
        }
        url::Url::parse(&url)
            .map_err(|e| AppError::config(format!("webhook URL is invalid: {e}")))?;
        Ok(url)
    }
}

/// Polling cadence and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Seconds between poll cycles
    #[serde(default = "defaults::interval")]
    pub interval_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_secs: defaults::interval(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Source board endpoints and identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Nirvana API endpoint of the source wiki
    #[serde(default = "defaults::api_url")]
    pub api_url: String,

    /// Forum page title whose threads are announced
    #[serde(default = "defaults::page_title")]
    pub page_title: String,

    /// Namespace the forum page lives in
    #[serde(default = "defaults::page_namespace")]
    pub page_namespace: u32,

    /// Base URL threads are linked under; the id is appended verbatim
    #[serde(default = "defaults::thread_base_url")]
    pub thread_base_url: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::api_url(),
            page_title: defaults::page_title(),
            page_namespace: defaults::page_namespace(),
            thread_base_url: defaults::thread_base_url(),
        }
    }
}

/// Outbound webhook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Webhook URL; may instead come from the environment (see
    /// [`WEBHOOK_URL_ENV`])
    #[serde(default)]
    pub url: String,

    /// Accent color of the posted embed
    #[serde(default = "defaults::color")]
    pub color: u32,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            color: defaults::color(),
        }
    }
}

/// Watermark persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the id of the last announced thread
    #[serde(default = "defaults::watermark_path")]
    pub watermark_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            watermark_path: defaults::watermark_path(),
        }
    }
}

mod defaults {
    pub fn interval() -> u64 {
        5
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; herald/0.1)".into()
    }
    pub fn api_url() -> String {
        "https://community.fandom.com/wikia.php".into()
    }
    pub fn page_title() -> String {
        "Technical Updates".into()
    }
    pub fn page_namespace() -> u32 {
        2000
    }
    pub fn thread_base_url() -> String {
        "https://community.fandom.com/wiki/Thread:".into()
    }
    pub fn color() -> u32 {
        0x00D6D6
    }
    pub fn watermark_path() -> String {
        "last.id".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_except_webhook() {
        let config = Config::default();
        // Everything but the webhook URL has a usable default.
        assert_eq!(config.poller.interval_secs, 5);
        assert_eq!(config.board.page_namespace, 2000);
        assert_eq!(config.webhook.color, 0x00D6D6);
        assert!(config.webhook.url.is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.webhook.url = "https://discord.com/api/webhooks/1/abc".into();
        config.poller.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_api_url() {
        let mut config = Config::default();
        config.webhook.url = "https://discord.com/api/webhooks/1/abc".into();
        config.board.api_url = "not a url".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [poller]
            interval_secs = 60

            [webhook]
            url = "https://discord.com/api/webhooks/1/abc"
            color = 0xFF0000
            "#,
        )
        .unwrap();
        assert_eq!(config.poller.interval_secs, 60);
        assert_eq!(config.poller.timeout_secs, 30);
        assert_eq!(config.webhook.color, 0xFF0000);
        assert_eq!(config.board.page_title, "Technical Updates");
        assert!(config.validate().is_ok());
    }
}
